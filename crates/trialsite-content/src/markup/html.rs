//! HTML presentation of classified blocks.
//!
//! Adjacent list items share one `<ul>` / `<ol>`, and adjacent table rows
//! share one `<table>` whose first row is the header. Markdown alignment rows
//! (`|---|---|`) are dropped here rather than in the classifier.

use html_escape::encode_text;

use super::{
    blocks::{ContentBlock, kinds::TableRow},
    inline::{Emphasis, InlineSpan},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Group {
    None,
    Unordered,
    Ordered,
    Table,
}

impl Group {
    fn of(block: &ContentBlock) -> Self {
        match block {
            ContentBlock::ListItem { ordered: false, .. } => Group::Unordered,
            ContentBlock::ListItem { ordered: true, .. } => Group::Ordered,
            ContentBlock::TableRow { .. } => Group::Table,
            _ => Group::None,
        }
    }

    fn open_tag(self) -> &'static str {
        match self {
            Group::None => "",
            Group::Unordered => "<ul>\n",
            Group::Ordered => "<ol>\n",
            Group::Table => "<table>\n",
        }
    }

    fn close_tag(self) -> &'static str {
        match self {
            Group::None => "",
            Group::Unordered => "</ul>\n",
            Group::Ordered => "</ol>\n",
            Group::Table => "</table>\n",
        }
    }
}

/// Renders blocks as an HTML fragment. All text is escaped.
pub fn render_html(blocks: &[ContentBlock]) -> String {
    let mut out = String::new();
    let mut group = Group::None;
    let mut table_rows = 0usize;

    for block in blocks {
        let next = Group::of(block);
        if next != group {
            out.push_str(group.close_tag());
            out.push_str(next.open_tag());
            group = next;
            table_rows = 0;
        }

        match block {
            ContentBlock::Heading { level, text } => {
                out.push_str(&format!("<h{level}>{}</h{level}>\n", encode_text(text)));
            }
            ContentBlock::ListItem { text, .. } => {
                out.push_str(&format!("<li>{}</li>\n", encode_text(text)));
            }
            ContentBlock::Paragraph { spans, .. } => {
                out.push_str("<p>");
                push_spans(&mut out, spans);
                out.push_str("</p>\n");
            }
            ContentBlock::TableRow { cells } => {
                if TableRow::is_alignment_row(cells) {
                    continue;
                }
                let tag = if table_rows == 0 { "th" } else { "td" };
                out.push_str("<tr>");
                for cell in cells {
                    out.push_str(&format!("<{tag}>{}</{tag}>", encode_text(cell)));
                }
                out.push_str("</tr>\n");
                table_rows += 1;
            }
            ContentBlock::Blank => {}
        }
    }

    out.push_str(group.close_tag());
    out
}

fn push_spans(out: &mut String, spans: &[InlineSpan]) {
    for span in spans {
        let text = encode_text(&span.text);
        match span.emphasis {
            Emphasis::Plain => out.push_str(&text),
            Emphasis::Bold => out.push_str(&format!("<strong>{text}</strong>")),
            Emphasis::Italic => out.push_str(&format!("<em>{text}</em>")),
        }
    }
}
