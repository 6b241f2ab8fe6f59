use crate::markup::{
    inline::{Emphasis, InlineSpan, kinds::EmphasisMarker, parse_emphasis},
    lines::ContentLine,
};

use super::{
    kinds::{Heading, ListItem, TableRow},
    types::ContentBlock,
};

/// One step of the classification table: a named constructor that either
/// claims the line or passes.
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(&str) -> Option<ContentBlock>,
}

/// Classification rules in precedence order; the first match wins.
///
/// The last rule matches every line, so classification is total.
pub const RULES: &[Rule] = &[
    Rule {
        name: "heading",
        apply: heading,
    },
    Rule {
        name: "bullet_item",
        apply: bullet_item,
    },
    Rule {
        name: "numbered_item",
        apply: numbered_item,
    },
    Rule {
        name: "bold_paragraph",
        apply: bold_paragraph,
    },
    Rule {
        name: "italic_paragraph",
        apply: italic_paragraph,
    },
    Rule {
        name: "table_row",
        apply: table_row,
    },
    Rule {
        name: "paragraph",
        apply: paragraph,
    },
    Rule {
        name: "blank",
        apply: blank,
    },
];

/// Classifies individual lines into [`ContentBlock`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Runs `line` through [`RULES`] after stripping its indentation.
    pub fn classify(&self, line: &ContentLine<'_>) -> ContentBlock {
        let text = line.text.trim_start();
        RULES
            .iter()
            .find_map(|rule| {
                let block = (rule.apply)(text)?;
                log::trace!("line {} matched {}", line.index, rule.name);
                Some(block)
            })
            .unwrap_or(ContentBlock::Blank)
    }
}

fn heading(line: &str) -> Option<ContentBlock> {
    let (level, text) = Heading::parse(line)?;
    Some(ContentBlock::Heading {
        level,
        text: text.to_string(),
    })
}

fn bullet_item(line: &str) -> Option<ContentBlock> {
    ListItem::bullet(line).map(|text| ContentBlock::ListItem {
        ordered: false,
        text: text.to_string(),
    })
}

fn numbered_item(line: &str) -> Option<ContentBlock> {
    ListItem::numbered(line).map(|text| ContentBlock::ListItem {
        ordered: true,
        text: text.to_string(),
    })
}

fn bold_paragraph(line: &str) -> Option<ContentBlock> {
    EmphasisMarker::has_bold(line)
        .then(|| emphasised(line, EmphasisMarker::BOLD, Emphasis::Bold))
}

fn italic_paragraph(line: &str) -> Option<ContentBlock> {
    EmphasisMarker::has_italic(line)
        .then(|| emphasised(line, EmphasisMarker::ITALIC, Emphasis::Italic))
}

fn emphasised(line: &str, delim: &[u8], emphasis: Emphasis) -> ContentBlock {
    let text = line.trim_end();
    ContentBlock::Paragraph {
        text: text.to_string(),
        spans: parse_emphasis(text, delim, emphasis),
    }
}

fn table_row(line: &str) -> Option<ContentBlock> {
    TableRow::cells(line).map(|cells| ContentBlock::TableRow { cells })
}

fn paragraph(line: &str) -> Option<ContentBlock> {
    let text = line.trim_end();
    if text.is_empty() {
        return None;
    }
    Some(ContentBlock::Paragraph {
        text: text.to_string(),
        spans: vec![InlineSpan::plain(text)],
    })
}

fn blank(_line: &str) -> Option<ContentBlock> {
    Some(ContentBlock::Blank)
}
