use serde::Serialize;

use crate::markup::inline::InlineSpan;

/// A classified, display-ready unit derived from one input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    /// `#` .. `######` heading.
    Heading {
        /// 1 to 6.
        level: u8,
        text: String,
    },
    /// Bulleted (`-`, `*`) or numbered (`1.`) item.
    ListItem { ordered: bool, text: String },
    /// Running text split into emphasis spans.
    Paragraph {
        /// The line as written, markers included.
        text: String,
        spans: Vec<InlineSpan>,
    },
    /// One pipe-delimited row.
    TableRow { cells: Vec<String> },
    /// Empty or whitespace-only line.
    Blank,
}

impl ContentBlock {
    /// Short variant name, used in logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "Heading",
            ContentBlock::ListItem { .. } => "ListItem",
            ContentBlock::Paragraph { .. } => "Paragraph",
            ContentBlock::TableRow { .. } => "TableRow",
            ContentBlock::Blank => "Blank",
        }
    }

    /// Displayed text with markup removed.
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Heading { text, .. } | ContentBlock::ListItem { text, .. } => {
                text.clone()
            }
            ContentBlock::Paragraph { spans, .. } => {
                spans.iter().map(|s| s.text.as_str()).collect()
            }
            ContentBlock::TableRow { cells } => cells.join(" | "),
            ContentBlock::Blank => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_emphasis() {
        let block = ContentBlock::Paragraph {
            text: "a **b** c".into(),
            spans: vec![
                InlineSpan::plain("a "),
                InlineSpan::bold("b"),
                InlineSpan::plain(" c"),
            ],
        };
        assert_eq!(block.plain_text(), "a b c");
        assert_eq!(block.kind_name(), "Paragraph");
    }

    #[test]
    fn table_row_plain_text_joins_cells() {
        let block = ContentBlock::TableRow {
            cells: vec!["Phase".into(), "II".into()],
        };
        assert_eq!(block.plain_text(), "Phase | II");
    }
}
