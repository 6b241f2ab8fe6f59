use crate::markup::blocks::ContentBlock;

/// Renders blocks as one numbered line each for snapshot comparison.
pub fn normalize(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| format!("{i:02} {}", describe(b)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Heading { level, text } => format!("Heading({level}) {text:?}"),
        ContentBlock::ListItem { ordered, text } => {
            let marker = if *ordered { "numbered" } else { "bullet" };
            format!("ListItem({marker}) {text:?}")
        }
        ContentBlock::Paragraph { spans, .. } => {
            let spans = spans
                .iter()
                .map(|s| format!("{:?}({:?})", s.emphasis, s.text))
                .collect::<Vec<_>>()
                .join(", ");
            format!("Paragraph [{spans}]")
        }
        ContentBlock::TableRow { cells } => format!("TableRow {cells:?}"),
        ContentBlock::Blank => "Blank".to_string(),
    }
}
