//! Terminal presentation of classified blocks.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use trialsite_content::{
    ContentBlock, Emphasis,
    markup::blocks::kinds::TableRow,
};

const BULLET: &str = "•";
const CELL_SEPARATOR: &str = " │ ";
const RULE: &str = "─";

/// Numbers consecutive ordered list items, restarting after any other block.
#[derive(Default)]
struct Numbering(usize);

impl Numbering {
    fn next(&mut self, block: &ContentBlock) -> Option<usize> {
        match block {
            ContentBlock::ListItem { ordered: true, .. } => {
                self.0 += 1;
                Some(self.0)
            }
            _ => {
                self.0 = 0;
                None
            }
        }
    }
}

fn list_marker(number: Option<usize>) -> String {
    match number {
        Some(n) => format!("{n}."),
        None => BULLET.to_string(),
    }
}

fn table_line(cells: &[String]) -> String {
    if TableRow::is_alignment_row(cells) {
        RULE.repeat(cells.iter().map(|c| c.len() + CELL_SEPARATOR.len()).sum())
    } else {
        cells.join(CELL_SEPARATOR)
    }
}

/// Renders blocks as unstyled lines, one per block.
pub fn plain_lines(blocks: &[ContentBlock]) -> Vec<String> {
    let mut numbering = Numbering::default();
    blocks
        .iter()
        .map(|block| {
            let number = numbering.next(block);
            match block {
                ContentBlock::Heading { level, text } => {
                    format!("{} {text}", "#".repeat(usize::from(*level)))
                }
                ContentBlock::ListItem { text, .. } => {
                    format!("  {} {text}", list_marker(number))
                }
                ContentBlock::Paragraph { .. } => block.plain_text(),
                ContentBlock::TableRow { cells } => table_line(cells),
                ContentBlock::Blank => String::new(),
            }
        })
        .collect()
}

/// Renders blocks as styled ratatui lines, one per block.
pub fn styled_lines(blocks: &[ContentBlock]) -> Vec<Line<'static>> {
    let mut numbering = Numbering::default();
    blocks
        .iter()
        .map(|block| {
            let number = numbering.next(block);
            match block {
                ContentBlock::Heading { level, text } => {
                    let color = if *level <= 2 { Color::Cyan } else { Color::Blue };
                    Line::from(Span::styled(
                        text.clone(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ))
                }
                ContentBlock::ListItem { text, .. } => Line::from(vec![
                    Span::styled(
                        format!("  {} ", list_marker(number)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(text.clone()),
                ]),
                ContentBlock::Paragraph { spans, .. } => Line::from(
                    spans
                        .iter()
                        .map(|s| Span::styled(s.text.clone(), emphasis_style(s.emphasis)))
                        .collect::<Vec<_>>(),
                ),
                ContentBlock::TableRow { cells } => Line::from(Span::styled(
                    table_line(cells),
                    Style::default().fg(Color::Gray),
                )),
                ContentBlock::Blank => Line::default(),
            }
        })
        .collect()
}

fn emphasis_style(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Plain => Style::default(),
        Emphasis::Bold => Style::default().add_modifier(Modifier::BOLD),
        Emphasis::Italic => Style::default().add_modifier(Modifier::ITALIC),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use trialsite_content::render_document;

    use super::*;

    #[test]
    fn plain_lines_number_ordered_items() {
        let blocks = render_document("# Steps\n1. one\n1. two\n- aside\n1. again");
        assert_eq!(
            plain_lines(&blocks),
            vec!["# Steps", "  1. one", "  2. two", "  • aside", "  1. again"]
        );
    }

    #[test]
    fn plain_lines_strip_emphasis_and_join_cells() {
        let blocks = render_document("Some **bold** text\n| a | b |\n\nend");
        assert_eq!(
            plain_lines(&blocks),
            vec!["Some bold text", "a │ b", "", "end"]
        );
    }

    #[test]
    fn styled_paragraph_keeps_one_span_per_emphasis_run() {
        let blocks = render_document("an *italic* word");
        let lines = styled_lines(&blocks);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 3);
        assert!(lines[0].spans[1].style.add_modifier.contains(Modifier::ITALIC));
    }

    #[test]
    fn alignment_row_becomes_rule() {
        let blocks = render_document("|---|---|");
        let line = &plain_lines(&blocks)[0];
        assert!(!line.is_empty());
        assert!(line.chars().all(|c| c == '─'));
    }
}
