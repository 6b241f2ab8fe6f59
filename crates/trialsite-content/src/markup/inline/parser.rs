use super::{
    cursor::Cursor,
    types::{Emphasis, InlineSpan},
};

/// Splits `s` into spans, marking runs between paired `delim`s with `emphasis`.
///
/// Delimiters pair left to right. When a delimiter has no closing partner the
/// scan stops and the remainder, delimiter included, becomes plain text.
/// Empty runs are dropped; if nothing remains the whole input is returned as
/// one plain span so a paragraph is never left without text.
pub fn parse_emphasis(s: &str, delim: &[u8], emphasis: Emphasis) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        if let Some((open, inner)) = try_parse_delimited(&mut cur, delim) {
            push_span(&mut out, &s[text_start..open], Emphasis::Plain);
            push_span(&mut out, &s[inner.0..inner.1], emphasis);
            text_start = cur.pos();
            continue;
        }
        if cur.starts_with(delim) {
            // Unpaired delimiter: everything from here on is literal.
            break;
        }
        cur.bump();
    }

    push_span(&mut out, &s[text_start..], Emphasis::Plain);

    if out.is_empty() {
        out.push(InlineSpan::plain(s));
    }
    out
}

fn push_span(out: &mut Vec<InlineSpan>, text: &str, emphasis: Emphasis) {
    if !text.is_empty() {
        out.push(InlineSpan::new(text, emphasis));
    }
}

/// Attempts to parse a delimited run starting at the current position.
///
/// Returns the opening delimiter offset and the inner `(start, end)` range.
/// On failure, cursor position is restored.
fn try_parse_delimited(cur: &mut Cursor<'_>, delim: &[u8]) -> Option<(usize, (usize, usize))> {
    if !cur.starts_with(delim) {
        return None;
    }

    let saved = cur.clone();
    let open = cur.pos();
    cur.bump_n(delim.len());
    let inner_start = cur.pos();

    while !cur.eof() && !cur.starts_with(delim) {
        cur.bump();
    }
    let inner_end = cur.pos();

    if !cur.starts_with(delim) {
        *cur = saved;
        return None;
    }
    cur.bump_n(delim.len());

    Some((open, (inner_start, inner_end)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::markup::inline::kinds::EmphasisMarker;

    fn bold(s: &str) -> Vec<InlineSpan> {
        parse_emphasis(s, EmphasisMarker::BOLD, Emphasis::Bold)
    }

    fn italic(s: &str) -> Vec<InlineSpan> {
        parse_emphasis(s, EmphasisMarker::ITALIC, Emphasis::Italic)
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(bold("hello world"), vec![InlineSpan::plain("hello world")]);
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            bold("This is **bold** and *italic* text."),
            vec![
                InlineSpan::plain("This is "),
                InlineSpan::bold("bold"),
                InlineSpan::plain(" and *italic* text."),
            ]
        );
    }

    #[test]
    fn multiple_bold_runs() {
        assert_eq!(
            bold("**a** then **b**"),
            vec![
                InlineSpan::bold("a"),
                InlineSpan::plain(" then "),
                InlineSpan::bold("b"),
            ]
        );
    }

    #[test]
    fn unbalanced_trailing_marker_is_literal() {
        assert_eq!(
            bold("a **b** c **d"),
            vec![
                InlineSpan::plain("a "),
                InlineSpan::bold("b"),
                InlineSpan::plain(" c **d"),
            ]
        );
    }

    #[test]
    fn lone_marker_is_literal() {
        assert_eq!(bold("**unclosed"), vec![InlineSpan::plain("**unclosed")]);
    }

    #[test]
    fn empty_runs_fall_back_to_literal_text() {
        assert_eq!(bold("****"), vec![InlineSpan::plain("****")]);
    }

    #[test]
    fn single_stars_inside_bold_are_kept() {
        assert_eq!(
            bold("**2 * 3** is six"),
            vec![InlineSpan::bold("2 * 3"), InlineSpan::plain(" is six")]
        );
    }

    #[test]
    fn italic_pairs_single_stars() {
        assert_eq!(
            italic("an *emphasised* word"),
            vec![
                InlineSpan::plain("an "),
                InlineSpan::italic("emphasised"),
                InlineSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn multibyte_text_around_markers() {
        assert_eq!(
            italic("café *naïve* résumé"),
            vec![
                InlineSpan::plain("café "),
                InlineSpan::italic("naïve"),
                InlineSpan::plain(" résumé"),
            ]
        );
    }
}
