/// A single line of input text.
///
/// Lines carry no identity beyond their position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// Zero-based line number.
    pub index: usize,
    /// Line text without its terminator (`\n` or `\r\n`).
    pub text: &'a str,
}

/// Returns an iterator over the lines of `text`.
///
/// A trailing newline does not produce an extra empty line, and empty input
/// produces no lines at all.
pub fn content_lines(text: &str) -> impl Iterator<Item = ContentLine<'_>> {
    text.lines()
        .enumerate()
        .map(|(index, text)| ContentLine { index, text })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_newlines() {
        let lines: Vec<_> = content_lines("one\ntwo\n\nfour").collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], ContentLine { index: 0, text: "one" });
        assert_eq!(lines[2], ContentLine { index: 2, text: "" });
        assert_eq!(lines[3].text, "four");
    }

    #[test]
    fn strips_carriage_returns() {
        let lines: Vec<_> = content_lines("a\r\nb\r\n").map(|l| l.text).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_input_has_no_lines() {
        assert_eq!(content_lines("").count(), 0);
    }

    #[test]
    fn trailing_newline_does_not_add_line() {
        assert_eq!(content_lines("only\n").count(), 1);
    }
}
