/// Emphasis delimiters.
///
/// The parser takes one of these constants; it never hardcodes `*`.
pub struct EmphasisMarker;

impl EmphasisMarker {
    /// Delimits bold runs.
    pub const BOLD: &'static [u8] = b"**";
    /// Delimits italic runs.
    pub const ITALIC: &'static [u8] = b"*";

    /// Returns true if `s` contains a bold delimiter.
    pub fn has_bold(s: &str) -> bool {
        s.contains("**")
    }

    /// Returns true if `s` contains an italic delimiter.
    pub fn has_italic(s: &str) -> bool {
        s.contains('*')
    }
}
