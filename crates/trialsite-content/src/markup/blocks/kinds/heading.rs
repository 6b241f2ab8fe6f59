/// ATX-style heading with owned marker constants.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    /// Deeper marker runs are clamped to this level.
    pub const MAX_LEVEL: u8 = 6;

    /// Parses `line` as a heading, returning its level and text.
    ///
    /// The marker run must be followed by a space; `#tag` and a bare `###`
    /// are not headings. The text is everything after that single space.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 {
            return None;
        }
        let text = line[hashes..].strip_prefix(' ')?;
        let level = u8::try_from(hashes)
            .unwrap_or(Self::MAX_LEVEL)
            .min(Self::MAX_LEVEL);
        Some((level, text.trim_end()))
    }
}
