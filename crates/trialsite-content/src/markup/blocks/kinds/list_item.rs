use regex::Regex;
use std::sync::OnceLock;

/// List item markers: `-` / `*` bullets and `1.` style numbers.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 2] = ['-', '*'];

    /// Returns the item text if `line` starts with a bullet and a space.
    pub fn bullet(line: &str) -> Option<&str> {
        let mut chars = line.chars();
        let first = chars.next()?;
        if !Self::BULLETS.contains(&first) {
            return None;
        }
        chars.as_str().strip_prefix(' ').map(str::trim_end)
    }

    /// Returns the item text if `line` starts with digits, a period and whitespace.
    pub fn numbered(line: &str) -> Option<&str> {
        let m = ordered_marker().find(line)?;
        Some(line[m.end()..].trim_end())
    }
}

fn ordered_marker() -> &'static Regex {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER
        .get_or_init(|| Regex::new(r"^[0-9]+\.\s").expect("Invalid ordered list regex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_and_star_bullets() {
        assert_eq!(ListItem::bullet("- item one"), Some("item one"));
        assert_eq!(ListItem::bullet("* item two"), Some("item two"));
    }

    #[test]
    fn bullet_needs_space() {
        assert_eq!(ListItem::bullet("-item"), None);
        assert_eq!(ListItem::bullet("*emphasis*"), None);
        assert_eq!(ListItem::bullet("+ plus"), None);
    }

    #[test]
    fn numbered_items() {
        assert_eq!(ListItem::numbered("1. first step"), Some("first step"));
        assert_eq!(ListItem::numbered("12. twelfth"), Some("twelfth"));
        assert_eq!(ListItem::numbered("3.\ttabbed"), Some("tabbed"));
    }

    #[test]
    fn numbered_needs_period_and_space() {
        assert_eq!(ListItem::numbered("1) nope"), None);
        assert_eq!(ListItem::numbered("2024.05 release"), None);
        assert_eq!(ListItem::numbered(". no digits"), None);
    }
}
