use serde::Serialize;

/// Display style of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Plain,
    Bold,
    Italic,
}

/// A contiguous run of paragraph text sharing one emphasis style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSpan {
    /// Text with delimiters removed.
    pub text: String,
    pub emphasis: Emphasis,
}

impl InlineSpan {
    pub fn new(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, Emphasis::Italic)
    }
}
