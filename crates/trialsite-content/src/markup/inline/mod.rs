//! # Inline Emphasis
//!
//! Cursor-based splitting of paragraph text into emphasis spans.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and the `Emphasis` style enum
//! - **`kinds`**: `EmphasisMarker` owns the `**` / `*` delimiters
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_emphasis()` pairs delimiters left to right
//!
//! ## Pairing
//!
//! Delimiters pair in order of appearance. A trailing delimiter with no
//! partner is kept as literal text together with everything after it.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_emphasis;
pub use types::{Emphasis, InlineSpan};
