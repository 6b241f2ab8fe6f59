//! # Block Classification
//!
//! Every input line becomes exactly one `ContentBlock`.
//!
//! ## Modules
//!
//! - **`types`**: the closed `ContentBlock` variant set
//! - **`kinds`**: block-specific types owning their markers (Heading, ListItem, TableRow)
//! - **`classify`**: the ordered rule table and `LineClassifier`
//!
//! ## Rule Precedence
//!
//! Structural markers (headings, list items) are tried before inline
//! emphasis, and emphasis before tables, so `- **bold** item` stays a list
//! item and `**a | b**` stays a paragraph.

pub mod classify;
pub mod kinds;
pub mod types;

pub use classify::{LineClassifier, RULES, Rule};
pub use types::ContentBlock;
