//! # Article Markup
//!
//! Line-oriented classification of the restricted markdown dialect used by
//! white-paper articles.
//!
//! ## Pipeline
//!
//! 1. **Line splitting** (`lines`): the document is split into `ContentLine`s
//! 2. **Line classification** (`blocks`): each line is run through an ordered
//!    rule table and becomes exactly one `ContentBlock`
//! 3. **Inline emphasis** (`inline`): paragraph text is split into plain, bold
//!    and italic spans by a cursor-based scanner
//!
//! ## Key Invariants
//!
//! - One block per input line, in input order
//! - Classification never fails; malformed markup degrades to plain text
//! - Output depends only on the input text

pub mod blocks;
pub mod html;
pub mod inline;
pub mod lines;

#[cfg(test)]
mod tests;

use blocks::{ContentBlock, LineClassifier};
use lines::content_lines;

/// Lazily classifies every line of `text`.
pub fn blocks(text: &str) -> impl Iterator<Item = ContentBlock> + '_ {
    let classifier = LineClassifier;
    content_lines(text).map(move |line| classifier.classify(&line))
}

/// Classifies every line of `text` into a materialized block list.
pub fn render_document(text: &str) -> Vec<ContentBlock> {
    let out: Vec<ContentBlock> = blocks(text).collect();
    log::trace!("classified {} lines", out.len());
    out
}
