pub mod catalog;
pub mod filter;
pub mod forms;
pub mod markup;

// Re-export key types for easier usage
pub use catalog::{CaseStudy, Filterable, Region, TherapeuticArea, VocabError, WhitePaper};
pub use filter::{FilterCriteria, Selection, filter_records};
pub use markup::{
    blocks::ContentBlock,
    inline::{Emphasis, InlineSpan},
    render_document,
};
