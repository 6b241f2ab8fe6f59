//! # Content Catalog
//!
//! Case studies and white papers are load-time constants. They are never
//! created, mutated or destroyed at runtime.
//!
//! - **`vocab`**: closed `TherapeuticArea` / `Region` vocabularies
//! - **`records`**: `CaseStudy`, `WhitePaper` and the `Filterable` trait
//! - **`data`**: the static tables and id lookups

pub mod data;
pub mod records;
pub mod vocab;

pub use data::{CASE_STUDIES, WHITE_PAPERS, case_study, white_paper};
pub use records::{CaseStudy, Filterable, WhitePaper};
pub use vocab::{Region, TherapeuticArea, VocabError};
