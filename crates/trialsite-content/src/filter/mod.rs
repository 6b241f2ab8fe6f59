//! # Record Filter
//!
//! Narrows a static record table by free text, therapeutic area and region.
//! A record is kept iff it satisfies all three predicates; the result keeps
//! table order and may be empty.

use std::{fmt, str::FromStr};

use crate::catalog::{Filterable, Region, TherapeuticArea};

/// A dropdown selection over a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    /// No restriction.
    All,
    Only(T),
    /// A value outside the vocabulary; matches nothing.
    Unrecognized(String),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub const ALL_LABEL: &'static str = "All";

    /// Whether a record with `value` passes this selection.
    pub fn admits(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
            Selection::Unrecognized(_) => false,
        }
    }
}

impl<T: Copy + PartialEq> Selection<T> {
    /// Steps a dropdown through `All`, then each of `vocabulary`, then back
    /// to `All`. An unrecognized value steps to `All`.
    pub fn cycle(&self, vocabulary: &[T]) -> Self {
        let next = match self {
            Selection::All => 0,
            Selection::Only(current) => match vocabulary.iter().position(|v| v == current) {
                Some(i) => i + 1,
                None => vocabulary.len(),
            },
            Selection::Unrecognized(_) => vocabulary.len(),
        };
        vocabulary
            .get(next)
            .map_or(Selection::All, |v| Selection::Only(*v))
    }
}

impl<T: fmt::Display> Selection<T> {
    /// Dropdown label: `"All"`, the value's label, or the raw unrecognized text.
    pub fn label(&self) -> String {
        match self {
            Selection::All => Self::ALL_LABEL.to_string(),
            Selection::Only(value) => value.to_string(),
            Selection::Unrecognized(raw) => raw.clone(),
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parses a dropdown value. `"All"` means no restriction; anything the
    /// vocabulary rejects is kept as [`Selection::Unrecognized`].
    pub fn parse(s: &str) -> Self {
        if s == Self::ALL_LABEL {
            return Selection::All;
        }
        match s.parse() {
            Ok(value) => Selection::Only(value),
            Err(_) => Selection::Unrecognized(s.to_string()),
        }
    }
}

/// Current user-selected filter values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub search_term: String,
    pub area: Selection<TherapeuticArea>,
    pub region: Selection<Region>,
}

impl FilterCriteria {
    pub fn with_search_term(self, search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            ..self
        }
    }

    pub fn with_area(self, area: Selection<TherapeuticArea>) -> Self {
        Self { area, ..self }
    }

    pub fn with_region(self, region: Selection<Region>) -> Self {
        Self { region, ..self }
    }

    /// Case-insensitive substring match on title or description.
    pub fn matches_text<R: Filterable>(&self, record: &R) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        record.title().to_lowercase().contains(&needle)
            || record.description().to_lowercase().contains(&needle)
    }

    pub fn matches_area<R: Filterable>(&self, record: &R) -> bool {
        self.area.admits(&record.area())
    }

    /// Records without a region are not restricted by the region selection.
    pub fn matches_region<R: Filterable>(&self, record: &R) -> bool {
        match record.region() {
            Some(region) => self.region.admits(&region),
            None => true,
        }
    }

    pub fn matches<R: Filterable>(&self, record: &R) -> bool {
        self.matches_text(record) && self.matches_area(record) && self.matches_region(record)
    }
}

/// Returns the records of `table` matching `criteria`, in table order.
pub fn filter_records<'a, R: Filterable>(table: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    let out: Vec<&R> = table.iter().filter(|r| criteria.matches(*r)).collect();
    log::debug!(
        "filter {:?} / {:?} / {:?}: {} of {} records",
        criteria.search_term,
        criteria.area,
        criteria.region,
        out.len(),
        table.len()
    );
    out
}
