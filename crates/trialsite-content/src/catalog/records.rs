use serde::Serialize;

use crate::markup::{blocks::ContentBlock, render_document};

use super::vocab::{Region, TherapeuticArea};

/// A static record that can be narrowed by search text, area and region.
pub trait Filterable {
    fn id(&self) -> u32;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn area(&self) -> TherapeuticArea;

    /// Records without a region dimension return `None`.
    fn region(&self) -> Option<Region> {
        None
    }
}

/// A completed recruitment engagement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub area: TherapeuticArea,
    pub region: Region,
    /// Headline outcome shown on the card.
    pub outcome: &'static str,
    pub patients_enrolled: u32,
}

impl Filterable for CaseStudy {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn area(&self) -> TherapeuticArea {
        self.area
    }

    fn region(&self) -> Option<Region> {
        Some(self.region)
    }
}

/// A downloadable white paper with an article body in the markup dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhitePaper {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub area: TherapeuticArea,
    pub published_year: u16,
    pub reading_minutes: u8,
    #[serde(skip)]
    pub body: &'static str,
}

impl WhitePaper {
    /// Classifies the article body for display.
    pub fn render(&self) -> Vec<ContentBlock> {
        render_document(self.body)
    }
}

impl Filterable for WhitePaper {
    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn area(&self) -> TherapeuticArea {
        self.area
    }
}
