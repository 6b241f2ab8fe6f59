use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabError {
    #[error("Unknown therapeutic area: {0}")]
    UnknownArea(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),
}

/// Therapeutic area a case study or white paper belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TherapeuticArea {
    Oncology,
    Neurology,
    Cardiology,
    #[serde(rename = "Rare Disease")]
    RareDisease,
    Immunology,
    #[serde(rename = "Infectious Disease")]
    InfectiousDisease,
    Dermatology,
}

impl TherapeuticArea {
    pub const ALL: [TherapeuticArea; 7] = [
        TherapeuticArea::Oncology,
        TherapeuticArea::Neurology,
        TherapeuticArea::Cardiology,
        TherapeuticArea::RareDisease,
        TherapeuticArea::Immunology,
        TherapeuticArea::InfectiousDisease,
        TherapeuticArea::Dermatology,
    ];

    /// Display label, also the only accepted parse input.
    pub fn label(self) -> &'static str {
        match self {
            TherapeuticArea::Oncology => "Oncology",
            TherapeuticArea::Neurology => "Neurology",
            TherapeuticArea::Cardiology => "Cardiology",
            TherapeuticArea::RareDisease => "Rare Disease",
            TherapeuticArea::Immunology => "Immunology",
            TherapeuticArea::InfectiousDisease => "Infectious Disease",
            TherapeuticArea::Dermatology => "Dermatology",
        }
    }
}

impl fmt::Display for TherapeuticArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TherapeuticArea {
    type Err = VocabError;

    /// Exact, case-sensitive match against [`TherapeuticArea::label`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.label() == s)
            .ok_or_else(|| VocabError::UnknownArea(s.to_string()))
    }
}

/// Geographic region a case study ran in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Region {
    Global,
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    #[serde(rename = "Asia Pacific")]
    AsiaPacific,
    #[serde(rename = "Latin America")]
    LatinAmerica,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::Global,
        Region::NorthAmerica,
        Region::Europe,
        Region::AsiaPacific,
        Region::LatinAmerica,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::Global => "Global",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::AsiaPacific => "Asia Pacific",
            Region::LatinAmerica => "Latin America",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| VocabError::UnknownRegion(s.to_string()))
    }
}
