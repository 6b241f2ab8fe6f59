//! Non-interactive subcommands. Each writes to the given sink so the
//! output can be captured in tests.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use std::{io::Write, path::Path};
use trialsite_config::FilterDefaults;
use trialsite_content::{
    ContentBlock, FilterCriteria, Selection,
    catalog::{CASE_STUDIES, WHITE_PAPERS, white_paper},
    filter_records,
    markup::html::render_html,
    render_document,
};

use crate::text::plain_lines;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Builds filter criteria from command-line values, falling back to the
/// configured defaults.
pub fn criteria(
    search: Option<String>,
    area: Option<String>,
    region: Option<String>,
    defaults: &FilterDefaults,
) -> FilterCriteria {
    let area = Selection::parse(area.as_deref().unwrap_or(&defaults.area));
    if let Selection::Unrecognized(raw) = &area {
        log::warn!("Unknown therapeutic area {raw:?}; nothing will match");
    }
    let region = Selection::parse(region.as_deref().unwrap_or(&defaults.region));
    if let Selection::Unrecognized(raw) = &region {
        log::warn!("Unknown region {raw:?}; nothing will match");
    }
    FilterCriteria::default()
        .with_search_term(search.unwrap_or_default())
        .with_area(area)
        .with_region(region)
}

pub fn render_file(out: &mut impl Write, path: &Path, format: OutputFormat) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read article {}", path.display()))?;
    write_blocks(out, &render_document(&text), format)
}

pub fn render_paper(out: &mut impl Write, id: u32, format: OutputFormat) -> Result<()> {
    let Some(paper) = white_paper(id) else {
        bail!("No white paper with id {id}");
    };
    write_blocks(out, &paper.render(), format)
}

fn write_blocks(out: &mut impl Write, blocks: &[ContentBlock], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in plain_lines(blocks) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Html => write!(out, "{}", render_html(blocks))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(blocks)?)?,
    }
    Ok(())
}

pub fn list_cases(out: &mut impl Write, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let found = filter_records(CASE_STUDIES, criteria);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
        return Ok(());
    }

    for case in &found {
        writeln!(
            out,
            "[{}] {} ({}, {})",
            case.id, case.title, case.area, case.region
        )?;
        writeln!(
            out,
            "    {} · {} patients",
            case.outcome, case.patients_enrolled
        )?;
    }
    writeln!(
        out,
        "{} of {} case studies",
        found.len(),
        CASE_STUDIES.len()
    )?;
    Ok(())
}

pub fn list_papers(out: &mut impl Write, criteria: &FilterCriteria, json: bool) -> Result<()> {
    let found = filter_records(WHITE_PAPERS, criteria);
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
        return Ok(());
    }

    for paper in &found {
        writeln!(
            out,
            "[{}] {} ({}, {})",
            paper.id, paper.title, paper.area, paper.published_year
        )?;
        writeln!(out, "    {}", paper.description)?;
    }
    writeln!(
        out,
        "{} of {} white papers",
        found.len(),
        WHITE_PAPERS.len()
    )?;
    Ok(())
}
