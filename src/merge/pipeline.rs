//! Read both inputs, join by movie id, normalize titles, sort, write `movies.json`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::MergeConfig;
use crate::data::catalog::{read_catalog, Catalog};
use crate::data::directors::{read_directors, DirectorIndex};
use crate::data::reader::LoadStats;
use crate::error::MergeError;
use crate::merge::collate::TitleCollator;
use crate::merge::normalize::normalize_title;

pub const DIRECTOR_NOT_SPECIFIED: &str = "Not specified";

/// One element of the output array. A missing year serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedEntry {
    pub title: String,
    pub year: Option<i64>,
    pub director: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub catalog_path: String,
    pub directors_path: String,
    /// `None` when nothing was written (inspect).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    pub catalog: LoadStats,
    pub directors: LoadStats,
    pub entries: usize,
    pub directors_matched: usize,
    pub directors_defaulted: usize,
}

/// Joins every catalog record with its director (or [`DIRECTOR_NOT_SPECIFIED`]) and returns
/// the entries sorted by normalized title. Neither input is modified.
pub fn merge_entries(catalog: &Catalog, directors: &DirectorIndex) -> Vec<MergedEntry> {
    let mut records: Vec<_> = catalog.records.iter().collect();
    records.sort_by_key(|(_, record)| record.first_seen);

    let mut entries: Vec<MergedEntry> = records
        .into_iter()
        .map(|(id, record)| MergedEntry {
            title: normalize_title(&record.title),
            year: record.year,
            director: directors
                .director_for(id)
                .unwrap_or(DIRECTOR_NOT_SPECIFIED)
                .to_string(),
        })
        .collect();

    TitleCollator::default().sort_entries(&mut entries);
    entries
}

/// 2-space indented JSON array.
pub fn render_json(entries: &[MergedEntry]) -> Result<String, MergeError> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Overwrites `path`, creating missing parent directories first.
pub fn write_output(path: &Path, contents: &str) -> Result<(), MergeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| MergeError::write(path, err))?;
    }
    fs::write(path, contents).map_err(|err| MergeError::write(path, err))
}

/// Loads both inputs. Either one failing to open aborts before anything is written.
pub fn load_inputs(config: &MergeConfig) -> Result<(Catalog, DirectorIndex), MergeError> {
    let catalog = read_catalog(&config.catalog_path)?;
    let directors = read_directors(&config.directors_path)?;
    Ok((catalog, directors))
}

/// Loads and joins the inputs without writing any output.
pub fn inspect_inputs(config: &MergeConfig) -> Result<MergeReport, MergeError> {
    let (catalog, directors) = load_inputs(config)?;
    Ok(build_report(config, &catalog, &directors, None))
}

/// Full run: read, join, normalize, sort, write.
pub fn run_merge(config: &MergeConfig) -> Result<MergeReport, MergeError> {
    let (catalog, directors) = load_inputs(config)?;
    let entries = merge_entries(&catalog, &directors);
    let payload = render_json(&entries)?;
    write_output(&config.output_path, &payload)?;

    let report = build_report(
        config,
        &catalog,
        &directors,
        Some(config.output_path.display().to_string()),
    );
    info!(
        path = %config.output_path.display(),
        entries = report.entries,
        directors_defaulted = report.directors_defaulted,
        "wrote merged movies"
    );
    Ok(report)
}

fn build_report(
    config: &MergeConfig,
    catalog: &Catalog,
    directors: &DirectorIndex,
    output_path: Option<String>,
) -> MergeReport {
    let directors_matched = catalog
        .records
        .keys()
        .filter(|id| directors.director_for(id).is_some())
        .count();
    MergeReport {
        catalog_path: config.catalog_path.display().to_string(),
        directors_path: config.directors_path.display().to_string(),
        output_path,
        catalog: catalog.stats.clone(),
        directors: directors.stats.clone(),
        entries: catalog.len(),
        directors_matched,
        directors_defaulted: catalog.len() - directors_matched,
    }
}
