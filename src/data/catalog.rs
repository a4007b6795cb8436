//! Movie catalog: semicolon-delimited, header on line 1, `id;title;year;...` with at least
//! five fields per row.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::data::reader::{for_each_row, open_input, trimmed_field, LoadStats, RowSkip};
use crate::error::MergeError;

pub const CATALOG_DELIMITER: u8 = b';';
pub const CATALOG_MIN_FIELDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub title: String,
    pub year: Option<i64>,
    /// Load order of the first row seen for this id. Kept when a later row overwrites the
    /// record, so ties in the final sort come out in file order.
    pub first_seen: usize,
}

/// Catalog rows keyed by trimmed id. Later rows with the same id replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub records: HashMap<String, CatalogRecord>,
    pub stats: LoadStats,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.get(id)
    }
}

/// One accepted catalog row, fields already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub year: Option<i64>,
}

pub fn parse_catalog_row(record: &StringRecord) -> Result<CatalogRow<'_>, RowSkip> {
    if record.len() < CATALOG_MIN_FIELDS {
        return Err(RowSkip::TooFewFields {
            found: record.len(),
            required: CATALOG_MIN_FIELDS,
        });
    }
    let id = trimmed_field(record, 0).ok_or(RowSkip::EmptyField("id"))?;
    let title = trimmed_field(record, 1).ok_or(RowSkip::EmptyField("title"))?;
    let year = record.get(2).and_then(parse_year);
    Ok(CatalogRow { id, title, year })
}

/// Permissive integer parse: trims, accepts a sign, and reads the leading run of ASCII
/// digits (`"1999 (remaster)"` is 1999). Anything without a leading digit, or a digit run
/// too long for `i64`, is `None`.
pub fn parse_year(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude: i64 = unsigned[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

pub fn read_catalog(path: &Path) -> Result<Catalog, MergeError> {
    let file = open_input(path)?;
    let catalog = read_catalog_from(file, path)?;
    info!(
        path = %path.display(),
        movies = catalog.len(),
        skipped = catalog.stats.skipped(),
        overwritten = catalog.stats.overwritten,
        "loaded catalog"
    );
    Ok(catalog)
}

/// Reads catalog rows from any byte stream. `path` is only used for diagnostics.
pub fn read_catalog_from<R: Read>(input: R, path: &Path) -> Result<Catalog, MergeError> {
    let mut records: HashMap<String, CatalogRecord> = HashMap::new();
    let mut stats = LoadStats::default();
    let mut years_absent = 0;
    let source = path.display().to_string();

    for_each_row(input, CATALOG_DELIMITER, path, &mut stats, |record, line, stats| {
        // Header: counted as read, neither loaded nor skipped.
        if line == 1 {
            return;
        }
        match parse_catalog_row(record) {
            Ok(row) => {
                stats.rows_loaded += 1;
                if row.year.is_none() {
                    years_absent += 1;
                }
                if insert_record(&mut records, row) {
                    stats.overwritten += 1;
                }
            }
            Err(skip) => skip.record(stats, &source, line),
        }
    })?;

    stats.years_absent = Some(years_absent);
    Ok(Catalog { records, stats })
}

/// Returns true when an existing record for the id was replaced.
fn insert_record(records: &mut HashMap<String, CatalogRecord>, row: CatalogRow<'_>) -> bool {
    let first_seen = records.len();
    if let Some(existing) = records.get_mut(row.id) {
        existing.title = row.title.to_string();
        existing.year = row.year;
        return true;
    }
    records.insert(
        row.id.to_string(),
        CatalogRecord {
            title: row.title.to_string(),
            year: row.year,
            first_seen,
        },
    );
    false
}
