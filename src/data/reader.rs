//! Shared line-oriented reader for the delimited input files.
//!
//! Both inputs are plain "split on a delimiter" formats: no quoting, no escapes, and rows
//! may have any number of fields. The `csv` reader is configured accordingly so a `"` in a
//! title is an ordinary character and short rows reach the caller instead of erroring.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Terminator};
use serde::Serialize;
use tracing::debug;

use crate::error::MergeError;

/// Per-file row accounting. Skipped rows are never errors; they only show up here and in
/// `debug` logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub rows_read: usize,
    pub rows_loaded: usize,
    pub skipped_too_few_fields: usize,
    pub skipped_empty_field: usize,
    /// Rows kept after invalid UTF-8 bytes were replaced with U+FFFD.
    pub replaced_invalid_utf8: usize,
    /// Rows whose id had already been loaded; the later row replaced the earlier one.
    pub overwritten: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_absent: Option<usize>,
}

impl LoadStats {
    pub fn skipped(&self) -> usize {
        self.skipped_too_few_fields + self.skipped_empty_field
    }
}

/// Why a row was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSkip {
    TooFewFields { found: usize, required: usize },
    EmptyField(&'static str),
}

impl RowSkip {
    pub(crate) fn record(&self, stats: &mut LoadStats, source: &str, line: u64) {
        match self {
            Self::TooFewFields { found, required } => {
                stats.skipped_too_few_fields += 1;
                debug!(source, line, found, required, "skipping row with too few fields");
            }
            Self::EmptyField(field) => {
                stats.skipped_empty_field += 1;
                debug!(source, line, field, "skipping row with empty field");
            }
        }
    }
}

pub(crate) fn open_input(path: &Path) -> Result<File, MergeError> {
    File::open(path).map_err(|err| MergeError::read(path, err))
}

/// Streams every line of `input` as a split record and hands it to `on_row` with its 1-based
/// line number. Invalid UTF-8 is decoded lossily and the row is kept; I/O failures abort with
/// a read error naming `path`.
pub(crate) fn for_each_row<R, F>(
    input: R,
    delimiter: u8,
    path: &Path,
    stats: &mut LoadStats,
    mut on_row: F,
) -> Result<(), MergeError>
where
    R: Read,
    F: FnMut(&StringRecord, u64, &mut LoadStats),
{
    let source = path.display().to_string();
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::CRLF)
        .from_reader(input);

    let mut raw = ByteRecord::new();
    loop {
        match reader.read_byte_record(&mut raw) {
            Ok(true) => {
                stats.rows_read += 1;
                let line = raw.position().map(|pos| pos.line()).unwrap_or(0);
                let record = match StringRecord::from_byte_record(std::mem::take(&mut raw)) {
                    Ok(record) => record,
                    Err(err) => {
                        stats.replaced_invalid_utf8 += 1;
                        debug!(source = %source, line, "replacing invalid UTF-8 in row");
                        decode_lossy(&err.into_byte_record())
                    }
                };
                on_row(&record, line, stats);
            }
            Ok(false) => break,
            Err(err) => return Err(MergeError::read(path, io::Error::from(err))),
        }
    }
    Ok(())
}

fn decode_lossy(raw: &ByteRecord) -> StringRecord {
    raw.iter()
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect::<Vec<_>>()
        .into()
}

/// Field `index` trimmed, or `None` if missing or blank.
pub(crate) fn trimmed_field(record: &StringRecord, index: usize) -> Option<&str> {
    record
        .get(index)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
