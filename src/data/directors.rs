//! Director lookup: comma-delimited `movieId,name`, no header.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use tracing::info;

use crate::data::reader::{for_each_row, open_input, trimmed_field, LoadStats, RowSkip};
use crate::error::MergeError;

pub const DIRECTORS_DELIMITER: u8 = b',';
pub const DIRECTORS_MIN_FIELDS: usize = 2;

/// Director names keyed by trimmed movie id. Last row wins on duplicate ids.
#[derive(Debug, Clone, Default)]
pub struct DirectorIndex {
    pub names: HashMap<String, String>,
    pub stats: LoadStats,
}

impl DirectorIndex {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn director_for(&self, movie_id: &str) -> Option<&str> {
        self.names.get(movie_id).map(String::as_str)
    }
}

pub fn parse_director_row(record: &StringRecord) -> Result<(&str, &str), RowSkip> {
    if record.len() < DIRECTORS_MIN_FIELDS {
        return Err(RowSkip::TooFewFields {
            found: record.len(),
            required: DIRECTORS_MIN_FIELDS,
        });
    }
    let movie_id = trimmed_field(record, 0).ok_or(RowSkip::EmptyField("movie_id"))?;
    let name = trimmed_field(record, 1).ok_or(RowSkip::EmptyField("director"))?;
    Ok((movie_id, name))
}

pub fn read_directors(path: &Path) -> Result<DirectorIndex, MergeError> {
    let file = open_input(path)?;
    let index = read_directors_from(file, path)?;
    info!(
        path = %path.display(),
        directors = index.len(),
        skipped = index.stats.skipped(),
        "loaded director lookup"
    );
    Ok(index)
}

pub fn read_directors_from<R: Read>(input: R, path: &Path) -> Result<DirectorIndex, MergeError> {
    let mut names = HashMap::new();
    let mut stats = LoadStats::default();
    let source = path.display().to_string();

    for_each_row(input, DIRECTORS_DELIMITER, path, &mut stats, |record, line, stats| {
        match parse_director_row(record) {
            Ok((movie_id, name)) => {
                stats.rows_loaded += 1;
                if names.insert(movie_id.to_string(), name.to_string()).is_some() {
                    stats.overwritten += 1;
                }
            }
            Err(skip) => skip.record(stats, &source, line),
        }
    })?;

    Ok(DirectorIndex { names, stats })
}
