//! Input and output locations for a merge run.
//! Defaults are the fixed relative paths; `CINEMERGE_*` env vars and positional CLI args override them.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_CATALOG_PATH: &str = "movies.csv";
pub const DEFAULT_DIRECTORS_PATH: &str = "directors.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "movies.json";

pub const CATALOG_ENV: &str = "CINEMERGE_CATALOG";
pub const DIRECTORS_ENV: &str = "CINEMERGE_DIRECTORS";
pub const OUTPUT_ENV: &str = "CINEMERGE_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    pub catalog_path: PathBuf,
    pub directors_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            directors_path: PathBuf::from(DEFAULT_DIRECTORS_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl MergeConfig {
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        directors_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            directors_path: directors_path.into(),
            output_path: output_path.into(),
        }
    }

    /// Defaults overlaid with any non-empty `CINEMERGE_*` environment variables.
    pub fn from_env() -> Self {
        Self::default().with_lookup(|key| env::var(key).ok())
    }

    fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(path) = value(CATALOG_ENV) {
            self.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = value(DIRECTORS_ENV) {
            self.directors_path = PathBuf::from(path);
        }
        if let Some(path) = value(OUTPUT_ENV) {
            self.output_path = PathBuf::from(path);
        }
        self
    }

    /// Positional overrides in order: catalog, directors, output. An empty argument keeps
    /// the current value for its slot; extra args are ignored.
    pub fn with_args(mut self, args: &[String]) -> Self {
        let slots = [
            &mut self.catalog_path,
            &mut self.directors_path,
            &mut self.output_path,
        ];
        for (slot, arg) in slots.into_iter().zip(args) {
            if !arg.is_empty() {
                *slot = PathBuf::from(arg);
            }
        }
        self
    }
}
