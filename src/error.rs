use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal failures of a merge run. Malformed rows never reach this type; they are
/// skipped and counted by the readers.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to read input file '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write output file '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to serialize merged movies: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl MergeError {
    pub fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path.as_path()),
            Self::Serialize(_) => None,
        }
    }
}
