//! Error taxonomy for the tagging pipeline.
//!
//! Every variant is fatal: the pipeline stops at the first one and later
//! stages never run.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "Invalid lookup table format. {}:{}: expected 3 comma-separated fields, found {}",
        .path.display(),
        .line,
        .found
    )]
    InvalidTableFormat {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error(
        "Invalid log file format. {}:{}: expected at least 8 space-separated fields, found {}",
        .path.display(),
        .line,
        .found
    )]
    InvalidLogFileFormat {
        path: PathBuf,
        line: usize,
        found: usize,
    },

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config file {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn io(path: &Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
