//! Loading prior turns for a single-shot query.

use helpdesk_domain::HistoryEntry;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a history file.
#[derive(Error, Debug)]
pub enum HistoryFileError {
    #[error("cannot read history file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid history file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read a JSON array of `{"sender", "text"}` entries, oldest first.
pub fn load_history_file(path: &Path) -> Result<Vec<HistoryEntry>, HistoryFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| HistoryFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| HistoryFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
