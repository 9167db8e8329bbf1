//! Errors raised while exporting or importing annotations.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid annotation data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown annotation family tag {0}")]
    UnknownFamily(u8),
}
