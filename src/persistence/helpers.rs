//! Blocking file helpers run inside the I/O task pool.

use std::path::Path;

use super::error::PersistError;
use crate::annotations::{Annotation, AnnotationStore};

pub fn write_payload(path: &Path, payload: &str) -> Result<(), PersistError> {
    std::fs::write(path, payload).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_annotations(path: &Path) -> Result<Vec<Annotation>, PersistError> {
    let payload = std::fs::read_to_string(path).map_err(|source| PersistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    AnnotationStore::parse(&payload)
}

/// File name shown in the busy indicator
pub fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("annotations")
}
