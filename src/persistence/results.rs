//! Result types for async persistence operations.

use std::path::PathBuf;

use super::error::PersistError;
use crate::annotations::Annotation;

/// Result of an async export
pub struct ExportResult {
    pub path: PathBuf,
    pub outcome: Result<(), PersistError>,
}

/// Result of an async import
pub struct ImportResult {
    pub path: PathBuf,
    pub outcome: Result<Vec<Annotation>, PersistError>,
}
