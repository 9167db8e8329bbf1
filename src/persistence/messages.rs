//! Message types for annotation persistence operations.

use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Message)]
pub struct ExportAnnotationsRequest {
    pub path: PathBuf,
}

#[derive(Message)]
pub struct ImportAnnotationsRequest {
    pub path: PathBuf,
}
