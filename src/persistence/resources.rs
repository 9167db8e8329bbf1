//! Resource types for persistence state tracking.

use bevy::prelude::*;
use bevy::tasks::Task;
use std::path::PathBuf;

use super::results::{ExportResult, ImportResult};

/// Resource tracking export errors for display to user.
#[derive(Resource, Default)]
pub struct ExportError {
    pub message: Option<String>,
}

/// Resource tracking import errors for display to user.
#[derive(Resource, Default)]
pub struct ImportError {
    pub message: Option<String>,
}

/// Resource tracking async file I/O for the modal indicator
#[derive(Resource, Default)]
pub struct AsyncPersistOperation {
    /// Whether an export is in progress
    pub is_exporting: bool,
    /// Whether an import is in progress
    pub is_importing: bool,
    /// Description of the current operation
    pub operation_description: Option<String>,
}

impl AsyncPersistOperation {
    pub fn is_busy(&self) -> bool {
        self.is_exporting || self.is_importing
    }

    pub fn finish(&mut self) {
        self.is_exporting = false;
        self.is_importing = false;
        self.operation_description = None;
    }
}

/// Pending native file dialogs opened from the toolbar
#[derive(Resource, Default)]
pub struct FileDialogState {
    pub pending_export: Option<Task<Option<PathBuf>>>,
    pub pending_import: Option<Task<Option<PathBuf>>>,
}

impl FileDialogState {
    pub fn any_pending(&self) -> bool {
        self.pending_export.is_some() || self.pending_import.is_some()
    }
}

/// Component for export task
#[derive(Component)]
pub struct ExportTask(pub Task<ExportResult>);

/// Component for import task
#[derive(Component)]
pub struct ImportTask(pub Task<ImportResult>);
