//! Native file dialogs for choosing export and import targets.

use bevy::prelude::*;
use bevy::tasks::AsyncComputeTaskPool;
use futures_lite::future;
use std::path::PathBuf;

use crate::config::AppConfig;

use super::messages::{ExportAnnotationsRequest, ImportAnnotationsRequest};
use super::resources::FileDialogState;

const DEFAULT_EXPORT_FILE_NAME: &str = "annotations.json";

/// Directory the dialogs start in: next to the last export, else the documents folder
pub fn starting_directory(config: &AppConfig) -> Option<PathBuf> {
    config
        .data
        .last_export_path
        .as_ref()
        .and_then(|p| p.parent())
        .filter(|p| p.is_dir())
        .map(|p| p.to_path_buf())
        .or_else(crate::paths::default_export_dir)
}

pub fn open_export_dialog(state: &mut FileDialogState, config: &AppConfig) {
    if state.any_pending() {
        return;
    }

    let directory = starting_directory(config);
    let task = AsyncComputeTaskPool::get().spawn(async move {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Export Annotations")
            .add_filter("Annotations", &["json"])
            .set_file_name(DEFAULT_EXPORT_FILE_NAME);
        if let Some(dir) = directory {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file().await.map(|f| f.path().to_path_buf())
    });
    state.pending_export = Some(task);
}

pub fn open_import_dialog(state: &mut FileDialogState, config: &AppConfig) {
    if state.any_pending() {
        return;
    }

    let directory = starting_directory(config);
    let task = AsyncComputeTaskPool::get().spawn(async move {
        let mut dialog = rfd::AsyncFileDialog::new()
            .set_title("Import Annotations")
            .add_filter("Annotations", &["json"]);
        if let Some(dir) = directory {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file().await.map(|f| f.path().to_path_buf())
    });
    state.pending_import = Some(task);
}

/// Turns finished dialogs into export/import requests
pub fn poll_file_dialogs(
    mut state: ResMut<FileDialogState>,
    mut export_events: MessageWriter<ExportAnnotationsRequest>,
    mut import_events: MessageWriter<ImportAnnotationsRequest>,
) {
    if let Some(task) = state.pending_export.as_mut()
        && let Some(choice) = future::block_on(future::poll_once(task))
    {
        state.pending_export = None;
        match choice {
            Some(path) => {
                export_events.write(ExportAnnotationsRequest { path });
            }
            None => debug!("Export dialog cancelled"),
        }
    }

    if let Some(task) = state.pending_import.as_mut()
        && let Some(choice) = future::block_on(future::poll_once(task))
    {
        state.pending_import = None;
        match choice {
            Some(path) => {
                import_events.write(ImportAnnotationsRequest { path });
            }
            None => debug!("Import dialog cancelled"),
        }
    }
}
