//! Export system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::annotations::AnnotationStore;
use crate::config::UpdateLastExportPathRequest;

use super::helpers::{display_name, write_payload};
use super::messages::ExportAnnotationsRequest;
use super::resources::{AsyncPersistOperation, ExportError, ExportTask};
use super::results::ExportResult;

/// Snapshots the store and starts an async write
pub fn export_annotations_system(
    mut commands: Commands,
    mut events: MessageReader<ExportAnnotationsRequest>,
    store: Res<AnnotationStore>,
    mut async_op: ResMut<AsyncPersistOperation>,
    mut export_error: ResMut<ExportError>,
) {
    for event in events.read() {
        if async_op.is_busy() {
            warn!("Persistence operation already in progress");
            continue;
        }

        // Serialized here so the file reflects the store at request time
        let payload = match store.serialize() {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize annotations: {}", e);
                export_error.message = Some(e.to_string());
                continue;
            }
        };

        let path = event.path.clone();
        async_op.is_exporting = true;
        async_op.operation_description = Some(format!("Exporting {}...", display_name(&path)));

        let count = store.len();
        debug!("Exporting {} annotations to {:?}", count, path);

        let task = IoTaskPool::get().spawn(async move {
            let outcome = write_payload(&path, &payload);
            ExportResult { path, outcome }
        });

        commands.spawn(ExportTask(task));
    }
}

/// Polls export tasks and reports the outcome
pub fn poll_export_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ExportTask)>,
    mut async_op: ResMut<AsyncPersistOperation>,
    mut export_error: ResMut<ExportError>,
    mut config_events: MessageWriter<UpdateLastExportPathRequest>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.finish();

        match result.outcome {
            Ok(()) => {
                info!("Annotations exported to {:?}", result.path);
                export_error.message = None;
                config_events.write(UpdateLastExportPathRequest { path: result.path });
            }
            Err(e) => {
                error!("Export failed: {}", e);
                export_error.message = Some(e.to_string());
            }
        }

        commands.entity(entity).despawn();
    }
}
