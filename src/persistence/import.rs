//! Import system and task polling.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use futures_lite::future;

use crate::annotations::AnnotationStore;
use crate::interaction::{HoveredGlyph, InteractionController};

use super::helpers::{display_name, read_annotations};
use super::messages::ImportAnnotationsRequest;
use super::resources::{AsyncPersistOperation, ImportError, ImportTask};
use super::results::ImportResult;

/// Starts an async read and parse
pub fn import_annotations_system(
    mut commands: Commands,
    mut events: MessageReader<ImportAnnotationsRequest>,
    mut async_op: ResMut<AsyncPersistOperation>,
) {
    for event in events.read() {
        if async_op.is_busy() {
            warn!("Persistence operation already in progress");
            continue;
        }

        let path = event.path.clone();
        async_op.is_importing = true;
        async_op.operation_description = Some(format!("Importing {}...", display_name(&path)));

        let task = IoTaskPool::get().spawn(async move {
            let outcome = read_annotations(&path);
            ImportResult { path, outcome }
        });

        commands.spawn(ImportTask(task));
    }
}

/// Polls import tasks; a successful import replaces the whole store
pub fn poll_import_tasks(
    mut commands: Commands,
    mut tasks: Query<(Entity, &mut ImportTask)>,
    mut async_op: ResMut<AsyncPersistOperation>,
    mut import_error: ResMut<ImportError>,
    mut store: ResMut<AnnotationStore>,
    mut controller: ResMut<InteractionController>,
    mut hovered: ResMut<HoveredGlyph>,
) {
    for (entity, mut task) in tasks.iter_mut() {
        let Some(result) = future::block_on(future::poll_once(&mut task.0)) else {
            continue;
        };

        async_op.finish();

        match result.outcome {
            Ok(annotations) => {
                // Sessions and views refer to ids that may no longer exist
                controller.reset();
                hovered.id = None;
                store.replace_all(annotations);
                import_error.message = None;
                info!("Imported {} annotations from {:?}", store.len(), result.path);
            }
            Err(e) => {
                error!("Import failed: {}", e);
                import_error.message = Some(e.to_string());
            }
        }

        commands.entity(entity).despawn();
    }
}
