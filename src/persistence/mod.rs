//! Export and import of the annotation set.
//!
//! The store is serialized on the main thread so the written file matches
//! the moment the user asked for it; file I/O runs on the I/O task pool and
//! is polled each frame.
//!
//! ## Module Structure
//!
//! - [`error`] - PersistError
//! - [`messages`] - Export/import request messages
//! - [`resources`] - Busy state, error slots, pending tasks
//! - [`results`] - Results handed back by async tasks
//! - [`helpers`] - Blocking read/write helpers
//! - [`dialogs`] - Native file dialogs feeding the request messages
//! - [`export`] / [`import`] - Request systems and task polling

mod dialogs;
mod error;
mod export;
mod helpers;
mod import;
mod messages;
mod resources;
mod results;


pub use dialogs::{open_export_dialog, open_import_dialog};
pub use error::PersistError;
pub use messages::{ExportAnnotationsRequest, ImportAnnotationsRequest};
pub use resources::{AsyncPersistOperation, ExportError, FileDialogState, ImportError};

use bevy::prelude::*;

pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsyncPersistOperation>()
            .init_resource::<ExportError>()
            .init_resource::<ImportError>()
            .init_resource::<FileDialogState>()
            .add_message::<ExportAnnotationsRequest>()
            .add_message::<ImportAnnotationsRequest>()
            .add_systems(
                Update,
                (
                    dialogs::poll_file_dialogs,
                    export::export_annotations_system,
                    import::import_annotations_system,
                    export::poll_export_tasks,
                    import::poll_import_tasks,
                )
                    .chain(),
            );
    }
}
