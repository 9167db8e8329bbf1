//! egui views rendered from the interaction controller's signals.
//!
//! Views never mutate annotations directly; button presses are turned into
//! controller events so every transition goes through one place.

mod context_menu;
mod dialogs;
mod reposition_panel;
mod toolbar;
mod tooltip;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

use crate::config::ConfigResetNotification;
use crate::interaction::InteractionController;
use crate::persistence::{AsyncPersistOperation, ExportError, FileDialogState, ImportError};

/// Resource that tracks whether any modal dialog is currently open.
/// Scene pointer handlers check this to avoid placing or picking
/// while the user is interacting with a dialog.
#[derive(Resource, Default)]
pub struct DialogState {
    /// True when any modal dialog is open that should block scene input
    pub any_modal_open: bool,
}

/// System to aggregate all dialog open states into a single resource.
/// Runs in First schedule before input handlers.
fn update_dialog_state(
    controller: Res<InteractionController>,
    config_reset: Res<ConfigResetNotification>,
    export_error: Res<ExportError>,
    import_error: Res<ImportError>,
    async_op: Res<AsyncPersistOperation>,
    file_dialogs: Res<FileDialogState>,
    mut dialog_state: ResMut<DialogState>,
) {
    dialog_state.any_modal_open = controller.label_prompt().is_some()
        || config_reset.show
        || export_error.message.is_some()
        || import_error.message.is_some()
        || async_op.is_busy()
        || file_dialogs.any_pending();
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DialogState>()
            .init_resource::<dialogs::LabelPromptBuffer>()
            // Side panel first so floating views are placed over the remaining space
            .add_systems(EguiPrimaryContextPass, toolbar::toolbar_ui)
            .add_systems(
                EguiPrimaryContextPass,
                (
                    tooltip::tooltip_ui,
                    context_menu::context_menu_ui,
                    reposition_panel::reposition_panel_ui,
                    dialogs::label_prompt_ui,
                    dialogs::persist_error_dialogs_ui,
                    dialogs::async_operation_modal_ui,
                    dialogs::config_reset_notification_ui,
                )
                    .after(toolbar::toolbar_ui),
            )
            // Update dialog state at the start of each frame
            .add_systems(First, update_dialog_state);
    }
}
