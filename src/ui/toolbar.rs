use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotations::{AnnotationStore, Family};
use crate::config::AppConfig;
use crate::interaction::InteractionController;
use crate::persistence::{
    open_export_dialog, open_import_dialog, AsyncPersistOperation, FileDialogState,
};

/// Left panel with placement buttons and export/import
pub fn toolbar_ui(
    mut contexts: EguiContexts,
    mut controller: ResMut<InteractionController>,
    store: Res<AnnotationStore>,
    config: Res<AppConfig>,
    async_op: Res<AsyncPersistOperation>,
    mut file_dialogs: ResMut<FileDialogState>,
) -> Result {
    egui::SidePanel::left("annotation_toolbar")
        .default_width(180.0)
        .resizable(false)
        .show(contexts.ctx_mut()?, |ui| {
            ui.add_space(8.0);
            ui.heading("Pipe Viewer");
            ui.add_space(8.0);
            ui.separator();

            ui.label(egui::RichText::new("Add annotation").strong());
            ui.add_space(4.0);

            let placing = controller.mode().placing_family();
            for family in Family::all() {
                let button = egui::Button::new(
                    egui::RichText::new(family.display_name()).size(14.0),
                )
                .min_size(egui::vec2(ui.available_width(), 28.0))
                .selected(placing == Some(*family));

                let response = ui.add(button);
                if response.clicked() {
                    controller.request_placement(*family);
                }
                response.on_hover_text(family.description());
            }

            if let Some(family) = placing {
                ui.add_space(4.0);
                ui.weak(format!("Click the model to place a {}", family.display_name()));
            }

            ui.add_space(8.0);
            ui.separator();

            let idle = !async_op.is_busy() && !file_dialogs.any_pending();
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(idle, egui::Button::new("Export..."))
                    .on_hover_text("Save all annotations to a JSON file")
                    .clicked()
                {
                    open_export_dialog(&mut file_dialogs, &config);
                }
                if ui
                    .add_enabled(idle, egui::Button::new("Import..."))
                    .on_hover_text("Replace all annotations with a JSON file")
                    .clicked()
                {
                    open_import_dialog(&mut file_dialogs, &config);
                }
            });

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(8.0);
                if store.is_empty() {
                    ui.weak("No annotations yet");
                } else {
                    ui.weak(format!("{} annotations", store.len()));
                }
                if controller.mode().is_idle() {
                    ui.weak("Right-click an annotation to edit, move or delete it");
                }
            });
        });
    Ok(())
}
