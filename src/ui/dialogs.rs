//! Modal windows: label prompt, persistence errors, busy indicator, config reset.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotations::{AnnotationId, AnnotationStore};
use crate::config::ConfigResetNotification;
use crate::interaction::InteractionController;
use crate::persistence::{AsyncPersistOperation, ExportError, ImportError};

/// Text being typed into the label prompt
#[derive(Resource, Default)]
pub struct LabelPromptBuffer {
    target: Option<AnnotationId>,
    text: String,
}

impl LabelPromptBuffer {
    /// Seed the buffer the first frame a prompt for `target` is shown.
    fn sync(&mut self, target: AnnotationId, current: &str) {
        if self.target != Some(target) {
            self.target = Some(target);
            self.text = current.to_string();
        }
    }

    fn clear(&mut self) {
        self.target = None;
        self.text.clear();
    }
}

pub fn label_prompt_ui(
    mut contexts: EguiContexts,
    mut controller: ResMut<InteractionController>,
    mut store: ResMut<AnnotationStore>,
    mut buffer: ResMut<LabelPromptBuffer>,
) -> Result {
    let Some(prompt) = controller.label_prompt().cloned() else {
        if buffer.target.is_some() {
            buffer.clear();
        }
        return Ok(());
    };
    buffer.sync(prompt.target, &prompt.current);

    let mut submitted = None;
    egui::Window::new("Edit Label")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Label:");
            let response = ui.text_edit_singleline(&mut buffer.text);
            response.request_focus();
            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() || enter {
                    submitted = Some(Some(buffer.text.clone()));
                }
                if ui.button("Cancel").clicked() {
                    submitted = Some(None);
                }
            });
        });

    if let Some(text) = submitted {
        controller.submit_label(&mut store, text);
        buffer.clear();
    }
    Ok(())
}

/// Export and import failures, dismissed with OK
pub fn persist_error_dialogs_ui(
    mut contexts: EguiContexts,
    mut export_error: ResMut<ExportError>,
    mut import_error: ResMut<ImportError>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    render_error_window(ctx, "Export Error", &mut export_error.message);
    render_error_window(ctx, "Import Error", &mut import_error.message);
    Ok(())
}

fn render_error_window(ctx: &egui::Context, title: &str, message: &mut Option<String>) {
    let Some(error) = message.clone() else {
        return;
    };

    egui::Window::new(title)
        .collapsible(false)
        .resizable(true)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                ui.colored_label(egui::Color32::RED, error);
            });
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                *message = None;
            }
        });
}

pub fn async_operation_modal_ui(
    mut contexts: EguiContexts,
    async_op: Res<AsyncPersistOperation>,
) -> Result {
    if !async_op.is_busy() {
        return Ok(());
    }

    let description = async_op
        .operation_description
        .as_deref()
        .unwrap_or("Working...");

    egui::Window::new("Please wait")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(description);
            });
        });
    Ok(())
}

pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Settings Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your settings could not be loaded and were reset to defaults.");
            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }
            ui.add_space(10.0);
            if ui.button("OK").clicked() {
                notification.show = false;
                notification.reason = None;
            }
        });
    Ok(())
}
