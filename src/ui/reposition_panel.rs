use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotations::{AnnotationStore, Axis};
use crate::interaction::{Direction, InteractionController, RotateDirection};

const BUTTON_SIZE: [f32; 2] = [72.0, 26.0];

enum PanelInput {
    Nudge(Direction),
    Rotate(Axis, RotateDirection),
    Confirm,
    Cancel,
}

/// Directional controls shown while an annotation is being repositioned
pub fn reposition_panel_ui(
    mut contexts: EguiContexts,
    mut controller: ResMut<InteractionController>,
    mut store: ResMut<AnnotationStore>,
) -> Result {
    let Some(panel) = controller.reposition_panel() else {
        return Ok(());
    };

    let mut input = None;
    egui::Window::new("Reposition")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .show(contexts.ctx_mut()?, |ui| {
            if let Some(annotation) = store.get(panel.target) {
                ui.label(format!(
                    "{}: {}",
                    annotation.family().display_name(),
                    annotation.display_label()
                ));
                ui.add_space(4.0);
            }

            let steps = controller.steps();
            ui.weak(format!("Step {} units", steps.position));

            egui::Grid::new("nudge_grid").spacing([4.0, 4.0]).show(ui, |ui| {
                ui.label("");
                nudge_button(ui, Direction::Up, &mut input);
                nudge_button(ui, Direction::Forward, &mut input);
                ui.end_row();

                nudge_button(ui, Direction::Left, &mut input);
                ui.label("");
                nudge_button(ui, Direction::Right, &mut input);
                ui.end_row();

                ui.label("");
                nudge_button(ui, Direction::Down, &mut input);
                nudge_button(ui, Direction::Backward, &mut input);
                ui.end_row();
            });

            if panel.show_rotation {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Rotation").strong());
                ui.weak(format!("Step {} rad", steps.rotation));
                egui::Grid::new("rotate_grid").spacing([4.0, 4.0]).show(ui, |ui| {
                    for axis in Axis::all() {
                        ui.label(axis.label());
                        if ui.add_sized(BUTTON_SIZE, egui::Button::new("+")).clicked() {
                            input = Some(PanelInput::Rotate(*axis, RotateDirection::Up));
                        }
                        if ui.add_sized(BUTTON_SIZE, egui::Button::new("-")).clicked() {
                            input = Some(PanelInput::Rotate(*axis, RotateDirection::Down));
                        }
                        ui.end_row();
                    }
                });
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Confirm").clicked() {
                    input = Some(PanelInput::Confirm);
                }
                if ui.button("Cancel").clicked() {
                    input = Some(PanelInput::Cancel);
                }
            });
        });

    match input {
        Some(PanelInput::Nudge(direction)) => controller.nudge(&mut store, direction),
        Some(PanelInput::Rotate(axis, direction)) => controller.rotate(&mut store, axis, direction),
        Some(PanelInput::Confirm) => controller.confirm_reposition(),
        Some(PanelInput::Cancel) => controller.cancel_reposition(&mut store),
        None => {}
    }
    Ok(())
}

fn nudge_button(ui: &mut egui::Ui, direction: Direction, input: &mut Option<PanelInput>) {
    if ui
        .add_sized(BUTTON_SIZE, egui::Button::new(direction.display_name()))
        .clicked()
    {
        *input = Some(PanelInput::Nudge(direction));
    }
}
