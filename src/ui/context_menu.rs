use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::annotations::AnnotationStore;
use crate::interaction::{InteractionController, MenuAction};

/// Edit / Move / Delete menu at the right-click position
pub fn context_menu_ui(
    mut contexts: EguiContexts,
    mut controller: ResMut<InteractionController>,
    mut store: ResMut<AnnotationStore>,
) -> Result {
    let Some(menu) = controller.context_menu().copied() else {
        return Ok(());
    };

    let mut chosen = None;
    egui::Area::new(egui::Id::new("annotation_context_menu"))
        .fixed_pos(egui::pos2(menu.anchor.x, menu.anchor.y))
        .order(egui::Order::Foreground)
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_min_width(120.0);
                for action in MenuAction::all() {
                    if ui.button(action.display_name()).clicked() {
                        chosen = Some(*action);
                    }
                }
            });
        });

    // Presses outside the menu are handled by the pointer router
    if let Some(action) = chosen {
        controller.context_menu_action(&mut store, action);
    }
    Ok(())
}
