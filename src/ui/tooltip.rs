use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::constants::{TOOLTIP_OFFSET_Y, TOOLTIP_WIDTH};
use crate::interaction::InteractionController;

/// Top-left corner of a tooltip centered above `anchor`.
pub(crate) fn tooltip_origin(anchor: Vec2) -> egui::Pos2 {
    egui::pos2(anchor.x - TOOLTIP_WIDTH / 2.0, anchor.y - TOOLTIP_OFFSET_Y)
}

pub fn tooltip_ui(mut contexts: EguiContexts, controller: Res<InteractionController>) -> Result {
    let Some(tooltip) = controller.tooltip() else {
        return Ok(());
    };

    egui::Area::new(egui::Id::new("annotation_tooltip"))
        .fixed_pos(tooltip_origin(tooltip.anchor))
        .order(egui::Order::Tooltip)
        .interactable(false)
        .show(contexts.ctx_mut()?, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_width(TOOLTIP_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(egui::RichText::new(&tooltip.text).strong());
                });
            });
        });
    Ok(())
}
