//! Interaction state machine and pointer routing.
//!
//! ## Module Structure
//!
//! - [`mode`] - Mode enum and the signals the view layer renders from it
//! - [`controller`] - InteractionController resource
//! - [`input`] - Bevy systems turning pointer input into controller events

mod controller;
mod input;
mod mode;

#[cfg(test)]
mod tests;

pub use controller::{InteractionController, NudgeSteps};
pub use input::HoveredGlyph;
pub use mode::{Direction, MenuAction, RotateDirection};

use bevy::prelude::*;

use crate::config::AppConfig;

/// Push the configured nudge magnitudes into the controller.
fn apply_configured_steps(config: Res<AppConfig>, mut controller: ResMut<InteractionController>) {
    controller.set_steps(config.data.nudge_steps());
}

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InteractionController>()
            .init_resource::<HoveredGlyph>()
            .add_systems(
                Update,
                (
                    apply_configured_steps.run_if(resource_changed::<AppConfig>),
                    input::handle_pointer_input,
                    input::apply_pointer_affordance,
                )
                    .chain(),
            );
    }
}
