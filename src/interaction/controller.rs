//! The interaction state machine.

use bevy::prelude::*;

use super::mode::{
    ContextMenu, Direction, LabelPrompt, MenuAction, Mode, PointerAffordance, RepositionPanel,
    RepositionSession, RotateDirection, Tooltip,
};
use crate::annotations::{Annotation, AnnotationId, AnnotationStore, Axis, Family};
use crate::constants::{DEFAULT_NUDGE_STEP, DEFAULT_ROTATION_STEP};

/// Fixed magnitudes applied by a single nudge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NudgeSteps {
    /// World units per directional nudge
    pub position: f32,
    /// Radians per rotation nudge
    pub rotation: f32,
}

impl Default for NudgeSteps {
    fn default() -> Self {
        Self {
            position: DEFAULT_NUDGE_STEP,
            rotation: DEFAULT_ROTATION_STEP,
        }
    }
}

/// Routes pointer and menu events to [`AnnotationStore`] operations.
///
/// Every (mode, event) pair is handled: events that make no sense in the
/// current mode are ignored rather than reported. Annotations are only ever
/// referenced by id, so deleting one mid-session leaves nothing dangling.
#[derive(Resource, Debug, Default)]
pub struct InteractionController {
    mode: Mode,
    selected: Option<AnnotationId>,
    context_menu: Option<ContextMenu>,
    label_prompt: Option<LabelPrompt>,
    tooltip: Option<Tooltip>,
    steps: NudgeSteps,
}

impl InteractionController {
    pub fn with_steps(steps: NudgeSteps) -> Self {
        Self {
            steps,
            ..Default::default()
        }
    }

    pub fn set_steps(&mut self, steps: NudgeSteps) {
        self.steps = steps;
    }

    pub fn steps(&self) -> NudgeSteps {
        self.steps
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn selected_id(&self) -> Option<AnnotationId> {
        self.selected
    }

    pub fn pointer_affordance(&self) -> PointerAffordance {
        match self.mode {
            Mode::Placing(family) => PointerAffordance::Placing(family),
            _ => PointerAffordance::Default,
        }
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    pub fn context_menu(&self) -> Option<&ContextMenu> {
        self.context_menu.as_ref()
    }

    pub fn label_prompt(&self) -> Option<&LabelPrompt> {
        self.label_prompt.as_ref()
    }

    pub fn reposition_panel(&self) -> Option<RepositionPanel> {
        self.mode.reposition_session().map(|session| RepositionPanel {
            target: session.target,
            show_rotation: session.rotatable,
        })
    }

    /// Arm a placement tool. Switching tools before clicking just changes the family.
    pub fn request_placement(&mut self, family: Family) {
        match self.mode {
            Mode::Idle | Mode::Placing(_) => {
                self.mode = Mode::Placing(family);
                debug!("Placing {}", family.display_name());
            }
            Mode::Repositioning(_) => {
                debug!("Ignoring placement request while repositioning");
            }
        }
    }

    /// Materialize the pending annotation at `point`. Ignored unless placing.
    pub fn surface_clicked(
        &mut self,
        store: &mut AnnotationStore,
        point: Vec3,
    ) -> Option<Annotation> {
        let Mode::Placing(family) = self.mode else {
            return None;
        };
        let annotation = store.create(point, family);
        self.mode = Mode::Idle;
        Some(annotation)
    }

    /// Open the context menu for `id` at `anchor`. Does not change the mode.
    pub fn flag_right_clicked(&mut self, store: &AnnotationStore, id: AnnotationId, anchor: Vec2) {
        if !store.contains(id) {
            return;
        }
        self.selected = Some(id);
        self.context_menu = Some(ContextMenu { target: id, anchor });
    }

    /// Apply a context menu entry to the selected annotation. The menu always closes.
    ///
    /// Only acts while the menu is open, so the target is always the
    /// annotation the menu was opened for.
    pub fn context_menu_action(&mut self, store: &mut AnnotationStore, action: MenuAction) {
        let Some(menu) = self.context_menu.take() else {
            return;
        };
        let id = menu.target;
        let Some(annotation) = store.get(id) else {
            self.release_selection();
            return;
        };

        match action {
            MenuAction::Edit => {
                self.label_prompt = Some(LabelPrompt {
                    target: id,
                    current: annotation.label,
                });
            }
            MenuAction::Move => self.begin_reposition(&annotation),
            MenuAction::Delete => {
                store.delete(id);
                if self
                    .mode
                    .reposition_session()
                    .is_some_and(|session| session.target == id)
                {
                    self.mode = Mode::Idle;
                }
                if self.tooltip.as_ref().is_some_and(|tooltip| tooltip.target == id) {
                    self.tooltip = None;
                }
                self.release_selection();
            }
        }
    }

    /// Finish the label prompt opened by [`MenuAction::Edit`]. `None` means the
    /// prompt was dismissed and the label stays as it was.
    pub fn submit_label(&mut self, store: &mut AnnotationStore, text: Option<String>) {
        let Some(prompt) = self.label_prompt.take() else {
            return;
        };
        if let Some(text) = text {
            store.set_label(prompt.target, text);
            if let Some(tooltip) = self.tooltip.as_mut()
                && tooltip.target == prompt.target
                && let Some(annotation) = store.get(prompt.target)
            {
                tooltip.text = annotation.display_label().to_string();
            }
        }
        self.release_selection();
    }

    /// Pointer pressed outside the open context menu.
    pub fn close_context_menu(&mut self) {
        if self.context_menu.take().is_some() && self.label_prompt.is_none() {
            self.release_selection();
        }
    }

    pub fn nudge(&mut self, store: &mut AnnotationStore, direction: Direction) {
        let Some(session) = self.mode.reposition_session() else {
            return;
        };
        let (axis, sign) = direction.axis_and_sign();
        store.nudge_position(session.target, axis, sign * self.steps.position);
    }

    /// Rotate a sensor under reposition. Other targets are left untouched.
    pub fn rotate(&mut self, store: &mut AnnotationStore, axis: Axis, direction: RotateDirection) {
        let Some(session) = self.mode.reposition_session() else {
            return;
        };
        if !session.rotatable {
            return;
        }
        store.nudge_rotation(session.target, axis, direction.sign() * self.steps.rotation);
    }

    /// Keep the live edits and leave reposition mode.
    pub fn confirm_reposition(&mut self) {
        if let Some(session) = self.mode.reposition_session() {
            debug!("Confirmed reposition of annotation {}", session.target);
            self.end_reposition();
        }
    }

    /// Roll back every nudge since the session began and leave reposition mode.
    pub fn cancel_reposition(&mut self, store: &mut AnnotationStore) {
        if let Some(session) = self.mode.reposition_session().copied() {
            store.restore(session.target, session.saved_position, session.saved_rotation);
            debug!("Cancelled reposition of annotation {}", session.target);
            self.end_reposition();
        }
    }

    pub fn pointer_over(&mut self, store: &AnnotationStore, id: AnnotationId, anchor: Vec2) {
        self.tooltip = store.get(id).map(|annotation| Tooltip {
            target: id,
            text: annotation.display_label().to_string(),
            anchor,
        });
    }

    pub fn pointer_out(&mut self) {
        self.tooltip = None;
    }

    /// Pointer event that missed every interactive surface.
    ///
    /// Drops a pending placement and closes the context menu. A reposition
    /// session is committed, so the controller always ends up idle.
    pub fn dismiss_all(&mut self) {
        self.context_menu = None;
        match self.mode {
            Mode::Idle => {}
            Mode::Placing(family) => {
                debug!("Dropped pending {} placement", family.display_name());
                self.mode = Mode::Idle;
            }
            Mode::Repositioning(_) => self.end_reposition(),
        }
        if self.label_prompt.is_none() {
            self.release_selection();
        }
    }

    /// Forget all transient state, e.g. after the collection was replaced.
    pub fn reset(&mut self) {
        *self = Self::with_steps(self.steps);
    }

    fn begin_reposition(&mut self, annotation: &Annotation) {
        if let Some(session) = self.mode.reposition_session() {
            if session.target == annotation.id() {
                return;
            }
            debug!("Committing reposition of annotation {}", session.target);
        }
        self.mode = Mode::Repositioning(RepositionSession {
            target: annotation.id(),
            saved_position: annotation.position,
            saved_rotation: annotation.rotation,
            rotatable: annotation.family().supports_rotation(),
        });
        self.selected = Some(annotation.id());
        debug!("Repositioning annotation {}", annotation.id());
    }

    fn end_reposition(&mut self) {
        self.mode = Mode::Idle;
        self.selected = None;
        self.context_menu = None;
    }

    /// Drop the selection unless a reposition session still targets something.
    fn release_selection(&mut self) {
        self.selected = self.mode.reposition_session().map(|session| session.target);
    }
}
