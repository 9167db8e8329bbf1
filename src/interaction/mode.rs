//! Interaction modes and the view-facing signals derived from them.

use bevy::prelude::*;
use bevy::window::{CursorIcon, SystemCursorIcon};

use crate::annotations::{AnnotationId, Axis, Family};

/// Snapshot taken when a reposition session starts; the rollback target for cancel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RepositionSession {
    pub target: AnnotationId,
    pub saved_position: Vec3,
    pub saved_rotation: Vec3,
    /// Whether the rotation sub-panel applies (sensor targets only)
    pub rotatable: bool,
}

/// The single active interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Mode {
    #[default]
    Idle,
    Placing(Family),
    Repositioning(RepositionSession),
}

impl Mode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Mode::Idle)
    }

    pub fn placing_family(&self) -> Option<Family> {
        match self {
            Mode::Placing(family) => Some(*family),
            _ => None,
        }
    }

    pub fn reposition_session(&self) -> Option<&RepositionSession> {
        match self {
            Mode::Repositioning(session) => Some(session),
            _ => None,
        }
    }
}

/// Pointer icon the view layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerAffordance {
    #[default]
    Default,
    Placing(Family),
}

impl PointerAffordance {
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            PointerAffordance::Default => CursorIcon::System(SystemCursorIcon::Default),
            PointerAffordance::Placing(Family::Marker) => {
                CursorIcon::System(SystemCursorIcon::Crosshair)
            }
            PointerAffordance::Placing(Family::Alert) => CursorIcon::System(SystemCursorIcon::Cell),
            PointerAffordance::Placing(Family::Sensor) => {
                CursorIcon::System(SystemCursorIcon::Copy)
            }
        }
    }
}

/// Entries of the annotation context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Edit,
    Move,
    Delete,
}

impl MenuAction {
    pub fn all() -> &'static [MenuAction] {
        &[MenuAction::Edit, MenuAction::Move, MenuAction::Delete]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MenuAction::Edit => "Edit",
            MenuAction::Move => "Move",
            MenuAction::Delete => "Delete",
        }
    }
}

/// Directional nudge buttons of the reposition panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backward,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        &[
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::Forward,
            Direction::Backward,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
            Direction::Forward => "Forward",
            Direction::Backward => "Backward",
        }
    }

    /// Axis and sign of the nudge. Forward points into the scene (-Z).
    pub fn axis_and_sign(&self) -> (Axis, f32) {
        match self {
            Direction::Up => (Axis::Y, 1.0),
            Direction::Down => (Axis::Y, -1.0),
            Direction::Right => (Axis::X, 1.0),
            Direction::Left => (Axis::X, -1.0),
            Direction::Backward => (Axis::Z, 1.0),
            Direction::Forward => (Axis::Z, -1.0),
        }
    }
}

/// Sign of a rotation nudge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotateDirection {
    Up,
    Down,
}

impl RotateDirection {
    pub fn sign(&self) -> f32 {
        match self {
            RotateDirection::Up => 1.0,
            RotateDirection::Down => -1.0,
        }
    }
}

/// Hover tooltip for an annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub target: AnnotationId,
    pub text: String,
    pub anchor: Vec2,
}

/// Open context menu, bound to the selected annotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenu {
    pub target: AnnotationId,
    pub anchor: Vec2,
}

/// Pending request for new label text.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPrompt {
    pub target: AnnotationId,
    pub current: String,
}

/// State of the directional-control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositionPanel {
    pub target: AnnotationId,
    pub show_rotation: bool,
}
