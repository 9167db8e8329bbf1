//! Core annotation types.

use bevy::prelude::*;

use crate::constants::DEFAULT_ANNOTATION_LABEL;

/// Identifier of an annotation, derived from its creation time in milliseconds.
pub type AnnotationId = u64;

/// Semantic category of an annotation. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Marker,
    Alert,
    Sensor,
}

impl Family {
    pub fn all() -> &'static [Family] {
        &[Family::Marker, Family::Alert, Family::Sensor]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Family::Marker => "Marker",
            Family::Alert => "Alert",
            Family::Sensor => "Sensor",
        }
    }

    /// Help text shown when hovering the toolbar button for this family.
    pub fn description(&self) -> &'static str {
        match self {
            Family::Marker => {
                "Add a marker anywhere on the model. \
                 Right-click it to edit its text, move or delete it."
            }
            Family::Alert => "Flag a critical point on the model to draw attention to it.",
            Family::Sensor => {
                "Place a sensor glyph. Sensors can also be rotated while moving them."
            }
        }
    }

    /// Integer tag used by the export format.
    pub fn tag(&self) -> u8 {
        match self {
            Family::Marker => 1,
            Family::Alert => 2,
            Family::Sensor => 3,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Family> {
        match tag {
            1 => Some(Family::Marker),
            2 => Some(Family::Alert),
            3 => Some(Family::Sensor),
            _ => None,
        }
    }

    /// Only sensors carry a meaningful orientation.
    pub fn supports_rotation(&self) -> bool {
        matches!(self, Family::Sensor)
    }
}

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub fn all() -> &'static [Axis] {
        &[Axis::X, Axis::Y, Axis::Z]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    pub fn unit(&self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}

/// A positioned glyph attached to the 3D scene.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    id: AnnotationId,
    family: Family,
    pub position: Vec3,
    /// Euler angles in radians, XYZ order.
    pub rotation: Vec3,
    pub label: String,
}

impl Annotation {
    pub fn new(id: AnnotationId, position: Vec3, family: Family) -> Self {
        Self {
            id,
            family,
            position,
            rotation: Vec3::ZERO,
            label: DEFAULT_ANNOTATION_LABEL.to_string(),
        }
    }

    pub fn id(&self) -> AnnotationId {
        self.id
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Label to show to the user, falling back to the sentinel for empty text.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            DEFAULT_ANNOTATION_LABEL
        } else {
            &self.label
        }
    }

    /// Orientation as a quaternion for the render layer.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_tags_roundtrip() {
        for family in Family::all() {
            assert_eq!(Family::from_tag(family.tag()), Some(*family));
        }
    }

    #[test]
    fn test_family_tags_match_export_format() {
        assert_eq!(Family::Marker.tag(), 1);
        assert_eq!(Family::Alert.tag(), 2);
        assert_eq!(Family::Sensor.tag(), 3);
    }

    #[test]
    fn test_unknown_family_tag() {
        assert_eq!(Family::from_tag(0), None);
        assert_eq!(Family::from_tag(4), None);
    }

    #[test]
    fn test_only_sensor_supports_rotation() {
        assert!(!Family::Marker.supports_rotation());
        assert!(!Family::Alert.supports_rotation());
        assert!(Family::Sensor.supports_rotation());
    }

    #[test]
    fn test_new_annotation_defaults() {
        let annotation = Annotation::new(7, Vec3::new(1.0, 2.0, 3.0), Family::Alert);
        assert_eq!(annotation.id(), 7);
        assert_eq!(annotation.family(), Family::Alert);
        assert_eq!(annotation.rotation, Vec3::ZERO);
        assert_eq!(annotation.label, "NO DATA");
    }

    #[test]
    fn test_display_label_falls_back_for_blank_text() {
        let mut annotation = Annotation::new(1, Vec3::ZERO, Family::Marker);
        annotation.label = "   ".to_string();
        assert_eq!(annotation.display_label(), "NO DATA");

        annotation.label = "Valve 3".to_string();
        assert_eq!(annotation.display_label(), "Valve 3");
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let annotation = Annotation::new(1, Vec3::ZERO, Family::Sensor);
        assert_eq!(annotation.orientation(), Quat::IDENTITY);
    }
}
