//! Centralized constants used across the application.
//!
//! This module contains magic numbers and configuration values that are used
//! in multiple places or would benefit from being named constants.

use bevy::math::Vec3;

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1600.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 900.0;

/// Label given to every new annotation and shown for blank labels
pub const DEFAULT_ANNOTATION_LABEL: &str = "NO DATA";

/// Default world units moved by one directional nudge
pub const DEFAULT_NUDGE_STEP: f32 = 0.01;

/// Default radians turned by one rotation nudge
pub const DEFAULT_ROTATION_STEP: f32 = 0.1;

/// Model loaded when the config does not name one (relative to the asset folder)
pub const DEFAULT_MODEL_PATH: &str = "models/modular_pipes.glb";

/// Uniform scale applied to the pipe model
pub const MODEL_SCALE: f32 = 0.5;

pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 2.0, 5.0);

pub const CAMERA_FOV_DEGREES: f32 = 50.0;

/// Radius of marker and alert spheres
pub const GLYPH_RADIUS: f32 = 0.04;

/// Edge lengths of the sensor box, longest along local X so rotation is visible
pub const SENSOR_GLYPH_SIZE: Vec3 = Vec3::new(0.08, 0.04, 0.04);

/// Pointer pick radius around glyph centers, slightly larger than the glyph itself
pub const GLYPH_PICK_RADIUS: f32 = 0.05;

/// Tooltip size in logical pixels
pub const TOOLTIP_WIDTH: f32 = 200.0;

/// Vertical offset of the tooltip above the pointer
pub const TOOLTIP_OFFSET_Y: f32 = 50.0;
