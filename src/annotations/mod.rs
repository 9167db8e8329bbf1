//! Spatial annotations anchored to the pipe model.
//!
//! ## Module Structure
//!
//! - [`model`] - Annotation, Family and Axis types
//! - [`store`] - AnnotationStore resource owning the collection
//! - [`format`] - Serialized export representation

mod format;
mod model;
mod store;


pub use model::{Annotation, AnnotationId, Axis, Family};
pub use store::AnnotationStore;

use bevy::prelude::*;

pub struct AnnotationPlugin;

impl Plugin for AnnotationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnnotationStore>();
    }
}
