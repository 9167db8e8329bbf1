//! On-disk representation of the annotation collection.
//!
//! The export is a JSON array; each entry lists `id`, `position`, `label`,
//! `family` (1 = marker, 2 = alert, 3 = sensor) and `rotation`, in that order.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::model::{Annotation, AnnotationId, Family};
use crate::persistence::PersistError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedAnnotation {
    pub id: AnnotationId,
    pub position: [f32; 3],
    pub label: String,
    pub family: u8,
    #[serde(default)]
    pub rotation: [f32; 3],
}

impl From<&Annotation> for SavedAnnotation {
    fn from(annotation: &Annotation) -> Self {
        Self {
            id: annotation.id(),
            position: annotation.position.to_array(),
            label: annotation.label.clone(),
            family: annotation.family().tag(),
            rotation: annotation.rotation.to_array(),
        }
    }
}

impl TryFrom<SavedAnnotation> for Annotation {
    type Error = PersistError;

    fn try_from(saved: SavedAnnotation) -> Result<Self, Self::Error> {
        let family =
            Family::from_tag(saved.family).ok_or(PersistError::UnknownFamily(saved.family))?;
        let mut annotation = Annotation::new(saved.id, Vec3::from_array(saved.position), family);
        annotation.rotation = Vec3::from_array(saved.rotation);
        annotation.label = saved.label;
        Ok(annotation)
    }
}

pub fn parse_payload(payload: &str) -> Result<Vec<Annotation>, PersistError> {
    let saved: Vec<SavedAnnotation> = serde_json::from_str(payload)?;
    saved.into_iter().map(Annotation::try_from).collect()
}
