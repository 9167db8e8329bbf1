//! The owned annotation collection.

use bevy::prelude::*;

use super::format::{self, SavedAnnotation};
use super::model::{Annotation, AnnotationId, Axis, Family};
use crate::persistence::PersistError;

/// Resource owning every annotation in the scene, in insertion order.
///
/// Callers never receive a mutable reference into the collection: all edits go
/// through the methods below, and targets are addressed by id so a stale id
/// simply turns an operation into a no-op.
#[derive(Resource, Debug, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    /// Highest id handed out so far, used to keep ids strictly increasing
    last_id: AnnotationId,
}

impl AnnotationStore {
    /// Create an annotation at `point`, stamped with the current time.
    pub fn create(&mut self, point: Vec3, family: Family) -> Annotation {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.create_at(point, family, now)
    }

    /// Create an annotation using `now_millis` as the id source.
    ///
    /// Two creations in the same millisecond (or a clock that stepped back)
    /// still get distinct ids.
    pub fn create_at(&mut self, point: Vec3, family: Family, now_millis: u64) -> Annotation {
        let id = now_millis.max(self.last_id.saturating_add(1));
        self.last_id = id;

        let annotation = Annotation::new(id, point, family);
        self.annotations.push(annotation.clone());
        debug!(
            "Created {} annotation {} at {:?}",
            family.display_name(),
            id,
            point
        );
        annotation
    }

    pub fn delete(&mut self, id: AnnotationId) {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id() != id);
        if self.annotations.len() != before {
            debug!("Deleted annotation {}", id);
        }
    }

    pub fn set_label(&mut self, id: AnnotationId, text: impl Into<String>) {
        if let Some(annotation) = self.find_mut(id) {
            annotation.label = text.into();
        }
    }

    pub fn nudge_position(&mut self, id: AnnotationId, axis: Axis, delta: f32) {
        if let Some(annotation) = self.find_mut(id) {
            annotation.position += axis.unit() * delta;
        }
    }

    pub fn nudge_rotation(&mut self, id: AnnotationId, axis: Axis, delta: f32) {
        if let Some(annotation) = self.find_mut(id) {
            annotation.rotation += axis.unit() * delta;
        }
    }

    /// Overwrite position and rotation, used to roll back a reposition.
    pub fn restore(&mut self, id: AnnotationId, position: Vec3, rotation: Vec3) {
        if let Some(annotation) = self.find_mut(id) {
            annotation.position = position;
            annotation.rotation = rotation;
        }
    }

    pub fn list(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Copy of the annotation with `id`, if it still exists.
    pub fn get(&self, id: AnnotationId) -> Option<Annotation> {
        self.annotations.iter().find(|a| a.id() == id).cloned()
    }

    pub fn contains(&self, id: AnnotationId) -> bool {
        self.annotations.iter().any(|a| a.id() == id)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Pretty JSON array of every annotation, in insertion order.
    pub fn serialize(&self) -> Result<String, PersistError> {
        let saved: Vec<SavedAnnotation> =
            self.annotations.iter().map(SavedAnnotation::from).collect();
        Ok(serde_json::to_string_pretty(&saved)?)
    }

    /// Parse a payload produced by [`AnnotationStore::serialize`].
    pub fn parse(payload: &str) -> Result<Vec<Annotation>, PersistError> {
        format::parse_payload(payload)
    }

    /// Replace the whole collection, e.g. after an import.
    ///
    /// Ids that would collide are dropped (first occurrence wins) and the id
    /// counter moves past every imported id.
    pub fn replace_all(&mut self, annotations: Vec<Annotation>) {
        let mut kept: Vec<Annotation> = Vec::with_capacity(annotations.len());
        for annotation in annotations {
            if kept.iter().any(|a| a.id() == annotation.id()) {
                warn!("Skipping annotation with duplicate id {}", annotation.id());
                continue;
            }
            kept.push(annotation);
        }

        if let Some(max_id) = kept.iter().map(Annotation::id).max() {
            self.last_id = self.last_id.max(max_id);
        }
        self.annotations = kept;
    }

    fn find_mut(&mut self, id: AnnotationId) -> Option<&mut Annotation> {
        self.annotations.iter_mut().find(|a| a.id() == id)
    }
}
