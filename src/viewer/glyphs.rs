//! Render-side mirror of the annotation store.
//!
//! Glyph entities are derived state: they are reconciled against
//! [`AnnotationStore`] whenever it changes and never written back.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::annotations::{Annotation, AnnotationId, AnnotationStore, Family};
use crate::constants::{GLYPH_RADIUS, SENSOR_GLYPH_SIZE};

#[derive(Component)]
pub struct AnnotationGlyph {
    pub id: AnnotationId,
}

/// Shared meshes and materials for every glyph.
#[derive(Resource)]
pub struct GlyphAssets {
    sphere: Handle<Mesh>,
    sensor: Handle<Mesh>,
    marker_material: Handle<StandardMaterial>,
    alert_material: Handle<StandardMaterial>,
    sensor_material: Handle<StandardMaterial>,
}

impl GlyphAssets {
    fn mesh(&self, family: Family) -> Handle<Mesh> {
        match family {
            Family::Marker | Family::Alert => self.sphere.clone(),
            Family::Sensor => self.sensor.clone(),
        }
    }

    fn material(&self, family: Family) -> Handle<StandardMaterial> {
        match family {
            Family::Marker => self.marker_material.clone(),
            Family::Alert => self.alert_material.clone(),
            Family::Sensor => self.sensor_material.clone(),
        }
    }
}

/// Maps annotation ids to their glyph entity.
#[derive(Resource, Default)]
pub(crate) struct GlyphIndex {
    entities: HashMap<AnnotationId, Entity>,
}

pub(crate) fn glyph_color(family: Family) -> Color {
    match family {
        Family::Marker => Color::srgb(1.0, 1.0, 0.0),
        Family::Alert => Color::srgb(1.0, 0.0, 0.0),
        Family::Sensor => Color::srgb(0.2, 0.5, 1.0),
    }
}

pub(crate) fn glyph_transform(annotation: &Annotation) -> Transform {
    Transform::from_translation(annotation.position).with_rotation(annotation.orientation())
}

pub fn setup_glyph_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(GlyphAssets {
        sphere: meshes.add(Sphere::new(GLYPH_RADIUS).mesh().uv(8, 8)),
        sensor: meshes.add(Cuboid::from_size(SENSOR_GLYPH_SIZE)),
        marker_material: materials.add(glyph_color(Family::Marker)),
        alert_material: materials.add(glyph_color(Family::Alert)),
        sensor_material: materials.add(glyph_color(Family::Sensor)),
    });
}

pub fn sync_glyphs(
    mut commands: Commands,
    store: Res<AnnotationStore>,
    assets: Res<GlyphAssets>,
    mut index: ResMut<GlyphIndex>,
    mut transforms: Query<&mut Transform, With<AnnotationGlyph>>,
) {
    // Despawn glyphs whose annotation is gone
    index.entities.retain(|id, entity| {
        let keep = store.contains(*id);
        if !keep {
            commands.entity(*entity).despawn();
        }
        keep
    });

    for annotation in store.list() {
        let transform = glyph_transform(annotation);
        if let Some(entity) = index.entities.get(&annotation.id()) {
            if let Ok(mut current) = transforms.get_mut(*entity)
                && *current != transform
            {
                *current = transform;
            }
            continue;
        }

        let family = annotation.family();
        let entity = commands
            .spawn((
                Mesh3d(assets.mesh(family)),
                MeshMaterial3d(assets.material(family)),
                transform,
                AnnotationGlyph {
                    id: annotation.id(),
                },
            ))
            .id();
        index.entities.insert(annotation.id(), entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_transform_uses_position() {
        let annotation = Annotation::new(1, Vec3::new(0.5, -1.0, 2.0), Family::Marker);
        let transform = glyph_transform(&annotation);
        assert_eq!(transform.translation, Vec3::new(0.5, -1.0, 2.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
        assert_eq!(transform.scale, Vec3::ONE);
    }

    #[test]
    fn test_glyph_transform_applies_rotation() {
        let mut annotation = Annotation::new(1, Vec3::ZERO, Family::Sensor);
        annotation.rotation = Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0);
        let transform = glyph_transform(&annotation);

        let rotated = transform.rotation * Vec3::X;
        assert!((rotated - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_families_have_distinct_colors() {
        let marker = glyph_color(Family::Marker);
        let alert = glyph_color(Family::Alert);
        let sensor = glyph_color(Family::Sensor);
        assert_ne!(marker, alert);
        assert_ne!(alert, sensor);
        assert_ne!(marker, sensor);
    }
}
