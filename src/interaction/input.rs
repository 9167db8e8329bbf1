//! Pointer routing from the primary window into the interaction controller.

use bevy::ecs::system::SystemParam;
use bevy::picking::mesh_picking::ray_cast::{MeshRayCast, MeshRayCastSettings};
use bevy::prelude::*;
use bevy::window::{CursorIcon, PrimaryWindow, SystemCursorIcon};
use bevy_egui::EguiContexts;

use super::controller::InteractionController;
use crate::annotations::{Annotation, AnnotationId, AnnotationStore};
use crate::constants::GLYPH_PICK_RADIUS;
use crate::ui::DialogState;
use crate::viewer::{AnnotationGlyph, ViewerCamera};

/// Glyph currently under the pointer, used to turn hover state into over/out events.
#[derive(Resource, Default)]
pub struct HoveredGlyph {
    pub id: Option<AnnotationId>,
}

/// What the pointer ray hit first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum PointerHit {
    Glyph(AnnotationId),
    Surface(Vec3),
    Nothing,
}

/// Distance along `ray` to where it enters the nearest glyph sphere.
///
/// Glyph centers sit on the model surface, so the entry point rather than
/// the center has to be compared against the surface hit.
pub(crate) fn nearest_glyph(
    ray: Ray3d,
    glyphs: impl IntoIterator<Item = (AnnotationId, Vec3)>,
    radius: f32,
) -> Option<(AnnotationId, f32)> {
    let mut closest: Option<(AnnotationId, f32)> = None;

    for (id, center) in glyphs {
        let to_center = center - ray.origin;
        let t = to_center.dot(*ray.direction);

        let closest_point = ray.origin + *ray.direction * t;
        let miss_squared = (closest_point - center).length_squared();
        if miss_squared > radius * radius {
            continue;
        }

        let half_chord = (radius * radius - miss_squared).sqrt();
        if t + half_chord < 0.0 {
            continue;
        }
        // Origin inside the sphere counts as an immediate hit
        let entry = (t - half_chord).max(0.0);

        if closest.is_none_or(|(_, best)| entry < best) {
            closest = Some((id, entry));
        }
    }

    closest
}

/// Pick whichever of the glyph and surface hits is nearer to the camera.
pub(crate) fn resolve_hit(
    glyph: Option<(AnnotationId, f32)>,
    surface: Option<(Vec3, f32)>,
) -> PointerHit {
    match (glyph, surface) {
        (Some((id, glyph_t)), Some((_, surface_t))) if glyph_t <= surface_t => {
            PointerHit::Glyph(id)
        }
        (_, Some((point, _))) => PointerHit::Surface(point),
        (Some((id, _)), None) => PointerHit::Glyph(id),
        (None, None) => PointerHit::Nothing,
    }
}

/// Pointer state sampled for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PointerFrame {
    /// Cursor position and what it hits, `None` when off-window or over UI
    pub cursor: Option<(Vec2, PointerHit)>,
    pub left_pressed: bool,
    pub right_pressed: bool,
}

/// Turn one frame of pointer state into controller events.
///
/// Nothing is routed while a modal dialog is open. Returns the annotation
/// created by a placement click, if any.
pub(crate) fn route_pointer(
    controller: &mut InteractionController,
    store: &mut AnnotationStore,
    hovered: &mut Option<AnnotationId>,
    frame: PointerFrame,
    modal_open: bool,
) -> Option<Annotation> {
    if modal_open {
        return None;
    }

    let Some((cursor, hit)) = frame.cursor else {
        if hovered.take().is_some() {
            controller.pointer_out();
        }
        return None;
    };

    let hovered_now = match hit {
        PointerHit::Glyph(id) => Some(id),
        _ => None,
    };
    if hovered_now != *hovered {
        match hovered_now {
            Some(id) => controller.pointer_over(store, id, cursor),
            None => controller.pointer_out(),
        }
        *hovered = hovered_now;
    }

    let mut created = None;
    if frame.left_pressed {
        controller.close_context_menu();
        match hit {
            PointerHit::Surface(point) => created = controller.surface_clicked(store, point),
            PointerHit::Nothing => controller.dismiss_all(),
            PointerHit::Glyph(_) => {}
        }
    }

    if frame.right_pressed {
        match hit {
            PointerHit::Glyph(id) => controller.flag_right_clicked(store, id, cursor),
            _ => controller.close_context_menu(),
        }
    }

    created
}

#[derive(SystemParam)]
pub(crate) struct PointerScene<'w, 's> {
    window_query: Query<'w, 's, &'static Window, With<PrimaryWindow>>,
    camera_query: Query<'w, 's, (&'static Camera, &'static GlobalTransform), With<ViewerCamera>>,
    glyphs: Query<'w, 's, (&'static AnnotationGlyph, &'static GlobalTransform)>,
    ray_cast: MeshRayCast<'w, 's>,
}

impl PointerScene<'_, '_> {
    fn cursor_position(&self) -> Option<Vec2> {
        self.window_query.single().ok()?.cursor_position()
    }

    fn pick(&mut self, cursor: Vec2) -> PointerHit {
        let Ok((camera, camera_transform)) = self.camera_query.single() else {
            return PointerHit::Nothing;
        };
        let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
            return PointerHit::Nothing;
        };

        let glyph = nearest_glyph(
            ray,
            self.glyphs
                .iter()
                .map(|(glyph, transform)| (glyph.id, transform.translation())),
            GLYPH_PICK_RADIUS,
        );

        // Glyphs are resolved analytically above, so only the model is ray cast
        let glyphs = &self.glyphs;
        let filter = |entity: Entity| !glyphs.contains(entity);
        let settings = MeshRayCastSettings::default().with_filter(&filter);
        let surface = self
            .ray_cast
            .cast_ray(ray, &settings)
            .first()
            .map(|(_, hit)| (hit.point, hit.distance));

        resolve_hit(glyph, surface)
    }
}

/// Feed hover, left-click and right-click events into the controller.
pub fn handle_pointer_input(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut scene: PointerScene,
    mut contexts: EguiContexts,
    dialog_state: Res<DialogState>,
    mut hovered: ResMut<HoveredGlyph>,
    mut controller: ResMut<InteractionController>,
    mut store: ResMut<AnnotationStore>,
) {
    let modal_open = dialog_state.any_modal_open;
    let over_ui = contexts
        .ctx_mut()
        .is_ok_and(|ctx| ctx.is_pointer_over_area());
    // Skip the ray casts entirely while a dialog owns the pointer
    let cursor = if over_ui || modal_open {
        None
    } else {
        scene.cursor_position()
    };

    let frame = PointerFrame {
        cursor: cursor.map(|cursor| (cursor, scene.pick(cursor))),
        left_pressed: mouse_button.just_pressed(MouseButton::Left),
        right_pressed: mouse_button.just_pressed(MouseButton::Right),
    };

    let created = route_pointer(
        &mut controller,
        &mut store,
        &mut hovered.id,
        frame,
        modal_open,
    );
    if let Some(annotation) = created {
        info!(
            "Placed {} {} at {:?}",
            annotation.family().display_name(),
            annotation.id(),
            annotation.position
        );
    }
    if frame.right_pressed
        && controller.context_menu().is_some()
        && let Some(id) = controller.selected_id()
    {
        debug!("Context menu opened for annotation {}", id);
    }
}

/// Show the controller's pointer affordance, or the default cursor over UI.
pub fn apply_pointer_affordance(
    controller: Res<InteractionController>,
    window_query: Query<Entity, With<PrimaryWindow>>,
    mut commands: Commands,
    mut contexts: EguiContexts,
) {
    let Ok(entity) = window_query.single() else {
        return;
    };

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.is_pointer_over_area()
    {
        commands
            .entity(entity)
            .insert(CursorIcon::System(SystemCursorIcon::Default));
        return;
    }

    commands
        .entity(entity)
        .insert(controller.pointer_affordance().cursor_icon());
}
