//! The 3D scene: camera, lights, the pipe model and annotation glyphs.

mod glyphs;

pub use glyphs::AnnotationGlyph;

use bevy::prelude::*;

use crate::config::{AppConfig, ConfigLoaded};
use crate::constants::{CAMERA_FOV_DEGREES, CAMERA_POSITION, MODEL_SCALE};

#[derive(Component)]
pub struct ViewerCamera;

/// Root entity of the loaded pipe model scene.
#[derive(Component)]
pub struct PipeModel;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        ViewerCamera,
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn spawn_light(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 10_000.0,
            ..default()
        },
        Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Load the configured glTF model; runs after config so the path is known.
pub fn spawn_model(mut commands: Commands, config: Res<AppConfig>, asset_server: Res<AssetServer>) {
    let path = config.data.model_path.clone();
    info!("Loading pipe model from {}", path);
    let scene: Handle<Scene> = asset_server.load(GltfAssetLabel::Scene(0).from_asset(path));
    commands.spawn((
        SceneRoot(scene),
        PipeModel,
        Transform::from_scale(Vec3::splat(MODEL_SCALE)),
    ));
}

pub struct ViewerPlugin;

impl Plugin for ViewerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<glyphs::GlyphIndex>()
            .add_systems(
                Startup,
                (
                    spawn_camera,
                    spawn_light,
                    glyphs::setup_glyph_assets,
                    spawn_model.after(ConfigLoaded),
                ),
            )
            .add_systems(
                Update,
                glyphs::sync_glyphs.run_if(resource_changed::<crate::annotations::AnnotationStore>),
            );
    }
}
