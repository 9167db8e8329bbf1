use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_MODEL_PATH, DEFAULT_NUDGE_STEP, DEFAULT_ROTATION_STEP};
use crate::interaction::NudgeSteps;

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_nudge_step() -> f32 {
    DEFAULT_NUDGE_STEP
}

fn default_rotation_step() -> f32 {
    DEFAULT_ROTATION_STEP
}

/// Application configuration persisted to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfigData {
    /// glTF model shown in the viewer, relative to the asset folder
    #[serde(default = "default_model_path")]
    pub model_path: String,

    /// World units moved by one directional nudge
    #[serde(default = "default_nudge_step")]
    pub nudge_step: f32,

    /// Radians turned by one rotation nudge
    #[serde(default = "default_rotation_step")]
    pub rotation_step: f32,

    /// Last file annotations were exported to (the export dialog starts there)
    #[serde(default)]
    pub last_export_path: Option<PathBuf>,
}

impl Default for AppConfigData {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            nudge_step: default_nudge_step(),
            rotation_step: default_rotation_step(),
            last_export_path: None,
        }
    }
}

impl AppConfigData {
    /// Nudge magnitudes, falling back to defaults for non-positive or non-finite values.
    pub fn nudge_steps(&self) -> NudgeSteps {
        let sanitize = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                fallback
            }
        };
        NudgeSteps {
            position: sanitize(self.nudge_step, DEFAULT_NUDGE_STEP),
            rotation: sanitize(self.rotation_step, DEFAULT_ROTATION_STEP),
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct AppConfig {
    /// The persisted configuration data
    pub data: AppConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: AppConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify user when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    /// Whether to show the notification dialog
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to update the last export path in config
#[derive(Message)]
pub struct UpdateLastExportPathRequest {
    pub path: PathBuf,
}

/// Parse config JSON, returning the reason when it has to fall back to defaults
fn parse_config(json: &str) -> Result<AppConfigData, String> {
    serde_json::from_str(json).map_err(|e| format!("Configuration file was corrupted: {}", e))
}

/// Load configuration from disk
fn load_config(config_path: &std::path::Path) -> (AppConfigData, Option<String>) {
    if !config_path.exists() {
        info!("No config file found, using defaults");
        return (AppConfigData::default(), None);
    }

    match std::fs::read_to_string(config_path) {
        Ok(json) => match parse_config(&json) {
            Ok(data) => {
                info!("Loaded config from {:?}", config_path);
                (data, None)
            }
            Err(reason) => {
                warn!("{}", reason);
                (AppConfigData::default(), Some(reason))
            }
        },
        Err(e) => {
            warn!("Failed to read config file: {}", e);
            (
                AppConfigData::default(),
                Some(format!("Could not read configuration file: {}", e)),
            )
        }
    }
}

/// Save configuration to disk
fn save_config(config: &AppConfig) {
    if let Err(e) = crate::paths::ensure_directories() {
        warn!("Failed to create config directory: {}", e);
    }

    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<AppConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let (data, reset_reason) = load_config(&config.config_path);
    config.data = data;
    config.dirty = false;

    // Set notification if config was reset due to an error
    if let Some(reason) = reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<AppConfig>,
) {
    for _ in events.read() {
        if config.dirty {
            save_config(&config);
            config.dirty = false;
        }
    }
}

/// System to update last export path
fn update_last_export_path_system(
    mut events: MessageReader<UpdateLastExportPathRequest>,
    mut config: ResMut<AppConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.last_export_path.as_ref() == Some(&event.path) {
            continue;
        }
        config.data.last_export_path = Some(event.path.clone());
        config.dirty = true;
        save_events.write(SaveConfigRequest);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AppConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<UpdateLastExportPathRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    update_last_export_path_system
                        .run_if(on_message::<UpdateLastExportPathRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
