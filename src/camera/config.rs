//! Camera rig configuration loaded from `config/camera.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

const CONFIG_PATH: &str = "config/camera.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawCameraConfig {
    #[serde(default)]
    rig: RawRigSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawRigSection {
    distance: f32,
    height: f32,
    rotate_speed: f32,
}

impl Default for RawRigSection {
    fn default() -> Self {
        Self {
            distance: 10.0,
            height: 5.0,
            rotate_speed: 5.0,
        }
    }
}

/// Defaults applied to follow cameras spawned by the world.
#[derive(Resource, Debug, Clone)]
pub struct CameraRigSettings {
    pub distance: f32,
    pub height: f32,
    pub rotate_speed: f32,
}

impl CameraRigSettings {
    pub fn load_or_default() -> Self {
        match fs::read_to_string(Path::new(CONFIG_PATH)) {
            Ok(data) => Self::from_toml_str(&data).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                Self::default()
            }
        }
    }

    fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawCameraConfig>(data).map(Into::into)
    }
}

impl Default for CameraRigSettings {
    fn default() -> Self {
        RawCameraConfig::default().into()
    }
}

impl From<RawCameraConfig> for CameraRigSettings {
    fn from(value: RawCameraConfig) -> Self {
        let rig = value.rig;
        Self {
            distance: rig.distance.max(0.0),
            height: rig.height,
            rotate_speed: rig.rotate_speed.max(0.0),
        }
    }
}
