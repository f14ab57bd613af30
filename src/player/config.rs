//! Movement and input tuning loaded from `config/controls.toml`.
use std::{fs, path::Path};

use bevy::prelude::*;
use serde::Deserialize;

use crate::player::components::{MoveMode, MoveSpace, PlayerController};

const CONFIG_PATH: &str = "config/controls.toml";

#[derive(Debug, Clone, Deserialize, Default)]
struct RawControlsConfig {
    #[serde(default)]
    movement: RawMovement,
    #[serde(default)]
    controller: RawController,
    #[serde(default)]
    input: RawInput,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawMovement {
    transform_speed: f32,
    body_speed: f32,
    rotation_speed: f32,
}

impl Default for RawMovement {
    fn default() -> Self {
        Self {
            transform_speed: 3.0,
            body_speed: 3.0,
            rotation_speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawController {
    move_mode: MoveMode,
    space: MoveSpace,
    allow_mouse_rotation: bool,
    allow_key_rotation: bool,
}

impl Default for RawController {
    fn default() -> Self {
        Self {
            move_mode: MoveMode::DirectTransform,
            space: MoveSpace::World,
            allow_mouse_rotation: true,
            allow_key_rotation: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct RawInput {
    sensitivity: f32,
    gravity: f32,
    snap: bool,
    mouse_sensitivity: f32,
}

impl Default for RawInput {
    fn default() -> Self {
        Self {
            sensitivity: 3.0,
            gravity: 3.0,
            snap: true,
            mouse_sensitivity: 0.1,
        }
    }
}

/// Speeds used by the movement strategies.
#[derive(Resource, Debug, Clone)]
pub struct MovementSettings {
    /// Units per second in `DirectTransform` mode.
    pub transform_speed: f32,
    /// Units per second in `PhysicsBody` mode.
    pub body_speed: f32,
    /// Degrees per frame for a full axis or one unit of mouse input.
    pub rotation_speed: f32,
}

impl MovementSettings {
    pub fn speed_for(&self, mode: MoveMode) -> f32 {
        match mode {
            MoveMode::DirectTransform => self.transform_speed,
            MoveMode::PhysicsBody => self.body_speed,
        }
    }
}

impl Default for MovementSettings {
    fn default() -> Self {
        RawMovement::default().into()
    }
}

impl From<RawMovement> for MovementSettings {
    fn from(value: RawMovement) -> Self {
        Self {
            transform_speed: value.transform_speed.max(0.0),
            body_speed: value.body_speed.max(0.0),
            rotation_speed: value.rotation_speed,
        }
    }
}

/// Virtual axis tuning for keyboard movement.
#[derive(Resource, Debug, Clone)]
pub struct InputSettings {
    /// Rate (per second) an axis moves toward a held direction.
    pub sensitivity: f32,
    /// Rate (per second) an axis falls back to zero when released.
    pub gravity: f32,
    /// Reset to zero immediately when the held direction reverses.
    pub snap: bool,
    /// Scale applied to raw horizontal mouse motion.
    pub mouse_sensitivity: f32,
}

impl Default for InputSettings {
    fn default() -> Self {
        RawInput::default().into()
    }
}

impl From<RawInput> for InputSettings {
    fn from(value: RawInput) -> Self {
        Self {
            sensitivity: value.sensitivity.max(0.0),
            gravity: value.gravity.max(0.0),
            snap: value.snap,
            mouse_sensitivity: value.mouse_sensitivity,
        }
    }
}

/// Everything `config/controls.toml` configures.
#[derive(Debug, Clone)]
pub struct ControlsConfig {
    pub movement: MovementSettings,
    pub input: InputSettings,
    pub controller: PlayerController,
}

impl ControlsConfig {
    pub fn load_or_default() -> Self {
        match fs::read_to_string(Path::new(CONFIG_PATH)) {
            Ok(data) => Self::from_toml_str(&data).unwrap_or_else(|err| {
                warn!(
                    "Failed to parse {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawControlsConfig::default().into()
            }),
            Err(err) => {
                warn!(
                    "Failed to read {} ({}). Falling back to defaults.",
                    CONFIG_PATH, err
                );
                RawControlsConfig::default().into()
            }
        }
    }

    fn from_toml_str(data: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawControlsConfig>(data).map(Into::into)
    }
}

impl From<RawControlsConfig> for ControlsConfig {
    fn from(value: RawControlsConfig) -> Self {
        let controller = value.controller;
        Self {
            movement: value.movement.into(),
            input: value.input.into(),
            controller: PlayerController::new(
                controller.move_mode,
                controller.space,
                controller.allow_mouse_rotation,
                controller.allow_key_rotation,
            ),
        }
    }
}

/// Initial flags for newly spawned player controllers.
#[derive(Resource, Debug, Clone, Default)]
pub struct ControllerDefaults(pub PlayerController);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ControlsConfig::from_toml_str("").unwrap();
        assert_eq!(config.movement.transform_speed, 3.0);
        assert_eq!(config.movement.rotation_speed, 5.0);
        assert_eq!(config.input.mouse_sensitivity, 0.1);
        assert!(config.input.snap);
        assert_eq!(config.controller, PlayerController::default());
    }

    #[test]
    fn parses_controller_flags() {
        let config = ControlsConfig::from_toml_str(
            r#"
[controller]
move_mode = "physics_body"
space = "local"
allow_key_rotation = true
"#,
        )
        .unwrap();

        assert_eq!(config.controller.move_mode(), MoveMode::PhysicsBody);
        assert_eq!(config.controller.space(), MoveSpace::Local);
        assert!(config.controller.allow_key_rotation());
        assert!(config.controller.allow_mouse_rotation());
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(ControlsConfig::from_toml_str("[controller]\nmove_mode = \"teleport\"\n").is_err());
    }

    #[test]
    fn speeds_are_clamped_and_selected_by_mode() {
        let config = ControlsConfig::from_toml_str(
            "[movement]\ntransform_speed = -1.0\nbody_speed = 6.0\n",
        )
        .unwrap();

        assert_eq!(config.movement.speed_for(MoveMode::DirectTransform), 0.0);
        assert_eq!(config.movement.speed_for(MoveMode::PhysicsBody), 6.0);
    }
}
