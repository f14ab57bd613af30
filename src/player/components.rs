//! Components describing the controlled player.
use std::fmt;

use bevy::prelude::*;
use serde::Deserialize;

/// Marker component identifying the player entity.
#[derive(Component, Debug)]
pub struct Player;

/// Movement primitive used to apply a frame's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveMode {
    /// Writes the transform directly.
    #[default]
    DirectTransform,
    /// Issues kinematic move requests to the physics step.
    PhysicsBody,
}

impl MoveMode {
    pub fn next(self) -> Self {
        match self {
            Self::DirectTransform => Self::PhysicsBody,
            Self::PhysicsBody => Self::DirectTransform,
        }
    }
}

impl fmt::Display for MoveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::DirectTransform => "Transform",
            Self::PhysicsBody => "Physics Body",
        };
        write!(f, "{}", label)
    }
}

/// Coordinate space movement vectors are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveSpace {
    #[default]
    World,
    /// Relative to the entity's own orientation.
    Local,
}

impl MoveSpace {
    pub fn next(self) -> Self {
        match self {
            Self::World => Self::Local,
            Self::Local => Self::World,
        }
    }
}

impl fmt::Display for MoveSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::World => "World",
            Self::Local => "Local",
        };
        write!(f, "{}", label)
    }
}

/// Mode flags for the player controller.
///
/// The flags only change through the setters, which the control panel calls
/// with already-resolved values.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct PlayerController {
    move_mode: MoveMode,
    space: MoveSpace,
    allow_mouse_rotation: bool,
    allow_key_rotation: bool,
}

impl PlayerController {
    pub fn new(
        move_mode: MoveMode,
        space: MoveSpace,
        allow_mouse_rotation: bool,
        allow_key_rotation: bool,
    ) -> Self {
        Self {
            move_mode,
            space,
            allow_mouse_rotation,
            allow_key_rotation,
        }
    }

    pub fn move_mode(&self) -> MoveMode {
        self.move_mode
    }

    pub fn space(&self) -> MoveSpace {
        self.space
    }

    pub fn allow_mouse_rotation(&self) -> bool {
        self.allow_mouse_rotation
    }

    pub fn allow_key_rotation(&self) -> bool {
        self.allow_key_rotation
    }

    pub fn set_move_mode(&mut self, move_mode: MoveMode) {
        self.move_mode = move_mode;
        info!("Player move mode set to {}", move_mode);
    }

    pub fn set_space(&mut self, space: MoveSpace) {
        self.space = space;
        info!("Player movement space set to {}", space);
    }

    pub fn set_mouse_rotation(&mut self, enabled: bool) {
        self.allow_mouse_rotation = enabled;
        info!("Player mouse rotation enabled: {}", enabled);
    }

    pub fn set_key_rotation(&mut self, enabled: bool) {
        self.allow_key_rotation = enabled;
        info!("Player key rotation enabled: {}", enabled);
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(MoveMode::DirectTransform, MoveSpace::World, true, false)
    }
}
