//! Errors raised by the player controller.
use std::fmt;

use bevy::prelude::Entity;

use crate::player::components::MoveMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerControllerError {
    /// The active mode needs a kinematic body the entity does not have.
    MissingKinematicBody { player: Entity, mode: MoveMode },
}

impl fmt::Display for PlayerControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKinematicBody { player, mode } => write!(
                f,
                "player {} is in {} mode but has no KinematicBody",
                player, mode
            ),
        }
    }
}

impl std::error::Error for PlayerControllerError {}
