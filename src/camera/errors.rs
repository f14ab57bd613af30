//! Errors raised by the follow camera.
use std::fmt;

use bevy::prelude::Entity;

/// Precondition failures for the follow camera rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowCamError {
    /// The rig has no target, or the target entity has no transform.
    MissingTarget {
        camera: Entity,
        target: Option<Entity>,
    },
}

impl fmt::Display for FollowCamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTarget {
                camera,
                target: None,
            } => write!(f, "follow camera {} has no target assigned", camera),
            Self::MissingTarget {
                camera,
                target: Some(target),
            } => write!(
                f,
                "follow camera {} targets {} which has no Transform",
                camera, target
            ),
        }
    }
}

impl std::error::Error for FollowCamError {}
