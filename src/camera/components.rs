//! Components for the follow camera.
use bevy::prelude::*;

use crate::camera::config::CameraRigSettings;

/// Trails `target` at a fixed distance and height, easing its heading toward
/// the target's heading.
#[derive(Component, Debug, Clone)]
pub struct FollowCam {
    pub target: Option<Entity>,
    /// Horizontal distance behind the target (world units).
    pub distance: f32,
    /// Height above the target (world units).
    pub height: f32,
    /// Heading smoothing rate; multiplied by the frame delta.
    pub rotate_speed: f32,
}

impl FollowCam {
    pub fn new(target: Entity, settings: &CameraRigSettings) -> Self {
        Self {
            target: Some(target),
            distance: settings.distance,
            height: settings.height,
            rotate_speed: settings.rotate_speed,
        }
    }
}

impl Default for FollowCam {
    fn default() -> Self {
        let settings = CameraRigSettings::default();
        Self {
            target: None,
            distance: settings.distance,
            height: settings.height,
            rotate_speed: settings.rotate_speed,
        }
    }
}
