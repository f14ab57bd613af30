//! FollowCamPlugin schedules the camera after gameplay movement.
use bevy::{prelude::*, transform::TransformSystems};

use crate::camera::{config::CameraRigSettings, systems::follow_target};

pub struct FollowCamPlugin;

impl Plugin for FollowCamPlugin {
    fn build(&self, app: &mut App) {
        let settings = CameraRigSettings::load_or_default();
        info!(
            "Follow camera configured: distance {:.1}, height {:.1}, rotate speed {:.1}",
            settings.distance, settings.height, settings.rotate_speed
        );

        app.insert_resource(settings).add_systems(
            PostUpdate,
            follow_target.before(TransformSystems::Propagate),
        );
    }
}
