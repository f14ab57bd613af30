//! Follow camera systems.
use bevy::prelude::*;

use crate::{
    camera::{components::FollowCam, errors::FollowCamError},
    core::{
        heading::{heading_forward, heading_of, lerp_angle},
        plugin::FrameClock,
    },
};

/// Places every follow camera behind its target and aims it at the target.
///
/// Runs after movement so it sees this frame's target pose. A rig without a
/// resolvable target is a setup error and aborts the system.
pub fn follow_target(
    clock: Res<FrameClock>,
    mut cameras: Query<(Entity, &FollowCam, &mut Transform)>,
    targets: Query<&Transform, Without<FollowCam>>,
) -> Result {
    let delta_secs = clock.delta_secs();
    for (camera, rig, mut transform) in cameras.iter_mut() {
        let target = rig
            .target
            .and_then(|entity| targets.get(entity).ok())
            .ok_or(FollowCamError::MissingTarget {
                camera,
                target: rig.target,
            })?;

        *transform = follow_pose(rig, &transform, target, delta_secs);
    }
    Ok(())
}

/// Camera pose for one frame.
///
/// Only the heading is eased; the resulting camera always looks straight at
/// the target position.
pub fn follow_pose(
    rig: &FollowCam,
    camera: &Transform,
    target: &Transform,
    delta_secs: f32,
) -> Transform {
    let heading = lerp_angle(
        heading_of(camera.rotation),
        heading_of(target.rotation),
        rig.rotate_speed * delta_secs,
    );

    let mut next = *camera;
    next.translation =
        target.translation - heading_forward(heading) * rig.distance + Vec3::Y * rig.height;
    next.look_at(target.translation, Vec3::Y);
    next
}
