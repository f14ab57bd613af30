//! Heading (yaw) helpers.
//!
//! A heading is measured in degrees, clockwise when seen from above. Heading 0
//! faces Bevy's forward axis (`-Z`) and heading 90 faces `+X`.
use bevy::math::{EulerRot, Quat, Vec3};

/// Yaw-only rotation for a heading in degrees.
pub fn heading_rotation(degrees: f32) -> Quat {
    Quat::from_rotation_y(-degrees.to_radians())
}

/// Heading of a rotation in `[0, 360)`, ignoring pitch and roll.
pub fn heading_of(rotation: Quat) -> f32 {
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);
    (-yaw.to_degrees()).rem_euclid(360.0)
}

/// Forward direction for a heading.
pub fn heading_forward(degrees: f32) -> Vec3 {
    heading_rotation(degrees) * Vec3::NEG_Z
}

/// Interpolates between two headings along the shorter arc.
///
/// `t` is clamped to `[0, 1]`. The result is not wrapped, so it may lie
/// slightly outside `[0, 360)` when crossing the boundary.
pub fn lerp_angle(from: f32, to: f32, t: f32) -> f32 {
    let mut delta = (to - from).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    from + delta * t.clamp(0.0, 1.0)
}
