//! Collide-and-slide resolution for kinematic moves.
use bevy::prelude::*;

/// Gap kept between a body and the obstacle it stops against.
pub const CONTACT_OFFSET: f32 = 0.01;

const MAX_SLIDES: usize = 4;

/// First obstacle found along a cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    pub distance: f32,
    /// Obstacle surface normal, pointing back toward the caster.
    pub normal: Vec3,
}

/// Moves from `start` by `delta`, stopping at obstacles and sliding along them.
///
/// `cast` reports the first obstacle hit from an origin along a direction
/// within a maximum distance. Returns the resolved position.
pub fn slide_move(
    start: Vec3,
    delta: Vec3,
    cast: impl Fn(Vec3, Dir3, f32) -> Option<SweepHit>,
) -> Vec3 {
    let mut position = start;
    let mut remaining = delta;

    for _ in 0..MAX_SLIDES {
        let Ok((direction, length)) = Dir3::new_and_length(remaining) else {
            break;
        };
        let Some(hit) = cast(position, direction, length + CONTACT_OFFSET) else {
            position += remaining;
            break;
        };

        let travel = (hit.distance - CONTACT_OFFSET).clamp(0.0, length);
        position += direction * travel;
        let blocked = direction * (length - travel);
        remaining = blocked - hit.normal * blocked.dot(hit.normal);
    }

    position
}

/// Cast against a single axis-aligned box, already grown by the caster's half extents.
#[cfg(test)]
pub(crate) fn box_cast(
    center: Vec3,
    half_extents: Vec3,
) -> impl Fn(Vec3, Dir3, f32) -> Option<SweepHit> {
    move |origin, direction, max_distance| {
        let min = center - half_extents;
        let max = center + half_extents;
        let dir = direction.as_vec3();
        let mut near = 0.0_f32;
        let mut far = max_distance;
        let mut normal = Vec3::ZERO;

        for axis in 0..3 {
            if dir[axis].abs() < f32::EPSILON {
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
                continue;
            }
            let t0 = (min[axis] - origin[axis]) / dir[axis];
            let t1 = (max[axis] - origin[axis]) / dir[axis];
            let (enter, exit) = (t0.min(t1), t0.max(t1));
            if enter > near {
                near = enter;
                normal = Vec3::ZERO;
                normal[axis] = -dir[axis].signum();
            }
            far = far.min(exit);
            if near > far {
                return None;
            }
        }

        Some(SweepHit {
            distance: near,
            normal,
        })
    }
}
