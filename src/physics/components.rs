//! Kinematic body component and world bounds.
use bevy::prelude::*;

/// Half-extent of the walkable area on the XZ plane (matches the ground scale).
pub const DEFAULT_BOUNDS_HALF_EXTENT: f32 = 50.0;

/// Body moved through requests rather than by writing its transform directly.
///
/// Requests made during a frame are committed by the kinematic step, which
/// applies the world constraints. Until then `position()`/`rotation()` report
/// the last resolved pose.
#[derive(Component, Debug, Clone, Default)]
pub struct KinematicBody {
    position: Vec3,
    rotation: Quat,
    requested_position: Option<Vec3>,
    requested_rotation: Option<Quat>,
}

impl KinematicBody {
    pub fn from_transform(transform: &Transform) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
            requested_position: None,
            requested_rotation: None,
        }
    }

    /// Last resolved position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Last resolved rotation.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Requests a move to `position`. A later request in the same frame replaces it.
    pub fn move_position(&mut self, position: Vec3) {
        self.requested_position = Some(position);
    }

    /// Requests a rotation. A later request in the same frame replaces it.
    pub fn move_rotation(&mut self, rotation: Quat) {
        self.requested_rotation = Some(rotation.normalize());
    }

    pub fn requested_position(&self) -> Option<Vec3> {
        self.requested_position
    }

    pub fn requested_rotation(&self) -> Option<Quat> {
        self.requested_rotation
    }

    /// Rotation the body will have after this frame's requests resolve.
    pub fn target_rotation(&self) -> Quat {
        self.requested_rotation.unwrap_or(self.rotation)
    }

    /// Commits pending requests.
    ///
    /// The requested position is clamped to `bounds`, then `sweep` maps the
    /// move from the current position to the point where obstacles allow the
    /// body to end up.
    pub fn resolve(&mut self, bounds: &PhysicsBounds, sweep: impl FnOnce(Vec3, Vec3) -> Vec3) {
        if let Some(position) = self.requested_position.take() {
            let target = bounds.clamp(position);
            self.position = bounds.clamp(sweep(self.position, target));
        }
        if let Some(rotation) = self.requested_rotation.take() {
            self.rotation = rotation;
        }
    }

    /// Adopts a pose written to the transform from outside the physics step.
    pub fn sync_from(&mut self, transform: &Transform) {
        self.position = transform.translation;
        self.rotation = transform.rotation;
    }
}

/// Axis-aligned limits the kinematic step keeps bodies inside.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PhysicsBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl PhysicsBounds {
    pub fn square(half_extent: f32) -> Self {
        let half = half_extent.abs();
        Self {
            min: Vec3::new(-half, f32::NEG_INFINITY, -half),
            max: Vec3::new(half, f32::INFINITY, half),
        }
    }

    pub fn clamp(&self, position: Vec3) -> Vec3 {
        position.clamp(self.min, self.max)
    }
}

impl Default for PhysicsBounds {
    fn default() -> Self {
        Self::square(DEFAULT_BOUNDS_HALF_EXTENT)
    }
}
