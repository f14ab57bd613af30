//! Components used by the world module.
use bevy::prelude::*;

/// Static prop the player walks around.
#[derive(Component, Debug, Clone, Copy)]
pub struct Landmark {
    /// Full extents of the prop's box.
    pub size: Vec3,
}
