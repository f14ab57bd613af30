//! WorldPlugin spawns the ground, light, landmarks, player and follow camera.
use bevy::prelude::*;

use crate::world::systems::{attach_landmark_colliders, spawn_world_environment};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_world_environment, attach_landmark_colliders).chain(),
        );
    }
}
