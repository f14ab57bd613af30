//! PhysicsPlugin wires the collision world and the kinematic step.
use avian3d::prelude::*;
use bevy::prelude::*;

use crate::physics::{components::PhysicsBounds, systems::resolve_kinematic_moves};

/// Ordering label for the kinematic step.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct KinematicStep;

pub struct PhysicsPlugin;

impl Plugin for PhysicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PhysicsPlugins::default())
            .init_resource::<PhysicsBounds>()
            .add_systems(Update, resolve_kinematic_moves.in_set(KinematicStep));
    }
}
