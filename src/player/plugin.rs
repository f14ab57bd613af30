//! Player plugin wiring input sampling and movement.
use bevy::prelude::*;

use crate::{
    physics::plugin::KinematicStep,
    player::{
        config::{ControllerDefaults, ControlsConfig},
        input::{collect_frame_input, FrameInput},
        systems::drive_player,
    },
};

/// Ordering label for player movement.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerMovement;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        let config = ControlsConfig::load_or_default();
        info!(
            "Player controls configured: transform speed {:.1}, body speed {:.1}, rotation speed {:.1} (mode {}, space {})",
            config.movement.transform_speed,
            config.movement.body_speed,
            config.movement.rotation_speed,
            config.controller.move_mode(),
            config.controller.space(),
        );

        app.insert_resource(config.movement)
            .insert_resource(config.input)
            .insert_resource(ControllerDefaults(config.controller))
            .init_resource::<FrameInput>()
            .add_systems(
                Update,
                (collect_frame_input, drive_player)
                    .chain()
                    .in_set(PlayerMovement)
                    .before(KinematicStep),
            );
    }
}
