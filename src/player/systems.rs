//! Systems that move the player.
use bevy::prelude::*;

use crate::{
    core::plugin::FrameClock,
    physics::components::KinematicBody,
    player::{
        components::{Player, PlayerController},
        config::MovementSettings,
        errors::PlayerControllerError,
        input::FrameInput,
        movement::{mover_for, MoveIntent},
    },
};

/// Plans this frame's motion for each player and hands it to the mover for
/// the controller's current mode.
pub fn drive_player(
    clock: Res<FrameClock>,
    settings: Res<MovementSettings>,
    input: Res<FrameInput>,
    mut players: Query<
        (
            Entity,
            &PlayerController,
            &mut Transform,
            Option<&mut KinematicBody>,
        ),
        With<Player>,
    >,
) -> Result {
    let delta_secs = clock.delta_secs();
    for (player, controller, mut transform, mut body) in players.iter_mut() {
        let intent = MoveIntent::plan(controller, &settings, &input, delta_secs);
        if intent.translation == Vec3::ZERO
            && intent.key_turn.unwrap_or(0.0) == 0.0
            && intent.mouse_turn.unwrap_or(0.0) == 0.0
        {
            continue;
        }

        let mode = controller.move_mode();
        let mut mover = mover_for(mode, &mut transform, body.as_deref_mut())
            .ok_or(PlayerControllerError::MissingKinematicBody { player, mode })?;
        mover.apply(&intent);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use avian3d::prelude::SpatialQueryPipeline;
    use crate::{
        core::heading::heading_of,
        physics::{components::PhysicsBounds, systems::resolve_kinematic_moves},
        player::{
            components::{MoveMode, MoveSpace},
            input::VirtualAxis,
        },
    };
    use std::time::Duration;

    const EPS: f32 = 1e-4;

    fn app_with_input(h: f32, v: f32, mouse_x: f32) -> App {
        let mut app = App::new();
        let mut clock = FrameClock::default();
        clock.tick(Duration::from_millis(100));

        app.insert_resource(clock)
            .init_resource::<MovementSettings>()
            .init_resource::<PhysicsBounds>()
            .init_resource::<SpatialQueryPipeline>()
            .insert_resource(FrameInput {
                horizontal: VirtualAxis::at(h),
                vertical: VirtualAxis::at(v),
                mouse_x,
            })
            .add_systems(Update, (drive_player, resolve_kinematic_moves).chain());
        app
    }

    #[test]
    fn direct_mode_moves_transform_in_place() {
        let mut app = app_with_input(0.0, 1.0, 0.0);
        let controller =
            PlayerController::new(MoveMode::DirectTransform, MoveSpace::World, false, false);
        let player = app
            .world_mut()
            .spawn((Player, controller, Transform::default()))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(player).unwrap();
        assert!((transform.translation - Vec3::new(0.0, 0.0, -0.3)).length() < EPS);
    }

    #[test]
    fn body_mode_moves_through_kinematic_step() {
        let mut app = app_with_input(0.0, 0.0, 2.0);
        let controller =
            PlayerController::new(MoveMode::PhysicsBody, MoveSpace::World, true, false);
        let start = Transform::default();
        let player = app
            .world_mut()
            .spawn((Player, controller, start, KinematicBody::from_transform(&start)))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(player).unwrap();
        assert!((heading_of(transform.rotation) - 10.0).abs() < EPS);
        let body = app.world().get::<KinematicBody>(player).unwrap();
        assert!(body.requested_rotation().is_none());
    }

    #[test]
    fn idle_input_leaves_player_untouched() {
        let mut app = app_with_input(0.0, 0.0, 0.0);
        let player = app
            .world_mut()
            .spawn((
                Player,
                PlayerController::default(),
                Transform::from_xyz(1.0, 2.0, 3.0),
            ))
            .id();

        app.update();

        let transform = app.world().get::<Transform>(player).unwrap();
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }

    #[test]
    #[should_panic]
    fn body_mode_without_body_fails_fast() {
        let mut app = app_with_input(1.0, 0.0, 0.0);
        let controller =
            PlayerController::new(MoveMode::PhysicsBody, MoveSpace::World, false, false);
        app.world_mut()
            .spawn((Player, controller, Transform::default()));

        app.update();
    }
}
