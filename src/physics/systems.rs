//! Kinematic step.
use avian3d::prelude::*;
use bevy::prelude::*;

use crate::physics::{
    components::{KinematicBody, PhysicsBounds},
    sweep::{slide_move, SweepHit},
};

/// Scale applied to a body's collider when sweeping it, so surfaces it already
/// rests on (the ground) do not register as hits.
const SWEEP_SCALE: f32 = 0.95;

/// Commits pending move requests and writes the resolved pose to the transform.
///
/// Bodies carrying a `Collider` sweep it toward the requested position and stop
/// or slide at static colliders. Bodies without requests pick up any transform
/// edits made elsewhere so the next request starts from the visible pose.
pub fn resolve_kinematic_moves(
    bounds: Res<PhysicsBounds>,
    obstacles: Res<SpatialQueryPipeline>,
    mut bodies: Query<(Entity, &mut KinematicBody, &mut Transform, Option<&Collider>)>,
) {
    for (entity, mut body, mut transform, collider) in bodies.iter_mut() {
        if body.requested_position().is_none() && body.requested_rotation().is_none() {
            if body.position() != transform.translation || body.rotation() != transform.rotation {
                body.sync_from(&transform);
            }
            continue;
        }

        let swept = collider.map(|collider| {
            let mut shape = collider.clone();
            shape.set_scale(Vec3::splat(SWEEP_SCALE), 8);
            shape
        });
        let filter = SpatialQueryFilter::default().with_excluded_entities([entity]);
        let rotation = body.rotation();

        body.resolve(&bounds, |from, to| match &swept {
            Some(shape) => slide_move(from, to - from, |origin, direction, max_distance| {
                obstacles
                    .cast_shape(
                        shape,
                        origin,
                        rotation,
                        direction,
                        &ShapeCastConfig::from_max_distance(max_distance),
                        &filter,
                    )
                    .map(|hit| SweepHit {
                        distance: hit.distance,
                        normal: hit.normal1,
                    })
            }),
            None => to,
        });
        transform.translation = body.position();
        transform.rotation = body.rotation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_writes_resolved_pose_to_transform() {
        let mut app = App::new();
        app.insert_resource(PhysicsBounds::square(5.0))
            .init_resource::<SpatialQueryPipeline>()
            .add_systems(Update, resolve_kinematic_moves);

        let start = Transform::default();
        let mut body = KinematicBody::from_transform(&start);
        body.move_position(Vec3::new(7.0, 0.0, 1.0));
        body.move_rotation(Quat::from_rotation_y(1.0));
        let entity = app.world_mut().spawn((start, body)).id();

        app.update();

        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(5.0, 0.0, 1.0));
        assert!(transform.rotation.angle_between(Quat::from_rotation_y(1.0)) < 1e-5);

        let body = app.world().get::<KinematicBody>(entity).unwrap();
        assert!(body.requested_position().is_none());
        assert!(body.requested_rotation().is_none());
    }

    #[test]
    fn idle_body_follows_external_transform_edits() {
        let mut app = App::new();
        app.init_resource::<PhysicsBounds>()
            .init_resource::<SpatialQueryPipeline>()
            .add_systems(Update, resolve_kinematic_moves);

        let entity = app
            .world_mut()
            .spawn((Transform::from_xyz(3.0, 0.0, 0.0), KinematicBody::default()))
            .id();

        app.update();

        let body = app.world().get::<KinematicBody>(entity).unwrap();
        assert_eq!(body.position(), Vec3::new(3.0, 0.0, 0.0));
    }
}
