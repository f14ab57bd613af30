//! Systems for the world module.
use avian3d::prelude::*;
use bevy::{math::primitives::Plane3d, prelude::*};

use crate::{
    camera::{components::FollowCam, config::CameraRigSettings},
    physics::components::{KinematicBody, DEFAULT_BOUNDS_HALF_EXTENT},
    player::{components::Player, config::ControllerDefaults},
    world::components::Landmark,
};

const GROUND_SCALE: f32 = DEFAULT_BOUNDS_HALF_EXTENT * 2.0;
const GROUND_THICKNESS: f32 = 0.2;
const PLAYER_START_POS: Vec3 = Vec3::new(0.0, 0.5, 0.0);
const LANDMARK_SPACING: f32 = 8.0;
const LANDMARK_RINGS: i32 = 3;
const LANDMARK_SIZE: Vec3 = Vec3::new(1.0, 2.0, 1.0);
const PLAYER_SIZE: Vec3 = Vec3::ONE;

/// Spawns the scene: ground, light, landmarks, the player and its follow camera.
pub fn spawn_world_environment(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    rig_settings: Res<CameraRigSettings>,
    controller_defaults: Res<ControllerDefaults>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Mesh::from(Plane3d::default()))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(90, 140, 90),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::from_scale(Vec3::splat(GROUND_SCALE)),
    ));
    commands.spawn((
        Transform::from_xyz(0.0, -GROUND_THICKNESS * 0.5, 0.0),
        RigidBody::Static,
        Collider::cuboid(GROUND_SCALE, GROUND_THICKNESS, GROUND_SCALE),
        Name::new("Ground Collider"),
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 20_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(16.0, 32.0, 16.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let landmark_mesh = meshes.add(Cuboid::from_size(LANDMARK_SIZE));
    let landmark_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(150, 130, 100),
        perceptual_roughness: 0.8,
        ..default()
    });
    for (x, z) in landmark_cells() {
        commands.spawn((
            Mesh3d(landmark_mesh.clone()),
            MeshMaterial3d(landmark_material.clone()),
            Transform::from_xyz(x, LANDMARK_SIZE.y * 0.5, z),
            Landmark {
                size: LANDMARK_SIZE,
            },
        ));
    }

    let player_transform = Transform::from_translation(PLAYER_START_POS);
    let player = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::from_size(PLAYER_SIZE))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb_u8(70, 110, 200),
                ..default()
            })),
            player_transform,
            Player,
            controller_defaults.0.clone(),
            KinematicBody::from_transform(&player_transform),
            RigidBody::Kinematic,
            Collider::cuboid(PLAYER_SIZE.x, PLAYER_SIZE.y, PLAYER_SIZE.z),
            Name::new("Player"),
        ))
        .id();

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(
            PLAYER_START_POS + Vec3::new(0.0, rig_settings.height, rig_settings.distance),
        )
        .looking_at(PLAYER_START_POS, Vec3::Y),
        FollowCam::new(player, &rig_settings),
        Name::new("Follow Camera"),
    ));

    info!("World spawned with player {:?}", player);
}

/// Gives freshly spawned landmarks a static box collider matching their size.
pub fn attach_landmark_colliders(
    mut commands: Commands,
    landmarks: Query<(Entity, &Landmark), Without<Collider>>,
) {
    for (entity, landmark) in landmarks.iter() {
        let size = landmark.size;
        commands
            .entity(entity)
            .insert((RigidBody::Static, Collider::cuboid(size.x, size.y, size.z)));
    }
}

/// Grid cells for landmarks, skipping the spawn area.
fn landmark_cells() -> impl Iterator<Item = (f32, f32)> {
    (-LANDMARK_RINGS..=LANDMARK_RINGS).flat_map(|i| {
        (-LANDMARK_RINGS..=LANDMARK_RINGS)
            .filter(move |j| i != 0 || *j != 0)
            .filter(move |j| (i + j) % 2 == 0)
            .map(move |j| (i as f32 * LANDMARK_SPACING, j as f32 * LANDMARK_SPACING))
    })
}
