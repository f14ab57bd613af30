use bevy::prelude::*;

mod camera;
mod core;
mod physics;
mod player;
mod ui;
mod world;

use crate::{
    camera::FollowCamPlugin, core::CorePlugin, physics::PhysicsPlugin, player::PlayerPlugin,
    ui::UiPlugin, world::WorldPlugin,
};

fn main() {
    App::new()
        .add_plugins((
            DefaultPlugins,
            CorePlugin::default(),
            PhysicsPlugin,
            PlayerPlugin,
            FollowCamPlugin,
            WorldPlugin,
            UiPlugin,
        ))
        .run();
}
