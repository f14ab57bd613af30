// src/ui/plugin.rs
//
// UiPlugin groups the HUD plugins.

use bevy::prelude::*;

use super::{control_panel::ControlPanelPlugin, key_indicators::KeyIndicatorPlugin};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        info!("UiPlugin registered");

        app.add_plugins((KeyIndicatorPlugin, ControlPanelPlugin));
    }
}
