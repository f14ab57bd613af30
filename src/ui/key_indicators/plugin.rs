// src/ui/key_indicators/plugin.rs
//
// Plugin registration for the key indicator HUD.

use bevy::prelude::*;

use super::systems::{spawn_key_indicators, update_key_indicators};

/// Spawns the W/A/S/D indicators and recolors them on press/release.
pub struct KeyIndicatorPlugin;

impl Plugin for KeyIndicatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_key_indicators)
            .add_systems(Update, update_key_indicators);

        info!("KeyIndicatorPlugin registered");
    }
}
