// src/ui/control_panel/plugin.rs
//
// Plugin registration for the control panel.

use bevy::prelude::*;

use crate::player::plugin::PlayerMovement;

use super::systems::{handle_control_buttons, refresh_control_labels, spawn_control_panel};

/// Control panel for movement mode, coordinate space and rotation sources.
///
/// Button presses are applied before player movement so the new flags take
/// effect the same frame.
pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_control_panel).add_systems(
            Update,
            (
                handle_control_buttons.before(PlayerMovement),
                refresh_control_labels.after(handle_control_buttons),
            ),
        );

        info!("ControlPanelPlugin registered");
    }
}
