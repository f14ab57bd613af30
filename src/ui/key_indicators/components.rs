// src/ui/key_indicators/components.rs
//
// Components and colors for the key indicator HUD.

use bevy::prelude::*;

/// Indicator color while the key is held.
pub const PRESSED_COLOR: Color = Color::srgba(0.117_647_1, 0.117_647_1, 0.117_647_1, 0.392_156_9);

/// Indicator color while the key is up.
pub const UNPRESSED_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.392_156_9);

/// Keys shown on the HUD, with their grid cell (column, row).
pub const TRACKED_KEYS: [(KeyCode, &str, u16, u16); 4] = [
    (KeyCode::KeyW, "W", 2, 1),
    (KeyCode::KeyA, "A", 1, 2),
    (KeyCode::KeyS, "S", 2, 2),
    (KeyCode::KeyD, "D", 3, 2),
];

/// Widget whose background reflects the state of `key`.
#[derive(Component, Debug, Clone, Copy)]
pub struct KeyIndicator {
    pub key: KeyCode,
}

/// Root node of the indicator grid.
#[derive(Component, Debug)]
pub struct KeyIndicatorPanel;
