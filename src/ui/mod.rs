// src/ui/mod.rs
//
// UI module providing the screen-space HUD.
//
// Current features:
// - Key indicators (bottom-left W/A/S/D state)
// - Control panel (top-left movement mode, space and rotation toggles)

pub mod control_panel;
pub mod key_indicators;
pub mod plugin;

pub use plugin::UiPlugin;
