// src/ui/control_panel/mod.rs
//
// Buttons that switch the player controller's mode flags.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::ControlPanelPlugin;
