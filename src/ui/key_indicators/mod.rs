// src/ui/key_indicators/mod.rs
//
// On-screen W/A/S/D indicators that darken while the key is held.

pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::KeyIndicatorPlugin;
