//! Player module - polls input and moves the player with the selected movement strategy.

pub mod components;
pub mod config;
pub mod errors;
pub mod input;
pub mod movement;
pub mod plugin;
pub mod systems;

pub use plugin::PlayerPlugin;
