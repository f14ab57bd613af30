//! World module housing the demo scene setup.
pub mod components;
pub mod plugin;
pub mod systems;

pub use plugin::WorldPlugin;
