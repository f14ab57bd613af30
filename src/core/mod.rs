//! Core module: frame timing shared by gameplay systems and heading math.
pub mod heading;
pub mod plugin;

pub use plugin::CorePlugin;
