//! Third-person follow camera.
pub mod components;
pub mod config;
pub mod errors;
pub mod plugin;
pub mod systems;

pub use plugin::FollowCamPlugin;
