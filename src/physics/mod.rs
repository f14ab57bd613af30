//! Physics module: kinematic bodies that resolve queued move requests against
//! static colliders each frame.
pub mod components;
pub mod plugin;
pub mod sweep;
pub mod systems;

pub use plugin::PhysicsPlugin;
