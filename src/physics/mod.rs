//! Physics systems
pub mod body;
pub mod handler;

pub use body::Body;
pub use handler::{CollisionReport, PlayerPhysicsHandler};
