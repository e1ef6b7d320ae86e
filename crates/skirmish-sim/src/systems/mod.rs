//! ECS systems that advance the arena each tick.
//!
//! Systems are free functions over `&mut World`; they own no state.

pub mod bullets;
pub mod cleanup;
pub mod collisions;
pub mod commands;
pub mod gunnery;
pub mod movement;
pub mod scan;
pub mod snapshot;
