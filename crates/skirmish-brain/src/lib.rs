//! Targeting and movement control core for SKIRMISH.
//!
//! Implements target tracking, the predictive firing solution and fire
//! gate, the energy-driven mode selector and the movement state machine.
//! No engine dependency: every component operates on plain data and the
//! [`agent::Agent`] facade turns engine events and state into commands.

pub mod agent;
pub mod fire_control;
pub mod firing;
pub mod maneuver;
pub mod mode;
pub mod movement;
pub mod radar;
pub mod tracker;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
