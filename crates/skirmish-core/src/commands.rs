//! Actuator commands the agent submits to the engine each tick.
//!
//! Fields left as `None` keep whatever the engine is already executing.

use serde::{Deserialize, Serialize};

/// Everything the agent asks the engine to do before the tick is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickCommands {
    /// Halt body movement and clear remaining turn and travel first.
    pub stop: bool,
    /// Relative body turn in degrees, positive = left.
    pub body_turn: Option<f64>,
    /// Signed travel distance; negative reverses.
    pub travel: Option<f64>,
    /// Relative gun turn in degrees, positive = left.
    pub gun_turn: Option<f64>,
    /// Relative radar turn in degrees, positive = left.
    pub radar_turn: Option<f64>,
    /// Fire a bullet with this power.
    pub fire: Option<f64>,
}

impl TickCommands {
    /// True when no command of any kind was issued.
    pub fn is_idle(&self) -> bool {
        *self == TickCommands::default()
    }
}
