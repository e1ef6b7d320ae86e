//! Events delivered by the engine to the agent during a tick.

use serde::{Deserialize, Serialize};

use crate::state::OpponentObservation;
use crate::types::Position;

/// Sensor and damage notifications, delivered in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BotEvent {
    /// The radar swept over an opponent.
    Scanned(OpponentObservation),
    /// A bullet hit us.
    HitByBullet {
        /// Absolute direction the bullet was travelling (degrees).
        bullet_heading: f64,
        power: f64,
        /// Id of the shooter.
        owner: u32,
    },
    /// We collided with another bot.
    HitBot {
        bot_id: u32,
        position: Position,
        energy: f64,
        /// True when the other bot rammed us, false when we rammed it.
        rammed: bool,
    },
    /// We drove into an arena wall.
    HitWall,
}
