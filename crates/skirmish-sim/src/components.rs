//! ECS components for hecs entities.
//!
//! Components are plain data. Behavior lives in the systems.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use skirmish_brain::agent::Agent;
use skirmish_core::events::BotEvent;
use skirmish_core::types::Position;

use crate::scripts::OpponentScript;

/// Identity of a bot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bot {
    pub id: u32,
    pub label: String,
}

/// Hull kinematics and the body's outstanding turn/travel orders.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Motion {
    pub position: DVec2,
    /// Position at the start of the tick, for collision rollback.
    pub prev_position: DVec2,
    /// Degrees [0, 360).
    pub heading: f64,
    /// Signed speed, units per tick.
    pub speed: f64,
    pub turn_remaining: f64,
    pub distance_remaining: f64,
}

/// Gun and radar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Turret {
    pub gun_heading: f64,
    pub radar_heading: f64,
    /// Radar heading at the start of the tick; the arc between the two is scanned.
    pub prev_radar_heading: f64,
    pub gun_turn_remaining: f64,
    pub radar_turn_remaining: f64,
    pub gun_heat: f64,
    /// Shot requested this tick.
    pub trigger: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub energy: f64,
}

/// Who decides a bot's commands.
#[derive(Debug)]
pub enum Controller {
    Agent(Box<Agent>),
    Scripted(OpponentScript),
}

/// Events collected during a tick, delivered at the start of the next one.
#[derive(Debug, Clone, Default)]
pub struct Inbox {
    pub events: Vec<BotEvent>,
}

/// Per-bot match statistics.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Stats {
    pub shots_fired: u32,
    pub bullet_hits: u32,
    pub damage_dealt: f64,
    pub damage_taken: f64,
}

/// A bullet in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: u32,
    pub power: f64,
    pub position: DVec2,
    pub velocity: DVec2,
}

pub fn to_position(v: DVec2) -> Position {
    Position::new(v.x, v.y)
}

pub fn to_dvec(p: Position) -> DVec2 {
    DVec2::new(p.x, p.y)
}
