//! Snapshot system: read-only view of the arena after a tick.

use hecs::World;
use serde::{Deserialize, Serialize};

use skirmish_core::enums::{MovementMode, PlannerState};
use skirmish_core::types::Position;

use crate::components::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotView {
    pub id: u32,
    pub label: String,
    pub position: Position,
    pub heading: f64,
    pub gun_heading: f64,
    pub radar_heading: f64,
    pub speed: f64,
    pub energy: f64,
    /// Agent internals; absent for scripted opponents.
    pub mode: Option<MovementMode>,
    pub planner_state: Option<PlannerState>,
    pub target: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletView {
    pub owner: u32,
    pub power: f64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaSnapshot {
    pub tick: u64,
    pub bots: Vec<BotView>,
    pub bullets: Vec<BulletView>,
}

impl ArenaSnapshot {
    pub fn bot(&self, id: u32) -> Option<&BotView> {
        self.bots.iter().find(|b| b.id == id)
    }
}

pub fn build_snapshot(world: &World, tick: u64) -> ArenaSnapshot {
    let mut bots: Vec<BotView> = world
        .query::<(&Bot, &Motion, &Turret, &Hull, &Controller)>()
        .iter()
        .map(|(_, (bot, motion, turret, hull, controller))| {
            let (mode, planner_state, target) = match controller {
                Controller::Agent(agent) => (
                    Some(agent.mode()),
                    Some(agent.planner_state()),
                    agent.target().map(|t| t.id()),
                ),
                Controller::Scripted(_) => (None, None, None),
            };
            BotView {
                id: bot.id,
                label: bot.label.clone(),
                position: to_position(motion.position),
                heading: motion.heading,
                gun_heading: turret.gun_heading,
                radar_heading: turret.radar_heading,
                speed: motion.speed,
                energy: hull.energy,
                mode,
                planner_state,
                target,
            }
        })
        .collect();
    bots.sort_by_key(|b| b.id);

    let bullets = world
        .query::<&Bullet>()
        .iter()
        .map(|(_, bullet)| BulletView {
            owner: bullet.owner,
            power: bullet.power,
            position: to_position(bullet.position),
        })
        .collect();

    ArenaSnapshot {
        tick,
        bots,
        bullets,
    }
}
