//! Radar scan system.
//!
//! Each bot scans the arc its radar swept this tick. Any other bot within
//! range whose hull overlaps the arc produces a scan event.

use glam::DVec2;
use hecs::World;

use skirmish_core::events::BotEvent;
use skirmish_core::geometry::normalize_relative;
use skirmish_core::state::OpponentObservation;

use crate::components::*;
use crate::rules::{BOT_RADIUS, SCAN_RANGE};

/// Whether `bearing` lies on the arc swept from `start` by the signed `sweep`,
/// widened by `margin` degrees on both ends.
pub fn in_arc(bearing: f64, start: f64, sweep: f64, margin: f64) -> bool {
    let rel = normalize_relative(bearing - start);
    if sweep >= 0.0 {
        rel >= -margin && rel <= sweep + margin
    } else {
        rel <= margin && rel >= sweep - margin
    }
}

pub fn run(world: &mut World, tick: u64) {
    let bots: Vec<(u32, DVec2, f64, f64, f64)> = world
        .query::<(&Bot, &Motion, &Hull)>()
        .iter()
        .map(|(_, (bot, motion, hull))| {
            (bot.id, motion.position, motion.heading, motion.speed, hull.energy)
        })
        .collect();

    for (_entity, (bot, motion, turret, inbox)) in
        world.query_mut::<(&Bot, &Motion, &Turret, &mut Inbox)>()
    {
        let sweep = normalize_relative(turret.radar_heading - turret.prev_radar_heading);
        for &(id, position, heading, speed, energy) in &bots {
            if id == bot.id {
                continue;
            }
            let offset = position - motion.position;
            let distance = offset.length();
            if distance > SCAN_RANGE || distance == 0.0 {
                continue;
            }
            let bearing = offset.y.atan2(offset.x).to_degrees();
            let margin = BOT_RADIUS.atan2(distance).to_degrees();
            if in_arc(bearing, turret.prev_radar_heading, sweep, margin) {
                inbox.events.push(BotEvent::Scanned(OpponentObservation {
                    id,
                    position: to_position(position),
                    heading,
                    speed,
                    energy,
                    tick,
                }));
            }
        }
    }
}
