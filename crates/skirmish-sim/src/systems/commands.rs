//! Command system: lets every controller decide, then records the orders.
//!
//! Agents first receive the events gathered during the previous tick.

use glam::DVec2;
use hecs::World;

use skirmish_core::commands::TickCommands;
use skirmish_core::state::OwnState;

use crate::components::*;

/// Own state of a bot as its controller sees it.
pub fn own_state(tick: u64, motion: &Motion, turret: &Turret, hull: &Hull) -> OwnState {
    OwnState {
        tick,
        position: to_position(motion.position),
        heading: motion.heading,
        gun_heading: turret.gun_heading,
        radar_heading: turret.radar_heading,
        speed: motion.speed,
        energy: hull.energy,
        gun_heat: turret.gun_heat,
        turn_remaining: motion.turn_remaining,
        distance_remaining: motion.distance_remaining,
    }
}

pub fn run(world: &mut World, tick: u64) {
    let positions: Vec<(u32, DVec2)> = world
        .query::<(&Bot, &Motion)>()
        .iter()
        .map(|(_, (bot, motion))| (bot.id, motion.position))
        .collect();

    for (_entity, (bot, motion, turret, hull, controller, inbox)) in world.query_mut::<(
        &Bot,
        &mut Motion,
        &mut Turret,
        &Hull,
        &mut Controller,
        &mut Inbox,
    )>() {
        let own = own_state(tick, motion, turret, hull);
        let cmds = match controller {
            Controller::Agent(agent) => {
                for event in inbox.events.drain(..) {
                    agent.on_event(&own, &event);
                }
                agent.tick(&own)
            }
            Controller::Scripted(script) => {
                inbox.events.clear();
                let nearest = positions
                    .iter()
                    .filter(|(id, _)| *id != bot.id)
                    .min_by(|a, b| {
                        a.1.distance(motion.position)
                            .total_cmp(&b.1.distance(motion.position))
                    })
                    .map(|(_, p)| to_position(*p));
                script.commands(&own, nearest)
            }
        };
        log::trace!("tick {tick} bot {} {:?}", bot.id, cmds);
        apply(&cmds, motion, turret);
    }
}

/// Record orders; `None` fields leave the current order running.
fn apply(cmds: &TickCommands, motion: &mut Motion, turret: &mut Turret) {
    if cmds.stop {
        motion.turn_remaining = 0.0;
        motion.distance_remaining = 0.0;
    }
    if let Some(turn) = cmds.body_turn {
        motion.turn_remaining = turn;
    }
    if let Some(distance) = cmds.travel {
        motion.distance_remaining = distance;
    }
    if let Some(turn) = cmds.gun_turn {
        turret.gun_turn_remaining = turn;
    }
    if let Some(turn) = cmds.radar_turn {
        turret.radar_turn_remaining = turn;
    }
    turret.trigger = cmds.fire;
}
