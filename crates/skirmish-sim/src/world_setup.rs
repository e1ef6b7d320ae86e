//! Entity spawn factories.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_brain::agent::Agent;

use crate::components::*;
use crate::rules::{BOT_RADIUS, INITIAL_GUN_HEAT, SPAWN_SEPARATION, START_ENERGY};
use crate::scripts::OpponentScript;

/// Pick a random spawn point inside the arena, away from existing bots.
///
/// Gives up on separation after a bounded number of attempts and returns the
/// last candidate.
pub fn random_spawn_point(
    world: &World,
    rng: &mut ChaCha8Rng,
    width: f64,
    height: f64,
) -> DVec2 {
    let margin = BOT_RADIUS * 3.0;
    let occupied: Vec<DVec2> = world
        .query::<&Motion>()
        .iter()
        .map(|(_, m)| m.position)
        .collect();

    let mut candidate = DVec2::new(width / 2.0, height / 2.0);
    for _ in 0..100 {
        candidate = DVec2::new(
            rng.gen_range(margin..width - margin),
            rng.gen_range(margin..height - margin),
        );
        if occupied
            .iter()
            .all(|p| p.distance(candidate) >= SPAWN_SEPARATION)
        {
            return candidate;
        }
    }
    log::warn!("no separated spawn point found, placing bot at {candidate}");
    candidate
}

pub fn spawn_bot(
    world: &mut World,
    id: u32,
    label: String,
    position: DVec2,
    heading: f64,
    controller: Controller,
) -> Entity {
    world.spawn((
        Bot { id, label },
        Motion {
            position,
            prev_position: position,
            heading,
            speed: 0.0,
            turn_remaining: 0.0,
            distance_remaining: 0.0,
        },
        Turret {
            gun_heading: heading,
            radar_heading: heading,
            prev_radar_heading: heading,
            gun_turn_remaining: 0.0,
            radar_turn_remaining: 0.0,
            gun_heat: INITIAL_GUN_HEAT,
            trigger: None,
        },
        Hull {
            energy: START_ENERGY,
        },
        controller,
        Inbox::default(),
        Stats::default(),
    ))
}

pub fn spawn_agent(
    world: &mut World,
    id: u32,
    position: DVec2,
    heading: f64,
    agent: Agent,
) -> Entity {
    spawn_bot(
        world,
        id,
        format!("agent-{id}"),
        position,
        heading,
        Controller::Agent(Box::new(agent)),
    )
}

pub fn spawn_opponent(
    world: &mut World,
    id: u32,
    position: DVec2,
    heading: f64,
    script: OpponentScript,
) -> Entity {
    spawn_bot(
        world,
        id,
        format!("{}-{id}", script.label()),
        position,
        heading,
        Controller::Scripted(script),
    )
}

/// Spawn a bullet leaving the muzzle of a bot.
pub fn spawn_bullet(world: &mut World, bullet: Bullet) -> Entity {
    world.spawn((bullet,))
}
