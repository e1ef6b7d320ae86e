//! Collision system: walls and bot-to-bot contact.

use glam::DVec2;
use hecs::{Entity, World};

use skirmish_core::events::BotEvent;

use crate::components::*;
use crate::rules::{wall_damage, BOT_RADIUS, RAM_DAMAGE};

pub fn run(world: &mut World, width: f64, height: f64) {
    walls(world, width, height);
    bots(world);
}

/// Keep hulls inside the arena. A bot that touches a wall stops dead.
fn walls(world: &mut World, width: f64, height: f64) {
    let min = DVec2::splat(BOT_RADIUS);
    let max = DVec2::new(width - BOT_RADIUS, height - BOT_RADIUS);

    for (_entity, (bot, motion, hull, inbox, stats)) in
        world.query_mut::<(&Bot, &mut Motion, &mut Hull, &mut Inbox, &mut Stats)>()
    {
        let clamped = motion.position.clamp(min, max);
        if clamped == motion.position {
            continue;
        }
        let damage = wall_damage(motion.speed);
        log::debug!("bot {} hit a wall at {}", bot.id, motion.position);
        hull.energy -= damage;
        stats.damage_taken += damage;
        motion.position = clamped;
        motion.speed = 0.0;
        motion.distance_remaining = 0.0;
        inbox.events.push(BotEvent::HitWall);
    }
}

struct Contact {
    entity: Entity,
    id: u32,
    position: DVec2,
    energy: f64,
    moving: bool,
}

/// Overlapping hulls: moving bots are rolled back and stopped, both take damage.
fn bots(world: &mut World) {
    let contacts: Vec<Contact> = world
        .query::<(&Bot, &Motion, &Hull)>()
        .iter()
        .map(|(entity, (bot, motion, hull))| Contact {
            entity,
            id: bot.id,
            position: motion.position,
            energy: hull.energy,
            moving: motion.speed != 0.0,
        })
        .collect();

    for (i, a) in contacts.iter().enumerate() {
        for b in &contacts[i + 1..] {
            if a.position.distance(b.position) >= 2.0 * BOT_RADIUS {
                continue;
            }
            log::debug!("bots {} and {} collided", a.id, b.id);
            collide(world, a, b);
            collide(world, b, a);
        }
    }
}

/// Apply one side of a collision to `this`.
fn collide(world: &mut World, this: &Contact, other: &Contact) {
    if let Ok((motion, hull, inbox, stats)) =
        world.query_one_mut::<(&mut Motion, &mut Hull, &mut Inbox, &mut Stats)>(this.entity)
    {
        if this.moving {
            motion.position = motion.prev_position;
            motion.speed = 0.0;
            motion.distance_remaining = 0.0;
        }
        hull.energy -= RAM_DAMAGE;
        stats.damage_taken += RAM_DAMAGE;
        inbox.events.push(BotEvent::HitBot {
            bot_id: other.id,
            position: to_position(other.position),
            energy: other.energy,
            rammed: other.moving,
        });
    }
}
