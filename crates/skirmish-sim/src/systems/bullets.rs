//! Bullet flight and hit resolution.

use glam::DVec2;
use hecs::{Entity, World};

use skirmish_core::events::BotEvent;
use skirmish_core::geometry::normalize_absolute;

use crate::components::*;
use crate::rules::{bullet_damage, bullet_hit_bonus, BOT_RADIUS};

struct Hit {
    bullet: Entity,
    victim: Entity,
    owner: u32,
    power: f64,
    heading: f64,
}

/// Distance from `point` to the segment `a..b`.
pub fn segment_distance(point: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

/// Move every bullet, then apply damage for bullets that crossed a hull.
///
/// A bullet hits at most one bot; it never hits its owner.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    let targets: Vec<(Entity, u32, DVec2)> = world
        .query::<(&Bot, &Motion)>()
        .iter()
        .map(|(entity, (bot, motion))| (entity, bot.id, motion.position))
        .collect();

    let mut hits = Vec::new();
    for (entity, bullet) in world.query_mut::<&mut Bullet>() {
        let from = bullet.position;
        bullet.position += bullet.velocity;
        let victim = targets
            .iter()
            .filter(|(_, id, _)| *id != bullet.owner)
            .find(|(_, _, pos)| segment_distance(*pos, from, bullet.position) <= BOT_RADIUS);
        if let Some((victim, _, _)) = victim {
            hits.push(Hit {
                bullet: entity,
                victim: *victim,
                owner: bullet.owner,
                power: bullet.power,
                heading: normalize_absolute(
                    bullet.velocity.y.atan2(bullet.velocity.x).to_degrees(),
                ),
            });
        }
    }

    for hit in hits {
        let damage = bullet_damage(hit.power);
        let mut victim_id = None;
        if let Ok((bot, hull, inbox, stats)) =
            world.query_one_mut::<(&Bot, &mut Hull, &mut Inbox, &mut Stats)>(hit.victim)
        {
            hull.energy -= damage;
            stats.damage_taken += damage;
            inbox.events.push(BotEvent::HitByBullet {
                bullet_heading: hit.heading,
                power: hit.power,
                owner: hit.owner,
            });
            victim_id = Some(bot.id);
        }
        if let Some(victim_id) = victim_id {
            log::debug!("bullet from {} hit {victim_id} for {damage:.1}", hit.owner);
            for (_entity, (bot, hull, stats)) in
                world.query_mut::<(&Bot, &mut Hull, &mut Stats)>()
            {
                if bot.id == hit.owner {
                    hull.energy += bullet_hit_bonus(hit.power);
                    stats.bullet_hits += 1;
                    stats.damage_dealt += damage;
                }
            }
        }
        despawn_buffer.push(hit.bullet);
    }
}
