//! Cleanup system: removes spent bullets and destroyed bots.

use hecs::{Entity, World};

use crate::components::{Bot, Bullet, Hull, Stats};

/// A bot removed from the arena.
#[derive(Debug, Clone)]
pub struct Fallen {
    pub id: u32,
    pub label: String,
    pub stats: Stats,
}

/// Despawn bullets outside the arena and bots out of energy.
///
/// Entities already queued in `despawn_buffer` (bullets that hit) are
/// removed as well. Returns the bots destroyed this tick.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    width: f64,
    height: f64,
) -> Vec<Fallen> {
    for (entity, bullet) in world.query_mut::<&Bullet>() {
        let p = bullet.position;
        if p.x < 0.0 || p.x > width || p.y < 0.0 || p.y > height {
            despawn_buffer.push(entity);
        }
    }

    let mut fallen = Vec::new();
    for (entity, (bot, hull, stats)) in world.query_mut::<(&Bot, &Hull, &Stats)>() {
        if hull.energy <= 0.0 {
            log::info!("bot {} ({}) destroyed", bot.id, bot.label);
            fallen.push(Fallen {
                id: bot.id,
                label: bot.label.clone(),
                stats: *stats,
            });
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    fallen
}
