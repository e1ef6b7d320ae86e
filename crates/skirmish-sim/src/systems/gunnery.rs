//! Gunnery system: gun cooling and bullet launch.

use glam::DVec2;
use hecs::World;

use skirmish_core::constants::{MAX_FIRE_POWER, MIN_FIRE_POWER};
use skirmish_core::geometry::heading_vector;

use crate::components::*;
use crate::rules::{bullet_speed, gun_heat, BOT_RADIUS, GUN_COOLING_RATE};
use crate::world_setup;

/// Cool guns, then fire every cold gun whose trigger is pulled.
///
/// A shot costs its power in energy and is refused when the bot cannot
/// afford the minimum power.
pub fn run(world: &mut World) {
    let mut launched = Vec::new();

    for (_entity, (bot, motion, turret, hull, stats)) in
        world.query_mut::<(&Bot, &Motion, &mut Turret, &mut Hull, &mut Stats)>()
    {
        turret.gun_heat = (turret.gun_heat - GUN_COOLING_RATE).max(0.0);

        let Some(requested) = turret.trigger.take() else {
            continue;
        };
        if turret.gun_heat > 0.0 {
            continue;
        }
        let power = requested
            .clamp(MIN_FIRE_POWER, MAX_FIRE_POWER)
            .min(hull.energy);
        if power < MIN_FIRE_POWER {
            continue;
        }

        let (hx, hy) = heading_vector(turret.gun_heading);
        let direction = DVec2::new(hx, hy);
        let speed = bullet_speed(power);
        launched.push(Bullet {
            owner: bot.id,
            power,
            position: motion.position + direction * BOT_RADIUS,
            velocity: direction * speed,
        });
        hull.energy -= power;
        turret.gun_heat = gun_heat(power);
        stats.shots_fired += 1;
        log::trace!("bot {} fired power {power:.2}", bot.id);
    }

    for bullet in launched {
        world_setup::spawn_bullet(world, bullet);
    }
}
