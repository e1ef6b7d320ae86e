//! Kinematic integration: turning, acceleration and travel.

use glam::DVec2;
use hecs::World;

use skirmish_core::constants::MAX_BOT_SPEED;
use skirmish_core::geometry::{heading_vector, normalize_absolute};

use crate::components::{Motion, Turret};
use crate::rules::{turn_rate, ACCELERATION, GUN_TURN_RATE, RADAR_TURN_RATE};

/// Advance every bot's headings and position by one tick.
pub fn run(world: &mut World) {
    for (_entity, (motion, turret)) in world.query_mut::<(&mut Motion, &mut Turret)>() {
        motion.prev_position = motion.position;
        turret.prev_radar_heading = turret.radar_heading;

        let rate = turn_rate(motion.speed);
        motion.heading = rotate(motion.heading, &mut motion.turn_remaining, rate);
        turret.gun_heading = rotate(
            turret.gun_heading,
            &mut turret.gun_turn_remaining,
            GUN_TURN_RATE,
        );
        turret.radar_heading = rotate(
            turret.radar_heading,
            &mut turret.radar_turn_remaining,
            RADAR_TURN_RATE,
        );

        motion.speed = next_speed(motion.speed, motion.distance_remaining);
        let (hx, hy) = heading_vector(motion.heading);
        motion.position += DVec2::new(hx, hy) * motion.speed;
        motion.distance_remaining -= motion.speed;
    }
}

/// Turn at most `rate` degrees toward the remaining order.
fn rotate(heading: f64, remaining: &mut f64, rate: f64) -> f64 {
    let step = remaining.clamp(-rate, rate);
    *remaining -= step;
    normalize_absolute(heading + step)
}

/// Speed for this tick given the travel still ordered.
///
/// Accelerates by [`ACCELERATION`] per tick, brakes immediately, and never
/// travels past the ordered distance.
pub fn next_speed(speed: f64, remaining: f64) -> f64 {
    let desired = remaining.clamp(-MAX_BOT_SPEED, MAX_BOT_SPEED);
    if desired * speed >= 0.0 && desired.abs() <= speed.abs() {
        return desired;
    }
    let start = if desired * speed < 0.0 { 0.0 } else { speed };
    start + (desired - start).clamp(-ACCELERATION, ACCELERATION)
}
