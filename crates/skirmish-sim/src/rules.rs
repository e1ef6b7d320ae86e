//! Simplified engine rules of the harness.

use skirmish_core::constants::{BULLET_BASE_SPEED, BULLET_SPEED_PER_POWER};

/// Collision radius of a bot hull.
pub const BOT_RADIUS: f64 = 18.0;

/// Starting energy of every bot.
pub const START_ENERGY: f64 = 100.0;

/// Body turn rate at standstill (degrees per tick).
pub const MAX_TURN_RATE: f64 = 10.0;

/// Body turn rate lost per unit of speed.
pub const TURN_RATE_SPEED_PENALTY: f64 = 0.75;

/// Gun turn rate (degrees per tick).
pub const GUN_TURN_RATE: f64 = 20.0;

/// Radar turn rate (degrees per tick).
pub const RADAR_TURN_RATE: f64 = 45.0;

/// Speed gained per tick when accelerating. Braking is immediate.
pub const ACCELERATION: f64 = 1.0;

/// Gun heat shed per tick.
pub const GUN_COOLING_RATE: f64 = 0.1;

/// Gun heat at spawn; nobody can fire in the first ticks.
pub const INITIAL_GUN_HEAT: f64 = 3.0;

/// Radar detection range.
pub const SCAN_RANGE: f64 = 1200.0;

/// Damage each bot takes in a bot-to-bot collision.
pub const RAM_DAMAGE: f64 = 0.6;

/// Minimum distance between bots at spawn.
pub const SPAWN_SEPARATION: f64 = 120.0;

/// Bullet speed for a shot of `power`.
pub fn bullet_speed(power: f64) -> f64 {
    BULLET_BASE_SPEED - BULLET_SPEED_PER_POWER * power
}

/// Gun heat generated by a shot of `power`.
pub fn gun_heat(power: f64) -> f64 {
    1.0 + power / 5.0
}

/// Damage dealt by a bullet of `power`.
pub fn bullet_damage(power: f64) -> f64 {
    let mut damage = 4.0 * power;
    if power > 1.0 {
        damage += 2.0 * (power - 1.0);
    }
    damage
}

/// Energy returned to the shooter on a hit.
pub fn bullet_hit_bonus(power: f64) -> f64 {
    3.0 * power
}

/// Damage from driving into a wall at `speed`.
pub fn wall_damage(speed: f64) -> f64 {
    (speed.abs() / 2.0 - 1.0).max(0.0)
}

/// Body turn rate at the given speed.
pub fn turn_rate(speed: f64) -> f64 {
    MAX_TURN_RATE - TURN_RATE_SPEED_PENALTY * speed.abs()
}

/// Smallest arena side the harness accepts.
pub const MIN_ARENA_SIZE: f64 = 200.0;
