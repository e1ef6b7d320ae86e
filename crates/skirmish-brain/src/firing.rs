//! Predictive firing solution.
//!
//! Linear, first-order lead: the target is assumed to keep its heading and
//! speed for the bullet's flight time to its current position.

use serde::{Deserialize, Serialize};
use skirmish_core::config::BrainConfig;
use skirmish_core::constants::*;
use skirmish_core::geometry::{heading_vector, normalize_relative};
use skirmish_core::state::OwnState;
use skirmish_core::types::Position;

use crate::tracker::TrackedTarget;

/// Where to aim, and how much to trust the aim.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FiringSolution {
    /// Target position at bullet arrival.
    pub predicted: Position,
    /// Distance to the target's reported position.
    pub distance: f64,
    pub bullet_speed: f64,
    /// Ticks for a bullet to cover `distance`.
    pub time_to_hit: f64,
    /// Gun turn needed to point at `predicted` (positive = left).
    pub gun_bearing_error: f64,
    /// Aiming confidence in [0, 1].
    pub confidence: f64,
}

/// Bullet speed for a given firepower.
pub fn bullet_speed(fire_power: f64) -> f64 {
    BULLET_BASE_SPEED - BULLET_SPEED_PER_POWER * fire_power
}

/// Compute the firing solution against `target` for a bullet of `fire_power`.
///
/// `fire_power` must already be clamped to the legal range.
pub fn solve(
    own: &OwnState,
    target: &TrackedTarget,
    fire_power: f64,
    config: &BrainConfig,
) -> FiringSolution {
    let obs = &target.observation;
    let distance = own.position.distance_to(&obs.position);

    let bullet_speed = bullet_speed(fire_power);
    debug_assert!(
        bullet_speed > 0.0,
        "bullet speed {bullet_speed} for power {fire_power}"
    );
    let time_to_hit = distance / bullet_speed;

    let (hx, hy) = heading_vector(obs.heading);
    let lead = obs.speed * time_to_hit;
    let predicted = Position::new(obs.position.x + hx * lead, obs.position.y + hy * lead);

    let gun_bearing_error =
        normalize_relative(own.position.bearing_to(&predicted) - own.gun_heading);

    let confidence = if target.age(own.tick) > config.stale_target_ticks {
        0.0
    } else {
        confidence(
            distance,
            obs.speed,
            gun_bearing_error,
            config.point_blank_distance,
            config.angle_aware_confidence,
        )
    };

    FiringSolution {
        predicted,
        distance,
        bullet_speed,
        time_to_hit,
        gun_bearing_error,
        confidence,
    }
}

/// Aiming confidence from distance, target speed and remaining gun error.
///
/// Point-blank targets get a fixed high confidence; beyond that the three
/// factors multiply. The jump at `point_blank_distance` is deliberate.
pub fn confidence(
    distance: f64,
    target_speed: f64,
    gun_bearing_error: f64,
    point_blank_distance: f64,
    angle_aware: bool,
) -> f64 {
    if distance < point_blank_distance {
        return POINT_BLANK_CONFIDENCE;
    }

    let distance_factor = (1.0 - distance / CONFIDENCE_RANGE).max(0.0);
    let speed_factor =
        1.0 - target_speed.abs().min(CONFIDENCE_SPEED_CAP) / CONFIDENCE_SPEED_SCALE;
    let mut c = distance_factor * speed_factor;
    if angle_aware {
        c *= 1.0
            - gun_bearing_error.abs().min(CONFIDENCE_GUN_TURN_CAP) / CONFIDENCE_GUN_TURN_SCALE;
    }
    c.clamp(0.0, 1.0)
}
