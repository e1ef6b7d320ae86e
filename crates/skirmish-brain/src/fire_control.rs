//! Fire control gate: how hard to shoot, and whether to shoot at all.

use serde::{Deserialize, Serialize};
use skirmish_core::config::BrainConfig;
use skirmish_core::constants::*;

/// Everything the gate looks at for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireInput {
    pub distance: f64,
    pub confidence: f64,
    pub gun_bearing_error: f64,
    pub weapon_ready: bool,
    pub own_energy: f64,
    pub target_energy: f64,
}

/// Gate verdict. `power` is always legal and affordable, even when not firing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FireDecision {
    pub power: f64,
    pub should_fire: bool,
}

/// Firepower bracket by distance.
pub fn base_power(distance: f64) -> f64 {
    if distance <= 50.0 {
        3.0
    } else if distance <= 150.0 {
        2.5
    } else if distance <= 300.0 {
        2.0
    } else if distance <= 450.0 {
        1.5
    } else {
        1.0
    }
}

/// Clamp to the legal range, then to what we can afford.
fn clamp_power(power: f64, own_energy: f64) -> f64 {
    power
        .clamp(MIN_FIRE_POWER, MAX_FIRE_POWER)
        .min(own_energy.max(0.0))
}

/// Bracket power modulated by the energy situation.
///
/// A large energy lead goes to maximum power. A nearly dead target gets a
/// finishing shot when close enough, overriding the lead rule.
pub fn modulated_power(
    distance: f64,
    own_energy: f64,
    target_energy: f64,
    config: &BrainConfig,
) -> f64 {
    let mut power = base_power(distance);
    if own_energy > target_energy + config.dominance_margin {
        power = MAX_FIRE_POWER;
    }
    if target_energy < config.finishing_energy {
        if distance < 100.0 {
            power = 3.0;
        } else if distance < 300.0 {
            power = 2.5;
        }
    }
    power
}

/// Power handed to the firing solution for computing bullet speed.
pub fn aim_power(distance: f64, own_energy: f64, target_energy: f64, config: &BrainConfig) -> f64 {
    clamp_power(
        modulated_power(distance, own_energy, target_energy, config),
        own_energy,
    )
}

/// Largest gun bearing error at which a shot is released.
pub fn angle_tolerance(distance: f64, confidence: f64, config: &BrainConfig) -> f64 {
    if distance < config.point_blank_distance {
        config.point_blank_tolerance
    } else {
        config.base_angle_tolerance * confidence
    }
}

/// Decide the shot for this tick.
pub fn decide(input: &FireInput, config: &BrainConfig) -> FireDecision {
    let aim = aim_power(
        input.distance,
        input.own_energy,
        input.target_energy,
        config,
    );
    let scaled = if input.distance < config.point_blank_distance {
        aim
    } else {
        aim * input.confidence.max(MIN_POWER_SCALE)
    };
    let power = clamp_power(scaled, input.own_energy);

    let should_fire = input.distance <= config.max_shooting_distance
        && input.confidence > config.min_fire_confidence
        && input.gun_bearing_error.abs() < angle_tolerance(input.distance, input.confidence, config)
        && input.weapon_ready
        && input.own_energy >= MIN_FIRE_POWER;

    FireDecision { power, should_fire }
}
