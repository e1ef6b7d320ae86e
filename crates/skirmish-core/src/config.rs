//! Tuning configuration for the agent.
//!
//! Every threshold, distance and shape parameter of the control core lives
//! here so that bot variants differ only in data. Missing JSON fields fall
//! back to the defaults in [`crate::constants`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
    #[error("arena {width}x{height} leaves no room inside padding {padding}")]
    ArenaTooSmall {
        width: f64,
        height: f64,
        padding: f64,
    },
}

/// Tunable parameters of the targeting and movement core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrainConfig {
    // --- Mode selection ---
    /// Own energy below which the agent turns defensive.
    pub low_energy_threshold: f64,
    /// Half-width of the optional hysteresis band around the threshold. 0 disables it.
    pub mode_hysteresis: f64,

    // --- Offensive strafe ---
    pub tracking_distance: f64,
    pub tracking_tolerance: f64,
    pub max_approach_step: f64,
    pub strafe_step: f64,

    // --- Defensive wave ---
    pub wave_amplitude: f64,
    pub wave_period: f64,
    pub wave_step: f64,
    pub wave_max_moves: u32,
    pub wave_bounds_slack: f64,

    // --- Arena boundary ---
    pub padding: f64,
    pub boundary_recovery_distance: f64,
    pub wall_retreat_distance: f64,
    pub wall_proximity: f64,

    // --- Fire control ---
    pub max_shooting_distance: f64,
    pub min_fire_confidence: f64,
    pub point_blank_distance: f64,
    pub point_blank_tolerance: f64,
    pub base_angle_tolerance: f64,
    /// Multiply the confidence by the gun-turn factor.
    pub angle_aware_confidence: bool,
    pub dominance_margin: f64,
    pub finishing_energy: f64,
    /// Observations older than this are tracked but never fired upon.
    pub stale_target_ticks: u64,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            low_energy_threshold: LOW_ENERGY_THRESHOLD,
            mode_hysteresis: 0.0,
            tracking_distance: TRACKING_DISTANCE,
            tracking_tolerance: TRACKING_TOLERANCE,
            max_approach_step: MAX_APPROACH_STEP,
            strafe_step: STRAFE_STEP,
            wave_amplitude: WAVE_AMPLITUDE,
            wave_period: WAVE_PERIOD,
            wave_step: WAVE_STEP,
            wave_max_moves: WAVE_MAX_MOVES,
            wave_bounds_slack: WAVE_BOUNDS_SLACK,
            padding: ARENA_PADDING,
            boundary_recovery_distance: BOUNDARY_RECOVERY_DISTANCE,
            wall_retreat_distance: WALL_RETREAT_DISTANCE,
            wall_proximity: WALL_PROXIMITY,
            max_shooting_distance: MAX_SHOOTING_DISTANCE,
            min_fire_confidence: MIN_FIRE_CONFIDENCE,
            point_blank_distance: POINT_BLANK_DISTANCE,
            point_blank_tolerance: POINT_BLANK_TOLERANCE,
            base_angle_tolerance: BASE_ANGLE_TOLERANCE,
            angle_aware_confidence: true,
            dominance_margin: DOMINANCE_MARGIN,
            finishing_energy: FINISHING_ENERGY,
            stale_target_ticks: STALE_TARGET_TICKS,
        }
    }
}

impl BrainConfig {
    /// Parse and validate a JSON config. Unspecified fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: BrainConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values that would break the control loop's invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("tracking_distance", self.tracking_distance),
            ("max_approach_step", self.max_approach_step),
            ("strafe_step", self.strafe_step),
            ("wave_period", self.wave_period),
            ("wave_step", self.wave_step),
            ("boundary_recovery_distance", self.boundary_recovery_distance),
            ("wall_retreat_distance", self.wall_retreat_distance),
            ("max_shooting_distance", self.max_shooting_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("low_energy_threshold", self.low_energy_threshold),
            ("mode_hysteresis", self.mode_hysteresis),
            ("tracking_tolerance", self.tracking_tolerance),
            ("wave_amplitude", self.wave_amplitude),
            ("wave_bounds_slack", self.wave_bounds_slack),
            ("padding", self.padding),
            ("wall_proximity", self.wall_proximity),
            ("point_blank_distance", self.point_blank_distance),
            ("point_blank_tolerance", self.point_blank_tolerance),
            ("base_angle_tolerance", self.base_angle_tolerance),
            ("dominance_margin", self.dominance_margin),
            ("finishing_energy", self.finishing_energy),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0, got {value}")));
            }
        }

        if self.wave_max_moves == 0 {
            return Err(ConfigError::Invalid("wave_max_moves must be >= 1".into()));
        }
        if !(0.0..=1.0).contains(&self.min_fire_confidence) {
            return Err(ConfigError::Invalid(format!(
                "min_fire_confidence must be within [0, 1], got {}",
                self.min_fire_confidence
            )));
        }
        if self.mode_hysteresis > self.low_energy_threshold {
            return Err(ConfigError::Invalid(format!(
                "mode_hysteresis {} exceeds low_energy_threshold {}",
                self.mode_hysteresis, self.low_energy_threshold
            )));
        }
        Ok(())
    }
}
