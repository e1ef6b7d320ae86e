//! Radar policy: sweep until something is tracked, then hold a lock.

use skirmish_core::config::BrainConfig;
use skirmish_core::constants::{RADAR_LOCK_GAIN, RADAR_SEARCH_TURN};
use skirmish_core::geometry::normalize_relative;
use skirmish_core::state::OwnState;

use crate::tracker::TrackedTarget;

/// Radar turn for this tick.
///
/// The lock overshoots the target bearing so the swept arc keeps crossing
/// the target from alternating sides. A stale target is treated as lost and
/// the radar goes back to a full sweep.
pub fn radar_turn(own: &OwnState, target: Option<&TrackedTarget>, config: &BrainConfig) -> f64 {
    match target {
        Some(t) if t.age(own.tick) <= config.stale_target_ticks => {
            let bearing = own.position.bearing_to(&t.observation.position);
            RADAR_LOCK_GAIN * normalize_relative(bearing - own.radar_heading)
        }
        _ => RADAR_SEARCH_TURN,
    }
}
