//! Single-target tracker.
//!
//! Keeps the best-known opponent from the stream of radar scans. The policy
//! is greedy: the weakest opponent seen so far wins, and fresh scans of the
//! current target always replace the stored record.

use serde::{Deserialize, Serialize};
use skirmish_core::state::OpponentObservation;

/// The observation currently selected as the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedTarget {
    pub observation: OpponentObservation,
}

impl TrackedTarget {
    pub fn id(&self) -> u32 {
        self.observation.id
    }

    /// Ticks elapsed since the observation was taken.
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.observation.tick)
    }
}

/// Owns at most one [`TrackedTarget`]. Targets are replaced, never removed.
#[derive(Debug, Clone, Default)]
pub struct TargetTracker {
    target: Option<TrackedTarget>,
}

impl TargetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scan. Returns true when the observation was adopted.
    pub fn observe(&mut self, obs: OpponentObservation) -> bool {
        let adopt = match &self.target {
            None => true,
            Some(current) => obs.id == current.id() || obs.energy < current.observation.energy,
        };
        if !adopt {
            return false;
        }

        match &self.target {
            Some(current) if current.id() != obs.id => {
                log::debug!(
                    "target switch {} -> {} (energy {:.1} < {:.1})",
                    current.id(),
                    obs.id,
                    obs.energy,
                    current.observation.energy
                );
            }
            None => log::debug!("target acquired {} at {:?}", obs.id, obs.position),
            _ => {}
        }
        self.target = Some(TrackedTarget { observation: obs });
        true
    }

    pub fn target(&self) -> Option<&TrackedTarget> {
        self.target.as_ref()
    }

    /// Age of the tracked target, or `None` when nothing has been seen yet.
    pub fn age(&self, now: u64) -> Option<u64> {
        self.target.as_ref().map(|t| t.age(now))
    }
}
