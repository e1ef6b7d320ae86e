//! Energy-driven choice between offensive and defensive movement.

use skirmish_core::enums::MovementMode;

/// Threshold selector with an optional hysteresis band.
///
/// With a zero band the mode is a pure function of energy: below the
/// threshold is defensive, the threshold itself is offensive.
#[derive(Debug, Clone)]
pub struct ModeSelector {
    threshold: f64,
    hysteresis: f64,
    current: MovementMode,
}

impl ModeSelector {
    pub fn new(threshold: f64, hysteresis: f64) -> Self {
        Self {
            threshold,
            hysteresis,
            current: MovementMode::Offensive,
        }
    }

    pub fn select(&mut self, energy: f64) -> MovementMode {
        let next = match self.current {
            MovementMode::Offensive if energy < self.threshold - self.hysteresis => {
                MovementMode::Defensive
            }
            MovementMode::Defensive if energy > self.threshold + self.hysteresis => {
                MovementMode::Offensive
            }
            // Without a band, returning to exactly the threshold is offensive.
            MovementMode::Defensive if self.hysteresis == 0.0 && energy >= self.threshold => {
                MovementMode::Offensive
            }
            current => current,
        };
        if next != self.current {
            log::debug!("mode {:?} -> {:?} at energy {energy:.1}", self.current, next);
            self.current = next;
        }
        next
    }

    pub fn current(&self) -> MovementMode {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let mut sel = ModeSelector::new(30.0, 0.0);
        assert_eq!(sel.select(30.0), MovementMode::Offensive);
        assert_eq!(sel.select(29.999), MovementMode::Defensive);
        assert_eq!(sel.select(30.0), MovementMode::Offensive);
        assert_eq!(sel.select(100.0), MovementMode::Offensive);
    }

    #[test]
    fn test_no_band_oscillates() {
        let mut sel = ModeSelector::new(30.0, 0.0);
        let modes: Vec<_> = [29.9, 30.1, 29.9, 30.1]
            .iter()
            .map(|&e| sel.select(e))
            .collect();
        assert_eq!(
            modes,
            vec![
                MovementMode::Defensive,
                MovementMode::Offensive,
                MovementMode::Defensive,
                MovementMode::Offensive
            ]
        );
    }

    #[test]
    fn test_hysteresis_band_holds_mode() {
        let mut sel = ModeSelector::new(30.0, 5.0);
        assert_eq!(sel.select(27.0), MovementMode::Offensive);
        assert_eq!(sel.select(24.9), MovementMode::Defensive);
        assert_eq!(sel.select(33.0), MovementMode::Defensive);
        assert_eq!(sel.select(35.0), MovementMode::Defensive);
        assert_eq!(sel.select(35.1), MovementMode::Offensive);
        assert_eq!(sel.current(), MovementMode::Offensive);
    }
}
