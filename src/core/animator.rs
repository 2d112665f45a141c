use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Reveal progress of the current frame.
///
/// `phase_x` limits how many entries are laid out, `phase_y` scales bar
/// heights from the baseline. Both stay within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationPhase {
    phase_x: f64,
    phase_y: f64,
}

impl Default for AnimationPhase {
    fn default() -> Self {
        Self::COMPLETE
    }
}

impl AnimationPhase {
    pub const COMPLETE: Self = Self {
        phase_x: 1.0,
        phase_y: 1.0,
    };

    pub fn new(phase_x: f64, phase_y: f64) -> ChartResult<Self> {
        for (name, value) in [("phase_x", phase_x), ("phase_y", phase_y)] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "animation `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(Self { phase_x, phase_y })
    }

    #[must_use]
    pub fn phase_x(self) -> f64 {
        self.phase_x
    }

    #[must_use]
    pub fn phase_y(self) -> f64 {
        self.phase_y
    }

    /// Number of leading entries revealed: `min(ceil(count * phase_x), count)`.
    #[must_use]
    pub fn visible_entry_count(self, entry_count: usize) -> usize {
        let revealed = (entry_count as f64 * self.phase_x).ceil();
        if revealed <= 0.0 {
            0
        } else {
            (revealed as usize).min(entry_count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AnimationPhase;

    #[test]
    fn rejects_out_of_range_phases() {
        assert!(AnimationPhase::new(1.5, 1.0).is_err());
        assert!(AnimationPhase::new(1.0, -0.1).is_err());
        assert!(AnimationPhase::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn partial_reveal_rounds_up() {
        let phase = AnimationPhase::new(0.25, 1.0).expect("phase");
        assert_eq!(phase.visible_entry_count(10), 3);
        assert_eq!(phase.visible_entry_count(0), 0);
        assert_eq!(AnimationPhase::new(0.0, 1.0).expect("phase").visible_entry_count(10), 0);
        assert_eq!(AnimationPhase::COMPLETE.visible_entry_count(7), 7);
    }
}
