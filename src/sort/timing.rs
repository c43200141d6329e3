//! Delay policy derived from the speed control
//!
//! Three delays drive the animation, all derived from one base speed value.
//! The swap and pacing delays are fixed fractions of the base with floors so
//! fast settings still show the swap flash and inter-compare breathing room.

use std::time::Duration;

/// Base delay used when the speed field is empty, unparsable, or zero.
pub const DEFAULT_BASE_MS: u64 = 400;

/// Floor for the swap highlight window, in milliseconds.
const SWAP_FLOOR_MS: u64 = 60;

/// Floor for the pause between comparisons, in milliseconds.
const PACING_FLOOR_MS: u64 = 30;

/// The three suspension durations used by a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    base_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            base_ms: DEFAULT_BASE_MS,
        }
    }
}

impl Timing {
    /// Build from the user's speed value. Zero falls back to the default.
    pub fn from_base_ms(base_ms: u64) -> Self {
        Timing {
            base_ms: if base_ms == 0 { DEFAULT_BASE_MS } else { base_ms },
        }
    }

    /// Pause while a pair is highlighted for comparison.
    pub fn compare_delay(&self) -> Duration {
        Duration::from_millis(self.base_ms)
    }

    /// Pause while the swap highlight is shown, before values exchange.
    pub fn swap_delay(&self) -> Duration {
        Duration::from_millis((self.base_ms / 4).max(SWAP_FLOOR_MS))
    }

    /// Short pause between comparisons, swap or not.
    pub fn post_compare_delay(&self) -> Duration {
        Duration::from_millis((self.base_ms / 6).max(PACING_FLOOR_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratios() {
        let timing = Timing::default();
        assert_eq!(timing.compare_delay(), Duration::from_millis(400));
        assert_eq!(timing.swap_delay(), Duration::from_millis(100));
        assert_eq!(timing.post_compare_delay(), Duration::from_millis(66));
    }

    #[test]
    fn test_floors_at_low_base() {
        let timing = Timing::from_base_ms(40);
        assert_eq!(timing.compare_delay(), Duration::from_millis(40));
        assert_eq!(timing.swap_delay(), Duration::from_millis(60));
        assert_eq!(timing.post_compare_delay(), Duration::from_millis(30));
    }

    #[test]
    fn test_zero_base_falls_back_to_default() {
        assert_eq!(Timing::from_base_ms(0), Timing::default());
    }
}
