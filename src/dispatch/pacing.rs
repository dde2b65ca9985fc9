use std::time::Duration;

use crate::constants::DEFAULT_PACING_INTERVAL;

/// Decides how long after dispatch start the call for chunk `index` may begin.
///
/// Swapping the strategy changes only start times; aggregation and parsing are
/// unaffected.
pub trait PacingStrategy: Send + Sync {
    /// Offset from dispatch start for the chunk at `index` (0-based).
    fn delay_for(&self, index: usize) -> Duration;
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
pub fn millis_saturating(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Starts chunk `i` at `i * interval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStagger {
    interval: Duration,
}

impl FixedStagger {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedStagger {
    fn default() -> Self {
        Self::new(DEFAULT_PACING_INTERVAL)
    }
}

impl PacingStrategy for FixedStagger {
    fn delay_for(&self, index: usize) -> Duration {
        let factor = u32::try_from(index).unwrap_or(u32::MAX);
        self.interval.saturating_mul(factor)
    }
}

/// Starts every chunk immediately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Immediate;

impl PacingStrategy for Immediate {
    fn delay_for(&self, _index: usize) -> Duration {
        Duration::ZERO
    }
}
