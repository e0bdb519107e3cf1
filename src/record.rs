use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Accumulated statistics for a single stage. Durations are stored as
/// nanosecond integers so repeated additions never lose precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageRecord {
    count: u64,
    sum_ns: u64,
    min_ns: u64,
    max_ns: u64,
}

impl StageRecord {
    #[inline]
    pub fn new() -> Self {
        Self {
            count: 0,
            sum_ns: 0,
            min_ns: u64::MAX,
            max_ns: 0,
        }
    }

    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        let ns = elapsed.as_nanos() as u64;

        self.count += 1;
        self.sum_ns = self.sum_ns.saturating_add(ns);
        self.min_ns = self.min_ns.min(ns);
        self.max_ns = self.max_ns.max(ns);
    }

    /// Number of completed scopes recorded against this stage.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Total elapsed time across all completed scopes.
    #[inline]
    pub fn cumulative(&self) -> Duration {
        Duration::from_nanos(self.sum_ns)
    }

    /// Total elapsed time in seconds.
    #[inline]
    pub fn cumulative_secs(&self) -> f64 {
        self.cumulative().as_secs_f64()
    }

    #[inline]
    pub fn min(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(self.min_ns)
        }
    }

    #[inline]
    pub fn max(&self) -> Duration {
        Duration::from_nanos(self.max_ns)
    }

    #[inline]
    pub fn mean(&self) -> Duration {
        if self.count == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(self.sum_ns / self.count)
        }
    }
}

impl Default for StageRecord {
    fn default() -> Self {
        Self::new()
    }
}
