use std::collections::HashMap;
use std::time::Duration;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::error::StageError;
use crate::record::StageRecord;
use crate::Result;

/// Reserved stage name that aggregates elapsed time across every stage.
pub const TOTAL_STAGE: &str = "total";

static GLOBAL_REGISTRY: Lazy<StageRegistry> = Lazy::new(StageRegistry::new);

/// Shared accumulator mapping stage names to cumulative runtime records.
///
/// A registry can be constructed explicitly and passed by reference, which
/// keeps measurements isolated (useful in tests). [`StageRegistry::global`]
/// returns the process-wide instance backing the `StageTimer` shared API.
#[derive(Debug, Default)]
pub struct StageRegistry {
    records: RwLock<HashMap<String, StageRecord>>,
}

impl StageRegistry {
    #[inline]
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry. Lazily created, lives for the process
    /// lifetime, no explicit teardown.
    #[inline]
    pub fn global() -> &'static StageRegistry {
        &GLOBAL_REGISTRY
    }

    /// Add `elapsed` to the named stage and to the `"total"` rollup.
    ///
    /// Both entries are updated under a single write-lock acquisition, so
    /// concurrent scope exits never lose an update. A stage literally named
    /// `"total"` accumulates exactly once.
    pub fn record(&self, name: &str, elapsed: Duration) {
        let mut records = self.records.write();
        records.entry(name.to_owned()).or_default().record(elapsed);
        if name != TOTAL_STAGE {
            records
                .entry(TOTAL_STAGE.to_owned())
                .or_default()
                .record(elapsed);
        }
        drop(records);

        tracing::trace!(stage = name, elapsed_ns = elapsed.as_nanos() as u64, "stage recorded");
    }

    /// Cumulative runtime in seconds for the named stage.
    pub fn runtime(&self, name: &str) -> Result<f64> {
        self.records
            .read()
            .get(name)
            .map(StageRecord::cumulative_secs)
            .ok_or_else(|| StageError::not_found(name))
    }

    /// Full statistics for the named stage, if any scope has completed.
    #[inline]
    pub fn record_for(&self, name: &str) -> Option<StageRecord> {
        self.records.read().get(name).cloned()
    }

    /// Clone of every stage record, including the `"total"` rollup.
    #[inline]
    pub fn snapshot(&self) -> HashMap<String, StageRecord> {
        self.records.read().clone()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Clear every record. Intended for test isolation.
    #[inline]
    pub fn reset(&self) {
        self.records.write().clear();
    }
}
