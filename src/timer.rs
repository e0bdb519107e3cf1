use std::time::Instant;

use crate::error::StageError;
use crate::registry::StageRegistry;
use crate::Result;

/// Handle for timing a named stage.
///
/// Construction validates the name but does not start timing; a scope begins
/// when [`StageTimer::start`] returns a guard and ends when the guard drops.
/// Cumulative results are queried through the shared accessors backed by the
/// process-wide registry:
///
/// ```
/// use stage_timer::StageTimer;
///
/// let timer = StageTimer::new("ingest")?;
/// {
///     let _scope = timer.start();
///     // timed work
/// }
/// let secs = StageTimer::get_stage_runtime("ingest")?;
/// assert!(secs >= 0.0);
/// # stage_timer::StageTimer::reset();
/// # Ok::<(), stage_timer::StageError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StageTimer {
    name: String,
}

impl StageTimer {
    /// Create a timer for `name`. Fails with [`StageError::InvalidName`] if
    /// the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(StageError::InvalidName);
        }
        Ok(Self { name })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enter a timed scope against the process-wide registry.
    #[inline]
    pub fn start(&self) -> ActiveStage<'_> {
        self.start_in(StageRegistry::global())
    }

    /// Enter a timed scope against an explicit registry.
    #[inline]
    pub fn start_in<'a>(&'a self, registry: &'a StageRegistry) -> ActiveStage<'a> {
        ActiveStage {
            stage: &self.name,
            registry,
            started: Instant::now(),
        }
    }

    /// Cumulative runtime in seconds recorded for `name` in the process-wide
    /// registry. Fails with [`StageError::NotFound`] if no scope under that
    /// name has completed. The reserved name `"total"` returns the sum of
    /// elapsed time across every completed scope.
    #[inline]
    pub fn get_stage_runtime(name: &str) -> Result<f64> {
        StageRegistry::global().runtime(name)
    }

    /// Clear the process-wide registry. Intended for test isolation.
    #[inline]
    pub fn reset() {
        StageRegistry::global().reset();
    }
}

/// RAII guard for an in-progress measurement.
///
/// Dropping the guard accumulates the elapsed time exactly once, on every
/// exit path including panic unwinding and `?` early returns.
#[must_use = "dropping the guard immediately records a near-zero duration"]
#[derive(Debug)]
pub struct ActiveStage<'a> {
    stage: &'a str,
    registry: &'a StageRegistry,
    started: Instant,
}

impl ActiveStage<'_> {
    /// Elapsed time so far, without ending the scope.
    #[inline]
    pub fn elapsed(&self) -> std::time::Duration {
        self.started.elapsed()
    }
}

impl Drop for ActiveStage<'_> {
    fn drop(&mut self) {
        self.registry.record(self.stage, self.started.elapsed());
    }
}

/// Time a block against the process-wide registry, yielding the block value.
///
/// An empty stage name records nothing; the block still runs.
#[macro_export]
macro_rules! measure {
    ($name:expr, $code:block) => {{
        let _timer = $crate::StageTimer::new($name).ok();
        let _scope = _timer.as_ref().map(|t| t.start());
        $code
    }};
}
