//! Scoped stage timing with a shared cumulative runtime registry.
//!
//! Label regions of code as named stages and accumulate their wall-clock
//! time across repeated executions. Every completed scope also feeds the
//! reserved `"total"` stage, so the overall runtime is always one query
//! away. Accumulation happens on scope exit through an RAII guard, so a
//! panic or early return inside the measured region never loses the
//! elapsed time.

pub mod error;
pub mod record;
pub mod registry;
pub mod timer;

pub use error::StageError;
pub use record::StageRecord;
pub use registry::{StageRegistry, TOTAL_STAGE};
pub use timer::{ActiveStage, StageTimer};

pub type Result<T> = std::result::Result<T, StageError>;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
