//! Performance statistics for kernel runs.
//!
//! Each worker keeps its own [`Stats`] and the driver merges them once the job is done,
//! so the counters need no synchronisation.

mod stats;
pub use stats::*;
