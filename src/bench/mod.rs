//! Multi-threaded throughput jobs over a set of vector pairs.
//!
//! The kernel itself is single-threaded; parallelism lives here, one kernel call per
//! pair, with batches distributed to workers through an atomic counter.

mod job;

pub use job::*;
