use std::{
    hint::black_box,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::Instant,
};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    dataset::VectorPairs,
    errors::{HamError, Result},
    numerics::{LaneWidth, MIN_VECTORIZED_LEN},
    statistics::Stats,
};

/// Pairs handed to a worker at a time.
const BATCH_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy)]
pub struct JobParams {
    pub num_threads: usize,
    pub width: LaneWidth,
}

/// Outcome of one benchmark job.
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    pub dim: usize,
    pub pairs: usize,
    pub threads: usize,
    pub width: LaneWidth,
    pub checksum: f64,
    pub elapsed_secs: f64,
    pub pairs_per_sec: f64,
    pub stats: Stats,
}

/// Runs the kernel over every pair of `pairs`, spread over `num_threads` workers that
/// pull batches from a shared counter.
///
/// The sum of all distances is compared to the scalar reference afterwards.
///
/// # Errors
/// [`HamError::InvalidParameter`] for zero threads or vectors too short for the kernel,
/// [`HamError::Checksum`] if the kernel and the reference disagree.
pub fn run_job(pairs: Arc<VectorPairs>, params: JobParams) -> Result<JobReport> {
    if params.num_threads == 0 {
        return Err(HamError::InvalidParameter(
            "at least one thread is required".to_string(),
        ));
    }
    if !pairs.is_empty() && pairs.dim() < MIN_VECTORIZED_LEN {
        return Err(HamError::InvalidParameter(format!(
            "dimension {} is below the kernel minimum of {}",
            pairs.dim(),
            MIN_VECTORIZED_LEN
        )));
    }

    let num_pairs = pairs.len();
    let start_time = Instant::now();

    let next_batch = Arc::new(AtomicUsize::new(0));
    let handles: Vec<_> = (0..params.num_threads)
        .map(|thread_id| {
            let pairs = Arc::clone(&pairs);
            let next_batch = Arc::clone(&next_batch);
            let width = params.width;

            thread::spawn(move || {
                let mut local_checksum = 0.0f64;
                let mut local_stats = Stats::new();

                loop {
                    let batch_start = next_batch.fetch_add(BATCH_SIZE, Ordering::Relaxed);
                    if batch_start >= num_pairs {
                        break;
                    }
                    let batch_end = std::cmp::min(batch_start + BATCH_SIZE, num_pairs);

                    for index in batch_start..batch_end {
                        let (a, b) = pairs.pair(index);
                        let dist = black_box(width.distance(a, b, a.len()));
                        local_stats.bump_call(a.len(), dist);
                        local_checksum += dist as f64;
                    }
                }

                debug!(thread_id, calls = local_stats.get_kernel_calls(), "worker done");
                (local_checksum, local_stats)
            })
        })
        .collect();

    let mut checksum = 0.0;
    let mut combined_stats = Stats::new();
    for handle in handles {
        let (local_checksum, local_stats) = handle.join().map_err(|_| HamError::WorkerPanic)?;
        checksum += local_checksum;
        combined_stats = combined_stats.merge(&local_stats);
    }

    let elapsed = start_time.elapsed();

    let expected: f64 = pairs.expected_distances().iter().map(|&d| d as f64).sum();
    if expected != checksum {
        return Err(HamError::Checksum {
            expected,
            got: checksum,
        });
    }

    let elapsed_secs = elapsed.as_secs_f64();
    let pairs_per_sec = if elapsed_secs > 0.0 {
        num_pairs as f64 / elapsed_secs
    } else {
        0.0
    };

    info!(
        dim = pairs.dim(),
        threads = params.num_threads,
        lanes = params.width.lanes(),
        pairs_per_sec,
        "job completed"
    );

    Ok(JobReport {
        dim: pairs.dim(),
        pairs: num_pairs,
        threads: params.num_threads,
        width: params.width,
        checksum,
        elapsed_secs,
        pairs_per_sec,
        stats: combined_stats,
    })
}
