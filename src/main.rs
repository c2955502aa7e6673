use hamsimd::{
    bench::{JobParams, run_job},
    dataset::{PairParams, VectorPairs},
    errors::Result,
    fs::VectorSet,
    numerics::LaneWidth,
};
use clap::Parser;
use std::{path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Throughput benchmark for the SIMD Hamming kernel
#[derive(Parser, Debug)]
#[command(name = "hamsimd")]
#[command(about = "Benchmarks the SIMD float Hamming distance kernel", long_about = None)]
struct Args {
    /// Vector dimensions to generate (comma-separated list, e.g., "16,128,960")
    #[arg(short, long, value_delimiter = ',', default_value = "128")]
    dims: Vec<usize>,

    /// Number of threads to use (comma-separated list, e.g., "1,2,4,8")
    #[arg(short, long, value_delimiter = ',', default_value = "1")]
    threads: Vec<usize>,

    /// Number of vector pairs per generated workload
    #[arg(short, long, default_value_t = 100_000)]
    num_pairs: usize,

    /// Probability for an element of a pair to differ
    #[arg(short, long, default_value_t = 0.1)]
    mismatch_rate: f64,

    /// Seed of the workload generator
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Path to a 2-d f32 numpy file. Consecutive rows are compared pairwise and
    /// `--dims` is ignored
    #[arg(short, long)]
    vectors: Option<PathBuf>,

    /// Base register width of the kernel: 4, 8 or 16 lanes
    #[arg(short, long, default_value_t = 4)]
    lanes: usize,

    /// Print one JSON report per job instead of plain text
    #[arg(long)]
    json: bool,
}

fn workloads(args: &Args) -> Result<Vec<Arc<VectorPairs>>> {
    if let Some(path) = &args.vectors {
        info!(?path, "loading vectors");
        let rows = Vec::<Vec<f32>>::load_from_npy(path)?;
        return Ok(vec![Arc::new(VectorPairs::from_rows(rows)?)]);
    }

    args.dims
        .iter()
        .map(|&dim| {
            VectorPairs::generate(PairParams {
                num_pairs: args.num_pairs,
                dim,
                mismatch_rate: args.mismatch_rate,
                seed: args.seed,
            })
            .map(Arc::new)
        })
        .collect()
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let width = LaneWidth::try_from(args.lanes)?;

    let workloads = workloads(&args)?;

    info!(
        workloads = workloads.len(),
        threads = ?args.threads,
        lanes = width.lanes(),
        "starting sweep"
    );

    for pairs in &workloads {
        for &num_threads in &args.threads {
            let report = run_job(Arc::clone(pairs), JobParams { num_threads, width })?;

            if args.json {
                println!(
                    "{}",
                    serde_json::to_string(&report).map_err(std::io::Error::from)?
                );
            } else {
                println!(
                    "dim={} threads={} lanes={}: {} pairs in {:.3}s ({:.2} pairs/s), mismatch ratio {:.4}",
                    report.dim,
                    report.threads,
                    report.width.lanes(),
                    report.pairs,
                    report.elapsed_secs,
                    report.pairs_per_sec,
                    report.stats.mismatch_ratio()
                );
            }
        }
    }

    info!("all jobs completed");
    Ok(())
}
