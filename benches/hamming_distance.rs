use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hamsimd::numerics::{LaneWidth, hamming_distance_scalar};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming_distance");

    for dim in [16, 128, 960] {
        let a: Vec<f32> = (0..dim).map(|i| (i % 5) as f32).collect();
        let b: Vec<f32> = (0..dim).map(|i| (i % 3) as f32).collect();

        for width in [LaneWidth::X4, LaneWidth::X8, LaneWidth::X16] {
            group.bench_with_input(
                BenchmarkId::new(format!("simd_x{}", width.lanes()), dim),
                &dim,
                |bencher, &dim| {
                    bencher.iter(|| width.distance(black_box(&a), black_box(&b), dim))
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("scalar", dim), &dim, |bencher, _| {
            bencher.iter(|| hamming_distance_scalar(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

fn custom_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5))
}

criterion_group! {
    name = benches;
    config = custom_criterion();
    targets = criterion_benchmark
}
criterion_main!(benches);
