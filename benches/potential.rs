//! Benchmark suite for the pairwise potential variants
//!
//! Every compiled-in variant is measured on the same uniform point set for a
//! few sizes, so the criterion report compares them side by side.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use softpot::{all_variants, PointDistribution, PointSet};

const SOFTENING: f64 = 1e-2;

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_potential");
    let mut rng = StdRng::seed_from_u64(2024);

    for n in [100usize, 500, 1000] {
        let points = PointSet::sample(n, PointDistribution::Uniform, &mut rng)
            .expect("uniform sampling");
        for variant in all_variants() {
            let Some(kernel) = variant.kernel() else {
                continue;
            };
            group.bench_with_input(BenchmarkId::new(variant.name, n), &points, |b, points| {
                b.iter(|| (kernel.func)(black_box(points), black_box(SOFTENING)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_variants);
criterion_main!(benches);
