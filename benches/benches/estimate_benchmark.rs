//! Quote estimation benchmarks.
//!
//! Run with: `cargo bench --package movequote-bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use movequote_bench::ROUTES;
use movequote_lib::prelude::*;

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::global();
    let mut group = c.benchmark_group("estimate");

    for route in ROUTES {
        let request = route.request(MoveSize::OneBedroom, true);
        group.bench_with_input(BenchmarkId::new("quote", route.name), &request, |b, req| {
            b.iter(|| estimator.estimate(black_box(req)));
        });
    }

    group.finish();
}

fn price_benchmark(c: &mut Criterion) {
    c.bench_function("compute_price", |b| {
        b.iter(|| {
            MoveSize::all()
                .iter()
                .map(|size| compute_price(black_box(439.92), *size, black_box(true)))
                .sum::<f64>()
        });
    });
}

criterion_group!(benches, estimate_benchmark, price_benchmark);
criterion_main!(benches);
