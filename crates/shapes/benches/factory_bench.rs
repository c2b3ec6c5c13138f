//! Criterion microbenches for random generation and descriptor dedup.
//!
//! - factory: single draws and batches of 10 / 1000.
//! - canvas: dedup over 1000 shapes with a narrow and a wide dimension range.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use shapes::api::{Canvas, FactoryParams, IdGen, ShapeFactory};
use std::sync::Arc;

fn factory(seed: u64, params: FactoryParams) -> ShapeFactory {
    ShapeFactory::new(params, seed)
        .unwrap()
        .with_ids(Arc::new(IdGen::new()))
}

fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory");
    group.bench_function(BenchmarkId::new("generate_random_shape", "1-100"), |b| {
        let mut f = factory(42, FactoryParams::default());
        b.iter(|| f.generate_random_shape())
    });
    for n in [10usize, 1000] {
        group.bench_function(BenchmarkId::new("generate", n), |b| {
            let mut f = factory(7, FactoryParams::default());
            b.iter(|| f.generate(n))
        });
    }
    group.finish();
}

fn bench_canvas(c: &mut Criterion) {
    let mut group = c.benchmark_group("canvas");
    let ranges = [
        ("narrow", FactoryParams { dim_min: 1, dim_max: 5 }),
        ("wide", FactoryParams::default()),
    ];
    for (name, params) in ranges {
        group.bench_function(BenchmarkId::new("dedup_1000", name), |b| {
            b.iter_batched(
                || factory(9, params).generate(1000),
                Canvas::new,
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_factory, bench_canvas);
criterion_main!(benches);
