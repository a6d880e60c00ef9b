//! Criterion benchmarks for the stakeval_core engine
//!
//! Run with: cargo bench -p stakeval_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use stakeval_core::compare::ComparisonTable;
use stakeval_core::config::ModelConfig;
use stakeval_core::engine::{Variant, compute};
use stakeval_core::model::Assumptions;

fn bench_compute(c: &mut Criterion) {
    let assumptions = Assumptions::new(20.0, 50.0, 8.0, 80.0, 25.0)
        .expect("bench assumptions in domain");

    let mut group = c.benchmark_group("compute");
    for variant in [Variant::StakeRevenue, Variant::UnstakedYield] {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant.label()),
            &variant,
            |b, variant| {
                b.iter(|| compute(black_box(&assumptions), *variant, black_box(1.1)));
            },
        );
    }
    group.finish();
}

/// The whole per-keypress pipeline: compute, build table, extract chart data
fn bench_full_pipeline(c: &mut Criterion) {
    let config = ModelConfig::sky();
    let baseline = config.baseline();
    let assumptions = Assumptions::new(20.0, 50.0, 8.0, 80.0, 25.0)
        .expect("bench assumptions in domain");

    c.bench_function("full_pipeline", |b| {
        b.iter(|| {
            let metrics = compute(
                black_box(&assumptions),
                config.variant,
                baseline.metrics.valuation,
            );
            let table = ComparisonTable::build(&baseline.metrics, &metrics);
            black_box(table.chart_series(&config.chart_fields))
        });
    });
}

criterion_group!(benches, bench_compute, bench_full_pipeline);
criterion_main!(benches);
