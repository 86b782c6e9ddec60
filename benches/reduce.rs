use criterion::*;
use std::hint::black_box;

use float_pitfalls::{kahan_sequential, sequential_sum};

mod common;
use common::*;

fn sequential_benchmark(c: &mut Criterion) {
    let values = make_values::<f32>(VALUES_MED);

    let mut group = c.benchmark_group("sequential");
    group.throughput(Throughput::Elements(VALUES_MED as u64));

    group.bench_function("plain_f32_1M", |b| {
        b.iter(|| black_box(sequential_sum(black_box(&values))));
    });

    group.bench_function("kahan_f32_1M", |b| {
        b.iter(|| black_box(kahan_sequential(black_box(&values))));
    });

    group.finish();
}

fn team_benchmark(c: &mut Criterion) {
    let values = make_values::<f64>(VALUES_MED);

    let mut group = c.benchmark_group("team");
    group.throughput(Throughput::Elements(VALUES_MED as u64));

    for workers in WORKER_COUNTS {
        let team = make_team(workers);

        group.bench_with_input(BenchmarkId::new("parallel_f64_1M", workers), &workers, |b, _| {
            b.iter(|| black_box(team.parallel_sum(black_box(&values)).total));
        });

        group.bench_with_input(BenchmarkId::new("kahan_f64_1M", workers), &workers, |b, _| {
            b.iter(|| black_box(team.kahan_sum(black_box(&values)).total));
        });
    }

    group.finish();
}

criterion_group!(benches, sequential_benchmark, team_benchmark);
criterion_main!(benches);
