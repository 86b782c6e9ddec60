use criterion::*;
use std::hint::black_box;

use float_pitfalls::{repeated_sum, sequential_sum, tenth, DoubleDouble, Precision};

mod common;
use common::*;

fn repeated_benchmark<T: Precision>(group: &mut BenchmarkGroup<'_, measurement::WallTime>) {
    let value = tenth::<T>();
    group.bench_function(T::NAME, |b| {
        b.iter(|| black_box(repeated_sum(black_box(value), VALUES_SMALL)));
    });
}

fn precision_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("repeated_tenth_100k");
    group.throughput(Throughput::Elements(VALUES_SMALL as u64));

    repeated_benchmark::<f32>(&mut group);
    repeated_benchmark::<f64>(&mut group);
    repeated_benchmark::<DoubleDouble>(&mut group);

    group.finish();
}

fn extended_sum_benchmark(c: &mut Criterion) {
    let values = make_values::<DoubleDouble>(VALUES_SMALL);

    c.bench_function("sequential_double_double_100k", |b| {
        b.iter(|| black_box(sequential_sum(black_box(&values))));
    });
}

criterion_group!(benches, precision_benchmark, extended_sum_benchmark);
criterion_main!(benches);
