// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_spline::{Curve, CurveMode};

fn samples(len: usize) -> (Vec<f64>, Vec<f64>) {
    let xs: Vec<f64> = (0..len).map(|i| i as f64 * 10.0).collect();
    let ys: Vec<f64> = xs.iter().map(|x| (x * 0.05).sin() * 20.0).collect();
    (xs, ys)
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline/evaluate");

    for len in [8_usize, 64, 512] {
        let (xs, ys) = samples(len);
        let end = xs[len - 1];
        let queries: Vec<f64> = (0..1_000).map(|i| end * f64::from(i) / 1_000.0).collect();
        group.throughput(Throughput::Elements(queries.len() as u64));

        for (name, mode) in [("linear", CurveMode::Linear), ("cubic", CurveMode::Cubic)] {
            let curve = Curve::new(mode, &xs, &ys).unwrap();
            group.bench_with_input(BenchmarkId::new(name, len), &queries, |b, queries| {
                b.iter(|| {
                    for &x in queries {
                        black_box(curve.evaluate(x));
                    }
                });
            });
        }
    }

    group.finish();
}

fn bench_move_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("spline/move_point");

    // Linear edits are bookkeeping; cubic edits refit the whole curve.
    for len in [8_usize, 64, 512] {
        let (xs, ys) = samples(len);
        for (name, mode) in [("linear", CurveMode::Linear), ("cubic", CurveMode::Cubic)] {
            let mut curve = Curve::new(mode, &xs, &ys).unwrap();
            let mid = len / 2;
            let mut up = true;
            group.bench_function(BenchmarkId::new(name, len), |b| {
                b.iter(|| {
                    let dy = if up { 1.0 } else { -1.0 };
                    up = !up;
                    curve.move_point(mid, 0.0, dy).unwrap();
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_move_point);
criterion_main!(benches);
