// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Vec2};
use understory_grid_surface::{CurveMode, GridSurface, ParametricSurface};

/// A grid with every interior control point nudged, in the given curve mode.
fn deformed(size: u32, resolution: u32, mode: CurveMode) -> GridSurface {
    let mut grid = GridSurface::new(Point::ORIGIN, size, size, resolution, resolution);
    for row in 0..grid.num_control_points_y() {
        grid.set_row_mode(row, mode).unwrap();
    }
    for col in 0..grid.num_control_points_x() {
        grid.set_column_mode(col, mode).unwrap();
    }
    let quarter = f64::from(resolution) / 4.0;
    for row in 1..grid.num_control_points_y() - 1 {
        for col in 1..grid.num_control_points_x() - 1 {
            let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
            grid.move_control_point(row, col, Vec2::new(sign * quarter, -sign * quarter))
                .unwrap();
        }
    }
    grid
}

fn bench_surface_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_surface/surface_point");

    for (name, mode) in [("linear", CurveMode::Linear), ("cubic", CurveMode::Cubic)] {
        let grid = deformed(512, 16, mode);
        let params: Vec<(f64, f64)> = (0..1_024)
            .map(|i| {
                let t = f64::from(i) / 1_024.0;
                (t, (t * 7.0).fract())
            })
            .collect();
        group.throughput(Throughput::Elements(params.len() as u64));
        group.bench_with_input(BenchmarkId::new(name, params.len()), &params, |b, params| {
            b.iter(|| {
                for &(u, v) in params {
                    black_box(grid.surface_point(u, v));
                }
            });
        });
    }

    group.finish();
}

fn bench_generate_surface_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_surface/generate_surface_points");
    group.sample_size(20);

    for size in [64_u32, 256] {
        let grid = deformed(size, 8, CurveMode::Linear);
        group.throughput(Throughput::Elements(u64::from(size) * u64::from(size)));
        group.bench_with_input(BenchmarkId::new("fresh", size), &grid, |b, grid| {
            b.iter(|| black_box(grid.generate_surface_points()));
        });
        group.bench_with_input(BenchmarkId::new("reused", size), &grid, |b, grid| {
            let mut out = Vec::new();
            b.iter(|| {
                grid.generate_surface_points_into(&mut out);
                black_box(out.len());
            });
        });
    }

    group.finish();
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_surface/set_grid_resolution");

    for resolution in [16_u32, 8] {
        let grid = deformed(512, 32, CurveMode::Linear);
        group.bench_with_input(
            BenchmarkId::new("from_32", resolution),
            &resolution,
            |b, &resolution| {
                b.iter_batched(
                    || grid.clone(),
                    |mut grid| {
                        grid.set_grid_resolution(resolution, resolution).unwrap();
                        black_box(grid);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_surface_point,
    bench_generate_surface_points,
    bench_rebuild
);
criterion_main!(benches);
