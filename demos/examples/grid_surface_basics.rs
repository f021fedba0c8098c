// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid surface basics.
//!
//! Build a 100x100 px warp grid, drag a control point, and print how the
//! surface and the sampled raster respond.
//!
//! Run:
//! - `cargo run -p understory_demos --example grid_surface_basics`

use kurbo::{Point, Vec2};
use understory_grid_surface::{CurveMode, GridSurface, ParametricSurface};

fn main() {
    let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
    println!(
        "lattice: {}x{} control points",
        grid.num_control_points_x(),
        grid.num_control_points_y()
    );

    let p = grid.surface_point(0.5, 0.5);
    println!("undeformed center: {}, {}", p.x, p.y);

    // Pull the center to the right and smooth the curves through it.
    grid.move_control_point(5, 5, Vec2::new(6.0, 0.0))
        .expect("center point has room to move");
    grid.set_row_mode(5, CurveMode::Cubic).expect("row 5 exists");
    grid.set_column_mode(5, CurveMode::Cubic).expect("column 5 exists");

    for u in [0.3, 0.4, 0.45, 0.5, 0.55, 0.6, 0.7] {
        let p = grid.surface_point(u, 0.5);
        println!("u = {u:.2}: {:.3}, {:.3}", p.x, p.y);
    }

    let raster = grid.generate_surface_points();
    let i = 2 * (50 * 100 + 50);
    println!(
        "raster: {} values, pixel (50, 50) samples {:.3}, {:.3}",
        raster.len(),
        raster[i],
        raster[i + 1]
    );
}
