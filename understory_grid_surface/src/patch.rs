// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bilinearly blended Coons patch over one lattice cell.

use kurbo::{Point, Vec2};
use understory_spline::Curve;

/// One lattice cell: four boundary curves and four corners.
///
/// Corners are named by side, X first: `p10` is the higher-X, lower-Y
/// corner. Column curves map Y to X, row curves map X to Y.
#[derive(Clone, Copy, Debug)]
pub(crate) struct CoonsPatch<'a> {
    pub(crate) col0: &'a Curve,
    pub(crate) col1: &'a Curve,
    pub(crate) row0: &'a Curve,
    pub(crate) row1: &'a Curve,
    pub(crate) p00: Point,
    pub(crate) p10: Point,
    pub(crate) p01: Point,
    pub(crate) p11: Point,
}

impl CoonsPatch<'_> {
    /// Evaluates the patch at local parameters `(nu, nv)` in `[0, 1]²`.
    ///
    /// The result reproduces the corners at the four parameter corners and
    /// the boundary curves along the four parameter edges.
    pub(crate) fn evaluate(&self, nu: f64, nv: f64) -> Point {
        let bilinear = self.p00.to_vec2() * ((1.0 - nv) * (1.0 - nu))
            + self.p01.to_vec2() * (nv * (1.0 - nu))
            + self.p10.to_vec2() * ((1.0 - nv) * nu)
            + self.p11.to_vec2() * (nv * nu);

        // Ruled surface between the two column curves, each sampled at the
        // height where the cell edge crosses `nv`.
        let y0 = lerp(self.p00.y, self.p01.y, nv);
        let y1 = lerp(self.p10.y, self.p11.y, nv);
        let along_cols = blend(
            Vec2::new(self.col0.evaluate(y0), y0),
            Vec2::new(self.col1.evaluate(y1), y1),
            nu,
        );

        // Same between the two row curves.
        let x0 = lerp(self.p00.x, self.p10.x, nu);
        let x1 = lerp(self.p01.x, self.p11.x, nu);
        let along_rows = blend(
            Vec2::new(x0, self.row0.evaluate(x0)),
            Vec2::new(x1, self.row1.evaluate(x1)),
            nv,
        );

        (along_cols + along_rows - bilinear).to_point()
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

fn blend(a: Vec2, b: Vec2, t: f64) -> Vec2 {
    a * (1.0 - t) + b * t
}
