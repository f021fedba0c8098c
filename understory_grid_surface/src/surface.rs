// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::point::PlanarPoint;

/// A mapping from normalized parameters `(u, v)` in `[0, 1]²` to pixel space.
///
/// Evaluation is a pure read of the surface state. [`GridSurface`] is the
/// lattice-backed implementation in this crate; analytic or mesh-free
/// surfaces can implement the same contract.
///
/// [`GridSurface`]: crate::GridSurface
pub trait ParametricSurface {
    /// Evaluates the surface at `(u, v)`.
    fn surface_point(&self, u: f64, v: f64) -> Point;

    /// Evaluates the surface at `(uv.x, uv.y)`.
    fn surface_point_at(&self, uv: Point) -> Point {
        self.surface_point(uv.x, uv.y)
    }

    /// Evaluates the surface with a caller-chosen point type on both sides.
    fn sample<P: PlanarPoint>(&self, uv: P) -> P
    where
        Self: Sized,
    {
        P::from_kurbo(self.surface_point(uv.x(), uv.y()))
    }
}
