// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal 2D point capability used at the crate boundary.
//!
//! Surfaces compute with [`kurbo::Point`] internally. Hosts that carry their
//! own point types (toolkit points, plain tuples or arrays) implement
//! [`PlanarPoint`] once and pass them straight to
//! [`ParametricSurface::sample`](crate::ParametricSurface::sample).

use kurbo::{Point, Vec2};

/// A value that can be read as, and built from, an `(x, y)` pair.
pub trait PlanarPoint: Copy {
    /// Horizontal component.
    fn x(&self) -> f64;

    /// Vertical component.
    fn y(&self) -> f64;

    /// Builds a value from its components.
    fn from_xy(x: f64, y: f64) -> Self;

    /// Converts into a Kurbo point.
    fn to_kurbo(self) -> Point {
        Point::new(self.x(), self.y())
    }

    /// Converts from a Kurbo point.
    fn from_kurbo(p: Point) -> Self {
        Self::from_xy(p.x, p.y)
    }
}

impl PlanarPoint for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
}

impl PlanarPoint for Vec2 {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y)
    }
}

impl PlanarPoint for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }

    fn from_xy(x: f64, y: f64) -> Self {
        (x, y)
    }
}

impl PlanarPoint for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }

    fn from_xy(x: f64, y: f64) -> Self {
        [x, y]
    }
}
