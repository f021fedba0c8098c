// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_grid_surface --heading-base-level=0

//! Understory Grid Surface: editable warp surfaces over a control-point lattice.
//!
//! This crate maps normalized parameters `(u, v)` in `[0, 1]²` to positions in
//! pixel space through a rectangular lattice of control points. Moving a
//! control point deforms the surface locally and continuously, which is the
//! building block for mesh-based warp, liquify, and perspective-correction
//! tools.
//!
//! The core concepts are:
//!
//! - [`ParametricSurface`]: the evaluation contract, `(u, v) -> Point`.
//! - [`GridSurface`]: the lattice-backed implementation. It stores the lattice
//!   as one [`Curve`] per row and one per column, and evaluates each cell as
//!   a Coons patch of its four boundary curves.
//! - [`PlanarPoint`]: a minimal point capability so hosts can evaluate with
//!   their own point types.
//! - [`GridConfig`]: initial footprint and control point spacing.
//!
//! It does **not** resample images, render, or interpret input events. Hosts
//! are expected to:
//! - Map pointer drags to [`GridSurface::move_control_point`].
//! - Feed [`GridSurface::generate_surface_points`] (or their own per-pixel
//!   [`ParametricSurface::surface_point`] calls) into a resampler.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_grid_surface::{GridSurface, ParametricSurface};
//!
//! // 100x100 px footprint with a control point every 10 px: an 11x11 lattice.
//! let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
//! assert_eq!(grid.num_control_points_x(), 11);
//!
//! // Undeformed, the surface is the identity map scaled to the footprint.
//! let center = grid.surface_point(0.5, 0.5);
//! assert!((center - Point::new(50.0, 50.0)).hypot() < 1e-9);
//!
//! // Drag the center control point; the surface follows.
//! grid.move_control_point(5, 5, Vec2::new(3.0, -2.0)).unwrap();
//! let center = grid.surface_point(0.5, 0.5);
//! assert!((center - Point::new(53.0, 48.0)).hypot() < 1e-9);
//! ```
//!
//! ## Resolution and resizing
//!
//! The lattice dimensions derive from the footprint size and the control
//! point spacing. Changing either rebuilds the lattice by resampling the
//! *current* surface, so edits survive:
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_grid_surface::{GridSurface, ParametricSurface};
//!
//! let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
//! grid.move_control_point(5, 5, Vec2::new(4.0, 0.0)).unwrap();
//! let before = grid.surface_point(0.5, 0.5);
//!
//! grid.set_grid_resolution(5, 5).unwrap();
//! assert_eq!(grid.num_control_points_x(), 21);
//! assert!((grid.surface_point(0.5, 0.5) - before).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Control point positions are local to the footprint; the origin is only
//!   added by the raster sampler.
//! - Edits that would push a control point past a neighbor along its row or
//!   column are rejected with [`GridError::WouldFold`]; the lattice never
//!   folds over itself.
//! - Evaluation takes `&self` and editing takes `&mut self`, so a frozen
//!   surface can be sampled from several places at once.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod grid;
mod patch;
mod point;
mod surface;

pub use config::{GridConfig, MIN_PIXEL_EXTENT, MIN_RESOLUTION};
pub use error::GridError;
pub use grid::GridSurface;
pub use point::PlanarPoint;
pub use surface::ParametricSurface;
pub use understory_spline::{Curve, CurveError, CurveMode};
