// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_spline --heading-base-level=0

//! Understory Spline: editable 1D interpolating curves.
//!
//! This crate provides a single value type, [`Curve`], which interpolates a
//! function `y = f(x)` through a sequence of samples with strictly increasing
//! abscissas. Two interpolation modes are available:
//!
//! - [`CurveMode::Linear`]: a polyline through the samples.
//! - [`CurveMode::Cubic`]: a natural cubic spline (second derivative zero at
//!   both ends).
//!
//! Unlike most fitting libraries, a [`Curve`] is meant to be *edited*: single
//! samples can be read, overwritten, or nudged in place. Linear curves treat an
//! edit as pure bookkeeping; cubic curves refit their coefficients in `O(n)`.
//!
//! Outside the sample range both modes extrapolate linearly using the slope at
//! the nearest end.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_spline::{Curve, CurveMode};
//!
//! let mut curve = Curve::new(CurveMode::Linear, &[0.0, 10.0, 20.0], &[0.0, 5.0, 0.0]).unwrap();
//! assert_eq!(curve.evaluate(5.0), 2.5);
//!
//! // Move the middle sample up; the next evaluation reflects it immediately.
//! curve.move_point(1, 0.0, 5.0).unwrap();
//! assert_eq!(curve.evaluate(10.0), 10.0);
//! ```
//!
//! Curves never reorder their samples. Any edit that would break the strict
//! ordering of abscissas is rejected with [`CurveError::NotIncreasing`] and
//! leaves the curve unchanged.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod curve;
mod error;
mod natural;

pub use curve::{Curve, CurveMode};
pub use error::CurveError;
