// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Natural cubic spline coefficients.
//!
//! On each interval `[x_i, x_{i+1}]` the spline is
//! `y_i + b_i t + c_i t^2 + d_i t^3` with `t = x - x_i`. The `c_i` come from
//! the usual tridiagonal system, solved with the Thomas algorithm.

use alloc::vec;
use alloc::vec::Vec;

/// Polynomial coefficients of a natural cubic spline, one entry per sample.
///
/// The entries at the last sample describe the linear extension to the right:
/// `b` holds the end slope, `c` and `d` are zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Coefficients {
    pub(crate) b: Vec<f64>,
    pub(crate) c: Vec<f64>,
    pub(crate) d: Vec<f64>,
}

impl Coefficients {
    /// Fits the natural spline through `(xs[i], ys[i])`.
    ///
    /// The caller guarantees `xs.len() == ys.len() >= 2` and strictly
    /// increasing abscissas; the system is then diagonally dominant and
    /// never singular.
    pub(crate) fn fit(xs: &[f64], ys: &[f64]) -> Self {
        let n = xs.len();
        debug_assert!(n >= 2 && ys.len() == n, "fit needs at least two samples");

        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        // Forward sweep. Rows 0 and n-1 are the natural end conditions
        // `c = 0`, so their modified coefficients are zero.
        let mut upper_prime = vec![0.0; n];
        let mut rhs_prime = vec![0.0; n];
        for i in 1..n - 1 {
            let lower = h[i - 1];
            let diag = 2.0 * (h[i - 1] + h[i]);
            let upper = h[i];
            let rhs = 3.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
            let denom = diag - lower * upper_prime[i - 1];
            upper_prime[i] = upper / denom;
            rhs_prime[i] = (rhs - lower * rhs_prime[i - 1]) / denom;
        }

        // Back substitution.
        let mut c = vec![0.0; n];
        for i in (1..n - 1).rev() {
            c[i] = rhs_prime[i] - upper_prime[i] * c[i + 1];
        }

        let mut b = vec![0.0; n];
        let mut d = vec![0.0; n];
        for i in 0..n - 1 {
            b[i] = (ys[i + 1] - ys[i]) / h[i] - h[i] * (2.0 * c[i] + c[i + 1]) / 3.0;
            d[i] = (c[i + 1] - c[i]) / (3.0 * h[i]);
        }
        let last = h[n - 2];
        b[n - 1] = b[n - 2] + 2.0 * c[n - 2] * last + 3.0 * d[n - 2] * last * last;

        Self { b, c, d }
    }
}
