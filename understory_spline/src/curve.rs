// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use crate::error::CurveError;
use crate::natural::Coefficients;

/// Interpolation mode of a [`Curve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CurveMode {
    /// Straight segments between consecutive samples.
    #[default]
    Linear,
    /// Natural cubic spline through all samples.
    Cubic,
}

/// An editable interpolating curve `y = f(x)`.
///
/// The samples always have strictly increasing abscissas and there are always
/// at least two of them; every constructor and edit enforces this and fails
/// with a [`CurveError`] otherwise, leaving the curve untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
    mode: CurveMode,
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Empty in [`CurveMode::Linear`].
    coeffs: Coefficients,
}

impl Curve {
    /// Fits a curve through `(xs[i], ys[i])`.
    pub fn new(mode: CurveMode, xs: &[f64], ys: &[f64]) -> Result<Self, CurveError> {
        validate(xs, ys)?;
        let mut curve = Self {
            mode,
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            coeffs: Coefficients::default(),
        };
        curve.refit();
        Ok(curve)
    }

    /// Replaces all samples and refits the curve.
    pub fn set_points(&mut self, xs: &[f64], ys: &[f64]) -> Result<(), CurveError> {
        validate(xs, ys)?;
        self.xs.clear();
        self.xs.extend_from_slice(xs);
        self.ys.clear();
        self.ys.extend_from_slice(ys);
        self.refit();
        Ok(())
    }

    /// Returns the interpolation mode.
    #[must_use]
    pub fn mode(&self) -> CurveMode {
        self.mode
    }

    /// Returns `true` if the curve interpolates with straight segments.
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.mode == CurveMode::Linear
    }

    /// Switches the interpolation mode, refitting if it changed.
    pub fn set_mode(&mut self, mode: CurveMode) {
        if self.mode != mode {
            self.mode = mode;
            self.refit();
        }
    }

    /// Returns the number of samples. Always at least 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns `true` if the curve has no samples (never, by construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Sample abscissas, strictly increasing.
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Sample ordinates.
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns sample `index` as `(x, y)`.
    #[must_use]
    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    /// Checks that sample `index` could be moved to abscissa `x` without
    /// breaking the strict ordering.
    pub fn check_abscissa(&self, index: usize, x: f64) -> Result<(), CurveError> {
        let len = self.len();
        if index >= len {
            return Err(CurveError::IndexOutOfRange { index, len });
        }
        if !x.is_finite() {
            return Err(CurveError::NonFinite { index });
        }
        let after_prev = index == 0 || self.xs[index - 1] < x;
        let before_next = index + 1 == len || x < self.xs[index + 1];
        if after_prev && before_next {
            Ok(())
        } else {
            Err(CurveError::NotIncreasing { index })
        }
    }

    /// Overwrites sample `index` with `(x, y)`.
    pub fn set_point(&mut self, index: usize, x: f64, y: f64) -> Result<(), CurveError> {
        self.check_abscissa(index, x)?;
        if !y.is_finite() {
            return Err(CurveError::NonFinite { index });
        }
        self.xs[index] = x;
        self.ys[index] = y;
        // A polyline reads its samples directly.
        if self.mode == CurveMode::Cubic {
            self.refit();
        }
        Ok(())
    }

    /// Moves sample `index` by `(dx, dy)`.
    pub fn move_point(&mut self, index: usize, dx: f64, dy: f64) -> Result<(), CurveError> {
        let (x, y) = self.point(index).ok_or(CurveError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        self.set_point(index, x + dx, y + dy)
    }

    /// Evaluates the curve at `x`.
    ///
    /// Samples are reproduced exactly. Beyond the first or last sample the
    /// curve continues as a straight line with the end slope.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let last = n - 1;
        if x >= self.xs[last] {
            return self.ys[last] + self.end_slope() * (x - self.xs[last]);
        }
        // Index of the interval containing `x`; extrapolation to the left
        // reuses interval 0.
        let i = self.xs.partition_point(|&xi| xi <= x).saturating_sub(1);
        let t = x - self.xs[i];
        match self.mode {
            CurveMode::Linear => self.ys[i] + self.segment_slope(i) * t,
            CurveMode::Cubic => {
                if x < self.xs[0] {
                    return self.ys[0] + self.coeffs.b[0] * t;
                }
                let Coefficients { b, c, d } = &self.coeffs;
                self.ys[i] + t * (b[i] + t * (c[i] + t * d[i]))
            }
        }
    }

    fn segment_slope(&self, i: usize) -> f64 {
        (self.ys[i + 1] - self.ys[i]) / (self.xs[i + 1] - self.xs[i])
    }

    fn end_slope(&self) -> f64 {
        match self.mode {
            CurveMode::Linear => self.segment_slope(self.len() - 2),
            CurveMode::Cubic => self.coeffs.b[self.len() - 1],
        }
    }

    fn refit(&mut self) {
        self.coeffs = match self.mode {
            CurveMode::Linear => Coefficients::default(),
            CurveMode::Cubic => Coefficients::fit(&self.xs, &self.ys),
        };
    }
}

fn validate(xs: &[f64], ys: &[f64]) -> Result<(), CurveError> {
    if xs.len() != ys.len() {
        return Err(CurveError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    if xs.len() < 2 {
        return Err(CurveError::TooFewPoints { len: xs.len() });
    }
    if let Some(index) = xs
        .iter()
        .zip(ys)
        .position(|(x, y)| !x.is_finite() || !y.is_finite())
    {
        return Err(CurveError::NonFinite { index });
    }
    if let Some(index) = xs.windows(2).position(|w| w[0] >= w[1]) {
        return Err(CurveError::NotIncreasing { index: index + 1 });
    }
    Ok(())
}
