// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a [`Curve`](crate::Curve) cannot be fitted or edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveError {
    /// Fewer than two samples were supplied.
    TooFewPoints {
        /// Number of samples supplied.
        len: usize,
    },
    /// The abscissa and ordinate slices have different lengths.
    LengthMismatch {
        /// Number of abscissas.
        xs: usize,
        /// Number of ordinates.
        ys: usize,
    },
    /// A sample contains `NaN` or an infinity.
    NonFinite {
        /// Index of the offending sample.
        index: usize,
    },
    /// The abscissa at `index` is not strictly greater than its predecessor,
    /// or not strictly less than its successor.
    NotIncreasing {
        /// Index of the offending sample.
        index: usize,
    },
    /// A sample index is past the end of the curve.
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of samples in the curve.
        len: usize,
    },
}

impl fmt::Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPoints { len } => {
                write!(f, "a curve needs at least 2 samples, got {len}")
            }
            Self::LengthMismatch { xs, ys } => {
                write!(f, "got {xs} abscissas but {ys} ordinates")
            }
            Self::NonFinite { index } => write!(f, "sample {index} is not finite"),
            Self::NotIncreasing { index } => {
                write!(f, "abscissa of sample {index} breaks strict ordering")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "sample index {index} out of range for curve of {len} samples")
            }
        }
    }
}

impl core::error::Error for CurveError {}
