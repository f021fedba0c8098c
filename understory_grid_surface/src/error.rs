// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use understory_spline::CurveError;

/// Error returned by [`GridSurface`](crate::GridSurface) edits and rebuilds.
///
/// A failed operation never leaves the lattice partially updated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A control point address lies outside the lattice.
    ControlPointOutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of lattice rows.
        rows: usize,
        /// Number of lattice columns.
        cols: usize,
    },
    /// A row curve index lies outside the lattice.
    RowOutOfRange {
        /// Requested row.
        row: usize,
        /// Number of lattice rows.
        rows: usize,
    },
    /// A column curve index lies outside the lattice.
    ColumnOutOfRange {
        /// Requested column.
        col: usize,
        /// Number of lattice columns.
        cols: usize,
    },
    /// Moving the control point would cross a neighbor along its row or
    /// column, folding the lattice.
    WouldFold {
        /// Row of the rejected control point.
        row: usize,
        /// Column of the rejected control point.
        col: usize,
    },
    /// A curve could not be fitted, for example when resampling a heavily
    /// deformed surface produced non-monotonic samples.
    Curve(CurveError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ControlPointOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "control point ({row}, {col}) out of range for a {rows}x{cols} lattice"
            ),
            Self::RowOutOfRange { row, rows } => {
                write!(f, "row {row} out of range for a lattice of {rows} rows")
            }
            Self::ColumnOutOfRange { col, cols } => {
                write!(f, "column {col} out of range for a lattice of {cols} columns")
            }
            Self::WouldFold { row, col } => {
                write!(f, "moving control point ({row}, {col}) would fold the lattice")
            }
            Self::Curve(err) => write!(f, "curve fit failed: {err}"),
        }
    }
}

impl core::error::Error for GridError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Curve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CurveError> for GridError {
    fn from(err: CurveError) -> Self {
        Self::Curve(err)
    }
}
