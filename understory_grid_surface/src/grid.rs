// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, trace, warn};
use understory_spline::{Curve, CurveError, CurveMode};

use crate::config::{
    GridConfig, lattice_dim, normalize_extent, normalize_resolution, sample_position,
};
use crate::error::GridError;
use crate::patch::CoonsPatch;
use crate::surface::ParametricSurface;

/// A parametric surface built from a lattice of editable control points.
///
/// The lattice is stored twice: once as *row curves* (one per lattice row,
/// mapping X to Y) and once as *column curves* (one per lattice column,
/// mapping Y to X). Control point `(row, col)` is sample `col` of row curve
/// `row` and, with its coordinates swapped, sample `row` of column curve
/// `col`. All edits go through methods that update both families together,
/// so the two views never disagree.
///
/// Each lattice cell is evaluated as a Coons patch of its four boundary
/// curves, so the surface is continuous across cells and passes exactly
/// through every control point.
///
/// Control point positions are local to the footprint; [`pixel_origin`] is
/// only added by [`generate_surface_points`].
///
/// [`pixel_origin`]: Self::pixel_origin
/// [`generate_surface_points`]: Self::generate_surface_points
#[derive(Clone, Debug)]
pub struct GridSurface {
    origin: Point,
    width: u32,
    height: u32,
    resolution_x: u32,
    resolution_y: u32,
    /// One curve per lattice row, over X.
    rows: Vec<Curve>,
    /// One curve per lattice column, over Y.
    columns: Vec<Curve>,
}

impl GridSurface {
    /// Creates a uniformly spaced lattice over a `width` x `height` footprint.
    ///
    /// Control points are placed every `resolution_x` / `resolution_y`
    /// pixels, with the last row and column clamped to the far edge. Sizes
    /// and resolutions below [`MIN_PIXEL_EXTENT`] / [`MIN_RESOLUTION`] are
    /// raised to those floors, and a resolution is capped one pixel short
    /// of the extent so each axis keeps at least three distinct control
    /// points.
    ///
    /// [`MIN_PIXEL_EXTENT`]: crate::MIN_PIXEL_EXTENT
    /// [`MIN_RESOLUTION`]: crate::MIN_RESOLUTION
    #[must_use]
    pub fn new(
        origin: Point,
        width: u32,
        height: u32,
        resolution_x: u32,
        resolution_y: u32,
    ) -> Self {
        let width = normalize_extent(width);
        let height = normalize_extent(height);
        let mut grid = Self {
            origin,
            width,
            height,
            resolution_x: normalize_resolution(resolution_x, width),
            resolution_y: normalize_resolution(resolution_y, height),
            rows: Vec::new(),
            columns: Vec::new(),
        };
        grid.create_grid_data();
        grid
    }

    /// Creates a uniform lattice from a [`GridConfig`].
    #[must_use]
    pub fn from_config(config: GridConfig) -> Self {
        Self::new(
            config.origin,
            config.width,
            config.height,
            config.resolution_x,
            config.resolution_y,
        )
    }

    /// Returns the footprint origin in pixel space.
    #[must_use]
    pub fn pixel_origin(&self) -> Point {
        self.origin
    }

    /// Moves the footprint. The lattice is local to the footprint and is not
    /// touched.
    pub fn set_pixel_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Returns the footprint width in pixels.
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.width
    }

    /// Returns the footprint height in pixels.
    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.height
    }

    /// Returns the footprint as a rectangle in pixel space.
    #[must_use]
    pub fn footprint(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            Size::new(f64::from(self.width), f64::from(self.height)),
        )
    }

    /// Returns the control point spacing as `(x, y)` in pixels.
    #[must_use]
    pub fn grid_resolution(&self) -> (u32, u32) {
        (self.resolution_x, self.resolution_y)
    }

    /// Number of control points along X (the column count).
    #[must_use]
    pub fn num_control_points_x(&self) -> usize {
        self.columns.len()
    }

    /// Number of control points along Y (the row count).
    #[must_use]
    pub fn num_control_points_y(&self) -> usize {
        self.rows.len()
    }

    /// Read-only access to the curve through lattice row `row`.
    #[must_use]
    pub fn row_curve(&self, row: usize) -> Option<&Curve> {
        self.rows.get(row)
    }

    /// Read-only access to the curve through lattice column `col`.
    ///
    /// Its samples are `(y, x)` pairs.
    #[must_use]
    pub fn column_curve(&self, col: usize) -> Option<&Curve> {
        self.columns.get(col)
    }

    /// Resizes the footprint width, resampling the current surface.
    pub fn set_pixel_width(&mut self, width: u32) -> Result<(), GridError> {
        self.rebuild_grid_data(None, None, Some(normalize_extent(width)), None)
    }

    /// Resizes the footprint height, resampling the current surface.
    pub fn set_pixel_height(&mut self, height: u32) -> Result<(), GridError> {
        self.rebuild_grid_data(None, None, None, Some(normalize_extent(height)))
    }

    /// Resizes the footprint, resampling the current surface.
    ///
    /// Sampled control points are scaled by the size ratio per axis, so an
    /// undeformed grid stays uniform and deformations keep their relative
    /// placement.
    pub fn set_pixel_size(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        self.rebuild_grid_data(
            None,
            None,
            Some(normalize_extent(width)),
            Some(normalize_extent(height)),
        )
    }

    /// Changes the control point spacing, resampling the current surface.
    pub fn set_grid_resolution(
        &mut self,
        resolution_x: u32,
        resolution_y: u32,
    ) -> Result<(), GridError> {
        self.rebuild_grid_data(Some(resolution_x), Some(resolution_y), None, None)
    }

    /// Changes the control point spacing along X, resampling the current surface.
    pub fn set_grid_resolution_x(&mut self, resolution_x: u32) -> Result<(), GridError> {
        self.set_grid_resolution(resolution_x, self.resolution_y)
    }

    /// Changes the control point spacing along Y, resampling the current surface.
    pub fn set_grid_resolution_y(&mut self, resolution_y: u32) -> Result<(), GridError> {
        self.set_grid_resolution(self.resolution_x, resolution_y)
    }

    /// Returns the position of control point `(row, col)`, local to the footprint.
    pub fn control_point_position(&self, row: usize, col: usize) -> Result<Point, GridError> {
        self.check_control_point(row, col)?;
        Ok(self.point_unchecked(row, col))
    }

    /// Moves control point `(row, col)` to `point`, local to the footprint.
    ///
    /// The point must stay strictly between its neighbors along both its row
    /// (in X) and its column (in Y); otherwise [`GridError::WouldFold`] is
    /// returned and nothing changes.
    pub fn set_control_point_position(
        &mut self,
        row: usize,
        col: usize,
        point: Point,
    ) -> Result<(), GridError> {
        self.check_control_point(row, col)?;
        let fits = self.rows[row]
            .check_abscissa(col, point.x)
            .and_then(|()| self.columns[col].check_abscissa(row, point.y));
        match fits {
            Ok(()) => {}
            Err(CurveError::NotIncreasing { .. }) => {
                warn!("rejected move of control point ({row}, {col}) to {point:?}: lattice would fold");
                return Err(GridError::WouldFold { row, col });
            }
            Err(err) => return Err(err.into()),
        }
        // Both abscissas are checked, so neither write can fail halfway.
        self.rows[row].set_point(col, point.x, point.y)?;
        self.columns[col].set_point(row, point.y, point.x)?;
        trace!("control point ({row}, {col}) set to {point:?}");
        Ok(())
    }

    /// Moves control point `(row, col)` by `delta`.
    ///
    /// Same rules as [`set_control_point_position`](Self::set_control_point_position).
    pub fn move_control_point(
        &mut self,
        row: usize,
        col: usize,
        delta: Vec2,
    ) -> Result<(), GridError> {
        let current = self.control_point_position(row, col)?;
        self.set_control_point_position(row, col, current + delta)
    }

    /// Switches the interpolation mode of row curve `row`.
    pub fn set_row_mode(&mut self, row: usize, mode: CurveMode) -> Result<(), GridError> {
        let rows = self.rows.len();
        let curve = self
            .rows
            .get_mut(row)
            .ok_or(GridError::RowOutOfRange { row, rows })?;
        curve.set_mode(mode);
        trace!("row {row} now {mode:?}");
        Ok(())
    }

    /// Switches the interpolation mode of column curve `col`.
    pub fn set_column_mode(&mut self, col: usize, mode: CurveMode) -> Result<(), GridError> {
        let cols = self.columns.len();
        let curve = self
            .columns
            .get_mut(col)
            .ok_or(GridError::ColumnOutOfRange { col, cols })?;
        curve.set_mode(mode);
        trace!("column {col} now {mode:?}");
        Ok(())
    }

    /// Samples the surface at every pixel of the footprint.
    ///
    /// Pixel `(x, y)` is evaluated at `u = x / width`, `v = y / height` and
    /// offset by [`pixel_origin`](Self::pixel_origin). The result holds
    /// `width * height` interleaved `(x, y)` pairs in row-major order.
    #[must_use]
    pub fn generate_surface_points(&self) -> Vec<f64> {
        let mut out = Vec::new();
        self.generate_surface_points_into(&mut out);
        out
    }

    /// Like [`generate_surface_points`](Self::generate_surface_points), but
    /// reuses `out`'s allocation. `out` is cleared first.
    pub fn generate_surface_points_into(&self, out: &mut Vec<f64>) {
        let width = self.width as usize;
        let height = self.height as usize;
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        out.clear();
        out.reserve(width * height * 2);
        for y in 0..self.height {
            let v = f64::from(y) / h;
            for x in 0..self.width {
                let p = self.surface_point(f64::from(x) / w, v);
                out.push(p.x + self.origin.x);
                out.push(p.y + self.origin.y);
            }
        }
    }

    fn check_control_point(&self, row: usize, col: usize) -> Result<(), GridError> {
        let (rows, cols) = (self.rows.len(), self.columns.len());
        if row < rows && col < cols {
            Ok(())
        } else {
            Err(GridError::ControlPointOutOfRange {
                row,
                col,
                rows,
                cols,
            })
        }
    }

    /// Reads from the row family, which is the source of truth for reads.
    fn point_unchecked(&self, row: usize, col: usize) -> Point {
        let xs = self.rows[row].xs();
        let ys = self.rows[row].ys();
        Point::new(xs[col], ys[col])
    }

    fn create_grid_data(&mut self) {
        let cols = lattice_dim(self.width, self.resolution_x);
        let rows = lattice_dim(self.height, self.resolution_y);
        let xs: Vec<f64> = (0..cols)
            .map(|i| sample_position(i, self.resolution_x, self.width))
            .collect();
        let ys: Vec<f64> = (0..rows)
            .map(|j| sample_position(j, self.resolution_y, self.height))
            .collect();

        self.rows = ys
            .iter()
            .map(|&y| {
                let flat: Vec<f64> = xs.iter().map(|_| y).collect();
                Curve::new(CurveMode::Linear, &xs, &flat)
                    .expect("uniform lattice abscissas are strictly increasing")
            })
            .collect();
        self.columns = xs
            .iter()
            .map(|&x| {
                let flat: Vec<f64> = ys.iter().map(|_| x).collect();
                Curve::new(CurveMode::Linear, &ys, &flat)
                    .expect("uniform lattice abscissas are strictly increasing")
            })
            .collect();

        debug!(
            "created {cols}x{rows} lattice over {}x{} px at resolution {}x{}",
            self.width, self.height, self.resolution_x, self.resolution_y
        );
        debug_assert_eq!(self.rows.len(), rows, "one row curve per lattice row");
        debug_assert_eq!(self.columns.len(), cols, "one column curve per lattice column");
    }

    /// Rebuilds the lattice at a new resolution and/or size by resampling
    /// the current surface. `None` keeps the current value.
    ///
    /// On error the surface is left as it was.
    fn rebuild_grid_data(
        &mut self,
        resolution_x: Option<u32>,
        resolution_y: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
    ) -> Result<(), GridError> {
        if self.rows.is_empty() || self.columns.is_empty() {
            self.create_grid_data();
            return Ok(());
        }

        let width = normalize_extent(width.unwrap_or(self.width));
        let height = normalize_extent(height.unwrap_or(self.height));
        let resolution_x = normalize_resolution(resolution_x.unwrap_or(self.resolution_x), width);
        let resolution_y = normalize_resolution(resolution_y.unwrap_or(self.resolution_y), height);
        let cols = lattice_dim(width, resolution_x);
        let rows = lattice_dim(height, resolution_y);

        let scale = Vec2::new(
            f64::from(width) / f64::from(self.width),
            f64::from(height) / f64::from(self.height),
        );
        let us: Vec<f64> = (0..cols)
            .map(|i| sample_position(i, resolution_x, width) / f64::from(width))
            .collect();
        let vs: Vec<f64> = (0..rows)
            .map(|j| sample_position(j, resolution_y, height) / f64::from(height))
            .collect();

        // Sample each new control point once so both families see the same values.
        let mut lattice = Vec::with_capacity(rows * cols);
        for &v in &vs {
            for &u in &us {
                let p = self.surface_point(u, v);
                lattice.push(Point::new(p.x * scale.x, p.y * scale.y));
            }
        }

        let mut xs = Vec::with_capacity(cols);
        let mut ys = Vec::with_capacity(cols);
        let mut new_rows = Vec::with_capacity(rows);
        for j in 0..rows {
            xs.clear();
            ys.clear();
            for p in &lattice[j * cols..(j + 1) * cols] {
                xs.push(p.x);
                ys.push(p.y);
            }
            let mode = inherited_mode(&self.rows, j);
            new_rows.push(Curve::new(mode, &xs, &ys)?);
        }

        let mut new_columns = Vec::with_capacity(cols);
        for i in 0..cols {
            xs.clear();
            ys.clear();
            for j in 0..rows {
                let p = lattice[j * cols + i];
                xs.push(p.y);
                ys.push(p.x);
            }
            let mode = inherited_mode(&self.columns, i);
            new_columns.push(Curve::new(mode, &xs, &ys)?);
        }

        debug!(
            "rebuilt lattice {}x{} -> {cols}x{rows} over {width}x{height} px at resolution {resolution_x}x{resolution_y}",
            self.columns.len(),
            self.rows.len(),
        );
        self.width = width;
        self.height = height;
        self.resolution_x = resolution_x;
        self.resolution_y = resolution_y;
        self.rows = new_rows;
        self.columns = new_columns;
        debug_assert_eq!(self.rows.len(), rows, "one row curve per lattice row");
        debug_assert_eq!(self.columns.len(), cols, "one column curve per lattice column");
        Ok(())
    }
}

impl ParametricSurface for GridSurface {
    fn surface_point(&self, u: f64, v: f64) -> Point {
        let span_x = f64::from(self.width) / f64::from(self.resolution_x);
        let span_y = f64::from(self.height) / f64::from(self.resolution_y);
        let coord_col = u.clamp(0.0, 1.0) * span_x;
        let coord_row = v.clamp(0.0, 1.0) * span_y;

        let last_col = self.columns.len() - 1;
        let last_row = self.rows.len() - 1;
        let col = cell_index(libm::floor(coord_col), last_col);
        let col1 = cell_index(libm::ceil(coord_col), last_col);
        let row = cell_index(libm::floor(coord_row), last_row);
        let row1 = cell_index(libm::ceil(coord_row), last_row);

        let mut nu = coord_col - col as f64;
        let mut nv = coord_row - row as f64;
        // The last cell is shorter than `resolution` when it does not divide
        // the extent; stretch the local parameter over the shorter span.
        if col1 == last_col {
            let s = fract(span_x);
            if s > 0.0 {
                nu /= s;
            }
        }
        if row1 == last_row {
            let s = fract(span_y);
            if s > 0.0 {
                nv /= s;
            }
        }

        let patch = CoonsPatch {
            col0: &self.columns[col],
            col1: &self.columns[col1],
            row0: &self.rows[row],
            row1: &self.rows[row1],
            p00: self.point_unchecked(row, col),
            p10: self.point_unchecked(row, col1),
            p01: self.point_unchecked(row1, col),
            p11: self.point_unchecked(row1, col1),
        };
        patch.evaluate(nu, nv)
    }
}

/// Mode of the existing curve at `index`, or of the last one past the end.
fn inherited_mode(curves: &[Curve], index: usize) -> CurveMode {
    curves
        .get(index)
        .or_else(|| curves.last())
        .map_or(CurveMode::Linear, Curve::mode)
}

fn cell_index(coord: f64, last: usize) -> usize {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "coord is a non-negative whole number; the result is clamped immediately after"
    )]
    let index = coord as usize;
    index.min(last)
}

fn fract(x: f64) -> f64 {
    x - libm::trunc(x)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use understory_spline::CurveMode;

    use super::GridSurface;
    use crate::{GridError, ParametricSurface};

    fn near(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn uniform_lattice_layout() {
        let grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
        assert_eq!(grid.num_control_points_x(), 11);
        assert_eq!(grid.num_control_points_y(), 11);
        for row in 0..11 {
            for col in 0..11 {
                let p = grid.control_point_position(row, col).unwrap();
                assert_eq!(p, Point::new(col as f64 * 10.0, row as f64 * 10.0));
            }
        }
        assert!(grid.row_curve(0).unwrap().is_linear());
        assert!(grid.column_curve(10).unwrap().is_linear());
        assert!(grid.row_curve(11).is_none());
    }

    #[test]
    fn degenerate_inputs_are_raised_to_floors() {
        let grid = GridSurface::new(Point::ORIGIN, 0, 3, 0, 500);
        assert_eq!(grid.pixel_width(), crate::MIN_PIXEL_EXTENT);
        assert_eq!(grid.pixel_height(), crate::MIN_PIXEL_EXTENT);
        assert_eq!(
            grid.grid_resolution(),
            (crate::MIN_RESOLUTION, crate::MIN_PIXEL_EXTENT - 1)
        );
        assert!(grid.num_control_points_x() >= 3);
        assert_eq!(grid.num_control_points_y(), 3);
    }

    #[test]
    fn coarse_resolution_keeps_its_spacing() {
        let grid = GridSurface::new(Point::ORIGIN, 100, 100, 80, 80);
        assert_eq!(grid.grid_resolution(), (80, 80));
        assert_eq!(grid.num_control_points_x(), 3);
        assert_eq!(grid.num_control_points_y(), 3);
        assert_eq!(grid.control_point_position(0, 1), Ok(Point::new(80.0, 0.0)));
        assert_eq!(grid.control_point_position(0, 2), Ok(Point::new(100.0, 0.0)));

        // The 20 px edge cell is stretched over the tail of the parameter range.
        assert!(near(grid.surface_point(0.9, 0.5), Point::new(90.0, 50.0)));
        assert!(near(grid.surface_point(0.4, 0.4), Point::new(40.0, 40.0)));
        assert!(near(grid.surface_point(1.0, 1.0), Point::new(100.0, 100.0)));
    }

    #[test]
    fn edits_update_both_families() {
        let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
        grid.set_control_point_position(3, 4, Point::new(43.0, 27.5)).unwrap();
        grid.move_control_point(3, 4, Vec2::new(-1.0, 1.0)).unwrap();

        let expected = Point::new(42.0, 28.5);
        assert_eq!(grid.control_point_position(3, 4), Ok(expected));
        assert_eq!(grid.row_curve(3).unwrap().point(4), Some((42.0, 28.5)));
        assert_eq!(grid.column_curve(4).unwrap().point(3), Some((28.5, 42.0)));
    }

    #[test]
    fn out_of_range_is_reported() {
        let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
        let err = GridError::ControlPointOutOfRange {
            row: 11,
            col: 0,
            rows: 11,
            cols: 11,
        };
        assert_eq!(grid.control_point_position(11, 0), Err(err));
        assert_eq!(grid.set_control_point_position(11, 0, Point::ORIGIN), Err(err));
        assert_eq!(
            grid.move_control_point(0, 11, Vec2::ZERO),
            Err(GridError::ControlPointOutOfRange {
                row: 0,
                col: 11,
                rows: 11,
                cols: 11
            })
        );
        assert_eq!(
            grid.set_row_mode(20, CurveMode::Cubic),
            Err(GridError::RowOutOfRange { row: 20, rows: 11 })
        );
        assert_eq!(
            grid.set_column_mode(11, CurveMode::Cubic),
            Err(GridError::ColumnOutOfRange { col: 11, cols: 11 })
        );
    }

    #[test]
    fn folding_edits_are_rejected_atomically() {
        let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
        // Valid along the row, but crosses the next point down the column.
        assert_eq!(
            grid.set_control_point_position(3, 4, Point::new(41.0, 45.0)),
            Err(GridError::WouldFold { row: 3, col: 4 })
        );
        // Crosses the left neighbor along the row.
        assert_eq!(
            grid.move_control_point(3, 4, Vec2::new(-10.0, 0.0)),
            Err(GridError::WouldFold { row: 3, col: 4 })
        );
        assert_eq!(grid.control_point_position(3, 4), Ok(Point::new(40.0, 30.0)));
        assert_eq!(grid.column_curve(4).unwrap().point(3), Some((30.0, 40.0)));
    }

    #[test]
    fn identity_evaluation() {
        let grid = GridSurface::new(Point::new(5.0, -3.0), 100, 100, 10, 10);
        assert!(near(grid.surface_point(0.5, 0.5), Point::new(50.0, 50.0)));
        assert!(near(grid.surface_point(0.0, 0.0), Point::ORIGIN));
        assert!(near(grid.surface_point(1.0, 1.0), Point::new(100.0, 100.0)));
        assert!(near(grid.surface_point(0.37, 0.81), Point::new(37.0, 81.0)));
        // Out-of-range parameters are clamped to the footprint.
        assert!(near(grid.surface_point(1.5, -0.5), Point::new(100.0, 0.0)));
    }

    #[test]
    fn edge_remainder_spans_the_short_cell() {
        let grid = GridSurface::new(Point::ORIGIN, 95, 100, 10, 10);
        assert_eq!(grid.num_control_points_x(), 11);
        assert_eq!(grid.control_point_position(0, 9), Ok(Point::new(90.0, 0.0)));
        assert_eq!(grid.control_point_position(0, 10), Ok(Point::new(95.0, 0.0)));

        assert!(near(grid.surface_point(1.0, 0.0), Point::new(95.0, 0.0)));
        // Halfway through the 5 px cell, not 2.5 px past it.
        let p = grid.surface_point(92.5 / 95.0, 0.5);
        assert!(near(p, Point::new(92.5, 50.0)), "{p:?}");
    }

    #[test]
    fn mode_changes_are_local() {
        let mut grid = GridSurface::new(Point::ORIGIN, 100, 100, 10, 10);
        grid.set_row_mode(2, CurveMode::Cubic).unwrap();
        grid.set_column_mode(7, CurveMode::Cubic).unwrap();
        assert_eq!(grid.row_curve(2).unwrap().mode(), CurveMode::Cubic);
        assert_eq!(grid.row_curve(3).unwrap().mode(), CurveMode::Linear);
        assert_eq!(grid.column_curve(7).unwrap().mode(), CurveMode::Cubic);
        // Straight lattice lines stay straight in either mode.
        assert!(near(grid.surface_point(0.73, 0.2), Point::new(73.0, 20.0)));
    }

    #[test]
    fn footprint_and_origin() {
        let mut grid = GridSurface::new(Point::new(10.0, 20.0), 100, 50, 10, 10);
        assert_eq!(grid.footprint(), kurbo::Rect::new(10.0, 20.0, 110.0, 70.0));
        grid.set_pixel_origin(Point::new(-5.0, 0.0));
        assert_eq!(grid.pixel_origin(), Point::new(-5.0, 0.0));
        // Moving the footprint leaves the lattice alone.
        assert_eq!(grid.control_point_position(1, 1), Ok(Point::new(10.0, 10.0)));
    }
}
