// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Smallest accepted spacing between control points, in pixels.
pub const MIN_RESOLUTION: u32 = 5;

/// Smallest accepted footprint width or height, in pixels.
pub const MIN_PIXEL_EXTENT: u32 = 20;

/// Initial footprint and lattice spacing of a [`GridSurface`].
///
/// Values below the documented floors are raised when the surface is built;
/// see [`GridSurface::from_config`].
///
/// [`GridSurface`]: crate::GridSurface
/// [`GridSurface::from_config`]: crate::GridSurface::from_config
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridConfig {
    /// Pixel-space origin of the footprint.
    pub origin: Point,
    /// Footprint width in pixels.
    pub width: u32,
    /// Footprint height in pixels.
    pub height: u32,
    /// Pixel spacing between adjacent control points along X.
    pub resolution_x: u32,
    /// Pixel spacing between adjacent control points along Y.
    pub resolution_y: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin: Point::ORIGIN,
            width: 100,
            height: 100,
            resolution_x: 10,
            resolution_y: 10,
        }
    }
}

pub(crate) fn normalize_extent(extent: u32) -> u32 {
    extent.max(MIN_PIXEL_EXTENT)
}

/// Raises `resolution` to [`MIN_RESOLUTION`] and caps it below `extent`, so
/// the first interior sample never lands on the far edge.
///
/// `extent` must already be normalized.
pub(crate) fn normalize_resolution(resolution: u32, extent: u32) -> u32 {
    resolution.clamp(MIN_RESOLUTION, extent - 1)
}

/// Number of control points along an axis: `max(3, 1 + ceil(extent / resolution))`.
pub(crate) fn lattice_dim(extent: u32, resolution: u32) -> usize {
    (1 + extent.div_ceil(resolution)).max(3) as usize
}

/// Pixel position of sample `index` along an axis, clamped to the far edge.
pub(crate) fn sample_position(index: usize, resolution: u32, extent: u32) -> f64 {
    (index as f64 * f64::from(resolution)).min(f64::from(extent))
}
