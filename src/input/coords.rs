//! Pixel-to-grid coordinate conversion.
//!
//! Centralizes the conversion formulas so drag handling never repeats
//! them. All functions are deterministic and side-effect free.

use crate::types::{GridConfig, GridDelta, PixelSize};

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Size of one grid cell in pixels.
    #[inline]
    pub fn cell_size(container: PixelSize, grid: GridConfig) -> PixelSize {
        PixelSize::new(
            container.width / f64::from(grid.columns),
            container.height / f64::from(grid.rows),
        )
    }

    /// Convert a pixel delta to whole grid cells.
    ///
    /// Rounds rather than truncates, so a drag crossing half a cell
    /// snaps predictably in either direction. A degenerate container
    /// (zero or negative span) converts to zero cells.
    #[inline]
    pub fn pixel_delta_to_grid(
        delta_x: f64,
        delta_y: f64,
        container: PixelSize,
        grid: GridConfig,
    ) -> GridDelta {
        GridDelta::new(
            Self::axis_to_cells(delta_x, container.width, grid.columns),
            Self::axis_to_cells(delta_y, container.height, grid.rows),
        )
    }

    /// Convert a grid delta back to pixels (for overlays and tests).
    #[inline]
    pub fn grid_delta_to_pixels(
        delta: GridDelta,
        container: PixelSize,
        grid: GridConfig,
    ) -> (f64, f64) {
        let cell = Self::cell_size(container, grid);
        (
            f64::from(delta.columns) * cell.width,
            f64::from(delta.rows) * cell.height,
        )
    }

    #[inline]
    fn axis_to_cells(delta: f64, span: f64, cells: i32) -> i32 {
        if span <= 0.0 || cells < 1 {
            return 0;
        }
        let cell = span / f64::from(cells);
        (delta / cell).round() as i32
    }
}
