//! Placement validation and clamping.
//!
//! Which field gives way is mode-dependent: a move keeps the block's
//! extent and caps its origin, while a resize never moves the anchor
//! edge - only the growing edge is capped. For any integer input the
//! result satisfies `width >= 1`, `height >= 1`, `column >= 1`,
//! `row >= 1`, `column + width - 1 <= columns`, and
//! `row + height - 1 <= rows`.

use crate::types::{GridConfig, InteractionMode, Placement};

/// Clamp `candidate` into `grid` under the active mode's rules.
pub fn clamp(candidate: Placement, grid: GridConfig, mode: InteractionMode) -> Placement {
    if mode.is_resize() {
        clamp_resize(candidate, grid, mode)
    } else {
        clamp_move(candidate, grid)
    }
}

/// Move rule: extents are preserved (capped only by the grid itself),
/// origin is shifted back inside.
pub fn clamp_move(candidate: Placement, grid: GridConfig) -> Placement {
    let width = candidate.width.clamp(1, grid.columns);
    let height = candidate.height.clamp(1, grid.rows);
    Placement {
        column: candidate.column.clamp(1, grid.columns - width + 1),
        row: candidate.row.clamp(1, grid.rows - height + 1),
        width,
        height,
    }
}

/// Resize rule: the anchor edge stays where the candidate put it; the
/// dragged edge is capped. Axes the mode does not resize follow the move
/// rule.
pub fn clamp_resize(candidate: Placement, grid: GridConfig, mode: InteractionMode) -> Placement {
    let mut placement = candidate;

    if mode.resizes_west() {
        // East edge is the anchor.
        let east = candidate.last_column().clamp(1, grid.columns);
        let column = candidate.column.clamp(1, east);
        placement.column = column;
        placement.width = east - column + 1;
    } else if mode.resizes_east() {
        // West edge is the anchor.
        placement.column = candidate.column.clamp(1, grid.columns);
        placement.width = candidate.width.clamp(1, grid.columns - placement.column + 1);
    } else {
        let width = candidate.width.clamp(1, grid.columns);
        placement.width = width;
        placement.column = candidate.column.clamp(1, grid.columns - width + 1);
    }

    if mode.resizes_north() {
        // South edge is the anchor.
        let south = candidate.last_row().clamp(1, grid.rows);
        let row = candidate.row.clamp(1, south);
        placement.row = row;
        placement.height = south - row + 1;
    } else if mode.resizes_south() {
        // North edge is the anchor.
        placement.row = candidate.row.clamp(1, grid.rows);
        placement.height = candidate.height.clamp(1, grid.rows - placement.row + 1);
    } else {
        let height = candidate.height.clamp(1, grid.rows);
        placement.height = height;
        placement.row = candidate.row.clamp(1, grid.rows - height + 1);
    }

    placement
}
