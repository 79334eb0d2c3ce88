//! Core types for the grid placement engine.
//!
//! Defines the fundamental data structures shared across the engine:
//! node identity, pixel geometry, grid geometry, and the interaction
//! mode table that drives drag sessions.

use crate::constants::{DEFAULT_GRID_COLUMNS, DEFAULT_GRID_ROWS};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Node Identity
// ============================================================================

/// Opaque identifier for a node on a [`Surface`](crate::surface::Surface).
///
/// Adapters own the mapping from ids to real document nodes; the engine
/// only ever passes ids around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Pixel Geometry
// ============================================================================

/// A position in pixel space (viewport coordinates).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[inline]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width, self.height)
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

// ============================================================================
// Grid Geometry
// ============================================================================

/// Dimensions of one modular grid.
///
/// Both fields are positive; [`GridConfig::new`] floors them at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: i32,
    pub rows: i32,
}

impl GridConfig {
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_GRID_COLUMNS,
            rows: DEFAULT_GRID_ROWS,
        }
    }
}

/// A block's occupied cell range within its grid.
///
/// Occupies columns `[column, column + width - 1]` and rows
/// `[row, row + height - 1]`, 1-based. After clamping, all fields are
/// at least 1 and the range lies inside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub column: i32,
    pub row: i32,
    pub width: i32,
    pub height: i32,
}

impl Placement {
    pub fn new(column: i32, row: i32, width: i32, height: i32) -> Self {
        Self { column, row, width, height }
    }

    /// Last occupied column (the east edge).
    #[inline]
    pub fn last_column(&self) -> i32 {
        self.column.saturating_add(self.width).saturating_sub(1)
    }

    /// Last occupied row (the south edge).
    #[inline]
    pub fn last_row(&self) -> i32 {
        self.row.saturating_add(self.height).saturating_sub(1)
    }

    /// Whether the placement lies fully inside `grid` with positive extents.
    pub fn fits(&self, grid: GridConfig) -> bool {
        self.column >= 1
            && self.row >= 1
            && self.width >= 1
            && self.height >= 1
            && self.last_column() <= grid.columns
            && self.last_row() <= grid.rows
    }
}

/// A pointer movement expressed in whole grid cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDelta {
    pub columns: i32,
    pub rows: i32,
}

impl GridDelta {
    #[inline]
    pub fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }
}

// ============================================================================
// Interaction Modes
// ============================================================================

/// What a drag session is allowed to mutate, and which edge or corner
/// stays fixed while it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Reposition the block; extent is preserved.
    Move,
    /// Resize the north edge; south edge anchored.
    N,
    /// Resize the south edge; north edge anchored.
    S,
    /// Resize the east edge; west edge anchored.
    E,
    /// Resize the west edge; east edge anchored.
    W,
    /// Resize the north-east corner; south-west corner anchored.
    Ne,
    /// Resize the north-west corner; south-east corner anchored.
    Nw,
    /// Resize the south-east corner; north-west corner anchored.
    Se,
    /// Resize the south-west corner; north-east corner anchored.
    Sw,
}

impl InteractionMode {
    #[inline]
    pub fn is_resize(self) -> bool {
        !matches!(self, Self::Move)
    }

    /// The mode drags the west edge (column moves with the pointer).
    #[inline]
    pub fn resizes_west(self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// The mode drags the east edge (width grows with the pointer).
    #[inline]
    pub fn resizes_east(self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// The mode drags the north edge (row moves with the pointer).
    #[inline]
    pub fn resizes_north(self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// The mode drags the south edge (height grows with the pointer).
    #[inline]
    pub fn resizes_south(self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Candidate placement for `delta` applied to `start`.
    ///
    /// This is the per-mode rule table: each mode mutates only the fields
    /// it owns, keeping the opposite edge fixed in grid coordinates. The
    /// result is a raw candidate and may lie outside the grid; callers
    /// clamp it with [`grid::clamp`](crate::grid::clamp).
    pub fn apply_delta(self, start: Placement, delta: GridDelta) -> Placement {
        let mut candidate = start;
        if let Self::Move = self {
            candidate.column = start.column.saturating_add(delta.columns);
            candidate.row = start.row.saturating_add(delta.rows);
            return candidate;
        }
        if self.resizes_east() {
            candidate.width = start.width.saturating_add(delta.columns);
        }
        if self.resizes_west() {
            // Column follows the pointer while the east edge stays put.
            candidate.column = start.column.saturating_add(delta.columns);
            candidate.width = start.width.saturating_sub(delta.columns);
        }
        if self.resizes_south() {
            candidate.height = start.height.saturating_add(delta.rows);
        }
        if self.resizes_north() {
            candidate.row = start.row.saturating_add(delta.rows);
            candidate.height = start.height.saturating_sub(delta.rows);
        }
        candidate
    }

    /// CSS cursor keyword for zone feedback.
    pub fn cursor(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::N | Self::S => "ns-resize",
            Self::E | Self::W => "ew-resize",
            Self::Ne | Self::Sw => "nesw-resize",
            Self::Nw | Self::Se => "nwse-resize",
        }
    }
}

// ============================================================================
// Block Categories
// ============================================================================

/// Recognized categories of placeable blocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// An image block.
    Image,
    /// A generic markdown/content insert.
    Insert,
    /// A figure with an optional caption sibling.
    Figure,
}

impl BlockKind {
    /// Name used in the authoring shortcode syntax.
    pub fn shortcode_name(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Insert => "insert",
            Self::Figure => "figure",
        }
    }
}

// ============================================================================
// Caption Synchronization Policy
// ============================================================================

/// How a caption's vertical placement follows its block.
///
/// The plugin lineage this engine consolidates disagreed on the point, so
/// it is a policy rather than a hardcoded rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CaptionHeightPolicy {
    /// Copy row and height from the block verbatim.
    MirrorHeight,
    /// Recompute the caption's row as `block.row + block.height` so the
    /// caption sits visually below the block; height is left alone.
    #[default]
    RowBelow,
}

// ============================================================================
// Visual Feedback
// ============================================================================

/// Derived view state for a managed element.
///
/// Recomputed from (hovered element, active drag target) on each state
/// transition rather than toggled imperatively from event handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualState {
    /// Not eligible for interaction feedback.
    #[default]
    Idle,
    /// Pointer is over the element; zone cursors are live.
    Hovered,
    /// The element is the target of the active drag session.
    Manipulating,
}
