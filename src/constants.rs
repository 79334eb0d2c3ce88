//! Engine-wide constants.
//!
//! Centralizes band widths, grid defaults, and property names so the
//! engine stays a single parametrized implementation instead of the
//! per-category copies it replaced.

// ============================================================================
// Grid Defaults
// ============================================================================

/// Column count used when a grid container's styling is unresolvable
pub const DEFAULT_GRID_COLUMNS: i32 = 12;

/// Row count used when a grid container's styling is unresolvable
pub const DEFAULT_GRID_ROWS: i32 = 10;

/// Column span materialized for a block that has no stored width
pub const DEFAULT_BLOCK_WIDTH: i32 = 4;

/// Row span materialized for a block that has no stored height
pub const DEFAULT_BLOCK_HEIGHT: i32 = 3;

// ============================================================================
// Interaction Zones
// ============================================================================

/// Width of the edge resize bands in pixels
pub const EDGE_BAND: f64 = 15.0;

/// Width of the corner resize bands in pixels.
///
/// Wider than [`EDGE_BAND`] so diagonal resize is reachable without
/// pixel-perfect cursor placement.
pub const CORNER_BAND: f64 = 20.0;

// ============================================================================
// Geometry Storage (style property names)
// ============================================================================

/// Per-block column property
pub const PROP_COLUMN: &str = "--print-col";

/// Per-block row property
pub const PROP_ROW: &str = "--print-row";

/// Per-block width property (column span)
pub const PROP_WIDTH: &str = "--print-width";

/// Per-block height property (row span)
pub const PROP_HEIGHT: &str = "--print-height";

/// Grid container column-count property
pub const PROP_GRID_COLUMNS: &str = "--grid-col";

/// Grid container row-count property
pub const PROP_GRID_ROWS: &str = "--grid-row";

// ============================================================================
// DOM Contract (web adapter)
// ============================================================================

/// Class marking a modular-grid container
pub const GRID_CONTAINER_CLASS: &str = "modular-grid";

/// Class marking an image block
pub const BLOCK_CLASS_IMAGE: &str = "grid-image";

/// Class marking a generic insert block
pub const BLOCK_CLASS_INSERT: &str = "grid-insert";

/// Tag name of a caption sibling
pub const CAPTION_TAG: &str = "FIGCAPTION";

/// Class applied while a block is hovered and eligible for interaction
pub const VISUAL_CLASS_HOVERED: &str = "is-resizable";

/// Class applied to the target of the active drag session
pub const VISUAL_CLASS_MANIPULATING: &str = "is-manipulating";
