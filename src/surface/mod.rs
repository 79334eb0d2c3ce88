//! The document port.
//!
//! All document access goes through the [`Surface`] trait so the geometry
//! engine stays free of any particular host. Two adapters ship with the
//! crate:
//!
//! - `memory` - an in-memory node tree for tests and headless builds
//! - `web` - a `web-sys` adapter over live DOM elements (feature `web`)
//!
//! Placement geometry is stored as four numeric style properties per
//! block and two per grid container. The property *names* are data
//! ([`PropertyMap`]) - the engine is parametrized by them instead of
//! carrying one code path per block category.

pub mod memory;
#[cfg(feature = "web")]
pub mod web;

pub use memory::MemorySurface;

use crate::constants::{
    DEFAULT_BLOCK_HEIGHT, DEFAULT_BLOCK_WIDTH, PROP_COLUMN, PROP_GRID_COLUMNS, PROP_GRID_ROWS,
    PROP_HEIGHT, PROP_ROW, PROP_WIDTH,
};
use crate::error::GridError;
use crate::types::{BlockKind, NodeId, PixelRect, Placement, VisualState};
use tracing::debug;

/// Host-side view of the authoring document.
///
/// Every lookup returns `Option`; the engine maps absence onto its error
/// taxonomy and degrades, so implementations never need to panic.
pub trait Surface {
    /// Whether the node is still part of the document.
    fn is_attached(&self, node: NodeId) -> bool;

    /// The node's recognized block category, if it is a placeable block.
    fn block_kind(&self, node: NodeId) -> Option<BlockKind>;

    /// The nearest grid-container ancestor of the node.
    fn grid_container(&self, node: NodeId) -> Option<NodeId>;

    /// Whether `node` is a descendant of `ancestor`.
    fn is_descendant(&self, node: NodeId, ancestor: NodeId) -> bool;

    /// Read a style property (computed value) as a raw string.
    fn property(&self, node: NodeId, name: &str) -> Option<String>;

    /// Write a style property on the node's inline style.
    fn set_property(&mut self, node: NodeId, name: &str, value: &str);

    /// The node's bounding box in viewport pixels.
    fn bounds(&self, node: NodeId) -> Option<PixelRect>;

    /// The node's caption: an immediately-following sibling of the
    /// recognized caption kind, if present.
    fn caption_of(&self, node: NodeId) -> Option<NodeId>;

    /// Apply the derived interaction visual to the node.
    fn set_visual_state(&mut self, node: NodeId, state: VisualState);
}

// ============================================================================
// Property Names
// ============================================================================

/// Names of the style properties that persist grid geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyMap {
    /// Block column (1-based)
    pub column: String,
    /// Block row (1-based)
    pub row: String,
    /// Block column span
    pub width: String,
    /// Block row span
    pub height: String,
    /// Container column count
    pub grid_columns: String,
    /// Container row count
    pub grid_rows: String,
}

impl Default for PropertyMap {
    fn default() -> Self {
        Self {
            column: PROP_COLUMN.to_string(),
            row: PROP_ROW.to_string(),
            width: PROP_WIDTH.to_string(),
            height: PROP_HEIGHT.to_string(),
            grid_columns: PROP_GRID_COLUMNS.to_string(),
            grid_rows: PROP_GRID_ROWS.to_string(),
        }
    }
}

// ============================================================================
// Geometry Read/Write
// ============================================================================

/// Lenient numeric parse for stored property values.
///
/// Accepts plain integers and fractional values (rounded); anything else
/// is `None`.
pub(crate) fn parse_cell_value(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(value) = trimmed.parse::<i32>() {
        return Some(value);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.round() as i32)
}

/// Read a block's placement, materializing defaults for absent or
/// non-numeric fields. Never fails.
pub fn read_placement(surface: &dyn Surface, node: NodeId, props: &PropertyMap) -> Placement {
    let field = |name: &str, fallback: i32| match surface.property(node, name) {
        Some(raw) => match parse_cell_value(&raw) {
            Some(value) => value.max(1),
            None => {
                debug!(
                    error = %GridError::InvalidGeometryRead {
                        node,
                        property: name.to_string(),
                    },
                    %raw,
                    "materializing default"
                );
                fallback
            }
        },
        None => fallback,
    };

    Placement {
        column: field(&props.column, 1),
        row: field(&props.row, 1),
        width: field(&props.width, DEFAULT_BLOCK_WIDTH),
        height: field(&props.height, DEFAULT_BLOCK_HEIGHT),
    }
}

/// Persist a placement onto a block's geometry properties.
pub fn write_placement(
    surface: &mut dyn Surface,
    node: NodeId,
    props: &PropertyMap,
    placement: Placement,
) {
    surface.set_property(node, &props.column, &placement.column.to_string());
    surface.set_property(node, &props.row, &placement.row.to_string());
    surface.set_property(node, &props.width, &placement.width.to_string());
    surface.set_property(node, &props.height, &placement.height.to_string());
}
