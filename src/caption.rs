//! Caption synchronization.
//!
//! A block's geometry is the single source of truth; its caption (an
//! immediately-following sibling) is derived from it. Synchronization
//! touches the caption node and nothing else.

use crate::surface::{PropertyMap, Surface};
use crate::types::{CaptionHeightPolicy, GridConfig, NodeId, Placement};
use tracing::trace;

/// Mirror `placement` from a block onto its caption sibling, if one
/// exists.
///
/// Column and width always mirror. The vertical axis follows `policy`:
/// `MirrorHeight` copies row and height verbatim, `RowBelow` recomputes
/// the caption's row as the first row below the block (capped at the
/// grid's last row so the stored value stays in range) and leaves the
/// caption's height alone.
pub fn sync_caption(
    surface: &mut dyn Surface,
    primary: NodeId,
    placement: Placement,
    grid: GridConfig,
    policy: CaptionHeightPolicy,
    props: &PropertyMap,
) {
    let Some(caption) = surface.caption_of(primary) else {
        return;
    };

    surface.set_property(caption, &props.column, &placement.column.to_string());
    surface.set_property(caption, &props.width, &placement.width.to_string());

    match policy {
        CaptionHeightPolicy::MirrorHeight => {
            surface.set_property(caption, &props.row, &placement.row.to_string());
            surface.set_property(caption, &props.height, &placement.height.to_string());
        }
        CaptionHeightPolicy::RowBelow => {
            let row = placement
                .row
                .saturating_add(placement.height)
                .min(grid.rows);
            surface.set_property(caption, &props.row, &row.to_string());
        }
    }
    trace!(primary = %primary, caption = %caption, ?policy, "caption synchronized");
}
