//! Hover/selection tracking.
//!
//! Tracks which element is eligible for interaction, independent of the
//! drag state machine: `unmanaged -> hovered -> unmanaged` per element.
//! While a drag session is active, hover transitions are suppressed so
//! only one element is interactive at a time.

use super::zones;
use crate::surface::Surface;
use crate::types::{NodeId, PixelPoint};
use tracing::trace;

/// Tracks the element currently eligible for interaction.
#[derive(Debug, Default)]
pub struct HoverController {
    hovered: Option<NodeId>,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently hovered element, if any.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// Handle pointer-enter. Marks `node` hovered when it is a managed
    /// block inside a grid and no drag is active. Returns true if the
    /// hover state changed.
    pub fn pointer_entered(
        &mut self,
        surface: &dyn Surface,
        node: NodeId,
        drag_active: bool,
    ) -> bool {
        if drag_active {
            trace!(node = %node, "hover suppressed during drag");
            return false;
        }
        if surface.block_kind(node).is_none() || surface.grid_container(node).is_none() {
            return false;
        }
        if self.hovered == Some(node) {
            return false;
        }
        self.hovered = Some(node);
        true
    }

    /// Handle pointer-leave. The hover only clears when the pointer
    /// actually left the element: moving onto a descendant (internal
    /// decoration) keeps it, which prevents flicker. Returns true if
    /// the hover state changed.
    pub fn pointer_left(
        &mut self,
        surface: &dyn Surface,
        node: NodeId,
        related: Option<NodeId>,
        drag_active: bool,
    ) -> bool {
        if drag_active {
            return false;
        }
        if self.hovered != Some(node) {
            return false;
        }
        if let Some(related) = related {
            if related == node || surface.is_descendant(related, node) {
                return false;
            }
        }
        self.hovered = None;
        true
    }

    /// Forget the hovered element (cleanup path).
    pub fn clear(&mut self) -> bool {
        self.hovered.take().is_some()
    }

    /// Zone-dependent cursor keyword for the hovered element at the
    /// given pointer position.
    pub fn cursor_hint(
        &self,
        surface: &dyn Surface,
        pointer: PixelPoint,
        edge_band: f64,
        corner_band: f64,
    ) -> Option<&'static str> {
        let bounds = surface.bounds(self.hovered?)?;
        Some(zones::classify(bounds, pointer, edge_band, corner_band).cursor())
    }
}
