//! Commit boundary toward the code-serialization collaborator.
//!
//! On pointer-up the engine hands the final, clamped placement to a
//! [`CommitSink`]. The bundled [`ShortcodeWriter`] renders the
//! authoring-syntax string used for copy/paste back into source
//! content; hosts with richer serializers plug in their own sink.

use crate::types::{BlockKind, NodeId, Placement};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// The final result of a drag session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CommittedPlacement {
    /// The manipulated block.
    pub node: NodeId,
    /// Its grid container.
    pub container: NodeId,
    /// Block category, for the shortcode name.
    pub kind: BlockKind,
    /// The clamped placement written to the document.
    pub placement: Placement,
}

/// Receives committed placements at the end of each drag.
pub trait CommitSink {
    fn placement_committed(&mut self, commit: &CommittedPlacement);
}

/// Render the authoring shortcode for a committed placement.
pub fn render(commit: &CommittedPlacement) -> String {
    let Placement { column, row, width, height } = commit.placement;
    format!(
        "{{% {} col={column} row={row} width={width} height={height} %}}",
        commit.kind.shortcode_name()
    )
}

/// A [`CommitSink`] that renders shortcodes and keeps them for the
/// authoring UI to surface (copy button, console).
#[derive(Debug, Default)]
pub struct ShortcodeWriter {
    rendered: Rc<RefCell<Vec<String>>>,
}

impl ShortcodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared handle to everything rendered so far; useful because the
    /// writer itself is owned by the engine once installed.
    pub fn rendered(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.rendered)
    }
}

impl CommitSink for ShortcodeWriter {
    fn placement_committed(&mut self, commit: &CommittedPlacement) {
        let shortcode = render(commit);
        info!(node = %commit.node, %shortcode, "placement committed");
        self.rendered.borrow_mut().push(shortcode);
    }
}
