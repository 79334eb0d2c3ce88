//! Drag session state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle   -> Active   (pointer down in a zone of a managed block)
//! Active -> Idle     (pointer up commits; cancellation discards)
//! ```
//!
//! No other states exist. A pointer-down while `Active` is refused by
//! [`SessionState::begin`], so exactly one manipulation can be live at
//! a time.

use crate::types::{BlockKind, GridConfig, InteractionMode, NodeId, PixelPoint, PixelSize, Placement};

/// One active manipulation: everything captured at pointer-down plus the
/// placement last written during the drag.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// What the drag mutates and which edge stays fixed.
    pub mode: InteractionMode,
    /// Pointer position at pointer-down; deltas are measured from here.
    pub anchor_pointer: PixelPoint,
    /// Geometry read (or materialized) when the session started.
    pub start_placement: Placement,
    /// The manipulated block.
    pub target: NodeId,
    /// Category of the target, for the commit payload.
    pub kind: BlockKind,
    /// The grid container the target belongs to.
    pub container: NodeId,
    /// Grid dimensions resolved for the container.
    pub grid: GridConfig,
    /// Container pixel size at pointer-down, for delta conversion.
    pub container_size: PixelSize,
    /// Placement currently applied to the document.
    pub last_applied: Placement,
}

/// Whether a drag session is live.
#[derive(Clone, Debug, Default)]
pub enum SessionState {
    /// No active manipulation.
    #[default]
    Idle,
    /// One manipulation in progress.
    Active(DragSession),
}

impl SessionState {
    /// Returns true if no session is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a session is active.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    /// The active session, if any.
    pub fn active(&self) -> Option<&DragSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Mutable access to the active session, if any.
    pub fn active_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// The manipulated block, if a session is active.
    pub fn target(&self) -> Option<NodeId> {
        self.active().map(|session| session.target)
    }

    /// Enter `Active`. Returns false (leaving the current session
    /// untouched) if one is already live.
    pub fn begin(&mut self, session: DragSession) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self::Active(session);
        true
    }

    /// Leave `Active`, handing back the session for commit or disposal.
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Active(session) => Some(session),
            Self::Idle => None,
        }
    }
}
