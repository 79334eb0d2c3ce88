//! Drag session lifecycle.
//!
//! The controller owns the state machine and performs the per-event
//! work: capturing start state on pointer-down, deriving the live
//! placement on pointer-move, and committing or discarding on
//! pointer-up. Geometry derivation is pure (zones, coords, rule table,
//! clamp); only the final placement write and caption sync touch the
//! surface.
//!
//! Failure semantics: nothing here returns an error to the caller. A
//! detached target cancels the session, a busy controller ignores the
//! new request, and unreadable geometry materializes defaults - each
//! logged through the [`GridError`] taxonomy.

use super::coords::CoordinateConverter;
use super::state::{DragSession, SessionState};
use super::zones;
use crate::caption::sync_caption;
use crate::engine::EngineOptions;
use crate::error::GridError;
use crate::grid::{GridConfigResolver, clamp, clamp_move};
use crate::shortcode::CommittedPlacement;
use crate::surface::{Surface, read_placement, write_placement};
use crate::types::{InteractionMode, NodeId, PixelPoint};
use tracing::{debug, trace};

/// Owns the one-at-a-time drag session.
#[derive(Debug, Default)]
pub struct SessionController {
    state: SessionState,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.state.active()
    }

    /// The block being manipulated, if a session is active.
    pub fn target(&self) -> Option<NodeId> {
        self.state.target()
    }

    /// Start a manipulation at `pointer` on `node`.
    ///
    /// Returns the classified mode on success. Refuses silently - and
    /// leaves any live session untouched - when a session is already
    /// active, the node is not a managed block inside a grid, or its
    /// boxes cannot be measured.
    pub fn start(
        &mut self,
        surface: &mut dyn Surface,
        resolver: &mut GridConfigResolver,
        options: &EngineOptions,
        node: NodeId,
        pointer: PixelPoint,
    ) -> Option<InteractionMode> {
        if self.state.is_active() {
            debug!(error = %GridError::ReentrantStart, node = %node, "ignoring pointer-down");
            return None;
        }
        if !surface.is_attached(node) {
            debug!(error = %GridError::TargetDetached { node }, "ignoring pointer-down");
            return None;
        }
        let kind = surface.block_kind(node)?;
        let container = surface.grid_container(node)?;
        let bounds = surface.bounds(node)?;
        let container_bounds = surface.bounds(container)?;

        let grid = resolver.resolve(surface, container, &options.properties);
        let mode = zones::classify(bounds, pointer, options.edge_band, options.corner_band);

        // Materialized defaults can exceed a small grid; normalizing here
        // keeps every later anchor inside bounds.
        let start_placement = clamp_move(read_placement(surface, node, &options.properties), grid);

        trace!(node = %node, ?mode, ?start_placement, "drag session started");
        self.state.begin(DragSession {
            mode,
            anchor_pointer: pointer,
            start_placement,
            target: node,
            kind,
            container,
            grid,
            container_size: container_bounds.size(),
            last_applied: start_placement,
        });
        Some(mode)
    }

    /// Recompute the live placement for `pointer` and apply it if it
    /// changed. No-op when idle; cancels when the target has left the
    /// document. Returns true if the document was written.
    ///
    /// Pure in the pointer: the placement is a function of the anchor
    /// state and the current position, so replaying the same position
    /// is safe.
    pub fn update(
        &mut self,
        surface: &mut dyn Surface,
        options: &EngineOptions,
        pointer: PixelPoint,
    ) -> bool {
        let Some(target) = self.state.target() else {
            return false;
        };
        if !surface.is_attached(target) {
            debug!(error = %GridError::TargetDetached { node: target }, "canceling drag");
            self.cancel(surface, options);
            return false;
        }

        let Some(session) = self.state.active_mut() else {
            return false;
        };
        let delta = CoordinateConverter::pixel_delta_to_grid(
            pointer.x - session.anchor_pointer.x,
            pointer.y - session.anchor_pointer.y,
            session.container_size,
            session.grid,
        );
        let candidate = session.mode.apply_delta(session.start_placement, delta);
        let clamped = clamp(candidate, session.grid, session.mode);
        if clamped == session.last_applied {
            return false;
        }
        session.last_applied = clamped;

        let (target, grid, policy) = (session.target, session.grid, options.caption_policy);
        write_placement(surface, target, &options.properties, clamped);
        sync_caption(surface, target, clamped, grid, policy, &options.properties);
        true
    }

    /// Finalize the session with one last update at `pointer`.
    ///
    /// Returns the committed placement for the code-serialization
    /// collaborator, or `None` if no session was active (or the target
    /// detached during the final update).
    pub fn commit(
        &mut self,
        surface: &mut dyn Surface,
        options: &EngineOptions,
        pointer: PixelPoint,
    ) -> Option<CommittedPlacement> {
        if !self.state.is_active() {
            return None;
        }
        self.update(surface, options, pointer);
        let session = self.state.take()?;
        trace!(node = %session.target, placement = ?session.last_applied, "drag committed");
        Some(CommittedPlacement {
            node: session.target,
            container: session.container,
            kind: session.kind,
            placement: session.last_applied,
        })
    }

    /// Discard the session, restoring the start placement if live
    /// updates had been applied. Safe to call when idle or after the
    /// target has been removed.
    pub fn cancel(&mut self, surface: &mut dyn Surface, options: &EngineOptions) {
        let Some(session) = self.state.take() else {
            return;
        };
        trace!(node = %session.target, "drag canceled");
        if session.last_applied != session.start_placement && surface.is_attached(session.target) {
            write_placement(
                surface,
                session.target,
                &options.properties,
                session.start_placement,
            );
            sync_caption(
                surface,
                session.target,
                session.start_placement,
                session.grid,
                options.caption_policy,
                &options.properties,
            );
        }
    }
}
