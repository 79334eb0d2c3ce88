//! The consolidated engine facade.
//!
//! [`GridStudio`] wires the grid resolver, hover controller, and drag
//! session controller together behind pointer-event entry points. It is
//! the single writer of the two pieces of shared interaction state (the
//! active-session guard and the hovered-element reference) and owns the
//! derived visual-state recomputation.
//!
//! None of the entry points return errors or panic: anomalies degrade
//! to no-ops per the engine's recovery rules.

use crate::constants::{CORNER_BAND, EDGE_BAND};
use crate::grid::GridConfigResolver;
use crate::input::{DragSession, HoverController, SessionController};
use crate::profile_scope;
use crate::shortcode::{CommitSink, CommittedPlacement};
use crate::surface::{PropertyMap, Surface};
use crate::types::{CaptionHeightPolicy, GridConfig, InteractionMode, NodeId, PixelPoint, VisualState};

/// Everything that varied between the plugin copies this engine
/// replaces: property names, band widths, fallback grid dimensions,
/// and the caption policy.
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Style property names for geometry storage.
    pub properties: PropertyMap,
    /// Edge resize band width in pixels.
    pub edge_band: f64,
    /// Corner resize band width in pixels (wider than the edge band).
    pub corner_band: f64,
    /// Grid dimensions used when a container's styling is unresolvable.
    pub default_grid: GridConfig,
    /// How captions follow their block vertically.
    pub caption_policy: CaptionHeightPolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            properties: PropertyMap::default(),
            edge_band: EDGE_BAND,
            corner_band: CORNER_BAND,
            default_grid: GridConfig::default(),
            caption_policy: CaptionHeightPolicy::default(),
        }
    }
}

/// The interactive modular-grid placement engine.
pub struct GridStudio {
    options: EngineOptions,
    resolver: GridConfigResolver,
    hover: HoverController,
    session: SessionController,
    sink: Option<Box<dyn CommitSink>>,
    /// Nodes currently carrying a non-idle visual, so transitions can
    /// clear exactly what they painted.
    painted: Vec<(NodeId, VisualState)>,
}

impl GridStudio {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        let resolver = GridConfigResolver::new(options.default_grid);
        Self {
            options,
            resolver,
            hover: HoverController::new(),
            session: SessionController::new(),
            sink: None,
            painted: Vec::new(),
        }
    }

    /// Install the collaborator that receives committed placements.
    pub fn set_commit_sink(&mut self, sink: Box<dyn CommitSink>) {
        self.sink = Some(sink);
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Whether a drag session is active.
    pub fn is_dragging(&self) -> bool {
        self.session.is_active()
    }

    /// The block being manipulated, if a drag is active.
    pub fn drag_target(&self) -> Option<NodeId> {
        self.session.target()
    }

    /// The active drag session, for introspection.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.session()
    }

    /// The element currently eligible for interaction.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hover.hovered()
    }

    // ========================================================================
    // Pointer Events
    // ========================================================================

    /// Pointer entered `node`.
    pub fn pointer_entered(&mut self, surface: &mut dyn Surface, node: NodeId) {
        if self
            .hover
            .pointer_entered(surface, node, self.session.is_active())
        {
            self.refresh_visuals(surface);
        }
    }

    /// Pointer left `node` toward `related` (the element now under the
    /// pointer, when known).
    pub fn pointer_left(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        related: Option<NodeId>,
    ) {
        if self
            .hover
            .pointer_left(surface, node, related, self.session.is_active())
        {
            self.refresh_visuals(surface);
        }
    }

    /// Pointer pressed on `node`. Starts a drag session when the node is
    /// a managed block; returns the classified mode. A press while a
    /// session is active is ignored.
    pub fn pointer_pressed(
        &mut self,
        surface: &mut dyn Surface,
        node: NodeId,
        pointer: PixelPoint,
    ) -> Option<InteractionMode> {
        profile_scope!("pointer_pressed");
        let mode = self
            .session
            .start(surface, &mut self.resolver, &self.options, node, pointer);
        if mode.is_some() {
            self.refresh_visuals(surface);
        }
        mode
    }

    /// Pointer moved to `pointer`. Applies the live placement while a
    /// session is active; otherwise a no-op.
    pub fn pointer_moved(&mut self, surface: &mut dyn Surface, pointer: PixelPoint) {
        profile_scope!("pointer_moved");
        let was_active = self.session.is_active();
        self.session.update(surface, &self.options, pointer);
        if was_active && !self.session.is_active() {
            // The update canceled (target detached).
            self.refresh_visuals(surface);
        }
    }

    /// Pointer released at `pointer`. Commits the active session, clears
    /// the transient visual state, and hands the final placement to the
    /// commit sink.
    pub fn pointer_released(
        &mut self,
        surface: &mut dyn Surface,
        pointer: PixelPoint,
    ) -> Option<CommittedPlacement> {
        profile_scope!("pointer_released");
        let commit = self.session.commit(surface, &self.options, pointer);
        self.refresh_visuals(surface);
        if let (Some(commit), Some(sink)) = (commit.as_ref(), self.sink.as_mut()) {
            sink.placement_committed(commit);
        }
        commit
    }

    /// Cancel the active drag (focus loss, escape). Restores the start
    /// placement.
    pub fn cancel_drag(&mut self, surface: &mut dyn Surface) {
        self.session.cancel(surface, &self.options);
        self.refresh_visuals(surface);
    }

    /// Cursor keyword for the hovered element at `pointer`, if any.
    pub fn cursor_hint(&self, surface: &dyn Surface, pointer: PixelPoint) -> Option<&'static str> {
        self.hover
            .cursor_hint(surface, pointer, self.options.edge_band, self.options.corner_band)
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Drop the cached grid configuration for one container (it was
    /// removed or restyled).
    pub fn invalidate_container(&mut self, container: NodeId) {
        self.resolver.invalidate(container);
    }

    /// Full cleanup: cancel any drag, forget hover, drop all cached
    /// grid configurations. Call when the authoring surface re-renders.
    pub fn reset(&mut self, surface: &mut dyn Surface) {
        self.session.cancel(surface, &self.options);
        self.hover.clear();
        self.resolver.clear();
        self.refresh_visuals(surface);
    }

    /// Recompute the derived visual state from (hovered, drag target)
    /// and reconcile it against what was last painted.
    fn refresh_visuals(&mut self, surface: &mut dyn Surface) {
        let mut desired: Vec<(NodeId, VisualState)> = Vec::new();
        if let Some(target) = self.session.target() {
            desired.push((target, VisualState::Manipulating));
        }
        if let Some(hovered) = self.hover.hovered() {
            if Some(hovered) != self.session.target() {
                desired.push((hovered, VisualState::Hovered));
            }
        }

        for (node, _) in &self.painted {
            if !desired.iter().any(|(desired_node, _)| desired_node == node) {
                surface.set_visual_state(*node, VisualState::Idle);
            }
        }
        for (node, state) in &desired {
            surface.set_visual_state(*node, *state);
        }
        self.painted = desired;
    }
}

impl Default for GridStudio {
    fn default() -> Self {
        Self::new()
    }
}
