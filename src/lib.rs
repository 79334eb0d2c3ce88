//! gridstudio - interactive modular-grid placement engine.
//!
//! Lets a user resize and reposition content blocks inside a CSS-grid
//! page layout by direct manipulation: geometry is computed from raw
//! pointer movement, clamped to the grid, written back to the block's
//! style properties, and mirrored onto its caption. The engine is the
//! authoring-time half of a paged-layout pipeline; a pagination renderer
//! consumes the same properties at render time.
//!
//! ## Modules
//!
//! - `types` / `constants` - shared data model and tuning values
//! - `surface` - the document port and its adapters (in-memory, web)
//! - `grid` - grid configuration resolution and placement clamping
//! - `input` - zones, coordinate conversion, hover, drag sessions
//! - `caption` - caption synchronization
//! - `engine` - the consolidated facade behind pointer-event entry points
//! - `shortcode` - commit handoff to the code-serialization collaborator
//! - `error` - the internal recovery taxonomy
//! - `perf` - hot-path timing instrumentation (`profiling` feature)

pub mod caption;
pub mod constants;
pub mod engine;
pub mod error;
pub mod grid;
pub mod input;
pub mod perf;
pub mod shortcode;
pub mod surface;
pub mod types;

pub use engine::{EngineOptions, GridStudio};
pub use error::{GridError, GridResult};
pub use types::{
    BlockKind, CaptionHeightPolicy, GridConfig, GridDelta, InteractionMode, NodeId, PixelPoint,
    PixelRect, PixelSize, Placement, VisualState,
};
