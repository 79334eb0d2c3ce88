//! Pointer interaction handling for the placement engine.
//!
//! ## Architecture
//!
//! Interaction state lives in an explicit state machine
//! ([`state::SessionState`]) instead of scattered flags, making
//! impossible states unrepresentable. Geometry derivation is pure:
//! zone classification, coordinate conversion, and the per-mode rule
//! table are free functions over plain values, with document access
//! confined to the [`Surface`](crate::surface::Surface) port.
//!
//! ## Modules
//!
//! - `state` - drag session state machine and session data
//! - `zones` - edge/corner band classification of pointer positions
//! - `coords` - pixel-to-grid coordinate conversion
//! - `hover` - hover/selection tracking and cursor feedback
//! - `session` - session lifecycle: start, live updates, commit, cancel

pub mod coords;
pub mod hover;
pub mod session;
pub mod state;
pub mod zones;

pub use coords::CoordinateConverter;
pub use hover::HoverController;
pub use session::SessionController;
pub use state::{DragSession, SessionState};
