//! Grid geometry: configuration resolution and placement clamping.
//!
//! - `config` - per-container grid dimensions, cached by container identity
//! - `clamp` - mode-aware validation keeping placements inside the grid

pub mod clamp;
pub mod config;

pub use clamp::{clamp, clamp_move, clamp_resize};
pub use config::GridConfigResolver;
