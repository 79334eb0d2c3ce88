//! Resize-zone classification.
//!
//! A block's bounding box is divided into corner bands, edge bands, and
//! an interior. Corner bands are tested first, in a fixed precedence
//! order (NW, NE, SW, SE), then edges (W, E, N, S); the interior means
//! `Move`. Corner bands are wider than edge bands so diagonal resize
//! wins near a corner even where the bands overlap - this precedence is
//! load-bearing and covered by tests.

use crate::types::{InteractionMode, PixelPoint, PixelRect};

/// Classify a pointer position against an element's bounding box.
pub fn classify(
    bounds: PixelRect,
    pointer: PixelPoint,
    edge_band: f64,
    corner_band: f64,
) -> InteractionMode {
    let x = pointer.x - bounds.x;
    let y = pointer.y - bounds.y;
    let width = bounds.width;
    let height = bounds.height;

    let near_west = |band: f64| x <= band;
    let near_east = |band: f64| x >= width - band;
    let near_north = |band: f64| y <= band;
    let near_south = |band: f64| y >= height - band;

    // Corners first: NW, NE, SW, SE.
    if near_west(corner_band) && near_north(corner_band) {
        return InteractionMode::Nw;
    }
    if near_east(corner_band) && near_north(corner_band) {
        return InteractionMode::Ne;
    }
    if near_west(corner_band) && near_south(corner_band) {
        return InteractionMode::Sw;
    }
    if near_east(corner_band) && near_south(corner_band) {
        return InteractionMode::Se;
    }

    // Then edges: W, E, N, S.
    if near_west(edge_band) {
        return InteractionMode::W;
    }
    if near_east(edge_band) {
        return InteractionMode::E;
    }
    if near_north(edge_band) {
        return InteractionMode::N;
    }
    if near_south(edge_band) {
        return InteractionMode::S;
    }

    InteractionMode::Move
}
