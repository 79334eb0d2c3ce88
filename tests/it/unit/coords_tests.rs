//! Coordinate conversion tests.

use gridstudio::input::CoordinateConverter;
use gridstudio::types::{GridConfig, GridDelta, PixelSize};

fn container() -> PixelSize {
    PixelSize::new(1200.0, 500.0)
}

fn grid() -> GridConfig {
    GridConfig::new(12, 10)
}

#[test]
fn cell_size_divides_container() {
    let cell = CoordinateConverter::cell_size(container(), grid());
    assert_eq!(cell.width, 100.0);
    assert_eq!(cell.height, 50.0);
}

#[test]
fn positive_delta_rounds_up_from_half() {
    // 250 px over 100 px cells is 2.5 cells; rounding snaps to 3.
    let delta = CoordinateConverter::pixel_delta_to_grid(250.0, 0.0, container(), grid());
    assert_eq!(delta, GridDelta::new(3, 0));
}

#[test]
fn negative_delta_rounds_away_from_zero() {
    let delta = CoordinateConverter::pixel_delta_to_grid(-250.0, -75.0, container(), grid());
    assert_eq!(delta, GridDelta::new(-3, -2));
}

#[test]
fn below_half_a_cell_is_zero() {
    let delta = CoordinateConverter::pixel_delta_to_grid(49.0, 24.0, container(), grid());
    assert_eq!(delta, GridDelta::new(0, 0));
}

#[test]
fn exactly_half_a_cell_snaps() {
    let delta = CoordinateConverter::pixel_delta_to_grid(50.0, 25.0, container(), grid());
    assert_eq!(delta, GridDelta::new(1, 1));
}

#[test]
fn degenerate_container_converts_to_zero() {
    let empty = PixelSize::new(0.0, 0.0);
    let delta = CoordinateConverter::pixel_delta_to_grid(500.0, 500.0, empty, grid());
    assert_eq!(delta, GridDelta::new(0, 0));
}

#[test]
fn grid_delta_back_to_pixels() {
    let (x, y) = CoordinateConverter::grid_delta_to_pixels(GridDelta::new(3, 2), container(), grid());
    assert_eq!(x, 300.0);
    assert_eq!(y, 100.0);
}
