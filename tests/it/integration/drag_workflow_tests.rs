//! Full drag-session workflows: press, move, release.
//!
//! The standard fixture is a 1200x500 container with a 12x10 grid
//! (100x50 px cells) and a captioned figure placed at (1,1,4,2), whose
//! pixel bounds are (0,0,400,100).

use crate::helpers::{
    RecordingSink, TestGridBuilder, assert_placement, block_bounds, current_placement, placement,
    press_move_release, pt, rect, standard_figure, studio,
};
use gridstudio::shortcode::ShortcodeWriter;
use gridstudio::surface::{PropertyMap, Surface};
use gridstudio::types::{BlockKind, GridConfig, InteractionMode as Mode};

#[test]
fn east_resize_end_to_end() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();
    let (sink, commits) = RecordingSink::new();
    studio.set_commit_sink(Box::new(sink));

    // (395,50) sits in the east edge band of the 400x100 block.
    let mode = studio.pointer_pressed(&mut surface, block, pt(395.0, 50.0));
    assert_eq!(mode, Some(Mode::E));

    // 250 px right = 2.5 cells, which rounds to 3: width 4 -> 7.
    studio.pointer_moved(&mut surface, pt(645.0, 50.0));
    let commit = studio.pointer_released(&mut surface, pt(645.0, 50.0)).unwrap();

    assert_eq!(commit.placement, placement(1, 1, 7, 2));
    assert_eq!(commit.kind, BlockKind::Figure);
    assert_placement(&surface, block, placement(1, 1, 7, 2));
    assert!(!studio.is_dragging());

    // The caption mirrored column/width and sits on the row below.
    let props = PropertyMap::default();
    let caption = surface.caption_of(block).unwrap();
    assert_eq!(surface.raw_property(caption, &props.column), Some("1"));
    assert_eq!(surface.raw_property(caption, &props.width), Some("7"));
    assert_eq!(surface.raw_property(caption, &props.row), Some("3"));
    assert_eq!(surface.raw_property(caption, &props.height), None);

    assert_eq!(commits.borrow().len(), 1);
    assert_eq!(commits.borrow()[0].placement, placement(1, 1, 7, 2));
}

#[test]
fn resize_is_capped_at_the_grid_edge() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();

    let commit =
        press_move_release(&mut studio, &mut surface, block, pt(395.0, 50.0), pt(3000.0, 50.0));

    assert_eq!(commit.unwrap().placement, placement(1, 1, 12, 2));
    assert_placement(&surface, block, placement(1, 1, 12, 2));
}

#[test]
fn move_drag_repositions_without_resizing() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();

    let mode = studio.pointer_pressed(&mut surface, block, pt(200.0, 50.0));
    assert_eq!(mode, Some(Mode::Move));

    studio.pointer_moved(&mut surface, pt(500.0, 150.0));
    studio.pointer_released(&mut surface, pt(500.0, 150.0));

    assert_placement(&surface, block, placement(4, 3, 4, 2));
}

#[test]
fn second_press_is_silently_ignored() {
    let first = placement(1, 1, 4, 2);
    let second = placement(6, 5, 4, 2);
    let (mut surface, _, blocks) = TestGridBuilder::new()
        .with_block(BlockKind::Figure, block_bounds(first))
        .with_placement(first)
        .with_block(BlockKind::Image, block_bounds(second))
        .with_placement(second)
        .build();
    let mut studio = studio();

    assert_eq!(
        studio.pointer_pressed(&mut surface, blocks[0], pt(395.0, 50.0)),
        Some(Mode::E)
    );
    // A second pointer-down while a session is active is a no-op.
    assert_eq!(studio.pointer_pressed(&mut surface, blocks[1], pt(700.0, 250.0)), None);

    assert_eq!(studio.drag_target(), Some(blocks[0]));
    let session = studio.session().unwrap();
    assert_eq!(session.start_placement, first);
    assert_eq!(session.mode, Mode::E);
    assert_placement(&surface, blocks[1], second);
}

#[test]
fn replaying_the_same_pointer_position_is_idempotent() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();

    studio.pointer_pressed(&mut surface, block, pt(395.0, 50.0));
    studio.pointer_moved(&mut surface, pt(645.0, 50.0));
    let after_first = current_placement(&surface, block);

    studio.pointer_moved(&mut surface, pt(645.0, 50.0));
    assert_eq!(current_placement(&surface, block), after_first);
    assert!(studio.is_dragging());

    let commit = studio.pointer_released(&mut surface, pt(645.0, 50.0)).unwrap();
    assert_eq!(commit.placement, after_first);
}

#[test]
fn detached_target_cancels_without_error() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();

    studio.pointer_pressed(&mut surface, block, pt(395.0, 50.0));
    studio.pointer_moved(&mut surface, pt(645.0, 50.0));

    surface.detach(block);
    let commit = studio.pointer_released(&mut surface, pt(645.0, 50.0));

    assert_eq!(commit, None);
    assert!(!studio.is_dragging());
}

#[test]
fn detachment_during_move_cancels_immediately() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();

    studio.pointer_pressed(&mut surface, block, pt(395.0, 50.0));
    surface.detach(block);
    studio.pointer_moved(&mut surface, pt(645.0, 50.0));

    assert!(!studio.is_dragging());
}

#[test]
fn cancel_restores_the_start_placement() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();
    let props = PropertyMap::default();

    studio.pointer_pressed(&mut surface, block, pt(395.0, 50.0));
    studio.pointer_moved(&mut surface, pt(645.0, 50.0));
    assert_placement(&surface, block, placement(1, 1, 7, 2));

    studio.cancel_drag(&mut surface);

    assert!(!studio.is_dragging());
    assert_placement(&surface, block, placement(1, 1, 4, 2));
    let caption = surface.caption_of(block).unwrap();
    assert_eq!(surface.raw_property(caption, &props.width), Some("4"));
}

#[test]
fn northwest_resize_keeps_the_bottom_right_cell() {
    let start = placement(4, 4, 4, 3);
    let (mut surface, _, blocks) = TestGridBuilder::new()
        .with_block(BlockKind::Insert, block_bounds(start))
        .with_placement(start)
        .build();
    let mut studio = studio();

    // Bounds are (300,150,400,150); (305,155) is the NW corner band.
    let mode = studio.pointer_pressed(&mut surface, blocks[0], pt(305.0, 155.0));
    assert_eq!(mode, Some(Mode::Nw));

    studio.pointer_moved(&mut surface, pt(55.0, 80.0));
    studio.pointer_released(&mut surface, pt(55.0, 80.0));

    let result = current_placement(&surface, blocks[0]);
    assert_eq!(result, placement(1, 2, 7, 5));
    assert_eq!(result.last_column(), start.last_column());
    assert_eq!(result.last_row(), start.last_row());
}

#[test]
fn southeast_resize_grows_both_axes() {
    let start = placement(2, 2, 3, 3);
    let (mut surface, _, blocks) = TestGridBuilder::new()
        .with_block(BlockKind::Image, block_bounds(start))
        .with_placement(start)
        .build();
    let mut studio = studio();

    // Bounds are (100,50,300,150); (395,195) is the SE corner band.
    let mode = studio.pointer_pressed(&mut surface, blocks[0], pt(395.0, 195.0));
    assert_eq!(mode, Some(Mode::Se));

    studio.pointer_moved(&mut surface, pt(645.0, 320.0));
    studio.pointer_released(&mut surface, pt(645.0, 320.0));

    assert_placement(&surface, blocks[0], placement(2, 2, 6, 6));
}

#[test]
fn commit_handoff_renders_the_shortcode() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();
    let writer = ShortcodeWriter::new();
    let rendered = writer.rendered();
    studio.set_commit_sink(Box::new(writer));

    press_move_release(&mut studio, &mut surface, block, pt(395.0, 50.0), pt(645.0, 50.0));

    assert_eq!(
        rendered.borrow().as_slice(),
        ["{% figure col=1 row=1 width=7 height=2 %}"]
    );
}

#[test]
fn missing_geometry_materializes_defaults() {
    // No stored placement: the block materializes (1,1,4,3).
    let (mut surface, _, blocks) = TestGridBuilder::new()
        .with_block(BlockKind::Insert, block_bounds(placement(1, 1, 4, 3)))
        .build();
    let mut studio = studio();

    let mode = studio.pointer_pressed(&mut surface, blocks[0], pt(200.0, 75.0));
    assert_eq!(mode, Some(Mode::Move));
    studio.pointer_moved(&mut surface, pt(300.0, 75.0));
    studio.pointer_released(&mut surface, pt(300.0, 75.0));

    assert_placement(&surface, blocks[0], placement(2, 1, 4, 3));
}

#[test]
fn unresolvable_grid_falls_back_to_defaults() {
    let start = placement(1, 1, 4, 2);
    let (mut surface, _, blocks) = TestGridBuilder::new()
        .without_grid_properties()
        .with_block(BlockKind::Figure, block_bounds(start))
        .with_placement(start)
        .build();
    let mut studio = studio();

    studio.pointer_pressed(&mut surface, blocks[0], pt(395.0, 50.0));
    assert_eq!(studio.session().unwrap().grid, GridConfig::new(12, 10));
    studio.pointer_released(&mut surface, pt(395.0, 50.0));
}

#[test]
fn custom_grid_dimensions_drive_conversion() {
    // 600x400 container with a 6x4 grid: cells are 100x100 px.
    let start = placement(1, 1, 2, 2);
    let (mut surface, _, blocks) = TestGridBuilder::new()
        .with_container_bounds(rect(0.0, 0.0, 600.0, 400.0))
        .with_grid(6, 4)
        .with_block(BlockKind::Image, rect(0.0, 0.0, 200.0, 200.0))
        .with_placement(start)
        .build();
    let mut studio = studio();

    let mode = studio.pointer_pressed(&mut surface, blocks[0], pt(195.0, 100.0));
    assert_eq!(mode, Some(Mode::E));

    // 200 px is two cells on this grid.
    studio.pointer_moved(&mut surface, pt(395.0, 100.0));
    studio.pointer_released(&mut surface, pt(395.0, 100.0));

    assert_placement(&surface, blocks[0], placement(1, 1, 4, 2));
}

#[test]
fn press_on_unmanaged_node_does_nothing() {
    let (mut surface, container, _) = standard_figure();
    let mut studio = studio();

    assert_eq!(studio.pointer_pressed(&mut surface, container, pt(10.0, 10.0)), None);
    assert!(!studio.is_dragging());
}

#[test]
fn release_without_a_session_is_a_no_op() {
    let (mut surface, _, _) = standard_figure();
    let mut studio = studio();
    assert_eq!(studio.pointer_released(&mut surface, pt(10.0, 10.0)), None);
}

#[test]
fn reset_cancels_and_restores() {
    let (mut surface, _, block) = standard_figure();
    let mut studio = studio();

    studio.pointer_pressed(&mut surface, block, pt(395.0, 50.0));
    studio.pointer_moved(&mut surface, pt(645.0, 50.0));
    studio.reset(&mut surface);

    assert!(!studio.is_dragging());
    assert_eq!(studio.hovered(), None);
    assert_placement(&surface, block, placement(1, 1, 4, 2));
}
