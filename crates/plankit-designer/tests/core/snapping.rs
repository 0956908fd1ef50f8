use plankit_core::geometry::Rect;
use plankit_designer::model::Room;
use plankit_designer::snap::{snap_object_position, snap_room_position};
use plankit_designer::walls::{outer_bounds, outer_bounds_at};
use proptest::prelude::*;

#[test]
fn test_room_snaps_outer_left_to_outer_right() {
    let living = Room::new("Living Room", 0.0, 0.0, 300.0, 400.0);
    let kitchen = Room::new("Kitchen", 600.0, 0.0, 300.0, 300.0);
    let rooms = vec![living.clone(), kitchen.clone()];

    // Living outer right face is 0 + 300 + 12 = 312. Drag the kitchen so
    // its outer left face (x - 12) lands 1.5 cm away from it.
    let snap = snap_room_position(&kitchen, 322.5, 100.0, &rooms, 12.0);

    assert!(snap.snapped_x);
    assert_eq!(snap.x_cm, 324.0);
    assert_eq!(snap.guide_x_cm, Some(312.0));

    let kitchen_outer = outer_bounds_at(&kitchen, 12.0, snap.x_cm, snap.y_cm);
    let living_outer = outer_bounds(&living, 12.0);
    assert_eq!(kitchen_outer.min_x, living_outer.max_x);
}

#[test]
fn test_snap_tolerance_is_inclusive() {
    let living = Room::new("Living Room", 0.0, 0.0, 300.0, 400.0);
    let kitchen = Room::new("Kitchen", 600.0, 0.0, 300.0, 300.0);
    let rooms = vec![living, kitchen.clone()];

    // Exactly 2.0 cm away: outer left = 314, target = 312.
    let at_limit = snap_room_position(&kitchen, 326.0, 100.0, &rooms, 12.0);
    assert!(at_limit.snapped_x);
    assert_eq!(at_limit.x_cm, 324.0);

    // A hundredth past the tolerance stays free.
    let past_limit = snap_room_position(&kitchen, 326.01, 100.0, &rooms, 12.0);
    assert!(!past_limit.snapped_x);
    assert_eq!(past_limit.x_cm, 326.01);
}

#[test]
fn test_axes_snap_independently() {
    let living = Room::new("Living Room", 0.0, 0.0, 300.0, 400.0);
    let kitchen = Room::new("Kitchen", 600.0, 0.0, 300.0, 300.0);
    let rooms = vec![living, kitchen.clone()];

    let snap = snap_room_position(&kitchen, 322.5, 150.0, &rooms, 12.0);
    assert!(snap.snapped_x);
    assert!(!snap.snapped_y);
    assert_eq!(snap.y_cm, 150.0);
    assert_eq!(snap.guide_y_cm, None);

    // Candidate near alignment on both axes snaps both: the top outer
    // faces (y - 12 against -12) dock alongside the left-right dock.
    let snap = snap_room_position(&kitchen, 322.5, -1.0, &rooms, 12.0);
    assert!(snap.snapped_x);
    assert!(snap.snapped_y);
    assert_eq!(snap.y_cm, 0.0);
}

#[test]
fn test_edge_pair_priority_prefers_left_to_right() {
    // A sliver of a target room 3 cm wide (zero wall thickness) puts both
    // its left and right faces within tolerance of the moving left edge.
    let moving = Room::new("Mover", 500.0, 0.0, 100.0, 100.0);
    let sliver = Room::new("Sliver", 100.0, 0.0, 3.0, 100.0);
    let rooms = vec![sliver, moving.clone()];

    let snap = snap_room_position(&moving, 101.5, 0.0, &rooms, 0.0);
    assert!(snap.snapped_x);
    // left-to-other-right outranks left-to-other-left.
    assert_eq!(snap.x_cm, 103.0);
    assert_eq!(snap.guide_x_cm, Some(103.0));
}

#[test]
fn test_first_room_in_document_order_wins() {
    // Zero wall thickness keeps the arithmetic on the inner rectangles.
    // The 198 cm mover at x = 101.9 has its left edge 1.9 cm from Near's
    // right face (100) and its right edge 0.1 cm from Far's left face
    // (300): both targets are in tolerance, Far is closer, but Near comes
    // first in document order and wins.
    let near = Room::new("Near", 0.0, 0.0, 100.0, 100.0);
    let far = Room::new("Far", 300.0, 0.0, 100.0, 100.0);
    let moving = Room::new("Mover", 600.0, 0.0, 198.0, 100.0);
    let rooms = vec![near, far, moving.clone()];

    let snap = snap_room_position(&moving, 101.9, 0.0, &rooms, 0.0);
    assert!(snap.snapped_x);
    assert_eq!(snap.x_cm, 100.0);
    assert_eq!(snap.guide_x_cm, Some(100.0));
}

#[test]
fn test_no_snap_without_other_rooms() {
    let kitchen = Room::new("Kitchen", 600.0, 0.0, 300.0, 300.0);
    let rooms = vec![kitchen.clone()];

    let snap = snap_room_position(&kitchen, 123.4, 567.8, &rooms, 12.0);
    assert!(!snap.snapped());
    assert_eq!(snap.x_cm, 123.4);
    assert_eq!(snap.y_cm, 567.8);
}

#[test]
fn test_object_snaps_to_room_inner_walls() {
    let room = Room::new("Living Room", 0.0, 0.0, 400.0, 300.0);

    // Left edge 3 cm from the left inner wall; looser 5 cm tolerance.
    let snap = snap_object_position(3.0, 100.0, 50.0, 40.0, &room, &[]);
    assert!(snap.snapped_x);
    assert_eq!(snap.x_cm, 0.0);
    assert!(!snap.snapped_y);

    // Right edge 3 cm short of the right inner wall at 400.
    let snap = snap_object_position(347.0, 100.0, 50.0, 40.0, &room, &[]);
    assert!(snap.snapped_x);
    assert_eq!(snap.x_cm, 350.0);

    // Bottom edge against the bottom inner wall at 300.
    let snap = snap_object_position(100.0, 258.0, 50.0, 40.0, &room, &[]);
    assert!(snap.snapped_y);
    assert_eq!(snap.y_cm, 260.0);
}

#[test]
fn test_object_snaps_to_sibling_edges() {
    let room = Room::new("Living Room", 0.0, 0.0, 400.0, 300.0);
    let sibling = Rect::new(100.0, 100.0, 50.0, 40.0);

    // Moving left edge 3 cm past the sibling's right edge abuts them.
    let snap = snap_object_position(153.0, 100.0, 50.0, 40.0, &room, &[sibling]);
    assert!(snap.snapped_x);
    assert_eq!(snap.x_cm, 150.0);
    // The y axis found the sibling's top edge at the same height.
    assert!(snap.snapped_y);
    assert_eq!(snap.y_cm, 100.0);
}

#[test]
fn test_room_walls_outrank_siblings() {
    let room = Room::new("Living Room", 0.0, 0.0, 400.0, 300.0);
    // Sibling right edge at 1.0, closer than the wall at 0.0.
    let sibling = Rect::new(-49.0, 200.0, 50.0, 40.0);

    let snap = snap_object_position(4.0, 100.0, 50.0, 40.0, &room, &[sibling]);
    assert!(snap.snapped_x);
    assert_eq!(snap.x_cm, 0.0);
}

#[test]
fn test_object_outside_tolerance_moves_freely() {
    let room = Room::new("Living Room", 0.0, 0.0, 400.0, 300.0);
    let snap = snap_object_position(150.0, 150.0, 50.0, 40.0, &room, &[]);
    assert!(!snap.snapped());
    assert_eq!(snap.x_cm, 150.0);
    assert_eq!(snap.y_cm, 150.0);
}

proptest! {
    #[test]
    fn room_snap_is_idempotent(x in 300.0..650.0f64, y in 0.0..300.0f64) {
        // The candidate range sweeps through both snap bands (the left
        // dock near x = 324 and the bottom-face alignment near y = 100)
        // as well as plenty of free space.
        let living = Room::new("Living Room", 0.0, 0.0, 300.0, 400.0);
        let kitchen = Room::new("Kitchen", 600.0, 300.0, 300.0, 300.0);
        let rooms = vec![living, kitchen.clone()];

        let first = snap_room_position(&kitchen, x, y, &rooms, 12.0);
        let second = snap_room_position(&kitchen, first.x_cm, first.y_cm, &rooms, 12.0);
        prop_assert_eq!(second.x_cm, first.x_cm);
        prop_assert_eq!(second.y_cm, first.y_cm);
    }

    #[test]
    fn snapped_axis_lands_exactly_on_guide(offset in -2.0..2.0f64) {
        let living = Room::new("Living Room", 0.0, 0.0, 300.0, 400.0);
        let kitchen = Room::new("Kitchen", 600.0, 0.0, 300.0, 300.0);
        let rooms = vec![living.clone(), kitchen.clone()];

        let snap = snap_room_position(&kitchen, 324.0 + offset, 100.0, &rooms, 12.0);
        prop_assert!(snap.snapped_x);
        let moved = outer_bounds_at(&kitchen, 12.0, snap.x_cm, snap.y_cm);
        prop_assert_eq!(moved.min_x, outer_bounds(&living, 12.0).max_x);
    }
}
