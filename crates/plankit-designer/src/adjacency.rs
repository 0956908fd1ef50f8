//! Shared-wall detection between rooms and opening merging.
//!
//! Two rooms share a wall when their facing outer wall surfaces are
//! coincident within a small epsilon and the walls overlap far enough along
//! their axis to matter. A shared wall is drawn exactly once; the room with
//! the lexicographically smaller id owns the rendering, and openings from
//! both rooms appear in it.

use plankit_core::constants::{ADJACENCY_EPSILON_CM, MIN_SHARED_WALL_OVERLAP_CM};
use plankit_core::geometry::{range_overlap, Bounds, Rect};

use crate::model::{Room, RoomId, WallOpening, WallSide};
use crate::walls::{outer_bounds, ResolvedWalls};

/// A neighbor found on one side of a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SharedWall {
    /// The adjacent room.
    pub room_id: RoomId,
    /// Start of the shared stretch along the wall axis, in plan coordinates.
    pub overlap_start_cm: f64,
    /// End of the shared stretch along the wall axis, in plan coordinates.
    pub overlap_end_cm: f64,
}

impl SharedWall {
    pub fn overlap_len_cm(&self) -> f64 {
        self.overlap_end_cm - self.overlap_start_cm
    }
}

/// Everything a renderer needs to draw one wall of one room.
#[derive(Debug, Clone)]
pub struct ResolvedWall {
    /// The wall slab in plan coordinates, spanning the room's outer extent.
    pub rect: Rect,
    /// Thickness of this wall after overrides.
    pub thickness_cm: f64,
    /// Adjacent room sharing this wall, if any.
    pub shared_with: Option<RoomId>,
    /// False when the neighbor owns the shared wall and this room must not
    /// draw it.
    pub renders: bool,
    /// Openings cut into this wall, own plus translated neighbor openings,
    /// in this wall's coordinates and sorted by position.
    pub openings: Vec<WallOpening>,
}

fn outer_face(bounds: &Bounds, side: WallSide) -> f64 {
    match side {
        WallSide::North => bounds.min_y,
        WallSide::South => bounds.max_y,
        WallSide::East => bounds.max_x,
        WallSide::West => bounds.min_x,
    }
}

/// Finds the room adjacent to `room` across the given side, if any.
///
/// Candidates are tested in document order and the first hit wins. The
/// facing surfaces must be within [`ADJACENCY_EPSILON_CM`] and the inner
/// wall spans must overlap by at least [`MIN_SHARED_WALL_OVERLAP_CM`].
pub fn find_adjacent_room(
    room: &Room,
    side: WallSide,
    rooms: &[Room],
    global_cm: f64,
) -> Option<SharedWall> {
    let my_face = outer_face(&outer_bounds(room, global_cm), side);
    let my_start = room.wall_origin(side);
    let my_end = my_start + room.wall_length(side);
    let opposite = side.opposite();

    for other in rooms {
        if other.id == room.id {
            continue;
        }
        let other_face = outer_face(&outer_bounds(other, global_cm), opposite);
        if (my_face - other_face).abs() > ADJACENCY_EPSILON_CM {
            continue;
        }

        let other_start = other.wall_origin(opposite);
        let other_end = other_start + other.wall_length(opposite);
        if let Some((start, end)) = range_overlap(my_start, my_end, other_start, other_end) {
            if end - start >= MIN_SHARED_WALL_OVERLAP_CM {
                return Some(SharedWall {
                    room_id: other.id,
                    overlap_start_cm: start,
                    overlap_end_cm: end,
                });
            }
        }
    }
    None
}

/// True when `room` draws the wall it shares with `neighbor`.
///
/// Exactly one of the two rooms renders a shared wall; ownership goes to
/// the smaller id so the answer is stable across edits and reloads.
pub fn renders_shared_wall(room: RoomId, neighbor: RoomId) -> bool {
    room < neighbor
}

/// Collects the openings visible in one wall of `room`: its own openings on
/// that side, plus the neighbor's openings on the facing side translated
/// into this wall's coordinates.
///
/// Translated openings that do not fit entirely within this wall are
/// discarded. The result is sorted by position.
pub fn merged_openings(
    room: &Room,
    side: WallSide,
    rooms: &[Room],
    openings: &[WallOpening],
    global_cm: f64,
) -> Vec<WallOpening> {
    let mut merged: Vec<WallOpening> = openings
        .iter()
        .filter(|o| o.room_id == room.id && o.side == side)
        .cloned()
        .collect();

    if let Some(shared) = find_adjacent_room(room, side, rooms, global_cm) {
        if let Some(neighbor) = rooms.iter().find(|r| r.id == shared.room_id) {
            let opposite = side.opposite();
            let offset = neighbor.wall_origin(opposite) - room.wall_origin(side);
            let length = room.wall_length(side);

            for opening in openings
                .iter()
                .filter(|o| o.room_id == neighbor.id && o.side == opposite)
            {
                let position = opening.position_cm + offset;
                if position >= 0.0 && position + opening.width_cm <= length {
                    let mut translated = opening.clone();
                    translated.position_cm = position;
                    merged.push(translated);
                } else {
                    tracing::debug!(
                        opening = %opening.id,
                        "neighbor opening does not fit in shared wall, skipping"
                    );
                }
            }
        }
    }

    merged.sort_by(|a, b| a.position_cm.total_cmp(&b.position_cm));
    merged
}

/// Resolves one wall of one room into renderable form: slab rectangle,
/// sharing state and merged openings.
pub fn resolve_wall(
    room: &Room,
    side: WallSide,
    rooms: &[Room],
    openings: &[WallOpening],
    global_cm: f64,
) -> ResolvedWall {
    let walls = ResolvedWalls::resolve(room, global_cm);
    let bounds = outer_bounds(room, global_cm);
    let thickness = walls.side(side);

    let rect = match side {
        WallSide::North => Rect::new(bounds.min_x, bounds.min_y, bounds.width(), thickness),
        WallSide::South => Rect::new(
            bounds.min_x,
            bounds.max_y - thickness,
            bounds.width(),
            thickness,
        ),
        WallSide::West => Rect::new(bounds.min_x, bounds.min_y, thickness, bounds.height()),
        WallSide::East => Rect::new(
            bounds.max_x - thickness,
            bounds.min_y,
            thickness,
            bounds.height(),
        ),
    };

    let shared = find_adjacent_room(room, side, rooms, global_cm);
    let renders = match &shared {
        Some(s) => renders_shared_wall(room.id, s.room_id),
        None => true,
    };

    ResolvedWall {
        rect,
        thickness_cm: thickness,
        shared_with: shared.map(|s| s.room_id),
        renders,
        openings: merged_openings(room, side, rooms, openings, global_cm),
    }
}

/// Splits a wall of `length_cm` into the stretches not covered by any
/// opening, in wall coordinates. Overlapping openings are coalesced and
/// spans outside the wall are clipped.
pub fn solid_spans(length_cm: f64, openings: &[WallOpening]) -> Vec<(f64, f64)> {
    let mut cuts: Vec<(f64, f64)> = openings
        .iter()
        .map(|o| (o.position_cm, o.end_cm()))
        .collect();
    cuts.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut spans = Vec::new();
    let mut cursor = 0.0;
    for (start, end) in cuts {
        let start = start.max(0.0);
        let end = end.min(length_cm);
        if start > cursor {
            spans.push((cursor, start));
        }
        cursor = cursor.max(end);
    }
    if cursor < length_cm {
        spans.push((cursor, length_cm));
    }
    spans
}
