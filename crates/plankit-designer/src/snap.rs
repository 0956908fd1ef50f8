//! Edge snapping for room and object drags.
//!
//! Snapping is axis-independent: x and y are matched separately, so a drag
//! can snap horizontally while staying free vertically. Candidate edges are
//! tried in a fixed order and the first pair within tolerance wins; there is
//! no nearest-match search, which keeps the behavior stable while a drag
//! jitters near two targets.

use plankit_core::constants::{OBJECT_SNAP_TOLERANCE_CM, SNAP_TOLERANCE_CM};
use plankit_core::geometry::Rect;

use crate::model::Room;
use crate::walls::{outer_bounds, outer_bounds_at, ResolvedWalls};

/// Outcome of snapping one candidate position.
///
/// `x_cm`/`y_cm` are always usable: they echo the candidate on axes that did
/// not snap. Guides carry the matched edge coordinate for rendering
/// alignment hints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    pub x_cm: f64,
    pub y_cm: f64,
    pub snapped_x: bool,
    pub snapped_y: bool,
    pub guide_x_cm: Option<f64>,
    pub guide_y_cm: Option<f64>,
}

impl SnapResult {
    /// A result that passes the candidate through untouched.
    pub fn unsnapped(x_cm: f64, y_cm: f64) -> Self {
        Self {
            x_cm,
            y_cm,
            snapped_x: false,
            snapped_y: false,
            guide_x_cm: None,
            guide_y_cm: None,
        }
    }

    pub fn snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Tries the four edge pairings of one axis in priority order:
/// moving-min to target-max, min to min, max to min, max to max.
///
/// On a match, returns the moving extent's new min coordinate shifted so
/// the matched edge lands exactly on the target, plus the target edge as a
/// guide. `min_inset`/`max_inset` are the distances from the moving extent's
/// outer edges to the coordinate being solved for (wall thicknesses for
/// rooms, zero for objects).
fn snap_axis(
    moving_min: f64,
    moving_max: f64,
    target_min: f64,
    target_max: f64,
    tolerance: f64,
    min_inset: f64,
    extent: f64,
    max_inset: f64,
) -> Option<(f64, f64)> {
    let pairs = [
        (moving_min, target_max, true),
        (moving_min, target_min, true),
        (moving_max, target_min, false),
        (moving_max, target_max, false),
    ];
    for (edge, target, is_min_edge) in pairs {
        if (edge - target).abs() <= tolerance {
            let value = if is_min_edge {
                target + min_inset
            } else {
                target - extent - max_inset
            };
            return Some((value, target));
        }
    }
    None
}

/// Snaps a room drag candidate against every other room's outer wall faces.
///
/// `candidate_x`/`candidate_y` anchor the moving room's inner rectangle; the
/// comparison happens between outer bounds, so wall thickness participates
/// on both sides. Rooms are considered in document order and the moving room
/// itself is skipped.
pub fn snap_room_position(
    moving: &Room,
    candidate_x: f64,
    candidate_y: f64,
    rooms: &[Room],
    global_cm: f64,
) -> SnapResult {
    let walls = ResolvedWalls::resolve(moving, global_cm);
    let moving_bounds = outer_bounds_at(moving, global_cm, candidate_x, candidate_y);
    let mut result = SnapResult::unsnapped(candidate_x, candidate_y);

    for other in rooms {
        if other.id == moving.id {
            continue;
        }
        if result.snapped_x && result.snapped_y {
            break;
        }
        let target = outer_bounds(other, global_cm);

        if !result.snapped_x {
            if let Some((x, guide)) = snap_axis(
                moving_bounds.min_x,
                moving_bounds.max_x,
                target.min_x,
                target.max_x,
                SNAP_TOLERANCE_CM,
                walls.west,
                moving.width_cm,
                walls.east,
            ) {
                result.x_cm = x;
                result.snapped_x = true;
                result.guide_x_cm = Some(guide);
            }
        }

        if !result.snapped_y {
            if let Some((y, guide)) = snap_axis(
                moving_bounds.min_y,
                moving_bounds.max_y,
                target.min_y,
                target.max_y,
                SNAP_TOLERANCE_CM,
                walls.north,
                moving.height_cm,
                walls.south,
            ) {
                result.y_cm = y;
                result.snapped_y = true;
                result.guide_y_cm = Some(guide);
            }
        }
    }

    result
}

/// Snaps an object drag candidate inside its room.
///
/// The room's inner edges are tried first with like-to-like pairings (an
/// object's left edge only ever meets the room's left wall face), then the
/// sibling footprints with the full four-pair priority. `width_cm` and
/// `height_cm` are the rotation-adjusted footprint dimensions.
pub fn snap_object_position(
    candidate_x: f64,
    candidate_y: f64,
    width_cm: f64,
    height_cm: f64,
    room: &Room,
    siblings: &[Rect],
) -> SnapResult {
    let mut result = SnapResult::unsnapped(candidate_x, candidate_y);
    let inner = room.inner_rect();

    let wall_pairs_x = [
        (candidate_x, inner.left(), true),
        (candidate_x + width_cm, inner.right(), false),
    ];
    for (edge, target, is_min_edge) in wall_pairs_x {
        if (edge - target).abs() <= OBJECT_SNAP_TOLERANCE_CM {
            result.x_cm = if is_min_edge { target } else { target - width_cm };
            result.snapped_x = true;
            result.guide_x_cm = Some(target);
            break;
        }
    }

    let wall_pairs_y = [
        (candidate_y, inner.top(), true),
        (candidate_y + height_cm, inner.bottom(), false),
    ];
    for (edge, target, is_min_edge) in wall_pairs_y {
        if (edge - target).abs() <= OBJECT_SNAP_TOLERANCE_CM {
            result.y_cm = if is_min_edge { target } else { target - height_cm };
            result.snapped_y = true;
            result.guide_y_cm = Some(target);
            break;
        }
    }

    for rect in siblings {
        if result.snapped_x && result.snapped_y {
            break;
        }

        if !result.snapped_x {
            if let Some((x, guide)) = snap_axis(
                candidate_x,
                candidate_x + width_cm,
                rect.left(),
                rect.right(),
                OBJECT_SNAP_TOLERANCE_CM,
                0.0,
                width_cm,
                0.0,
            ) {
                result.x_cm = x;
                result.snapped_x = true;
                result.guide_x_cm = Some(guide);
            }
        }

        if !result.snapped_y {
            if let Some((y, guide)) = snap_axis(
                candidate_y,
                candidate_y + height_cm,
                rect.top(),
                rect.bottom(),
                OBJECT_SNAP_TOLERANCE_CM,
                0.0,
                height_cm,
                0.0,
            ) {
                result.y_cm = y;
                result.snapped_y = true;
                result.guide_y_cm = Some(guide);
            }
        }
    }

    result
}
