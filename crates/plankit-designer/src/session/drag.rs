//! Drag sessions for rooms and objects.
//!
//! A drag anchors at the dragged item's starting position and keeps the
//! last committed state as its base. Every pointer update recomputes the
//! preview from the base plus the accumulated delta, so intermediate events
//! never stack up history entries or rounding error; the preview becomes a
//! single undo step when the drag ends, and cancelling simply restores the
//! base.

use plankit_core::geometry::Rect;

use super::PlannerState;
use crate::model::{PlacedObjectId, RoomId};
use crate::snap::{snap_object_position, snap_room_position, SnapResult};
use crate::state::AppState;

#[derive(Debug)]
pub(super) struct RoomDrag {
    room_id: RoomId,
    origin_x: f64,
    origin_y: f64,
    base: AppState,
}

#[derive(Debug)]
pub(super) struct ObjectDrag {
    object_id: PlacedObjectId,
    origin_x: f64,
    origin_y: f64,
    base: AppState,
}

impl PlannerState {
    /// Starts dragging a room. Refuses when the room is missing or locked,
    /// or when another drag is already running.
    pub fn begin_room_drag(&mut self, id: RoomId) -> bool {
        if self.room_drag.is_some() || self.object_drag.is_some() {
            return false;
        }
        let base = self.state().clone();
        let (origin_x, origin_y) = match base.room(id) {
            Some(room) if !room.locked => (room.x_cm, room.y_cm),
            _ => return false,
        };
        self.room_drag = Some(RoomDrag {
            room_id: id,
            origin_x,
            origin_y,
            base,
        });
        true
    }

    /// Applies the accumulated drag delta, snapping against the other
    /// rooms, and previews the result. Returns the snap outcome so the
    /// caller can draw alignment guides.
    ///
    /// Rooms cannot leave the first quadrant: inner coordinates are
    /// clamped to zero after snapping, outside the snap computation.
    pub fn update_room_drag(&mut self, dx_cm: f64, dy_cm: f64) -> Option<SnapResult> {
        let drag = self.room_drag.as_ref()?;
        let room = drag.base.room(drag.room_id)?.clone();
        let mut snap = snap_room_position(
            &room,
            drag.origin_x + dx_cm,
            drag.origin_y + dy_cm,
            &drag.base.rooms,
            drag.base.global_wall_thickness_cm,
        );
        snap.x_cm = snap.x_cm.max(0.0);
        snap.y_cm = snap.y_cm.max(0.0);
        let next = drag
            .base
            .set_room_position(drag.room_id, snap.x_cm, snap.y_cm);
        self.apply(next);
        Some(snap)
    }

    /// Finishes the drag, committing the preview as one undo step. A drag
    /// that ends where it started leaves the history untouched.
    pub fn end_room_drag(&mut self) {
        if let Some(drag) = self.room_drag.take() {
            let preview = self.state().clone();
            self.apply(drag.base);
            self.commit(preview);
        }
    }

    /// Abandons the drag and restores the pre-drag state.
    pub fn cancel_room_drag(&mut self) {
        if let Some(drag) = self.room_drag.take() {
            self.apply(drag.base);
        }
    }

    /// Starts dragging a placed object. Objects are never locked
    /// themselves; only missing ids or a concurrent drag refuse.
    pub fn begin_object_drag(&mut self, id: PlacedObjectId) -> bool {
        if self.room_drag.is_some() || self.object_drag.is_some() {
            return false;
        }
        let base = self.state().clone();
        let (origin_x, origin_y) = match base.placed_object(id) {
            Some(obj) => (obj.x_cm, obj.y_cm),
            None => return false,
        };
        self.object_drag = Some(ObjectDrag {
            object_id: id,
            origin_x,
            origin_y,
            base,
        });
        true
    }

    /// Applies the accumulated drag delta to the object. Inside a room the
    /// candidate snaps to the room's inner walls and to sibling objects;
    /// outside any room it moves freely. Room membership follows the
    /// preview's center.
    pub fn update_object_drag(&mut self, dx_cm: f64, dy_cm: f64) -> Option<SnapResult> {
        let drag = self.object_drag.as_ref()?;
        let obj = drag.base.placed_object(drag.object_id)?.clone();
        let candidate_x = drag.origin_x + dx_cm;
        let candidate_y = drag.origin_y + dy_cm;

        let footprint = drag.base.object_footprint(&obj);
        let snap = match obj.room_id.and_then(|room_id| drag.base.room(room_id)) {
            Some(room) => {
                let siblings: Vec<Rect> = drag
                    .base
                    .placed_objects
                    .iter()
                    .filter(|o| o.id != obj.id && o.room_id == obj.room_id)
                    .map(|o| drag.base.object_footprint(o))
                    .collect();
                snap_object_position(
                    candidate_x,
                    candidate_y,
                    footprint.width,
                    footprint.height,
                    room,
                    &siblings,
                )
            }
            None => SnapResult::unsnapped(candidate_x, candidate_y),
        };

        let next = drag.base.move_object(drag.object_id, snap.x_cm, snap.y_cm);
        self.apply(next);
        Some(snap)
    }

    /// Finishes the object drag, committing the preview as one undo step.
    pub fn end_object_drag(&mut self) {
        if let Some(drag) = self.object_drag.take() {
            let preview = self.state().clone();
            self.apply(drag.base);
            self.commit(preview);
        }
    }

    /// Abandons the object drag and restores the pre-drag state.
    pub fn cancel_object_drag(&mut self) {
        if let Some(drag) = self.object_drag.take() {
            self.apply(drag.base);
        }
    }

    /// True while either kind of drag is in progress.
    pub fn drag_active(&self) -> bool {
        self.room_drag.is_some() || self.object_drag.is_some()
    }

    pub(super) fn cancel_drags(&mut self) {
        self.cancel_room_drag();
        self.cancel_object_drag();
    }
}
