//! Object catalog and placed-object transitions.
//!
//! Room membership is derived, never trusted: any transition that can move
//! an object's footprint center recomputes which room contains it.

use plankit_core::constants::{DUPLICATE_OFFSET_CM, MIN_OBJECT_DIMENSION_CM};

use super::AppState;
use crate::model::{ObjectDef, ObjectDefId, PlacedObject, PlacedObjectId, RoomId};

impl AppState {
    /// Adds a reusable object definition to the catalog.
    pub fn add_object_def(&self, name: &str, width_cm: f64, height_cm: f64) -> AppState {
        let mut next = self.clone();
        next.object_defs.push(ObjectDef::new(
            name,
            width_cm.max(MIN_OBJECT_DIMENSION_CM),
            height_cm.max(MIN_OBJECT_DIMENSION_CM),
        ));
        next
    }

    /// Empties the catalog. Placed objects would dangle without their
    /// definitions, so they are removed as well.
    pub fn clear_object_defs(&self) -> AppState {
        let mut next = self.clone();
        next.object_defs.clear();
        next.placed_objects.clear();
        next.selected_object_id = None;
        next
    }

    /// Stamps a new instance of a definition at the given position and
    /// assigns it to whichever room contains its center.
    pub fn place_object(&self, def_id: ObjectDefId, x_cm: f64, y_cm: f64) -> AppState {
        let mut next = self.clone();
        if next.object_def(def_id).is_none() {
            tracing::debug!(%def_id, "place_object: unknown definition");
            return next;
        }
        let mut obj = PlacedObject::new(def_id, x_cm, y_cm);
        let footprint = next.object_footprint(&obj);
        obj.room_id = next.detect_room(footprint);
        next.placed_objects.push(obj);
        next
    }

    /// Clones an object slightly offset from the original.
    pub fn duplicate_object(&self, id: PlacedObjectId) -> AppState {
        let mut next = self.clone();
        let mut copy = match next.placed_objects.iter().find(|o| o.id == id) {
            Some(source) => source.clone(),
            None => {
                tracing::debug!(%id, "duplicate_object: unknown object");
                return next;
            }
        };
        copy.id = PlacedObjectId::generate();
        copy.x_cm += DUPLICATE_OFFSET_CM;
        copy.y_cm += DUPLICATE_OFFSET_CM;
        let footprint = next.object_footprint(&copy);
        copy.room_id = next.detect_room(footprint);
        next.placed_objects.push(copy);
        next
    }

    /// Repositions an object without touching its room membership. For
    /// interactive movement use [`AppState::move_object`], which re-derives
    /// the containing room.
    pub fn set_object_position(&self, id: PlacedObjectId, x_cm: f64, y_cm: f64) -> AppState {
        let mut next = self.clone();
        if let Some(idx) = next.placed_objects.iter().position(|o| o.id == id) {
            next.placed_objects[idx].x_cm = x_cm;
            next.placed_objects[idx].y_cm = y_cm;
        } else {
            tracing::debug!(%id, "set_object_position: unknown object");
        }
        next
    }

    /// Moves an object to an absolute position and refreshes its room
    /// membership from the new center.
    pub fn move_object(&self, id: PlacedObjectId, x_cm: f64, y_cm: f64) -> AppState {
        let mut next = self.clone();
        if let Some(idx) = next.placed_objects.iter().position(|o| o.id == id) {
            next.placed_objects[idx].x_cm = x_cm;
            next.placed_objects[idx].y_cm = y_cm;
            let footprint = next.object_footprint(&next.placed_objects[idx]);
            let room_id = next.detect_room(footprint);
            next.placed_objects[idx].room_id = room_id;
        } else {
            tracing::debug!(%id, "move_object: unknown object");
        }
        next
    }

    /// Sets size overrides on an object. The center shifts with the size,
    /// so room membership is refreshed too.
    pub fn resize_object(&self, id: PlacedObjectId, width_cm: f64, height_cm: f64) -> AppState {
        let mut next = self.clone();
        if let Some(idx) = next.placed_objects.iter().position(|o| o.id == id) {
            next.placed_objects[idx].width_cm = Some(width_cm.max(MIN_OBJECT_DIMENSION_CM));
            next.placed_objects[idx].height_cm = Some(height_cm.max(MIN_OBJECT_DIMENSION_CM));
            let footprint = next.object_footprint(&next.placed_objects[idx]);
            let room_id = next.detect_room(footprint);
            next.placed_objects[idx].room_id = room_id;
        } else {
            tracing::debug!(%id, "resize_object: unknown object");
        }
        next
    }

    /// Removes size overrides so the object follows its definition again.
    pub fn reset_object_size(&self, id: PlacedObjectId) -> AppState {
        let mut next = self.clone();
        if let Some(idx) = next.placed_objects.iter().position(|o| o.id == id) {
            next.placed_objects[idx].width_cm = None;
            next.placed_objects[idx].height_cm = None;
            let footprint = next.object_footprint(&next.placed_objects[idx]);
            let room_id = next.detect_room(footprint);
            next.placed_objects[idx].room_id = room_id;
        } else {
            tracing::debug!(%id, "reset_object_size: unknown object");
        }
        next
    }

    /// Sets an object's absolute rotation in degrees. Quarter turns swap
    /// the footprint, which moves the center, so membership is refreshed.
    pub fn rotate_object(&self, id: PlacedObjectId, rotation_deg: f64) -> AppState {
        let mut next = self.clone();
        if let Some(idx) = next.placed_objects.iter().position(|o| o.id == id) {
            next.placed_objects[idx].rotation_deg = rotation_deg;
            let footprint = next.object_footprint(&next.placed_objects[idx]);
            let room_id = next.detect_room(footprint);
            next.placed_objects[idx].room_id = room_id;
        } else {
            tracing::debug!(%id, "rotate_object: unknown object");
        }
        next
    }

    /// Pins an object to a specific room (or to none), overriding the
    /// derived membership until the object next moves.
    pub fn set_object_room(&self, id: PlacedObjectId, room_id: Option<RoomId>) -> AppState {
        let mut next = self.clone();
        if let Some(target) = room_id {
            if next.room(target).is_none() {
                tracing::debug!(room = %target, "set_object_room: unknown room");
                return next;
            }
        }
        if let Some(idx) = next.placed_objects.iter().position(|o| o.id == id) {
            next.placed_objects[idx].room_id = room_id;
        } else {
            tracing::debug!(%id, "set_object_room: unknown object");
        }
        next
    }

    /// Deletes an object, clearing the selection if it pointed at it.
    pub fn delete_object(&self, id: PlacedObjectId) -> AppState {
        let mut next = self.clone();
        let before = next.placed_objects.len();
        next.placed_objects.retain(|o| o.id != id);
        if next.placed_objects.len() == before {
            tracing::debug!(%id, "delete_object: unknown object");
            return next;
        }
        if next.selected_object_id == Some(id) {
            next.selected_object_id = None;
        }
        next
    }
}
