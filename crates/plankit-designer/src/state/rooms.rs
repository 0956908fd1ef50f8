//! Room lifecycle and movement transitions.

use std::collections::HashSet;

use plankit_core::constants::{
    DEFAULT_ROOM_HEIGHT_CM, DEFAULT_ROOM_WIDTH_CM, MIN_ROOM_DIMENSION_CM, ROOM_CASCADE_CM,
};

use super::AppState;
use crate::model::{Room, RoomId};

impl AppState {
    /// Adds a room with default dimensions, cascaded diagonally so
    /// successive rooms do not stack on top of each other.
    pub fn add_room(&self) -> AppState {
        let step = ROOM_CASCADE_CM * (self.rooms.len() as f64 + 1.0);
        self.add_room_at(step, step, DEFAULT_ROOM_WIDTH_CM, DEFAULT_ROOM_HEIGHT_CM)
    }

    /// Adds a room at an explicit position and size, named after its
    /// ordinal ("Room 3"). Dimensions are floored to the minimum.
    pub fn add_room_at(&self, x_cm: f64, y_cm: f64, width_cm: f64, height_cm: f64) -> AppState {
        let mut next = self.clone();
        let name = format!("Room {}", next.rooms.len() + 1);
        next.rooms.push(Room::new(
            name,
            x_cm,
            y_cm,
            width_cm.max(MIN_ROOM_DIMENSION_CM),
            height_cm.max(MIN_ROOM_DIMENSION_CM),
        ));
        next
    }

    pub fn delete_room(&self, id: RoomId) -> AppState {
        self.delete_rooms(&[id])
    }

    /// Deletes the given rooms and everything hanging off them: their wall
    /// openings disappear, their placed objects become unassigned, and they
    /// leave the selection.
    pub fn delete_rooms(&self, ids: &[RoomId]) -> AppState {
        let mut next = self.clone();
        let removing: HashSet<RoomId> = ids.iter().copied().collect();

        let before = next.rooms.len();
        next.rooms.retain(|r| !removing.contains(&r.id));
        if next.rooms.len() == before {
            return next;
        }

        next.selected_room_ids.retain(|id| !removing.contains(id));
        next.wall_openings
            .retain(|o| !removing.contains(&o.room_id));
        for obj in &mut next.placed_objects {
            if obj.room_id.is_some_and(|room_id| removing.contains(&room_id)) {
                obj.room_id = None;
            }
        }
        next
    }

    pub fn rename_room(&self, id: RoomId, name: &str) -> AppState {
        let mut next = self.clone();
        if let Some(room) = next.rooms.iter_mut().find(|r| r.id == id) {
            room.name = name.to_string();
        } else {
            tracing::debug!(%id, "rename_room: unknown room");
        }
        next
    }

    /// Moves a room's inner rectangle to an absolute position. Locked rooms
    /// stay where they are.
    pub fn set_room_position(&self, id: RoomId, x_cm: f64, y_cm: f64) -> AppState {
        let mut next = self.clone();
        if let Some(room) = next.rooms.iter_mut().find(|r| r.id == id) {
            if !room.locked {
                room.x_cm = x_cm;
                room.y_cm = y_cm;
            }
        } else {
            tracing::debug!(%id, "set_room_position: unknown room");
        }
        next
    }

    /// Translates several rooms by the same delta. Locked members of the
    /// set keep their position while the rest move.
    pub fn move_rooms(&self, ids: &[RoomId], dx_cm: f64, dy_cm: f64) -> AppState {
        let mut next = self.clone();
        let moving: HashSet<RoomId> = ids.iter().copied().collect();
        for room in &mut next.rooms {
            if moving.contains(&room.id) && !room.locked {
                room.x_cm += dx_cm;
                room.y_cm += dy_cm;
            }
        }
        next
    }

    /// Resizes a room, flooring both dimensions to the minimum so a room
    /// can never collapse. Locked rooms reject the resize.
    pub fn resize_room(&self, id: RoomId, width_cm: f64, height_cm: f64) -> AppState {
        let mut next = self.clone();
        if let Some(room) = next.rooms.iter_mut().find(|r| r.id == id) {
            if !room.locked {
                room.width_cm = width_cm.max(MIN_ROOM_DIMENSION_CM);
                room.height_cm = height_cm.max(MIN_ROOM_DIMENSION_CM);
            }
        } else {
            tracing::debug!(%id, "resize_room: unknown room");
        }
        next
    }

    pub fn set_room_locked(&self, id: RoomId, locked: bool) -> AppState {
        let mut next = self.clone();
        if let Some(room) = next.rooms.iter_mut().find(|r| r.id == id) {
            room.locked = locked;
        } else {
            tracing::debug!(%id, "set_room_locked: unknown room");
        }
        next
    }

    pub fn set_all_rooms_locked(&self, locked: bool) -> AppState {
        let mut next = self.clone();
        for room in &mut next.rooms {
            room.locked = locked;
        }
        next
    }
}
