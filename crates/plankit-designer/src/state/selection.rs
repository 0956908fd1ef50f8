//! Selection transitions.
//!
//! Room selection and object selection are mutually exclusive: activating
//! one clears the other, so tools never see both at once.

use super::AppState;
use crate::model::{PlacedObjectId, RoomId};

impl AppState {
    /// Makes `id` the only selected room, dropping any object selection.
    /// Unknown ids leave the state unchanged.
    pub fn select_room(&self, id: RoomId) -> AppState {
        let mut next = self.clone();
        if next.room(id).is_none() {
            tracing::debug!(%id, "select_room: unknown room");
            return next;
        }
        next.selected_room_ids = vec![id];
        next.selected_object_id = None;
        next
    }

    /// Replaces the room selection with the given set, keeping only ids
    /// that exist and preserving their order. Drops any object selection.
    pub fn select_rooms(&self, ids: &[RoomId]) -> AppState {
        let mut next = self.clone();
        next.selected_room_ids = ids
            .iter()
            .copied()
            .filter(|id| self.room(*id).is_some())
            .collect();
        next.selected_object_id = None;
        next
    }

    /// Adds `id` to the room selection, or removes it if already selected.
    /// Any object selection is dropped either way.
    pub fn toggle_room_selection(&self, id: RoomId) -> AppState {
        let mut next = self.clone();
        if next.room(id).is_none() {
            tracing::debug!(%id, "toggle_room_selection: unknown room");
            return next;
        }
        if let Some(pos) = next.selected_room_ids.iter().position(|s| *s == id) {
            next.selected_room_ids.remove(pos);
        } else {
            next.selected_room_ids.push(id);
        }
        next.selected_object_id = None;
        next
    }

    pub fn select_all_rooms(&self) -> AppState {
        let mut next = self.clone();
        next.selected_room_ids = next.rooms.iter().map(|r| r.id).collect();
        next.selected_object_id = None;
        next
    }

    /// Selects a placed object (clearing any room selection), or clears the
    /// object selection when passed `None`.
    pub fn select_object(&self, id: Option<PlacedObjectId>) -> AppState {
        let mut next = self.clone();
        match id {
            Some(id) => {
                if next.placed_object(id).is_none() {
                    tracing::debug!(%id, "select_object: unknown object");
                    return next;
                }
                next.selected_object_id = Some(id);
                next.selected_room_ids.clear();
            }
            None => next.selected_object_id = None,
        }
        next
    }

    /// Clears both room and object selection.
    pub fn clear_selection(&self) -> AppState {
        let mut next = self.clone();
        next.selected_room_ids.clear();
        next.selected_object_id = None;
        next
    }
}
