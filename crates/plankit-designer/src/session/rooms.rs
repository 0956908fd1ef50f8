//! Room and wall operations, recorded as undo steps.

use super::PlannerState;
use crate::model::{RoomId, WallSide};

impl PlannerState {
    pub fn add_room(&mut self) {
        let next = self.state().add_room();
        self.commit(next);
    }

    pub fn add_room_at(&mut self, x_cm: f64, y_cm: f64, width_cm: f64, height_cm: f64) {
        let next = self.state().add_room_at(x_cm, y_cm, width_cm, height_cm);
        self.commit(next);
    }

    pub fn delete_room(&mut self, id: RoomId) {
        let next = self.state().delete_room(id);
        self.commit(next);
    }

    /// Deletes every selected room, with the usual cascade.
    pub fn delete_selected_rooms(&mut self) {
        let ids = self.state().selected_room_ids.clone();
        if ids.is_empty() {
            return;
        }
        let next = self.state().delete_rooms(&ids);
        self.commit(next);
    }

    pub fn rename_room(&mut self, id: RoomId, name: &str) {
        let next = self.state().rename_room(id, name);
        self.commit(next);
    }

    /// Absolute positioning from a properties panel; drags go through the
    /// drag session instead.
    pub fn set_room_position(&mut self, id: RoomId, x_cm: f64, y_cm: f64) {
        let next = self.state().set_room_position(id, x_cm, y_cm);
        self.commit(next);
    }

    pub fn resize_room(&mut self, id: RoomId, width_cm: f64, height_cm: f64) {
        let next = self.state().resize_room(id, width_cm, height_cm);
        self.commit(next);
    }

    /// Moves the whole room selection by a keyboard nudge. Locked rooms in
    /// the selection stay put.
    pub fn nudge_selection(&mut self, dx_cm: f64, dy_cm: f64) {
        let ids = self.state().selected_room_ids.clone();
        if ids.is_empty() {
            return;
        }
        let next = self.state().move_rooms(&ids, dx_cm, dy_cm);
        self.commit(next);
    }

    pub fn set_room_locked(&mut self, id: RoomId, locked: bool) {
        let next = self.state().set_room_locked(id, locked);
        self.commit(next);
    }

    pub fn set_all_rooms_locked(&mut self, locked: bool) {
        let next = self.state().set_all_rooms_locked(locked);
        self.commit(next);
    }

    pub fn set_global_wall_thickness(&mut self, thickness_cm: f64) {
        let next = self.state().set_global_wall_thickness(thickness_cm);
        self.commit(next);
    }

    pub fn set_room_wall_override(
        &mut self,
        id: RoomId,
        side: WallSide,
        thickness_cm: Option<f64>,
    ) {
        let next = self.state().set_room_wall_override(id, side, thickness_cm);
        self.commit(next);
    }
}
