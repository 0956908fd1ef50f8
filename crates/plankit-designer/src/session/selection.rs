//! Selection operations. Applied without undo steps so selection churn
//! never shadows real edits in the history.

use plankit_core::geometry::Point;

use super::PlannerState;
use crate::model::{PlacedObjectId, RoomId};

impl PlannerState {
    pub fn select_room(&mut self, id: RoomId) {
        let next = self.state().select_room(id);
        self.apply(next);
    }

    pub fn select_rooms(&mut self, ids: &[RoomId]) {
        let next = self.state().select_rooms(ids);
        self.apply(next);
    }

    pub fn toggle_room_selection(&mut self, id: RoomId) {
        let next = self.state().toggle_room_selection(id);
        self.apply(next);
    }

    pub fn select_all_rooms(&mut self) {
        let next = self.state().select_all_rooms();
        self.apply(next);
    }

    pub fn select_object(&mut self, id: Option<PlacedObjectId>) {
        let next = self.state().select_object(id);
        self.apply(next);
    }

    pub fn clear_selection(&mut self) {
        let next = self.state().clear_selection();
        self.apply(next);
    }

    /// Canvas click dispatch: objects sit above rooms, so the topmost
    /// object under the point wins, then the first room, then nothing.
    pub fn click_select(&mut self, p: Point) {
        let object = self.state().object_at_point(p).map(|o| o.id);
        if let Some(id) = object {
            self.select_object(Some(id));
            return;
        }
        let room = self.state().room_at_point(p).map(|r| r.id);
        match room {
            Some(id) => self.select_room(id),
            None => self.clear_selection(),
        }
    }
}
