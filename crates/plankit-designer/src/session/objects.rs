//! Object catalog and placed-object operations, recorded as undo steps.

use super::PlannerState;
use crate::model::{ObjectDefId, PlacedObjectId, RoomId};

impl PlannerState {
    pub fn add_object_def(&mut self, name: &str, width_cm: f64, height_cm: f64) {
        let next = self.state().add_object_def(name, width_cm, height_cm);
        self.commit(next);
    }

    pub fn clear_object_defs(&mut self) {
        let next = self.state().clear_object_defs();
        self.commit(next);
    }

    pub fn place_object(&mut self, def_id: ObjectDefId, x_cm: f64, y_cm: f64) {
        let next = self.state().place_object(def_id, x_cm, y_cm);
        self.commit(next);
    }

    pub fn duplicate_object(&mut self, id: PlacedObjectId) {
        let next = self.state().duplicate_object(id);
        self.commit(next);
    }

    /// Duplicates whichever object is selected, if any.
    pub fn duplicate_selected_object(&mut self) {
        if let Some(id) = self.state().selected_object_id {
            self.duplicate_object(id);
        }
    }

    pub fn set_object_position(&mut self, id: PlacedObjectId, x_cm: f64, y_cm: f64) {
        let next = self.state().set_object_position(id, x_cm, y_cm);
        self.commit(next);
    }

    pub fn move_object(&mut self, id: PlacedObjectId, x_cm: f64, y_cm: f64) {
        let next = self.state().move_object(id, x_cm, y_cm);
        self.commit(next);
    }

    pub fn resize_object(&mut self, id: PlacedObjectId, width_cm: f64, height_cm: f64) {
        let next = self.state().resize_object(id, width_cm, height_cm);
        self.commit(next);
    }

    pub fn reset_object_size(&mut self, id: PlacedObjectId) {
        let next = self.state().reset_object_size(id);
        self.commit(next);
    }

    pub fn rotate_object(&mut self, id: PlacedObjectId, rotation_deg: f64) {
        let next = self.state().rotate_object(id, rotation_deg);
        self.commit(next);
    }

    /// Turns the selected object a quarter turn clockwise.
    pub fn rotate_selected_object(&mut self) {
        let rotation = match self.state().selected_object_id {
            Some(id) => self
                .state()
                .placed_object(id)
                .map(|o| (id, (o.rotation_deg + 90.0).rem_euclid(360.0))),
            None => None,
        };
        if let Some((id, deg)) = rotation {
            self.rotate_object(id, deg);
        }
    }

    pub fn set_object_room(&mut self, id: PlacedObjectId, room_id: Option<RoomId>) {
        let next = self.state().set_object_room(id, room_id);
        self.commit(next);
    }

    pub fn delete_object(&mut self, id: PlacedObjectId) {
        let next = self.state().delete_object(id);
        self.commit(next);
    }

    pub fn delete_selected_object(&mut self) {
        if let Some(id) = self.state().selected_object_id {
            self.delete_object(id);
        }
    }
}
