//! Wall opening operations, recorded as undo steps.
//!
//! A rejected opening (one that does not fit its wall) produces a state
//! equal to the present, which `commit` drops, so rejections neither change
//! the document nor consume an undo step.

use super::PlannerState;
use crate::model::{OpeningKind, RoomId, WallOpeningId, WallSide};

impl PlannerState {
    pub fn add_opening(
        &mut self,
        room_id: RoomId,
        side: WallSide,
        kind: OpeningKind,
        position_cm: f64,
        width_cm: f64,
    ) {
        let next = self
            .state()
            .add_opening(room_id, side, kind, position_cm, width_cm);
        self.commit(next);
    }

    pub fn update_opening(&mut self, id: WallOpeningId, position_cm: f64, width_cm: f64) {
        let next = self.state().update_opening(id, position_cm, width_cm);
        self.commit(next);
    }

    pub fn delete_opening(&mut self, id: WallOpeningId) {
        let next = self.state().delete_opening(id);
        self.commit(next);
    }
}
