//! Wall thickness transitions.

use super::AppState;
use crate::model::{RoomId, WallSide};

impl AppState {
    /// Changes the document-wide wall thickness. Every wall without a
    /// per-side override follows immediately. Non-positive values are
    /// clamped to zero.
    pub fn set_global_wall_thickness(&self, thickness_cm: f64) -> AppState {
        let mut next = self.clone();
        next.global_wall_thickness_cm = thickness_cm.max(0.0);
        next
    }

    /// Sets or clears one side's thickness override on one room. `None`
    /// restores the global fallback for that side.
    pub fn set_room_wall_override(
        &self,
        id: RoomId,
        side: WallSide,
        thickness_cm: Option<f64>,
    ) -> AppState {
        let mut next = self.clone();
        if let Some(room) = next.rooms.iter_mut().find(|r| r.id == id) {
            room.wall_cm.set_side(side, thickness_cm.map(|t| t.max(0.0)));
        } else {
            tracing::debug!(%id, "set_room_wall_override: unknown room");
        }
        next
    }
}
