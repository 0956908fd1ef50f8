//! Wall opening transitions.
//!
//! Openings must lie entirely within their wall. Requests that would poke
//! past either end are rejected wholesale; the state comes back unchanged
//! rather than clamped.

use super::AppState;
use crate::model::{OpeningKind, RoomId, WallOpening, WallOpeningId, WallSide};

impl AppState {
    /// Adds a door or window to one wall of one room. Rejected (state
    /// unchanged) when the room is unknown or the opening does not fit.
    pub fn add_opening(
        &self,
        room_id: RoomId,
        side: WallSide,
        kind: OpeningKind,
        position_cm: f64,
        width_cm: f64,
    ) -> AppState {
        let mut next = self.clone();
        let fits = match next.room(room_id) {
            Some(room) => room.opening_fits(side, position_cm, width_cm),
            None => {
                tracing::debug!(room = %room_id, "add_opening: unknown room");
                return next;
            }
        };
        if !fits {
            tracing::debug!(
                room = %room_id,
                %side,
                position_cm,
                width_cm,
                "add_opening: does not fit in wall"
            );
            return next;
        }
        next.wall_openings
            .push(WallOpening::new(room_id, side, kind, position_cm, width_cm));
        next
    }

    /// Moves or resizes an opening along its wall. The new extent is
    /// validated against the owning room's wall; a request that does not
    /// fit leaves the state unchanged.
    pub fn update_opening(&self, id: WallOpeningId, position_cm: f64, width_cm: f64) -> AppState {
        let mut next = self.clone();
        let fits = match next.opening(id) {
            Some(opening) => match next.room(opening.room_id) {
                Some(room) => room.opening_fits(opening.side, position_cm, width_cm),
                None => false,
            },
            None => {
                tracing::debug!(%id, "update_opening: unknown opening");
                return next;
            }
        };
        if !fits {
            tracing::debug!(%id, position_cm, width_cm, "update_opening: does not fit in wall");
            return next;
        }
        if let Some(opening) = next.wall_openings.iter_mut().find(|o| o.id == id) {
            opening.position_cm = position_cm;
            opening.width_cm = width_cm;
        }
        next
    }

    pub fn delete_opening(&self, id: WallOpeningId) -> AppState {
        let mut next = self.clone();
        let before = next.wall_openings.len();
        next.wall_openings.retain(|o| o.id != id);
        if next.wall_openings.len() == before {
            tracing::debug!(%id, "delete_opening: unknown opening");
        }
        next
    }
}
