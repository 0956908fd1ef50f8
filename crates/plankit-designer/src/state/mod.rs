//! Application state and its transitions.
//!
//! [`AppState`] is a plain value: every field is data, and every transition
//! is a pure method that takes `&self` and returns the successor state,
//! leaving the input untouched. Invalid requests (unknown ids, locked rooms,
//! out-of-range openings) return a state equal to the input rather than
//! panicking, so callers can apply transitions unconditionally.
//!
//! The transition methods are grouped by concern in the submodules; this
//! module holds the state definition and read-only queries.

mod objects;
mod openings;
mod rooms;
mod selection;
mod viewport;
mod walls;

use plankit_core::constants::DEFAULT_WALL_THICKNESS_CM;
use plankit_core::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

use crate::model::{
    ObjectDef, ObjectDefId, PlacedObject, PlacedObjectId, Room, RoomId, WallOpening, WallOpeningId,
};

/// The complete persistent state of one floor plan document.
///
/// Serializes 1:1 to the plan JSON schema; there is no separate export
/// shape. Transient interaction state (drag sessions, dirty flags) lives in
/// [`crate::session::PlannerState`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub rooms: Vec<Room>,
    pub global_wall_thickness_cm: f64,
    pub selected_room_ids: Vec<RoomId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_object_id: Option<PlacedObjectId>,
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
    pub object_defs: Vec<ObjectDef>,
    pub placed_objects: Vec<PlacedObject>,
    pub wall_openings: Vec<WallOpening>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            global_wall_thickness_cm: DEFAULT_WALL_THICKNESS_CM,
            selected_room_ids: Vec::new(),
            selected_object_id: None,
            pan_x: 0.0,
            pan_y: 0.0,
            zoom: 1.0,
            object_defs: Vec::new(),
            placed_objects: Vec::new(),
            wall_openings: Vec::new(),
        }
    }
}

impl AppState {
    /// An empty plan with default wall thickness and an unzoomed viewport.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn object_def(&self, id: ObjectDefId) -> Option<&ObjectDef> {
        self.object_defs.iter().find(|d| d.id == id)
    }

    pub fn placed_object(&self, id: PlacedObjectId) -> Option<&PlacedObject> {
        self.placed_objects.iter().find(|o| o.id == id)
    }

    pub fn opening(&self, id: WallOpeningId) -> Option<&WallOpening> {
        self.wall_openings.iter().find(|o| o.id == id)
    }

    pub fn is_room_selected(&self, id: RoomId) -> bool {
        self.selected_room_ids.contains(&id)
    }

    pub fn selected_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms
            .iter()
            .filter(|r| self.selected_room_ids.contains(&r.id))
    }

    /// The first room, in document order, whose inner rectangle contains
    /// `p`. Walls belong to no room for hit-testing purposes.
    pub fn room_at_point(&self, p: Point) -> Option<&Room> {
        self.rooms.iter().find(|r| r.contains_point(p))
    }

    /// The topmost placed object under `p`. Later objects draw above
    /// earlier ones, so the scan runs back to front.
    pub fn object_at_point(&self, p: Point) -> Option<&PlacedObject> {
        self.placed_objects
            .iter()
            .rev()
            .find(|o| self.object_footprint(o).contains(p))
    }

    /// Rotation-adjusted footprint of a placed object, resolving its
    /// definition. Falls back to the overrides alone if the definition is
    /// missing, which normalization prevents for loaded documents.
    pub fn object_footprint(&self, obj: &PlacedObject) -> Rect {
        match self.object_def(obj.def_id) {
            Some(def) => obj.footprint(def),
            None => {
                let w = obj.width_cm.unwrap_or(0.0);
                let h = obj.height_cm.unwrap_or(0.0);
                let (w, h) = if obj.quarter_turned() { (h, w) } else { (w, h) };
                Rect::new(obj.x_cm, obj.y_cm, w, h)
            }
        }
    }

    /// Room membership for an object footprint: the room whose inner
    /// rectangle contains the footprint's center.
    pub(crate) fn detect_room(&self, footprint: Rect) -> Option<RoomId> {
        self.room_at_point(footprint.center()).map(|r| r.id)
    }
}
