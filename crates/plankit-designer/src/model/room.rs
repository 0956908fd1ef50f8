use std::fmt;

use plankit_core::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::WallSide;

/// Stable identifier of a room, unique within a document.
///
/// Ids order lexicographically (the `Ord` impl matches the canonical string
/// form), which is what shared-wall render ownership relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(Uuid);

impl RoomId {
    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for RoomId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-side wall thickness overrides in centimeters.
///
/// A side that is `None` falls back to the document's global thickness.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub north: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub south: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub east: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub west: Option<f64>,
}

impl WallOverrides {
    pub fn is_empty(&self) -> bool {
        self.north.is_none() && self.south.is_none() && self.east.is_none() && self.west.is_none()
    }

    pub fn side(&self, side: WallSide) -> Option<f64> {
        match side {
            WallSide::North => self.north,
            WallSide::South => self.south,
            WallSide::East => self.east,
            WallSide::West => self.west,
        }
    }

    pub fn set_side(&mut self, side: WallSide, thickness_cm: Option<f64>) {
        match side {
            WallSide::North => self.north = thickness_cm,
            WallSide::South => self.south = thickness_cm,
            WallSide::East => self.east = thickness_cm,
            WallSide::West => self.west = thickness_cm,
        }
    }
}

/// A rectangular room. Position and size describe the *inner* rectangle,
/// i.e. the usable floor area; walls extend outward from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub x_cm: f64,
    pub y_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    #[serde(default, skip_serializing_if = "WallOverrides::is_empty")]
    pub wall_cm: WallOverrides,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        x_cm: f64,
        y_cm: f64,
        width_cm: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            id: RoomId::generate(),
            name: name.into(),
            x_cm,
            y_cm,
            width_cm,
            height_cm,
            wall_cm: WallOverrides::default(),
            locked: false,
        }
    }

    /// The usable floor area, excluding walls.
    pub fn inner_rect(&self) -> Rect {
        Rect::new(self.x_cm, self.y_cm, self.width_cm, self.height_cm)
    }

    /// True when `p` lies inside the inner rectangle (edges inclusive).
    pub fn contains_point(&self, p: Point) -> bool {
        self.inner_rect().contains(p)
    }

    /// Length of the given wall along its own axis.
    pub fn wall_length(&self, side: WallSide) -> f64 {
        match side {
            WallSide::North | WallSide::South => self.width_cm,
            WallSide::East | WallSide::West => self.height_cm,
        }
    }

    /// Plan coordinate where the wall's own axis starts: x for horizontal
    /// walls, y for vertical ones. Opening positions are measured from here.
    pub fn wall_origin(&self, side: WallSide) -> f64 {
        match side {
            WallSide::North | WallSide::South => self.x_cm,
            WallSide::East | WallSide::West => self.y_cm,
        }
    }

    /// True when an opening of `width_cm` starting `position_cm` from the
    /// wall origin lies entirely within the wall. The far end may touch the
    /// wall's end exactly.
    pub fn opening_fits(&self, side: WallSide, position_cm: f64, width_cm: f64) -> bool {
        position_cm >= 0.0 && width_cm > 0.0 && position_cm + width_cm <= self.wall_length(side)
    }
}
