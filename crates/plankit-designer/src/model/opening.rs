use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RoomId;

/// One of the four walls of a rectangular room.
///
/// North is the top edge in plan coordinates (y grows downward), south the
/// bottom, west the left and east the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    North,
    South,
    East,
    West,
}

impl WallSide {
    pub const ALL: [WallSide; 4] = [
        WallSide::North,
        WallSide::South,
        WallSide::East,
        WallSide::West,
    ];

    /// The side facing this one across two adjacent rooms.
    pub fn opposite(self) -> Self {
        match self {
            WallSide::North => WallSide::South,
            WallSide::South => WallSide::North,
            WallSide::East => WallSide::West,
            WallSide::West => WallSide::East,
        }
    }

    /// True for walls that run along the x axis (north and south).
    pub fn is_horizontal(self) -> bool {
        matches!(self, WallSide::North | WallSide::South)
    }
}

impl fmt::Display for WallSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WallSide::North => "north",
            WallSide::South => "south",
            WallSide::East => "east",
            WallSide::West => "west",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for WallSide {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(WallSide::North),
            "south" => Ok(WallSide::South),
            "east" => Ok(WallSide::East),
            "west" => Ok(WallSide::West),
            other => Err(format!("unknown wall side: {}", other)),
        }
    }
}

/// What kind of opening pierces a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

impl fmt::Display for OpeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OpeningKind::Door => "door",
            OpeningKind::Window => "window",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OpeningKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "door" => Ok(OpeningKind::Door),
            "window" => Ok(OpeningKind::Window),
            other => Err(format!("unknown opening kind: {}", other)),
        }
    }
}

/// Stable identifier of a wall opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallOpeningId(Uuid);

impl WallOpeningId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for WallOpeningId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for WallOpeningId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A door or window cut into one wall of one room.
///
/// `position_cm` is the distance from the wall's origin (west end for
/// horizontal walls, north end for vertical ones) to the opening's near
/// edge, measured along the wall.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallOpening {
    pub id: WallOpeningId,
    pub room_id: RoomId,
    pub side: WallSide,
    pub kind: OpeningKind,
    pub position_cm: f64,
    pub width_cm: f64,
}

impl WallOpening {
    pub fn new(
        room_id: RoomId,
        side: WallSide,
        kind: OpeningKind,
        position_cm: f64,
        width_cm: f64,
    ) -> Self {
        Self {
            id: WallOpeningId::generate(),
            room_id,
            side,
            kind,
            position_cm,
            width_cm,
        }
    }

    /// Far edge of the opening, measured along the wall.
    pub fn end_cm(&self) -> f64 {
        self.position_cm + self.width_cm
    }
}
