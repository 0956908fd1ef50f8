//! Effective wall thickness resolution and wall-inclusive footprints.
//!
//! A room's stored rectangle is its inner floor area; walls extend outward.
//! Every consumer that cares about where a wall's outer face sits (snapping,
//! adjacency, rendering) goes through [`ResolvedWalls`] so the
//! override-then-global fallback is applied exactly one way.

use plankit_core::geometry::Bounds;

use crate::model::{Room, WallSide};

/// The four wall thicknesses of one room with overrides applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedWalls {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl ResolvedWalls {
    /// Resolves each side to its override, or `global_cm` where none is set.
    pub fn resolve(room: &Room, global_cm: f64) -> Self {
        Self {
            north: room.wall_cm.north.unwrap_or(global_cm),
            south: room.wall_cm.south.unwrap_or(global_cm),
            east: room.wall_cm.east.unwrap_or(global_cm),
            west: room.wall_cm.west.unwrap_or(global_cm),
        }
    }

    pub fn side(&self, side: WallSide) -> f64 {
        match side {
            WallSide::North => self.north,
            WallSide::South => self.south,
            WallSide::East => self.east,
            WallSide::West => self.west,
        }
    }
}

/// Outer extents of a room including its walls, at its stored position.
pub fn outer_bounds(room: &Room, global_cm: f64) -> Bounds {
    outer_bounds_at(room, global_cm, room.x_cm, room.y_cm)
}

/// Outer extents of a room including its walls, as if its inner rectangle
/// were anchored at `(x_cm, y_cm)`. Used for drag candidates.
pub fn outer_bounds_at(room: &Room, global_cm: f64, x_cm: f64, y_cm: f64) -> Bounds {
    let walls = ResolvedWalls::resolve(room, global_cm);
    Bounds::new(
        x_cm - walls.west,
        y_cm - walls.north,
        x_cm + room.width_cm + walls.east,
        y_cm + room.height_cm + walls.south,
    )
}
