//! Plan editing engine for Plankit: rooms, walls, objects and openings.
//!
//! This crate is the headless core of the floor plan editor. It owns:
//!
//! - The document model ([`model`]): rooms with per-side wall thickness,
//!   an object catalog with placed instances, and wall openings.
//! - The geometry engines: wall resolution ([`walls`]), drag snapping
//!   ([`snap`]) and shared-wall adjacency with opening merging
//!   ([`adjacency`]).
//! - The state layer ([`state`]): an immutable [`AppState`] whose
//!   transitions are pure functions, with snapshot undo/redo ([`history`])
//!   stacked on top.
//! - The interactive session ([`session`]): drag previews, selection,
//!   viewport and file handling for a frontend to drive.
//! - Persistence ([`serialization`]): JSON import with defensive
//!   normalization and legacy migration, and export that mirrors the state
//!   exactly.
//!
//! All model coordinates are centimeters; see `plankit_core::units` for
//! the pixel mapping.

pub mod adjacency;
pub mod history;
pub mod model;
pub mod serialization;
pub mod session;
pub mod snap;
pub mod state;
pub mod walls;

pub use adjacency::{
    find_adjacent_room, merged_openings, renders_shared_wall, resolve_wall, solid_spans,
    ResolvedWall, SharedWall,
};
pub use history::History;
pub use model::{
    ObjectDef, ObjectDefId, OpeningKind, PlacedObject, PlacedObjectId, Room, RoomId, WallOpening,
    WallOpeningId, WallOverrides, WallSide,
};
pub use session::PlannerState;
pub use snap::{snap_object_position, snap_room_position, SnapResult};
pub use state::AppState;
pub use walls::{outer_bounds, outer_bounds_at, ResolvedWalls};
