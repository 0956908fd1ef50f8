//! Shared constants for the Plankit crates.
//!
//! All spatial quantities in the data model are centimeters. Pixel values
//! only exist at the rendering boundary and are always derived through
//! [`PX_PER_CM`].

/// Scale factor between model centimeters and screen pixels at zoom 1.0.
pub const PX_PER_CM: f64 = 0.5;

/// Maximum edge-to-edge distance (cm) at which a dragged room snaps to
/// another room's wall. The check is inclusive.
pub const SNAP_TOLERANCE_CM: f64 = 2.0;

/// Edge distance (cm) at which a dragged object snaps to its room's inner
/// walls or to sibling objects. Deliberately looser than the room tolerance.
pub const OBJECT_SNAP_TOLERANCE_CM: f64 = 5.0;

/// Two wall faces closer than this (cm) are treated as coincident when
/// detecting shared walls.
pub const ADJACENCY_EPSILON_CM: f64 = 1.0;

/// Minimum overlap length (cm) along the wall axis for two rooms to count
/// as sharing that wall.
pub const MIN_SHARED_WALL_OVERLAP_CM: f64 = 5.0;

/// Wall thickness (cm) applied wherever a room carries no per-side override.
pub const DEFAULT_WALL_THICKNESS_CM: f64 = 12.0;

/// Smallest width or height (cm) a room resize will produce.
pub const MIN_ROOM_DIMENSION_CM: f64 = 10.0;

/// Smallest width or height (cm) an object size override will produce.
pub const MIN_OBJECT_DIMENSION_CM: f64 = 1.0;

/// Default footprint (cm) for rooms created without explicit dimensions.
pub const DEFAULT_ROOM_WIDTH_CM: f64 = 400.0;
pub const DEFAULT_ROOM_HEIGHT_CM: f64 = 300.0;

/// Diagonal cascade step (cm) between successively added rooms.
pub const ROOM_CASCADE_CM: f64 = 40.0;

/// Offset (cm) applied on both axes when duplicating a placed object.
pub const DUPLICATE_OFFSET_CM: f64 = 20.0;

/// Zoom clamp applied by interactive sessions. Stored documents may carry
/// values outside this range; only user-driven zoom changes are clamped.
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 8.0;

/// Number of past snapshots the undo history retains before dropping the
/// oldest one.
pub const HISTORY_LIMIT: usize = 100;
