//! Data model for plan documents.
//!
//! These types mirror the persisted JSON schema field for field. All
//! `*_cm` values are centimeters in plan coordinates (x right, y down);
//! nothing in the model layer is pixel-aware.

mod object;
mod opening;
mod room;

pub use object::{ObjectDef, ObjectDefId, PlacedObject, PlacedObjectId};
pub use opening::{OpeningKind, WallOpening, WallOpeningId, WallSide};
pub use room::{Room, RoomId, WallOverrides};
