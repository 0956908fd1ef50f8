use std::fmt;

use plankit_core::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RoomId;

/// Stable identifier of a reusable object definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectDefId(Uuid);

impl ObjectDefId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for ObjectDefId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for ObjectDefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A catalog entry placeable objects are stamped from: a name plus default
/// footprint dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDef {
    pub id: ObjectDefId,
    pub name: String,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl ObjectDef {
    pub fn new(name: impl Into<String>, width_cm: f64, height_cm: f64) -> Self {
        Self {
            id: ObjectDefId::generate(),
            name: name.into(),
            width_cm,
            height_cm,
        }
    }
}

/// Stable identifier of a placed object instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacedObjectId(Uuid);

impl PlacedObjectId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for PlacedObjectId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlacedObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One instance of an [`ObjectDef`] placed on the plan.
///
/// `room_id` is the room whose inner rectangle contains the object's
/// center, or `None` when the object sits outside every room. Size
/// overrides, when present, replace the definition's dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedObject {
    pub id: PlacedObjectId,
    pub def_id: ObjectDefId,
    #[serde(default)]
    pub room_id: Option<RoomId>,
    pub x_cm: f64,
    pub y_cm: f64,
    #[serde(default)]
    pub rotation_deg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width_cm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
}

impl PlacedObject {
    pub fn new(def_id: ObjectDefId, x_cm: f64, y_cm: f64) -> Self {
        Self {
            id: PlacedObjectId::generate(),
            def_id,
            room_id: None,
            x_cm,
            y_cm,
            rotation_deg: 0.0,
            width_cm: None,
            height_cm: None,
        }
    }

    /// Width before rotation: the override if set, otherwise the
    /// definition's default.
    pub fn effective_width(&self, def: &ObjectDef) -> f64 {
        self.width_cm.unwrap_or(def.width_cm)
    }

    /// Height before rotation: the override if set, otherwise the
    /// definition's default.
    pub fn effective_height(&self, def: &ObjectDef) -> f64 {
        self.height_cm.unwrap_or(def.height_cm)
    }

    /// True when the rotation amounts to a quarter turn, which swaps the
    /// footprint's width and height.
    pub fn quarter_turned(&self) -> bool {
        let quarters = (self.rotation_deg / 90.0).round() as i64;
        quarters.rem_euclid(2) == 1
    }

    /// Footprint dimensions with rotation applied.
    pub fn footprint_size(&self, def: &ObjectDef) -> (f64, f64) {
        let w = self.effective_width(def);
        let h = self.effective_height(def);
        if self.quarter_turned() {
            (h, w)
        } else {
            (w, h)
        }
    }

    /// Axis-aligned footprint at the object's position, rotation applied.
    pub fn footprint(&self, def: &ObjectDef) -> Rect {
        let (w, h) = self.footprint_size(def);
        Rect::new(self.x_cm, self.y_cm, w, h)
    }

    /// Center of the footprint. Room membership is decided from this point.
    pub fn center(&self, def: &ObjectDef) -> Point {
        self.footprint(def).center()
    }
}
