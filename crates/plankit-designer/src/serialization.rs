//! JSON import and export of plan documents.
//!
//! Export serializes [`AppState`] directly, so the wire format and the
//! in-memory state never drift apart: exporting and re-importing a state
//! yields a deep-equal state. Import is defensive instead of strict; a
//! document is parsed into [`PlanDocument`] (tolerating missing optional
//! fields and the legacy single-selection field) and then normalized, with
//! unrepairable problems reported as errors and repairable ones fixed up
//! with a log line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use plankit_core::constants::{DEFAULT_WALL_THICKNESS_CM, MIN_ROOM_DIMENSION_CM};
use plankit_core::error::{Error, Result};
use serde::Deserialize;

use crate::model::{ObjectDef, PlacedObject, PlacedObjectId, Room, RoomId, WallOpening};
use crate::state::AppState;

/// The raw shape of a plan document on disk.
///
/// Deliberately `Deserialize`-only: writing always goes through
/// [`AppState`]'s own `Serialize` impl. Every field an older version of the
/// format might lack carries a default, including the pre-multi-selection
/// `selectedRoomId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlanDocument {
    #[serde(default)]
    rooms: Vec<Room>,
    #[serde(default = "default_wall_thickness")]
    global_wall_thickness_cm: f64,
    #[serde(default)]
    selected_room_ids: Vec<RoomId>,
    /// Single-selection field written by old exports. Migrated into
    /// `selected_room_ids` when that list is absent.
    #[serde(default)]
    selected_room_id: Option<RoomId>,
    #[serde(default)]
    selected_object_id: Option<PlacedObjectId>,
    #[serde(default)]
    pan_x: f64,
    #[serde(default)]
    pan_y: f64,
    #[serde(default = "default_zoom")]
    zoom: f64,
    #[serde(default)]
    object_defs: Vec<ObjectDef>,
    #[serde(default)]
    placed_objects: Vec<PlacedObject>,
    #[serde(default)]
    wall_openings: Vec<WallOpening>,
}

fn default_wall_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS_CM
}

fn default_zoom() -> f64 {
    1.0
}

/// Serializes a state to pretty-printed JSON.
pub fn export_json(state: &AppState) -> Result<String> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Parses and normalizes a plan document.
///
/// Malformed JSON and structural corruption (duplicate ids, non-finite
/// numbers) are errors; everything else the loader can make sense of is
/// repaired in place: undersized rooms are floored, dangling references
/// pruned or re-derived, and ill-fitting openings dropped.
pub fn import_json(json: &str) -> Result<AppState> {
    let doc: PlanDocument = serde_json::from_str(json)?;
    normalize(doc)
}

fn ensure_finite(value: f64, what: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::invalid_document(format!("non-finite {}", what)))
    }
}

fn check_finite(doc: &PlanDocument) -> Result<()> {
    ensure_finite(doc.global_wall_thickness_cm, "global wall thickness")?;
    ensure_finite(doc.pan_x, "viewport pan")?;
    ensure_finite(doc.pan_y, "viewport pan")?;
    ensure_finite(doc.zoom, "viewport zoom")?;
    for room in &doc.rooms {
        for v in [room.x_cm, room.y_cm, room.width_cm, room.height_cm] {
            ensure_finite(v, "room geometry")?;
        }
        for side in crate::model::WallSide::ALL {
            if let Some(t) = room.wall_cm.side(side) {
                ensure_finite(t, "wall thickness override")?;
            }
        }
    }
    for def in &doc.object_defs {
        ensure_finite(def.width_cm, "object definition size")?;
        ensure_finite(def.height_cm, "object definition size")?;
    }
    for obj in &doc.placed_objects {
        for v in [obj.x_cm, obj.y_cm, obj.rotation_deg] {
            ensure_finite(v, "object geometry")?;
        }
        for v in [obj.width_cm, obj.height_cm].into_iter().flatten() {
            ensure_finite(v, "object size override")?;
        }
    }
    for opening in &doc.wall_openings {
        ensure_finite(opening.position_cm, "opening geometry")?;
        ensure_finite(opening.width_cm, "opening geometry")?;
    }
    Ok(())
}

fn normalize(doc: PlanDocument) -> Result<AppState> {
    check_finite(&doc)?;

    let mut state = AppState {
        rooms: doc.rooms,
        global_wall_thickness_cm: doc.global_wall_thickness_cm.max(0.0),
        selected_room_ids: doc.selected_room_ids,
        selected_object_id: doc.selected_object_id,
        pan_x: doc.pan_x,
        pan_y: doc.pan_y,
        zoom: if doc.zoom > 0.0 { doc.zoom } else { 1.0 },
        object_defs: doc.object_defs,
        placed_objects: doc.placed_objects,
        wall_openings: doc.wall_openings,
    };

    let mut seen_rooms = HashSet::new();
    for room in &state.rooms {
        if !seen_rooms.insert(room.id) {
            return Err(Error::invalid_document(format!(
                "duplicate room id {}",
                room.id
            )));
        }
    }
    let mut seen_defs = HashSet::new();
    for def in &state.object_defs {
        if !seen_defs.insert(def.id) {
            return Err(Error::invalid_document(format!(
                "duplicate object definition id {}",
                def.id
            )));
        }
    }

    for room in &mut state.rooms {
        room.width_cm = room.width_cm.max(MIN_ROOM_DIMENSION_CM);
        room.height_cm = room.height_cm.max(MIN_ROOM_DIMENSION_CM);
        for side in crate::model::WallSide::ALL {
            if let Some(t) = room.wall_cm.side(side) {
                if t < 0.0 {
                    room.wall_cm.set_side(side, Some(0.0));
                }
            }
        }
    }

    // Migrate the legacy single selection, then prune the selection down to
    // rooms that actually exist.
    if state.selected_room_ids.is_empty() {
        if let Some(legacy) = doc.selected_room_id {
            state.selected_room_ids.push(legacy);
        }
    }
    let mut seen_selection = HashSet::new();
    state
        .selected_room_ids
        .retain(|id| seen_rooms.contains(id) && seen_selection.insert(*id));

    state.placed_objects.retain(|obj| {
        let keep = seen_defs.contains(&obj.def_id);
        if !keep {
            tracing::warn!(
                object = %obj.id,
                def = %obj.def_id,
                "dropping object with unknown definition"
            );
        }
        keep
    });

    // Room membership is re-derived whenever the stored reference is stale.
    let mut memberships: Vec<(usize, Option<RoomId>)> = Vec::new();
    for (idx, obj) in state.placed_objects.iter().enumerate() {
        let stale = obj
            .room_id
            .is_some_and(|room_id| !seen_rooms.contains(&room_id));
        if stale {
            let footprint = state.object_footprint(obj);
            memberships.push((idx, state.detect_room(footprint)));
        }
    }
    for (idx, room_id) in memberships {
        state.placed_objects[idx].room_id = room_id;
    }

    if let Some(selected) = state.selected_object_id {
        if state.placed_object(selected).is_none() {
            tracing::debug!(object = %selected, "clearing selection of missing object");
            state.selected_object_id = None;
        }
    }

    let openings = std::mem::take(&mut state.wall_openings);
    for opening in openings {
        let fits = state.room(opening.room_id).is_some_and(|room| {
            room.opening_fits(opening.side, opening.position_cm, opening.width_cm)
        });
        if fits {
            state.wall_openings.push(opening);
        } else {
            tracing::warn!(
                opening = %opening.id,
                "dropping opening that does not fit its wall"
            );
        }
    }

    Ok(state)
}

/// Writes a state to disk as pretty-printed JSON.
pub fn save_to_file(state: &AppState, path: &Path) -> anyhow::Result<()> {
    let json = export_json(state)
        .with_context(|| format!("Failed to serialize plan for {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("Failed to write plan file: {}", path.display()))
}

/// Reads and normalizes a plan document from disk.
pub fn load_from_file(path: &Path) -> anyhow::Result<AppState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;
    import_json(&json).with_context(|| format!("Failed to parse plan file: {}", path.display()))
}
