use std::path::Path;

use plankit_designer::model::{OpeningKind, Room, WallSide};
use plankit_designer::serialization::{export_json, import_json, load_from_file, save_to_file};
use plankit_designer::state::AppState;
use tempfile::TempDir;

fn sample_plan() -> AppState {
    let mut state = AppState {
        rooms: vec![
            Room::new("Living Room", 0.0, 0.0, 300.0, 400.0),
            Room::new("Kitchen", 324.0, 0.0, 300.0, 300.0),
        ],
        ..AppState::new()
    };
    state = state.add_object_def("Sofa", 200.0, 90.0);
    let def_id = state.object_defs[0].id;
    state = state.place_object(def_id, 50.0, 50.0);
    let living = state.rooms[0].id;
    state = state.add_opening(living, WallSide::East, OpeningKind::Door, 50.0, 90.0);
    state.select_room(living).set_viewport(25.0, -40.0, 1.5)
}

#[test]
fn test_export_import_round_trip() {
    let state = sample_plan();
    let json = export_json(&state).expect("export failed");
    let loaded = import_json(&json).expect("import failed");
    assert_eq!(loaded, state);
}

#[test]
fn test_reimport_restores_exported_plan() {
    let state = sample_plan();
    let exported = export_json(&state).expect("export failed");

    // Keep editing in memory after the export.
    let kitchen = state.rooms[1].id;
    let mutated = state.delete_room(kitchen).set_global_wall_thickness(20.0);
    assert_eq!(mutated.rooms.len(), 1);

    // Importing the earlier export brings the deleted room back.
    let restored = import_json(&exported).expect("import failed");
    assert_eq!(restored.rooms.len(), 2);
    assert_eq!(restored, state);
}

#[test]
fn test_exported_json_field_names() {
    let state = sample_plan();
    let json = export_json(&state).expect("export failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("export is not json");

    let root = value.as_object().expect("root is not an object");
    for key in [
        "rooms",
        "globalWallThicknessCm",
        "selectedRoomIds",
        "panX",
        "panY",
        "zoom",
        "objectDefs",
        "placedObjects",
        "wallOpenings",
    ] {
        assert!(root.contains_key(key), "missing root key {}", key);
    }
    // No object is selected, so the field stays off the wire.
    assert!(!root.contains_key("selectedObjectId"));

    let room = value["rooms"][0].as_object().expect("room is not an object");
    for key in ["id", "name", "xCm", "yCm", "widthCm", "heightCm"] {
        assert!(room.contains_key(key), "missing room key {}", key);
    }
    // Default-valued extras are omitted too.
    assert!(!room.contains_key("wallCm"));
    assert!(!room.contains_key("locked"));

    let object = value["placedObjects"][0]
        .as_object()
        .expect("object is not an object");
    assert!(object.contains_key("roomId"));
    assert!(object.contains_key("rotationDeg"));
    assert!(!object.contains_key("widthCm"));

    let opening = value["wallOpenings"][0]
        .as_object()
        .expect("opening is not an object");
    assert_eq!(opening["side"], "east");
    assert_eq!(opening["kind"], "door");
}

#[test]
fn test_exported_json_includes_non_default_room_fields() {
    let state = sample_plan();
    let living = state.rooms[0].id;
    let state = state
        .set_room_locked(living, true)
        .set_room_wall_override(living, WallSide::North, Some(20.0));

    let json = export_json(&state).expect("export failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("export is not json");

    assert_eq!(value["rooms"][0]["locked"], true);
    assert_eq!(value["rooms"][0]["wallCm"]["north"], 20.0);
    assert!(value["rooms"][0]["wallCm"].get("south").is_none());
}

#[test]
fn test_import_fills_defaults_for_missing_fields() {
    let state = import_json("{}").expect("import failed");
    assert!(state.rooms.is_empty());
    assert_eq!(state.global_wall_thickness_cm, 12.0);
    assert_eq!(state.zoom, 1.0);
    assert_eq!(state.pan_x, 0.0);
    assert_eq!(state.pan_y, 0.0);
    assert!(state.selected_room_ids.is_empty());
    assert_eq!(state.selected_object_id, None);
    assert!(state.wall_openings.is_empty());
}

#[test]
fn test_import_migrates_legacy_single_selection() {
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Living Room",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0}
        ],
        "selectedRoomId": "11111111-1111-4111-8111-111111111111"
    }"#;
    let state = import_json(json).expect("import failed");
    assert_eq!(state.selected_room_ids, vec![state.rooms[0].id]);
}

#[test]
fn test_modern_selection_wins_over_legacy_field() {
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Living Room",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0},
            {"id": "22222222-2222-4222-8222-222222222222", "name": "Kitchen",
             "xCm": 324.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 300.0}
        ],
        "selectedRoomIds": ["22222222-2222-4222-8222-222222222222"],
        "selectedRoomId": "11111111-1111-4111-8111-111111111111"
    }"#;
    let state = import_json(json).expect("import failed");
    assert_eq!(state.selected_room_ids, vec![state.rooms[1].id]);
}

#[test]
fn test_import_prunes_and_dedupes_selection() {
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Living Room",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0}
        ],
        "selectedRoomIds": [
            "11111111-1111-4111-8111-111111111111",
            "99999999-9999-4999-8999-999999999999",
            "11111111-1111-4111-8111-111111111111"
        ],
        "selectedObjectId": "99999999-9999-4999-8999-999999999999"
    }"#;
    let state = import_json(json).expect("import failed");
    assert_eq!(state.selected_room_ids, vec![state.rooms[0].id]);
    // The selected object does not exist, so the selection is dropped.
    assert_eq!(state.selected_object_id, None);
}

#[test]
fn test_import_drops_objects_with_unknown_definitions() {
    let json = r#"{
        "objectDefs": [
            {"id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa", "name": "Sofa",
             "widthCm": 200.0, "heightCm": 90.0}
        ],
        "placedObjects": [
            {"id": "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb",
             "defId": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa",
             "xCm": 10.0, "yCm": 10.0},
            {"id": "cccccccc-cccc-4ccc-8ccc-cccccccccccc",
             "defId": "99999999-9999-4999-8999-999999999999",
             "xCm": 20.0, "yCm": 20.0}
        ]
    }"#;
    let state = import_json(json).expect("import failed");
    assert_eq!(state.placed_objects.len(), 1);
    assert_eq!(state.placed_objects[0].x_cm, 10.0);
}

#[test]
fn test_import_rederives_stale_room_membership() {
    // The first object claims a room that no longer exists; its center
    // (110, 95) lies inside the surviving room, so it is reassigned. The
    // second object's stored room is valid and the loader trusts it even
    // though its center is far away.
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Living Room",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0}
        ],
        "objectDefs": [
            {"id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa", "name": "Sofa",
             "widthCm": 200.0, "heightCm": 90.0}
        ],
        "placedObjects": [
            {"id": "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb",
             "defId": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa",
             "roomId": "99999999-9999-4999-8999-999999999999",
             "xCm": 10.0, "yCm": 50.0},
            {"id": "cccccccc-cccc-4ccc-8ccc-cccccccccccc",
             "defId": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa",
             "roomId": "11111111-1111-4111-8111-111111111111",
             "xCm": 1000.0, "yCm": 1000.0}
        ]
    }"#;
    let state = import_json(json).expect("import failed");
    let living = state.rooms[0].id;
    assert_eq!(state.placed_objects[0].room_id, Some(living));
    assert_eq!(state.placed_objects[1].room_id, Some(living));
}

#[test]
fn test_import_drops_ill_fitting_openings() {
    // The east wall is 400 cm long: 50 + 90 fits, 350 + 90 does not.
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Living Room",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0}
        ],
        "wallOpenings": [
            {"id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa",
             "roomId": "11111111-1111-4111-8111-111111111111",
             "side": "east", "kind": "door", "positionCm": 50.0, "widthCm": 90.0},
            {"id": "bbbbbbbb-bbbb-4bbb-8bbb-bbbbbbbbbbbb",
             "roomId": "11111111-1111-4111-8111-111111111111",
             "side": "east", "kind": "door", "positionCm": 350.0, "widthCm": 90.0},
            {"id": "cccccccc-cccc-4ccc-8ccc-cccccccccccc",
             "roomId": "99999999-9999-4999-8999-999999999999",
             "side": "north", "kind": "window", "positionCm": 10.0, "widthCm": 60.0}
        ]
    }"#;
    let state = import_json(json).expect("import failed");
    assert_eq!(state.wall_openings.len(), 1);
    assert_eq!(state.wall_openings[0].position_cm, 50.0);
}

#[test]
fn test_import_repairs_corrupt_numbers() {
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Closet",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 3.0, "heightCm": -20.0,
             "wallCm": {"north": -5.0}}
        ],
        "globalWallThicknessCm": -4.0,
        "zoom": 0.0
    }"#;
    let state = import_json(json).expect("import failed");
    assert_eq!(state.rooms[0].width_cm, 10.0);
    assert_eq!(state.rooms[0].height_cm, 10.0);
    assert_eq!(state.rooms[0].wall_cm.north, Some(0.0));
    assert_eq!(state.global_wall_thickness_cm, 0.0);
    assert_eq!(state.zoom, 1.0);
}

#[test]
fn test_import_rejects_duplicate_room_ids() {
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "A",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0},
            {"id": "11111111-1111-4111-8111-111111111111", "name": "B",
             "xCm": 500.0, "yCm": 0.0, "widthCm": 300.0, "heightCm": 400.0}
        ]
    }"#;
    let err = import_json(json).unwrap_err();
    assert!(err.to_string().contains("duplicate room id"));
}

#[test]
fn test_import_rejects_duplicate_def_ids() {
    let json = r#"{
        "objectDefs": [
            {"id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa", "name": "Sofa",
             "widthCm": 200.0, "heightCm": 90.0},
            {"id": "aaaaaaaa-aaaa-4aaa-8aaa-aaaaaaaaaaaa", "name": "Table",
             "widthCm": 120.0, "heightCm": 80.0}
        ]
    }"#;
    let err = import_json(json).unwrap_err();
    assert!(err.to_string().contains("duplicate object definition id"));
}

#[test]
fn test_import_rejects_malformed_json() {
    assert!(import_json("{ invalid json }").is_err());
    assert!(import_json("[1, 2, 3]").is_err());
}

#[test]
fn test_import_rejects_non_finite_numbers() {
    // 1e999 overflows f64 and parses as infinity.
    let json = r#"{
        "rooms": [
            {"id": "11111111-1111-4111-8111-111111111111", "name": "Living Room",
             "xCm": 0.0, "yCm": 0.0, "widthCm": 1e999, "heightCm": 400.0}
        ]
    }"#;
    let err = import_json(json).unwrap_err();
    assert!(err.to_string().contains("non-finite"));

    let json = r#"{"zoom": 1e999}"#;
    assert!(import_json(json).is_err());
}

#[test]
fn test_save_and_load_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("plan.json");

    let state = sample_plan();
    save_to_file(&state, &file_path).expect("save failed");
    let loaded = load_from_file(&file_path).expect("load failed");
    assert_eq!(loaded, state);
}

#[test]
fn test_load_nonexistent_file() {
    let result = load_from_file(Path::new("/nonexistent/path/plan.json"));
    assert!(result.is_err());
}
