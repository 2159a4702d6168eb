use map_maker_canvas::{RoomCanvas, RoomCollection};
use map_maker_core::{CellCoord, CellState, DiagnosticEvent, SpawnPos};
use map_maker_system_export::{export_world, to_layout, WorldDocument};

fn canvas_with(width: u32, height: u32, cells: &[(u32, u32, CellState)]) -> RoomCanvas {
    let mut canvas = RoomCanvas::new(width, height);
    for &(column, row, state) in cells {
        canvas
            .paint(CellCoord::new(column, row), state)
            .expect("cell in range");
    }
    canvas
}

#[test]
fn small_room_exports_expected_layout_and_spawn() {
    let canvas = canvas_with(
        2,
        2,
        &[(0, 0, CellState::Wall), (0, 1, CellState::Spawn)],
    );

    let room = to_layout(&canvas);

    assert_eq!(room.layout, vec![vec![true, false], vec![true, false]]);
    assert_eq!(room.spawn_pos, Some(SpawnPos { x: 0, y: 1 }));
    assert_eq!(room.spawn_count, 1);
}

#[test]
fn layout_dimensions_follow_height_then_width() {
    for (width, height) in [(1, 1), (3, 5), (7, 2), (0, 4), (4, 0)] {
        let room = to_layout(&RoomCanvas::new(width, height));
        assert_eq!(room.layout.len(), height as usize, "rows for {width}x{height}");
        assert!(
            room.layout.iter().all(|row| row.len() == width as usize),
            "columns for {width}x{height}",
        );
    }
}

#[test]
fn last_spawn_in_row_major_order_wins() {
    let canvas = canvas_with(
        5,
        5,
        &[(3, 3, CellState::Spawn), (1, 1, CellState::Spawn)],
    );
    let mut rooms = RoomCollection::new();
    rooms.commit("arena", canvas).expect("named room");

    let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
    let document = export_world(&rooms, &mut diagnostics);

    assert_eq!(document.rooms[0].spawn_pos, Some(SpawnPos { x: 3, y: 3 }));
    assert_eq!(diagnostics, vec![DiagnosticEvent::multiple_spawns("arena")]);
}

#[test]
fn row_order_beats_column_order_for_spawn_selection() {
    let canvas = canvas_with(
        4,
        2,
        &[(3, 0, CellState::Spawn), (0, 1, CellState::Spawn)],
    );

    assert_eq!(to_layout(&canvas).spawn_pos, Some(SpawnPos { x: 0, y: 1 }));
}

#[test]
fn room_without_spawn_exports_null_and_reports() {
    let canvas = canvas_with(3, 3, &[(1, 1, CellState::Wall)]);
    let mut rooms = RoomCollection::new();
    rooms.commit("closet", canvas).expect("named room");

    let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
    let document = export_world(&rooms, &mut diagnostics);

    assert_eq!(document.rooms.len(), 1);
    assert_eq!(document.rooms[0].spawn_pos, None);
    assert_eq!(diagnostics, vec![DiagnosticEvent::no_spawn("closet")]);
}

#[test]
fn empty_collection_exports_empty_room_list() {
    let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
    let document = export_world(&RoomCollection::new(), &mut diagnostics);

    assert_eq!(document.to_json(), r#"{"rooms":[]}"#);
    assert!(diagnostics.is_empty());
}

#[test]
fn rooms_export_in_registration_order() {
    let mut rooms = RoomCollection::new();
    for name in ["west", "east", "north"] {
        rooms
            .commit(name, canvas_with(1, 1, &[(0, 0, CellState::Spawn)]))
            .expect("named room");
    }
    rooms
        .commit("west", canvas_with(2, 1, &[(1, 0, CellState::Spawn)]))
        .expect("named room");

    let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
    let document = export_world(&rooms, &mut diagnostics);

    let names: Vec<&str> = document.rooms.iter().map(|room| room.name.as_str()).collect();
    assert_eq!(names, vec!["west", "east", "north"]);
    assert_eq!(document.rooms[0].layout, vec![vec![false, true]]);
    assert!(diagnostics.is_empty());
}

#[test]
fn each_room_is_diagnosed_independently() {
    let mut rooms = RoomCollection::new();
    rooms
        .commit("empty", RoomCanvas::new(2, 2))
        .expect("named room");
    rooms
        .commit("ok", canvas_with(2, 2, &[(1, 1, CellState::Spawn)]))
        .expect("named room");
    rooms
        .commit(
            "crowded",
            canvas_with(2, 2, &[(0, 0, CellState::Spawn), (1, 0, CellState::Spawn)]),
        )
        .expect("named room");

    let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
    let document = export_world(&rooms, &mut diagnostics);

    assert_eq!(document.rooms.len(), 3);
    assert_eq!(
        diagnostics,
        vec![
            DiagnosticEvent::no_spawn("empty"),
            DiagnosticEvent::multiple_spawns("crowded"),
        ]
    );
}

#[test]
fn json_document_uses_wire_field_names() {
    let mut rooms = RoomCollection::new();
    rooms
        .commit(
            "hall",
            canvas_with(2, 2, &[(0, 0, CellState::Wall), (0, 1, CellState::Spawn)]),
        )
        .expect("named room");

    let mut diagnostics: Vec<DiagnosticEvent> = Vec::new();
    let json = export_world(&rooms, &mut diagnostics).to_json();

    assert_eq!(
        json,
        r#"{"rooms":[{"name":"hall","layout":[[true,false],[true,false]],"spawnPos":{"x":0,"y":1}}]}"#
    );
    let decoded = WorldDocument::from_json(&json).expect("document decodes");
    assert_eq!(decoded.rooms[0].spawn_pos, Some(SpawnPos { x: 0, y: 1 }));
}
