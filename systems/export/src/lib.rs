#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure export system that converts committed rooms into a world document.
//!
//! Each room is reduced to a boolean occupancy grid and a single spawn
//! coordinate. Spawn anomalies never abort the export; they are reported to a
//! [`DiagnosticSink`] and the document is always produced.

use map_maker_canvas::{RoomCanvas, RoomCollection};
use map_maker_core::{CellState, DiagnosticEvent, DiagnosticSink, SpawnPos};
use serde::{Deserialize, Serialize};

/// Occupancy grid and spawn information derived from a single canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomLayout {
    /// Occupancy indexed `[row][column]`; `true` for walls and spawn cells.
    pub layout: Vec<Vec<bool>>,
    /// Last spawn cell encountered in row-major order, if any.
    pub spawn_pos: Option<SpawnPos>,
    /// Number of spawn cells found on the canvas.
    pub spawn_count: usize,
}

/// Converts a canvas into its occupancy grid and spawn position.
///
/// Cells are scanned rows first, columns second. When several spawn cells
/// exist the last one scanned wins, which is the bottom-right-most marker.
#[must_use]
pub fn to_layout(canvas: &RoomCanvas) -> RoomLayout {
    let mut spawn_pos = None;
    let mut spawn_count = 0;

    let layout: Vec<Vec<bool>> = canvas
        .rows()
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(column, state)| {
                    if *state == CellState::Spawn {
                        spawn_count += 1;
                        spawn_pos = Some(SpawnPos {
                            x: column as u32,
                            y: row as u32,
                        });
                    }
                    state.is_occupied()
                })
                .collect::<Vec<bool>>()
        })
        .collect();

    RoomLayout {
        layout,
        spawn_pos,
        spawn_count,
    }
}

/// Derives the advisory diagnostic for a room layout, if one applies.
#[must_use]
pub fn diagnose(room: &str, layout: &RoomLayout) -> Option<DiagnosticEvent> {
    match layout.spawn_count {
        0 => Some(DiagnosticEvent::no_spawn(room)),
        1 => None,
        _ => Some(DiagnosticEvent::multiple_spawns(room)),
    }
}

/// Exports every committed room, in registration order.
///
/// Diagnostics are forwarded to `sink`; the export itself cannot fail.
pub fn export_world<S>(rooms: &RoomCollection, sink: &mut S) -> WorldDocument
where
    S: DiagnosticSink + ?Sized,
{
    let rooms: Vec<RoomExport> = rooms
        .iter()
        .map(|(name, canvas)| {
            let room = to_layout(canvas);
            if let Some(event) = diagnose(name, &room) {
                sink.report(event);
            }
            RoomExport {
                name: name.to_owned(),
                layout: room.layout,
                spawn_pos: room.spawn_pos,
            }
        })
        .collect();

    log::debug!("exported {} rooms", rooms.len());
    WorldDocument { rooms }
}

/// Serializable description of every exported room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldDocument {
    /// Rooms in the order they were registered.
    pub rooms: Vec<RoomExport>,
}

impl WorldDocument {
    /// Encodes the document as compact JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("world document serialization never fails")
    }

    /// Encodes the document as indented JSON.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).expect("world document serialization never fails")
    }

    /// Decodes a document previously produced by [`WorldDocument::to_json`].
    pub fn from_json(value: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(value)
    }
}

/// Exported form of a single room.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomExport {
    /// Name the room was committed under.
    pub name: String,
    /// Occupancy grid indexed `[y][x]`.
    pub layout: Vec<Vec<bool>>,
    /// Spawn coordinate, `null` in JSON when the room has none.
    #[serde(rename = "spawnPos")]
    pub spawn_pos: Option<SpawnPos>,
}
