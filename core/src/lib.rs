#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the map maker.
//!
//! This crate defines the vocabulary that connects the room canvas, the
//! editing session, the world exporter and the adapters. Canvases store one
//! [`CellState`] per [`CellCoord`], the editing session translates the active
//! [`PaintTool`] into cell states, and the exporter reports anomalies as
//! [`DiagnosticEvent`] values through a [`DiagnosticSink`] instead of failing.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of columns a freshly created room canvas spans.
pub const DEFAULT_ROOM_WIDTH: u32 = 10;
/// Number of rows a freshly created room canvas spans.
pub const DEFAULT_ROOM_HEIGHT: u32 = 10;

/// State stored in a single canvas cell.
///
/// Walls and the spawn marker share this one channel, so painting a wall or a
/// walkable tile over the spawn cell removes the spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Walkable floor.
    #[default]
    Empty,
    /// Solid wall.
    Wall,
    /// Entity start point. Counts as occupied in exported layouts.
    Spawn,
}

impl CellState {
    /// Reports whether the cell is occupied in an exported layout.
    ///
    /// Every non-empty state is occupied, including the spawn marker.
    #[must_use]
    pub const fn is_occupied(self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Mutually exclusive paint tools available while editing a room.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintTool {
    /// Paints solid walls.
    #[default]
    Wall,
    /// Clears cells back to walkable floor.
    Walkable,
}

impl PaintTool {
    /// Cell state written by a stroke with this tool.
    #[must_use]
    pub const fn cell_state(self) -> CellState {
        match self {
            Self::Wall => CellState::Wall,
            Self::Walkable => CellState::Empty,
        }
    }
}

/// Canvas dimension affected by a resize operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Column count.
    Width,
    /// Row count.
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Location of a single canvas cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell (the `x` coordinate).
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell (the `y` coordinate).
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Spawn coordinate as it appears in the exported world document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpawnPos {
    /// Column of the spawn cell.
    pub x: u32,
    /// Row of the spawn cell.
    pub y: u32,
}

impl From<CellCoord> for SpawnPos {
    fn from(cell: CellCoord) -> Self {
        Self {
            x: cell.column(),
            y: cell.row(),
        }
    }
}

/// Kinds of advisory anomalies detected while exporting a room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The room contains no spawn cell.
    NoSpawn,
    /// The room contains more than one spawn cell.
    MultipleSpawns,
}

/// Advisory event raised for a single room during export.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticEvent {
    /// Anomaly that was detected.
    pub kind: DiagnosticKind,
    /// Name of the room the anomaly was found in.
    pub room: String,
}

impl DiagnosticEvent {
    /// Creates a diagnostic reporting a room without a spawn cell.
    #[must_use]
    pub fn no_spawn(room: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::NoSpawn,
            room: room.into(),
        }
    }

    /// Creates a diagnostic reporting a room with several spawn cells.
    #[must_use]
    pub fn multiple_spawns(room: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::MultipleSpawns,
            room: room.into(),
        }
    }
}

/// Receiver for advisory diagnostics produced by the exporter.
///
/// Sinks decide how events are surfaced; the core never formats them.
pub trait DiagnosticSink {
    /// Accepts a single diagnostic.
    fn report(&mut self, event: DiagnosticEvent);
}

impl DiagnosticSink for Vec<DiagnosticEvent> {
    fn report(&mut self, event: DiagnosticEvent) {
        self.push(event);
    }
}

/// Reasons a canvas mutation may be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// The requested cell lies outside the current canvas dimensions.
    #[error("cell ({column}, {row}) lies outside the {width}x{height} canvas")]
    OutOfBounds {
        /// Column of the rejected cell.
        column: u32,
        /// Row of the rejected cell.
        row: u32,
        /// Canvas width at the time of the request.
        width: u32,
        /// Canvas height at the time of the request.
        height: u32,
    },
    /// The requested resize would leave the `u32` range.
    #[error("cannot resize canvas {axis} past its limit")]
    InvalidResize {
        /// Dimension that was already zero (shrink) or `u32::MAX` (grow).
        axis: Axis,
    },
}

/// Reasons a room registry operation may be rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Rooms must be named before they can be committed.
    #[error("room name must not be empty")]
    EmptyRoomName,
    /// No room with the provided name has been committed.
    #[error("no room named '{0}' has been saved")]
    UnknownRoom(String),
}
