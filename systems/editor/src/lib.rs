#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Editing session that ties the active canvas, the paint tool and the room
//! registry together.
//!
//! Adapters translate pointer input into grid coordinates and call
//! [`EditorSession::stroke`] or [`EditorSession::place_spawn`]. Rooms are
//! committed under a name with [`EditorSession::commit`] and brought back with
//! [`EditorSession::reopen`].
//!
//! Reopening does not copy the stored room. The active canvas *is* the
//! committed room until the next commit, so edits made after reopening show up
//! in exports even if the room is never committed again.

use map_maker_canvas::{RoomCanvas, RoomCollection};
use map_maker_core::{
    CanvasError, CellCoord, CellState, DiagnosticSink, PaintTool, RegistryError,
    DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH,
};
use map_maker_system_export::{export_world, WorldDocument};

/// Configuration applied to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    room_width: u32,
    room_height: u32,
}

impl EditorConfig {
    /// Creates a configuration with explicit draft dimensions.
    #[must_use]
    pub const fn new(room_width: u32, room_height: u32) -> Self {
        Self {
            room_width,
            room_height,
        }
    }

    /// Width given to every new draft canvas.
    #[must_use]
    pub const fn room_width(&self) -> u32 {
        self.room_width
    }

    /// Height given to every new draft canvas.
    #[must_use]
    pub const fn room_height(&self) -> u32 {
        self.room_height
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT)
    }
}

#[derive(Clone, Debug)]
enum ActiveCanvas {
    Draft(RoomCanvas),
    Reopened(String),
}

/// Mutable editing state for a single user.
#[derive(Clone, Debug)]
pub struct EditorSession {
    config: EditorConfig,
    tool: PaintTool,
    active: ActiveCanvas,
    rooms: RoomCollection,
}

impl EditorSession {
    /// Creates a session with an empty draft and no committed rooms.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            tool: PaintTool::default(),
            active: ActiveCanvas::Draft(fresh_draft(config)),
            rooms: RoomCollection::new(),
        }
    }

    /// Configuration the session was created with.
    #[must_use]
    pub const fn config(&self) -> EditorConfig {
        self.config
    }

    /// Paint tool applied by [`EditorSession::stroke`].
    #[must_use]
    pub const fn tool(&self) -> PaintTool {
        self.tool
    }

    /// Switches the paint tool. The selection persists until changed.
    pub fn select_tool(&mut self, tool: PaintTool) {
        self.tool = tool;
        log::debug!("{tool:?} tool selected");
    }

    /// Name of the reopened room being edited, or `None` while editing a draft.
    #[must_use]
    pub fn active_room(&self) -> Option<&str> {
        match &self.active {
            ActiveCanvas::Draft(_) => None,
            ActiveCanvas::Reopened(name) => Some(name.as_str()),
        }
    }

    /// Canvas currently being edited.
    #[must_use]
    pub fn canvas(&self) -> &RoomCanvas {
        match &self.active {
            ActiveCanvas::Draft(canvas) => canvas,
            ActiveCanvas::Reopened(name) => self
                .rooms
                .get(name)
                .expect("reopened rooms stay registered"),
        }
    }

    /// Mutable access to the canvas currently being edited.
    pub fn canvas_mut(&mut self) -> &mut RoomCanvas {
        match &mut self.active {
            ActiveCanvas::Draft(canvas) => canvas,
            ActiveCanvas::Reopened(name) => self
                .rooms
                .get_mut(name)
                .expect("reopened rooms stay registered"),
        }
    }

    /// Paints the cell with the state of the selected tool.
    pub fn stroke(&mut self, cell: CellCoord) -> Result<(), CanvasError> {
        let state = self.tool.cell_state();
        self.canvas_mut().paint(cell, state)
    }

    /// Marks the cell as the spawn, whatever tool is selected.
    pub fn place_spawn(&mut self, cell: CellCoord) -> Result<(), CanvasError> {
        self.canvas_mut().paint(cell, CellState::Spawn)
    }

    /// Applies a paint event that already names the requested state.
    pub fn paint(&mut self, cell: CellCoord, state: CellState) -> Result<(), CanvasError> {
        self.canvas_mut().paint(cell, state)
    }

    /// Appends an empty column to the active canvas.
    pub fn grow_width(&mut self) -> Result<(), CanvasError> {
        self.canvas_mut().grow_width()
    }

    /// Appends an empty row to the active canvas.
    pub fn grow_height(&mut self) -> Result<(), CanvasError> {
        self.canvas_mut().grow_height()
    }

    /// Removes the last column of the active canvas.
    pub fn shrink_width(&mut self) -> Result<(), CanvasError> {
        self.canvas_mut().shrink_width()
    }

    /// Removes the last row of the active canvas.
    pub fn shrink_height(&mut self) -> Result<(), CanvasError> {
        self.canvas_mut().shrink_height()
    }

    /// Stores a snapshot of the active canvas under `name` and starts a new draft.
    ///
    /// A rejected name leaves both the registry and the active canvas untouched.
    pub fn commit(&mut self, name: &str) -> Result<(), RegistryError> {
        let snapshot = self.canvas().snapshot();
        self.rooms.commit(name, snapshot)?;
        self.active = ActiveCanvas::Draft(fresh_draft(self.config));
        Ok(())
    }

    /// Resumes editing a committed room.
    ///
    /// The returned canvas aliases the stored room; any unsaved draft is
    /// dropped.
    pub fn reopen(&mut self, name: &str) -> Result<&mut RoomCanvas, RegistryError> {
        if !self.rooms.contains(name) {
            return Err(RegistryError::UnknownRoom(name.to_owned()));
        }
        self.active = ActiveCanvas::Reopened(name.to_owned());
        log::debug!("reopened room '{name}'");
        Ok(self.canvas_mut())
    }

    /// Rooms committed so far.
    #[must_use]
    pub fn rooms(&self) -> &RoomCollection {
        &self.rooms
    }

    /// Exports every committed room, reporting diagnostics to `sink`.
    pub fn export<S>(&self, sink: &mut S) -> WorldDocument
    where
        S: DiagnosticSink + ?Sized,
    {
        export_world(&self.rooms, sink)
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

fn fresh_draft(config: EditorConfig) -> RoomCanvas {
    RoomCanvas::new(config.room_width(), config.room_height())
}
