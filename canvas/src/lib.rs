#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative room state for the map maker.
//!
//! A [`RoomCanvas`] is the paint buffer of a single room and a
//! [`RoomCollection`] holds the named rooms that have been committed.

mod rooms;

pub use rooms::RoomCollection;

use map_maker_core::{
    Axis, CanvasError, CellCoord, CellState, DEFAULT_ROOM_HEIGHT, DEFAULT_ROOM_WIDTH,
};

/// Dense paint buffer describing a single rectangular room.
///
/// Cells are stored row-major. Every coordinate inside
/// `[0, width) x [0, height)` holds exactly one [`CellState`]; coordinates
/// outside that range are inaccessible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomCanvas {
    width: u32,
    height: u32,
    cells: Vec<CellState>,
}

impl RoomCanvas {
    /// Creates a canvas of the provided dimensions with every cell empty.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cells: vec![CellState::Empty; cell_capacity(width, height)],
        }
    }

    /// Number of columns spanned by the canvas.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows spanned by the canvas.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Provides the `(width, height)` of the canvas.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the state of the provided cell, or `None` when out of range.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<CellState> {
        self.index(cell)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Overwrites the state of a single cell.
    ///
    /// The previous state is discarded whatever it was, so a spawn cell
    /// painted over with a wall stops being a spawn.
    pub fn paint(&mut self, cell: CellCoord, state: CellState) -> Result<(), CanvasError> {
        let out_of_bounds = CanvasError::OutOfBounds {
            column: cell.column(),
            row: cell.row(),
            width: self.width,
            height: self.height,
        };
        let index = self.index(cell);
        let slot = index.and_then(|index| self.cells.get_mut(index));
        *slot.ok_or(out_of_bounds)? = state;
        Ok(())
    }

    /// Appends one empty column on the right edge.
    ///
    /// Fails when the width is already `u32::MAX`.
    pub fn grow_width(&mut self) -> Result<(), CanvasError> {
        let columns = self
            .width
            .checked_add(1)
            .ok_or(CanvasError::InvalidResize { axis: Axis::Width })?;
        self.resize_columns(columns);
        Ok(())
    }

    /// Appends one empty row on the bottom edge.
    ///
    /// Fails when the height is already `u32::MAX`.
    pub fn grow_height(&mut self) -> Result<(), CanvasError> {
        self.height = self
            .height
            .checked_add(1)
            .ok_or(CanvasError::InvalidResize { axis: Axis::Height })?;
        self.cells
            .resize(cell_capacity(self.width, self.height), CellState::Empty);
        Ok(())
    }

    /// Discards the rightmost column.
    pub fn shrink_width(&mut self) -> Result<(), CanvasError> {
        if self.width == 0 {
            return Err(CanvasError::InvalidResize { axis: Axis::Width });
        }
        self.resize_columns(self.width - 1);
        Ok(())
    }

    /// Discards the bottom row.
    pub fn shrink_height(&mut self) -> Result<(), CanvasError> {
        if self.height == 0 {
            return Err(CanvasError::InvalidResize { axis: Axis::Height });
        }
        self.height -= 1;
        self.cells.truncate(cell_capacity(self.width, self.height));
        Ok(())
    }

    /// Deep copy used when committing the canvas as a room.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Iterates over every cell in row-major order (rows outer, columns inner).
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, CellState)> + '_ {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(column, state)| {
                (CellCoord::new(column as u32, row as u32), *state)
            })
        })
    }

    /// Iterates over the canvas one row at a time, top to bottom.
    ///
    /// A canvas with zero width still yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        let width = self.width as usize;
        (0..self.height as usize).map(move |row| {
            row.checked_mul(width)
                .and_then(|start| Some(start..start.checked_add(width)?))
                .and_then(|span| self.cells.get(span))
                .unwrap_or(&[])
        })
    }

    /// Iterates over every spawn cell in row-major order.
    pub fn spawn_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.iter()
            .filter(|(_, state)| *state == CellState::Spawn)
            .map(|(cell, _)| cell)
    }

    fn resize_columns(&mut self, columns: u32) {
        let keep = self.width.min(columns) as usize;
        let mut cells = Vec::with_capacity(cell_capacity(columns, self.height));
        for row in self.rows() {
            cells.extend(row.iter().take(keep));
            cells.resize(cells.len() + (columns as usize - keep), CellState::Empty);
        }
        self.cells = cells;
        self.width = columns;
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.width && cell.row() < self.height {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let width = usize::try_from(self.width).ok()?;
            row.checked_mul(width)?.checked_add(column)
        } else {
            None
        }
    }
}

impl Default for RoomCanvas {
    fn default() -> Self {
        Self::new(DEFAULT_ROOM_WIDTH, DEFAULT_ROOM_HEIGHT)
    }
}

fn cell_capacity(width: u32, height: u32) -> usize {
    let capacity = u64::from(width) * u64::from(height);
    usize::try_from(capacity).unwrap_or(0)
}
