//! Registry of named rooms committed by the editor.

use map_maker_core::RegistryError;

use crate::RoomCanvas;

/// Named room canvases in the order they were first registered.
///
/// Names are unique. Committing under a name that already exists replaces the
/// stored canvas but keeps the room at its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomCollection {
    entries: Vec<(String, RoomCanvas)>,
}

impl RoomCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Stores the canvas under the provided name, replacing any previous room.
    ///
    /// Blank names are rejected and leave the collection untouched.
    pub fn commit(&mut self, name: &str, canvas: RoomCanvas) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::EmptyRoomName);
        }

        match self.position(name) {
            Some(index) => self.entries[index].1 = canvas,
            None => self.entries.push((name.to_owned(), canvas)),
        }
        log::debug!("committed room '{name}'");
        Ok(())
    }

    /// Returns the canvas stored under the provided name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RoomCanvas> {
        self.position(name).map(|index| &self.entries[index].1)
    }

    /// Returns the stored canvas for in-place editing.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut RoomCanvas> {
        self.position(name).map(|index| &mut self.entries[index].1)
    }

    /// Reports whether a room with the provided name has been committed.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Number of rooms stored in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Reports whether no rooms have been committed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the room names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(name, canvas)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoomCanvas)> + '_ {
        self.entries
            .iter()
            .map(|(name, canvas)| (name.as_str(), canvas))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(entry, _)| entry == name)
    }
}
