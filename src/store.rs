//! Game storage.

extern crate alloc;

use alloc::string::{String, ToString};
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::error::StoreError;
use crate::game::Game;
use crate::sync::Mutex;

/// Keyed storage for dealt games.
///
/// The engine never calls a store itself; it produces the [`Game`] values a
/// store keeps.
pub trait GameStore {
    /// Loads the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no such game exists.
    fn get(&self, id: &str) -> Result<Game, StoreError>;

    /// Stores a game under its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be stored.
    fn put(&self, game: Game) -> Result<(), StoreError>;
}

/// An in-process [`GameStore`].
pub struct MemoryStore {
    /// Games by id.
    games: Mutex<HashMap<String, Game>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            games: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the number of stored games.
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStore for MemoryStore {
    fn get(&self, id: &str) -> Result<Game, StoreError> {
        self.games
            .lock()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Rejects a game whose id is already stored.
    fn put(&self, game: Game) -> Result<(), StoreError> {
        let mut games = self.games.lock();
        if games.contains_key(game.id()) {
            return Err(StoreError::Duplicate(game.id().to_string()));
        }
        log::debug!("storing game {}", game.id());
        games.insert(game.id().to_string(), game);
        drop(games);
        Ok(())
    }
}
