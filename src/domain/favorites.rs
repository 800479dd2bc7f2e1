// src/domain/favorites.rs

use crate::domain::listing::Listing;
use std::sync::Arc;

/// The user's shortlist. Insertion-ordered, and no identifier appears twice.
#[derive(Debug, Default, Clone)]
pub struct FavoritesStore {
    entries: Vec<Arc<Listing>>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listing` unless an entry with the same id is already saved.
    /// Returns whether the store changed.
    pub fn add(&mut self, listing: Arc<Listing>) -> bool {
        if self.contains(&listing.id) {
            return false;
        }
        self.entries.push(listing);
        true
    }

    /// Removes the entry with `id`. Absent ids are a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|fav| fav.id != id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|fav| fav.id == id)
    }

    pub fn listings(&self) -> &[Arc<Listing>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
