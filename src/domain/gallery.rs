// src/domain/gallery.rs

use crate::assets::variant_path;
use crate::domain::listing::Listing;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GalleryError {
    #[error("'{0}' is not an image of this listing")]
    NotACandidate(String),
}

/// Which image is the main one on a detail view, plus which candidates failed to load.
///
/// Any candidate can be selected from any other. A failed image stays failed for the
/// life of the selector; the renderer hides it from the thumbnail strip and shows a
/// fallback if it happens to be the selected one.
#[derive(Debug, Clone)]
pub struct GallerySelector {
    listing_id: String,
    candidates: Vec<String>,
    selected: usize,
    unavailable: HashSet<String>,
}

impl GallerySelector {
    /// Primary picture first, then `variants` numbered images.
    pub fn new(listing: &Listing, variants: usize) -> Self {
        let mut candidates = Vec::with_capacity(variants + 1);
        candidates.push(listing.picture.clone());
        candidates.extend((1..=variants).map(|n| variant_path(&listing.id, n)));

        Self {
            listing_id: listing.id.clone(),
            candidates,
            selected: 0,
            unavailable: HashSet::new(),
        }
    }

    pub fn listing_id(&self) -> &str {
        &self.listing_id
    }

    pub fn selected(&self) -> &str {
        &self.candidates[self.selected]
    }

    pub fn select(&mut self, path: &str) -> Result<(), GalleryError> {
        let index = self
            .candidates
            .iter()
            .position(|c| c == path)
            .ok_or_else(|| GalleryError::NotACandidate(path.to_string()))?;
        self.selected = index;
        Ok(())
    }

    /// Records a failed load. Returns `false` if the path was already marked or is
    /// not a candidate.
    pub fn mark_unavailable(&mut self, path: &str) -> bool {
        if !self.candidates.iter().any(|c| c == path) {
            return false;
        }
        self.unavailable.insert(path.to_string())
    }

    pub fn is_available(&self, path: &str) -> bool {
        !self.unavailable.contains(path)
    }

    pub fn selected_is_available(&self) -> bool {
        self.is_available(self.selected())
    }

    /// Candidates that should still be shown as thumbnails.
    pub fn visible_candidates(&self) -> impl Iterator<Item = &str> {
        self.candidates
            .iter()
            .map(String::as_str)
            .filter(move |c| self.is_available(c))
    }
}
