pub mod catalog_error;
pub mod loader;
pub mod models;

pub use loader::load_catalog;

use crate::domain::listing::Listing;
use std::sync::Arc;

/// The full set of listings, fixed after load. Identifiers are trusted to be unique;
/// lookups return the first match.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Arc<Listing>>,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn listings(&self) -> &[Arc<Listing>] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Listing>> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Lowest and highest asking price, `None` for an empty catalog.
    pub fn price_bounds(&self) -> Option<(u64, u64)> {
        let min = self.listings.iter().map(|l| l.price).min()?;
        let max = self.listings.iter().map(|l| l.price).max()?;
        Some((min, max))
    }

    pub fn bedroom_bounds(&self) -> Option<(u32, u32)> {
        let min = self.listings.iter().map(|l| l.bedrooms).min()?;
        let max = self.listings.iter().map(|l| l.bedrooms).max()?;
        Some((min, max))
    }
}
