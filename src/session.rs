// src/session.rs

use crate::catalog::ListingCatalog;
use crate::domain::filter::filter;
use crate::domain::{
    DropCollector, FavoritesStore, FilterCriteria, Listing, TransferOutcome, TransferPayload,
};
use std::sync::Arc;

/// State behind the listing-browser screen.
///
/// Edits go to the draft criteria; nothing is recomputed until `search` runs. The
/// result set starts as the whole catalog.
#[derive(Debug)]
pub struct SearchSession {
    catalog: Arc<ListingCatalog>,
    draft: FilterCriteria,
    applied: Option<FilterCriteria>,
    results: Vec<Arc<Listing>>,
    favorites: FavoritesStore,
    collector: DropCollector,
}

impl SearchSession {
    pub fn new(catalog: Arc<ListingCatalog>) -> Self {
        Self {
            draft: FilterCriteria::defaults_for(&catalog),
            applied: None,
            results: catalog.listings().to_vec(),
            favorites: FavoritesStore::new(),
            collector: DropCollector::default(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &ListingCatalog {
        &self.catalog
    }

    pub fn draft(&self) -> &FilterCriteria {
        &self.draft
    }

    /// Field-by-field edits from the search form.
    pub fn draft_mut(&mut self) -> &mut FilterCriteria {
        &mut self.draft
    }

    /// Replace the whole draft, as when a submitted form carries every field.
    pub fn set_draft(&mut self, criteria: FilterCriteria) {
        self.draft = criteria;
    }

    /// Criteria used for the current results, `None` before the first search.
    pub fn applied(&self) -> Option<&FilterCriteria> {
        self.applied.as_ref()
    }

    pub fn has_searched(&self) -> bool {
        self.applied.is_some()
    }

    pub fn results(&self) -> &[Arc<Listing>] {
        &self.results
    }

    pub fn search(&mut self) -> &[Arc<Listing>] {
        let criteria = self.draft.clone();
        self.results = filter(self.catalog.listings(), &criteria);

        tracing::debug!(
            matched = self.results.len(),
            total = self.catalog.len(),
            "search applied"
        );

        self.applied = Some(criteria);
        &self.results
    }

    pub fn clear(&mut self) {
        self.draft = FilterCriteria::defaults_for(&self.catalog);
        self.applied = None;
        self.results = self.catalog.listings().to_vec();
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    pub fn collector(&self) -> &DropCollector {
        &self.collector
    }

    pub fn collector_mut(&mut self) -> &mut DropCollector {
        &mut self.collector
    }

    /// A drop landed on the favorites collector.
    pub fn transfer(&mut self, payload: TransferPayload) -> TransferOutcome {
        let listing_id = payload.listing_id.clone();
        let outcome = self
            .collector
            .complete(payload, &self.catalog, &mut self.favorites);

        tracing::info!(id = %listing_id, ?outcome, "favorites transfer");
        outcome
    }
}
