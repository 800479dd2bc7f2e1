// src/domain/filter.rs

use crate::domain::criteria::{FilterCriteria, TypeFilter};
use crate::domain::listing::Listing;
use chrono::NaiveDate;
use std::sync::Arc;

/// Returns the listings that satisfy every constraint in `criteria`, in catalog order.
pub fn filter(listings: &[Arc<Listing>], criteria: &FilterCriteria) -> Vec<Arc<Listing>> {
    // Folded once instead of per listing.
    let needle = criteria.location.to_lowercase();

    listings
        .iter()
        .filter(|listing| matches(listing, criteria, &needle))
        .cloned()
        .collect()
}

/// `needle` is the lowercased location constraint.
fn matches(listing: &Listing, criteria: &FilterCriteria, needle: &str) -> bool {
    let type_match = match criteria.listing_type {
        TypeFilter::Any => true,
        TypeFilter::Only(t) => listing.listing_type == t,
    };

    let price_match = listing.price >= criteria.min_price && listing.price <= criteria.max_price;

    let bedroom_match =
        listing.bedrooms >= criteria.min_bedrooms && listing.bedrooms <= criteria.max_bedrooms;

    let location_match = needle.is_empty() || listing.location.to_lowercase().contains(needle);

    type_match
        && price_match
        && bedroom_match
        && location_match
        && date_matches(listing.added, criteria.added_from, criteria.added_to)
}

/// Both bounds: inclusive range. `from` alone: on or after. A lone `to` does not
/// constrain anything.
fn date_matches(added: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    match (from, to) {
        (Some(from), Some(to)) => added >= from && added <= to,
        (Some(from), None) => added >= from,
        (None, _) => true,
    }
}
