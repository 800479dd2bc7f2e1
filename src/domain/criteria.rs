// src/domain/criteria.rs

use crate::catalog::ListingCatalog;
use crate::domain::listing::ListingType;
use chrono::NaiveDate;

pub const DEFAULT_MIN_PRICE: u64 = 0;
/// Upper end of the price slider when there is no catalog to size it from (LKR).
pub const DEFAULT_MAX_PRICE: u64 = 500_000_000;
pub const DEFAULT_MIN_BEDROOMS: u32 = 1;
pub const DEFAULT_MAX_BEDROOMS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    Any,
    Only(ListingType),
}

impl TypeFilter {
    /// Form value: "Any" or one of the listing type tags, case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        if value == "Any" {
            return Some(TypeFilter::Any);
        }
        ListingType::from_tag(value).map(TypeFilter::Only)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeFilter::Any => "Any",
            TypeFilter::Only(t) => t.as_str(),
        }
    }
}

/// One complete set of search constraints. Ranges are inclusive at both ends and are
/// not checked for `min <= max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub listing_type: TypeFilter,
    pub min_price: u64,
    pub max_price: u64,
    pub min_bedrooms: u32,
    pub max_bedrooms: u32,
    /// Case-insensitive substring of the listing location. Empty means unconstrained.
    pub location: String,
    pub added_from: Option<NaiveDate>,
    /// Only consulted together with `added_from`.
    pub added_to: Option<NaiveDate>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            listing_type: TypeFilter::Any,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            min_bedrooms: DEFAULT_MIN_BEDROOMS,
            max_bedrooms: DEFAULT_MAX_BEDROOMS,
            location: String::new(),
            added_from: None,
            added_to: None,
        }
    }
}

impl FilterCriteria {
    /// The reset state of the search form for a given catalog: the price range spans
    /// the whole catalog and the bedroom range is widened past 1..=10 if any listing
    /// falls outside it, so the defaults always match every listing.
    pub fn defaults_for(catalog: &ListingCatalog) -> Self {
        let mut criteria = Self::default();

        if let Some((min, max)) = catalog.price_bounds() {
            criteria.min_price = min;
            criteria.max_price = max;
        }

        if let Some((min, max)) = catalog.bedroom_bounds() {
            criteria.min_bedrooms = criteria.min_bedrooms.min(min);
            criteria.max_bedrooms = criteria.max_bedrooms.max(max);
        }

        criteria
    }
}
