// src/domain/listing.rs

use crate::catalog::models::{RawAddedDate, RawListing};
use chrono::NaiveDate;
use std::fmt;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingType {
    House,
    Flat,
}

impl ListingType {
    pub const ALL: [ListingType; 2] = [ListingType::House, ListingType::Flat];

    /// Tag as it appears in the catalog file and in the search form.
    pub fn as_str(self) -> &'static str {
        match self {
            ListingType::House => "House",
            ListingType::Flat => "Flat",
        }
    }

    /// Exact, case-sensitive tag lookup.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }

    pub fn label(self) -> &'static str {
        match self {
            ListingType::House => "House",
            ListingType::Flat => "Flat / Apartment",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry, validated against the fixed schema at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: String,
    pub listing_type: ListingType,
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub tenure: String,
    pub description: String,
    pub picture: String,
    pub added: NaiveDate,
}

/// Position of an English month name in the calendar, 0 for January.
pub fn month_ordinal(name: &str) -> Option<u32> {
    MONTHS.iter().position(|m| *m == name).map(|i| i as u32)
}

/// Converts the catalog's `{ year, month, day }` shape into a comparable date.
pub fn normalize_added(added: &RawAddedDate) -> Result<NaiveDate, String> {
    let month = month_ordinal(&added.month)
        .ok_or_else(|| format!("Unknown month name '{}'", added.month))?;

    NaiveDate::from_ymd_opt(added.year, month + 1, added.day).ok_or_else(|| {
        format!(
            "Impossible date {} {} {}",
            added.day, added.month, added.year
        )
    })
}

impl Listing {
    /// Validates a raw catalog record into a `Listing`.
    /// Any missing, empty or out-of-range field rejects the whole record.
    pub fn from_raw(raw: &RawListing) -> Result<Self, String> {
        let non_empty = |value: &Option<String>, field: &str| {
            value
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .ok_or_else(|| format!("Missing or empty {field}"))
        };

        let id = non_empty(&raw.id, "id")?;

        let type_tag = non_empty(&raw.listing_type, "type")?;
        let listing_type = ListingType::from_tag(type_tag.trim())
            .ok_or_else(|| format!("Unknown listing type '{type_tag}'"))?;

        let price = raw.price.ok_or("Missing price")?;
        let price = u64::try_from(price).map_err(|_| format!("Negative price {price}"))?;

        let bedrooms = raw.bedrooms.ok_or("Missing bedrooms")?;
        let bedrooms =
            u32::try_from(bedrooms).map_err(|_| format!("Invalid bedroom count {bedrooms}"))?;

        let added = raw.added.as_ref().ok_or("Missing added date")?;
        let added = normalize_added(added)?;

        Ok(Listing {
            id,
            listing_type,
            price,
            location: non_empty(&raw.location, "location")?,
            bedrooms,
            tenure: raw.tenure.clone().unwrap_or_default(),
            description: raw.description.clone().unwrap_or_default(),
            picture: non_empty(&raw.picture, "picture")?,
            added,
        })
    }
}
