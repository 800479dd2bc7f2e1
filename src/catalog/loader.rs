use super::catalog_error::CatalogError;
use super::models::{RawCatalog, RawListing};
use super::ListingCatalog;
use crate::domain::listing::Listing;
use std::fs;
use std::path::Path;

/// A record that failed validation and was left out of the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Quarantined {
    /// Position of the record in the source file.
    pub index: usize,
    pub id: Option<String>,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadReport {
    pub accepted: usize,
    pub quarantined: Vec<Quarantined>,
}

/// Read and validate the catalog file at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<(ListingCatalog, LoadReport), CatalogError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let (catalog, report) = parse_catalog(&json)?;

    tracing::info!(
        path = %path.display(),
        accepted = report.accepted,
        quarantined = report.quarantined.len(),
        "catalog loaded"
    );

    Ok((catalog, report))
}

/// Parse catalog JSON. Only a document that is not valid JSON (or lacks the
/// `properties` array) is an error; individual bad records are quarantined.
pub fn parse_catalog(json: &str) -> Result<(ListingCatalog, LoadReport), CatalogError> {
    let raw: RawCatalog = serde_json::from_str(json)?;

    let mut listings = Vec::with_capacity(raw.properties.len());
    let mut report = LoadReport::default();

    for (index, value) in raw.properties.into_iter().enumerate() {
        let id = value
            .get("id")
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let validated = serde_json::from_value::<RawListing>(value)
            .map_err(|e| format!("Malformed record: {e}"))
            .and_then(|r| Listing::from_raw(&r));

        match validated {
            Ok(listing) => listings.push(listing),
            Err(reason) => {
                tracing::warn!(index, id = ?id, %reason, "quarantined catalog record");
                report.quarantined.push(Quarantined { index, id, reason });
            }
        }
    }

    report.accepted = listings.len();
    Ok((ListingCatalog::new(listings), report))
}
