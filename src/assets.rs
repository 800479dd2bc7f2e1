// src/assets.rs
//
// Where listing images live relative to the asset base, and the map embed link.

use url::form_urlencoded;

const MAP_EMBED_BASE: &str = "https://maps.google.com/maps";

/// Numbered gallery variant, `n` starting at 1.
pub fn variant_path(listing_id: &str, n: usize) -> String {
    format!("images/{listing_id}/pic{n}.jpg")
}

pub fn floor_plan_path(listing_id: &str) -> String {
    format!("images/{listing_id}/floorplan.jpg")
}

/// Join a relative asset path onto the configured base URL.
pub fn asset_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}

/// Embeddable map for a free-text location. No geocoding happens here.
pub fn map_embed_url(location: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", location)
        .append_pair("output", "embed")
        .finish();
    format!("{MAP_EMBED_BASE}?{query}")
}
