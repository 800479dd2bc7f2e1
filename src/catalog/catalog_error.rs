use thiserror::Error;

/// Failures that make the catalog unusable. These abort startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
