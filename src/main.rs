use crate::catalog::load_catalog;
use crate::config::Config;
use crate::router::handle;
use crate::state::AppState;
use anyhow::{Context, Result};
use astra::Server;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod assets;
mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod session;
mod state;
mod templates;


fn main() -> Result<()> {
    // 1️⃣ Logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,estate_finder=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2️⃣ Configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(?config, "configuration loaded");

    // 3️⃣ Catalog: a corrupt file aborts startup, bad records are only skipped
    let (catalog, report) = load_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;
    if !report.quarantined.is_empty() {
        tracing::warn!(
            count = report.quarantined.len(),
            "some catalog records were skipped"
        );
    }

    // 4️⃣ Start the server
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let state = Arc::new(AppState::new(config, catalog));

    tracing::info!("Starting server at http://{addr}");

    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => {
                tracing::debug!(error = %err, "request failed");
                templates::html_error_response(err)
            }
        })
        .context("Server ended with error")?;

    tracing::info!("Server shut down cleanly.");
    Ok(())
}
