use crate::catalog::ListingCatalog;
use crate::config::Config;
use crate::domain::GallerySelector;
use crate::errors::ServerError;
use crate::session::SearchSession;
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything a request handler can reach. Built once in `main` and shared by `Arc`
/// with the server workers.
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<ListingCatalog>,
    session: Mutex<SearchSession>,
    /// Gallery of the detail view currently open, if any.
    gallery: Mutex<Option<GallerySelector>>,
}

impl AppState {
    pub fn new(config: Config, catalog: ListingCatalog) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            session: Mutex::new(SearchSession::new(catalog.clone())),
            gallery: Mutex::new(None),
            catalog,
            config,
        }
    }

    pub fn session(&self) -> Result<MutexGuard<'_, SearchSession>, ServerError> {
        self.session.lock().map_err(|_| ServerError::InternalError)
    }

    pub fn gallery(&self) -> Result<MutexGuard<'_, Option<GallerySelector>>, ServerError> {
        self.gallery.lock().map_err(|_| ServerError::InternalError)
    }
}
