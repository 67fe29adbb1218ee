use std::sync::Arc;

use tokio::sync::RwLock;

use crate::catalog::CatalogStore;
use crate::services::contact::ContactRelay;

/// Shared application state
///
/// The catalog sits behind a write lock so every mutation runs to
/// completion before another request observes state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RwLock<CatalogStore>>,
    pub relay: Arc<dyn ContactRelay>,
}

impl AppState {
    /// Wraps the loaded catalog and relay client for handler access
    pub fn new(catalog: CatalogStore, relay: Arc<dyn ContactRelay>) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
            relay,
        }
    }
}
