use std::sync::Arc;

use crate::catalog::explorer::CareerCatalog;
use crate::config::Config;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable profile store. Default: InMemoryProfileStore, dropped with the process.
    pub profiles: Arc<dyn ProfileStore>,
    pub catalog: Arc<CareerCatalog>,
}
