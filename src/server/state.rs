use axum::extract::FromRef;

use crate::catalog::Catalog;
use crate::selector::Selector;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The catalog is immutable after construction, a plain Arc is enough.
pub type SharedCatalog = Arc<Catalog>;
pub type SharedSelector = Arc<Selector>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: SharedCatalog,
    pub selector: SharedSelector,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog: Catalog) -> ServerState {
        let catalog = Arc::new(catalog);
        let selector = Arc::new(Selector::new(catalog.clone()));
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
            selector,
        }
    }
}

impl FromRef<ServerState> for SharedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for SharedSelector {
    fn from_ref(input: &ServerState) -> Self {
        input.selector.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
