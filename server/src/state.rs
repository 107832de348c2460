use std::sync::Arc;

use crate::{
    catalog::{Catalog, StaticCatalog},
    config::Config,
    error::AppError,
};

pub struct AppState {
    pub config: Config,
    pub catalog: Arc<dyn Catalog>,
}

impl AppState {
    pub fn new() -> Result<Arc<Self>, AppError> {
        let config = Config::load();

        let catalog: Arc<dyn Catalog> = match &config.options_path {
            Some(path) => Arc::new(StaticCatalog::from_json_file(path)?),
            None => Arc::new(StaticCatalog::builtin()),
        };

        Ok(Arc::new(Self { config, catalog }))
    }

    /// State around an injected catalog, used by tests and embedders.
    pub fn with_catalog(catalog: Arc<dyn Catalog>) -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            catalog,
        })
    }
}
