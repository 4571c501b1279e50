use crate::catalog::CatalogClient;
use crate::config::Config;

/// App-wide dependencies shared by every screen
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub catalog: CatalogClient,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let catalog = CatalogClient::new(config.api_base_url.clone());
        Self { config, catalog }
    }
}
