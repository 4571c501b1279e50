use tracing::info;

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Application configuration
/// In debug builds: loads from .env file first, then the environment
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the catalog API
    pub api_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        let api_base_url = std::env::var("BAZAAR_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        info!("Config: Catalog API base URL: {}", api_base_url);

        Self { api_base_url }
    }
}
