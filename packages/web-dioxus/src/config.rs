//! Console configuration

use reviews_client::{ApiConfig, ReviewsClient, DEFAULT_API_KEY, DEFAULT_BASE_URL};

/// Where the console finds its backend.
///
/// Native builds read the environment at startup (a `.env` file works
/// too). Wasm has no runtime environment, so there the values are baked
/// in at compile time via `option_env!`. Both fall back to the local
/// dev backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub api_key: String,
}

impl ConsoleConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            api_url: std::env::var("REVIEWS_API_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            api_key: std::env::var("REVIEWS_API_KEY")
                .unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("REVIEWS_API_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            api_key: option_env!("REVIEWS_API_KEY")
                .unwrap_or(DEFAULT_API_KEY)
                .to_string(),
        }
    }

    /// Build the shared API client this config describes.
    pub fn client(&self) -> ReviewsClient {
        ReviewsClient::new(ApiConfig::new(self.api_url.clone(), self.api_key.clone()))
    }
}
