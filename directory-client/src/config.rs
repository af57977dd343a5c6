/// Client configuration
///
/// # Environment Variables
///
/// - `DIRECTORY_API_URL`: Base URL of the API (default: http://localhost:5000)
/// - `SEARCH_DEBOUNCE_MS`: Quiet period before a search is sent (default: 500)
/// - `REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 30)

use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without trailing slash
    pub api_url: String,

    /// Quiet period after the last search keystroke
    pub search_debounce: Duration,

    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            search_debounce: Duration::from_millis(500),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let api_url = env::var("DIRECTORY_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_url);

        let search_debounce = match env::var("SEARCH_DEBOUNCE_MS") {
            Ok(ms) => Duration::from_millis(ms.parse::<u64>()?),
            Err(_) => defaults.search_debounce,
        };

        let request_timeout = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(secs) => Duration::from_secs(secs.parse::<u64>()?),
            Err(_) => defaults.request_timeout,
        };

        Ok(Self {
            api_url,
            search_debounce,
            request_timeout,
        })
    }
}
