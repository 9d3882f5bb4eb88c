//! Deployment configuration for the HTTP client.

use std::time::Duration;

/// Where the Watchboard server lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Server origin without a trailing slash, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Per-request timeout. Applied on native targets only; the browser
    /// fetch backend has no socket timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ApiConfig {
    /// Build the configuration for this deployment.
    ///
    /// `WATCHBOARD_API_URL` is baked in at compile time when set, the same
    /// way the web bundle is pointed at its backend during `dx build`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = option_env!("WATCHBOARD_API_URL") {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ApiConfig::default().with_base_url("https://watch.example.org/");
        assert_eq!(config.base_url, "https://watch.example.org");
    }
}
