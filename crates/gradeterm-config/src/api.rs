//! Backend API endpoint configuration.
//!
//! # Configuration
//!
//! - `GRADETERM_API_URL`: Base URL of the backend API, including the
//!   `/api` prefix (default: `http://localhost:8000/api`)

/// Where to reach the backend API.
///
/// Deliberately minimal: the client configures no timeouts, retries, or
/// TLS specifics beyond what the URL scheme implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the backend API, including the `/api` prefix.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
        }
    }
}

impl ApiConfig {
    /// Creates a new `ApiConfig` from environment variables.
    ///
    /// Falls back to the default base URL if `GRADETERM_API_URL` is not
    /// set or is blank.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var("GRADETERM_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| Self::default().base_url);
        Self { base_url }
    }

    /// Override the base URL, e.g. from a command-line flag.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_with_base_url() {
        let config = ApiConfig::default().with_base_url("http://school.example.com/api");
        assert_eq!(config.base_url, "http://school.example.com/api");
    }

    #[test]
    fn test_config_clone_equality() {
        let config = ApiConfig::default();
        assert_eq!(config, config.clone());
    }
}
