//! Client configuration for the authentication service endpoint. The base URL is
//! supplied by the caller (CLI flag or environment) rather than compiled in.
//! Configuration values are public; do not store secrets here.

use crate::api::AppError;
use std::time::Duration;
use url::Url;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/v1/auth";

/// Read-only settings shared by every auth call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Parses and validates the base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL is empty, unparsable, has no host, or
    /// uses a scheme other than http(s).
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        let value = normalize_value(api_base_url)
            .ok_or_else(|| AppError::Config("API base URL is empty".to_string()))?;

        let url = Url::parse(&value)
            .map_err(|err| AppError::Config(format!("Invalid API base URL {value}: {err}")))?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::Config(format!(
                    "Invalid API base URL {value}: unsupported scheme {scheme}"
                )))
            }
        }

        if url.host().is_none() {
            return Err(AppError::Config(format!(
                "Invalid API base URL {value}: no host specified"
            )));
        }

        Ok(Self {
            api_base_url: url,
            timeout: None,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without a trailing slash, ready for path joining.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_base_url.as_str().trim_end_matches('/')
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_value, ClientConfig, DEFAULT_API_BASE_URL};
    use crate::api::AppError;
    use std::time::Duration;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://notes.example/v1/auth "),
            Some("https://notes.example/v1/auth".to_string())
        );
    }

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::new(DEFAULT_API_BASE_URL).unwrap();
        assert_eq!(config.base_url(), DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn new_strips_trailing_slash_for_joining() {
        let config = ClientConfig::new("https://notes.example/v1/auth/").unwrap();
        assert_eq!(config.base_url(), "https://notes.example/v1/auth");
    }

    #[test]
    fn new_rejects_unsupported_scheme() {
        let err = ClientConfig::new("ftp://notes.example").unwrap_err();
        assert!(matches!(err, AppError::Config(ref m) if m.contains("unsupported scheme")));
    }

    #[test]
    fn new_rejects_empty_and_garbage() {
        assert!(ClientConfig::new("  ").is_err());
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn with_timeout_sets_timeout() {
        let config = ClientConfig::new(DEFAULT_API_BASE_URL)
            .unwrap()
            .with_timeout(Some(Duration::from_secs(5)));
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
