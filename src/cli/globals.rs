use crate::cli::commands::{ARG_API_BASE_URL, ARG_TIMEOUT};
use crate::config::{ClientConfig, DEFAULT_API_BASE_URL};
use anyhow::{Context, Result};
use std::time::Duration;

/// Options shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub api_base_url: String,
    pub timeout: Option<Duration>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_base_url: String) -> Self {
        Self {
            api_base_url,
            timeout: None,
        }
    }

    #[must_use]
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        let api_base_url = matches
            .get_one::<String>(ARG_API_BASE_URL)
            .cloned()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self {
            api_base_url,
            timeout: matches
                .get_one::<u64>(ARG_TIMEOUT)
                .copied()
                .map(Duration::from_secs),
        }
    }

    /// # Errors
    /// Returns an error if the base URL is not a valid http(s) URL.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let config = ClientConfig::new(&self.api_base_url)
            .context("invalid AUTHOR_NOTES_API_BASE_URL")?;
        Ok(config.with_timeout(self.timeout))
    }
}
