use std::time::Duration;

use thiserror::Error;

use crate::client::constant::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_DEBOUNCE_MS};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A build-time variable was set but could not be parsed.
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Client configuration, baked in at build time.
///
/// The panel is served as a static bundle, so there is no runtime environment to read;
/// `PANEL_API_URL`, `PANEL_PAGE_SIZE` and `PANEL_SEARCH_DEBOUNCE_MS` are captured by
/// `option_env!` when the bundle is compiled.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub page_size: u64,
    pub search_debounce: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("PANEL_API_URL"),
            option_env!("PANEL_PAGE_SIZE"),
            option_env!("PANEL_SEARCH_DEBOUNCE_MS"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        page_size: Option<&str>,
        search_debounce_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let page_size = match page_size {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    name: "PANEL_PAGE_SIZE",
                    value: raw.to_string(),
                })?,
            None => DEFAULT_PAGE_SIZE,
        };

        let debounce_ms = match search_debounce_ms {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PANEL_SEARCH_DEBOUNCE_MS",
                    value: raw.to_string(),
                })?,
            None => DEFAULT_SEARCH_DEBOUNCE_MS,
        };

        Ok(Self {
            api_url,
            page_size,
            search_debounce: Duration::from_millis(debounce_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }
}
