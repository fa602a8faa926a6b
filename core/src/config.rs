//! Client configuration.

use std::env;

use crate::error::IbgeError;

/// Root of the IBGE localidades API.
pub const DEFAULT_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "IBGE_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL under which `/estados` and `/distritos` live.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read the configuration from the environment, falling back to the
    /// public API when `IBGE_BASE_URL` is unset or blank.
    pub fn from_env() -> Self {
        Self::from_base_url_var(env::var(BASE_URL_ENV).ok().as_deref())
    }

    fn from_base_url_var(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    /// Reject base URLs without an `http`/`https` scheme or with nothing after it.
    pub fn validate(&self) -> Result<(), IbgeError> {
        let rest = self
            .base_url
            .strip_prefix("https://")
            .or_else(|| self.base_url.strip_prefix("http://"))
            .ok_or_else(|| {
                IbgeError::Config(format!(
                    "base URL must start with http:// or https://, got {:?}",
                    self.base_url
                ))
            })?;
        if rest.trim_matches('/').is_empty() {
            return Err(IbgeError::Config(format!(
                "base URL has no host: {:?}",
                self.base_url
            )));
        }
        Ok(())
    }
}
