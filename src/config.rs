use std::time::Duration;

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_VAR: &str = "POKEAPI_BASE_URL";
pub const TIMEOUT_VAR: &str = "POKEAPI_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("pokeapi-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Read overrides from `POKEAPI_BASE_URL` and `POKEAPI_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], with the variable source supplied by the caller.
    /// Empty, unparseable or zero values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(BASE_URL_VAR).filter(|s| !s.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        if let Some(secs) = lookup(TIMEOUT_VAR)
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0)
        {
            config.timeout = Duration::from_secs(secs);
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the pooled client shared by every fetch made with this config.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?;
        Ok(client)
    }
}
