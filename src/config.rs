use std::{env, time::Duration};

use crate::error::{ArxivError, Result};

pub const DEFAULT_BASE_URL: &str = "http://export.arxiv.org/api/query";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub proxy: Option<String>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy: None,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        ClientConfig {
            base_url: base_url.to_string(),
            timeout,
            ..Self::default()
        }
    }

    pub fn with_proxy(mut self, proxy: &str) -> Self {
        self.proxy = Some(proxy.to_string());
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Reads `ARXIV_API_URL`, `ARXIV_TIMEOUT_SECS` and `ARXIV_PROXY`, after
    /// loading a `.env` file if one exists. Unset variables keep defaults.
    pub fn from_env() -> Result<Self> {
        // a missing .env file is not an error.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base_url) = lookup("ARXIV_API_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("ARXIV_TIMEOUT_SECS") {
            config.timeout = Duration::from_secs(parse_positive_u64("ARXIV_TIMEOUT_SECS", &raw)?);
        }
        config.proxy = lookup("ARXIV_PROXY").filter(|p| !p.trim().is_empty());
        Ok(config)
    }
}

fn parse_positive_u64(key: &str, raw: &str) -> Result<u64> {
    let var: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ArxivError::Config(format!("{} is not a valid integer: {:?}", key, raw)))?;
    if var == 0 {
        return Err(ArxivError::Config(format!("{} must be positive", key)));
    }
    Ok(var)
}
