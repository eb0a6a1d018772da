use crate::domain::error::ModelError;
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const BACKEND_URL_VAR: &str = "PGE_BACKEND_URL";
pub const ANALYTICS_URL_VAR: &str = "PGE_ANALYTICS_URL";
pub const TIMEOUT_VAR: &str = "PGE_TIMEOUT_SECS";

// Host loopback as seen from the Android emulator.
pub const DEFAULT_BACKEND_URL: &str = "http://10.0.2.2:8000/api/";
pub const DEFAULT_ANALYTICS_URL: &str = "http://10.0.2.2:8001/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the two backends live and how long a call may take.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// REST backend, always ending in `/`.
    pub backend_url: String,
    /// Analytics service, always ending in `/`.
    pub analytics_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            analytics_url: DEFAULT_ANALYTICS_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Reads the process environment after loading `.env`, if there is one.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenv::dotenv() {
            debug!(error = %e, "No .env file loaded");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[instrument(skip(lookup))]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = url_or_default(&lookup, BACKEND_URL_VAR, DEFAULT_BACKEND_URL)?;
        let analytics_url = url_or_default(&lookup, ANALYTICS_URL_VAR, DEFAULT_ANALYTICS_URL)?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ModelError::Config(format!("not a number of seconds: {}", e)))
                    .with_context(|| format!("Failed to read {}={:?}", TIMEOUT_VAR, raw))?;
                Duration::from_secs(secs)
            }
            None => {
                debug!(var = TIMEOUT_VAR, default = DEFAULT_TIMEOUT_SECS, "Using default timeout");
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
        };

        let config = Self {
            backend_url,
            analytics_url,
            timeout,
        };

        info!(
            backend_url = %config.backend_url,
            analytics_url = %config.analytics_url,
            timeout_secs = config.timeout.as_secs(),
            "API configuration loaded"
        );

        Ok(config)
    }
}

fn url_or_default<F>(lookup: &F, var: &str, default: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(var) else {
        debug!(var = var, default = default, "Using default URL");
        return Ok(default.to_string());
    };

    let url = raw.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ModelError::Config(format!("{} must be an http(s) URL, got {:?}", var, url)).into());
    }

    if url.ends_with('/') {
        Ok(url.to_string())
    } else {
        Ok(format!("{}/", url))
    }
}
