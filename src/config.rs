// src/config.rs

use anyhow::{Context, Result};
use std::{env, time::Duration};
use url::Url;

pub const ENDPOINT_VAR: &str = "CUSTINTEL_ENDPOINT";
pub const TIMEOUT_VAR: &str = "CUSTINTEL_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the loader fetches from and how long it waits.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// `None` means no remote source: every load is generated.
    pub endpoint: Option<Url>,
    pub timeout: Duration,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl LoaderConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint: Some(endpoint),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read `CUSTINTEL_ENDPOINT` and `CUSTINTEL_TIMEOUT_SECS`; unset or empty
    /// variables keep the defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENDPOINT_VAR).filter(|s| !s.trim().is_empty()) {
            let url = Url::parse(raw.trim())
                .with_context(|| format!("parsing {} `{}`", ENDPOINT_VAR, raw))?;
            cfg.endpoint = Some(url);
        }

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|s| !s.trim().is_empty()) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("parsing {} `{}`", TIMEOUT_VAR, raw))?;
            cfg.timeout = Duration::from_secs(secs);
        }

        Ok(cfg)
    }
}
