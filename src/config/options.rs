// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;
use crate::error::FetchError;

/// Connection settings for the match API. Built once by the entry point and
/// handed to the client constructor; nothing reads the environment after that.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiOptions {
    pub api_key: String,
    /// Host for summoner lookups (e.g. `na1.api.riotgames.com`)
    pub platform_host: String,
    /// Host for account and match lookups (e.g. `americas.api.riotgames.com`)
    pub regional_host: String,
    pub timeout: Duration,
    pub request_pause: Duration,
}

impl ApiOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            platform_host: PLATFORM_HOST.to_string(),
            regional_host: REGIONAL_HOST.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            request_pause: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }

    /// Single guard for everything the client needs before the first request.
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.api_key.trim().is_empty() {
            return Err(FetchError::Config(format!("API key is empty (set {API_KEY_ENV})")));
        }
        for host in [&self.platform_host, &self.regional_host] {
            if host.is_empty() || host.contains('/') || host.contains(char::is_whitespace) {
                return Err(FetchError::Config(format!("invalid host: {host:?}")));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn delim(&self) -> u8 {
        match self { TableFormat::Csv => b',', TableFormat::Tsv => b'\t' }
    }

    /// `.tsv` selects tabs; anything else is comma separated.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("tsv") => TableFormat::Tsv,
            _ => TableFormat::Csv,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrawlOptions {
    pub table: PathBuf,
    pub seed: String,
    /// Steps per batch
    pub steps: usize,
    /// 0 = keep going until a fatal error
    pub batches: usize,
    pub pause: Duration,
}

impl Default for CrawlOptions {
    fn default() -> Self {
        Self {
            table: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            seed: SEED_PLAYER.to_string(),
            steps: DEFAULT_STEPS,
            batches: 1,
            pause: Duration::from_secs(DEFAULT_PAUSE_SECS),
        }
    }
}
