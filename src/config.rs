use std::env;
use std::time::Duration;

use crate::error::{Result, SchemeFinderError};
use crate::ranking::MAX_RESULTS;

/// Reader proxy that turns portal pages into plain text
pub const DEFAULT_PROXY_URL: &str = "https://r.jina.ai";

/// Portals queried for schemes, in order
pub const DEFAULT_SOURCES: &[&str] = &[
    "https://scholarships.gov.in",
    "https://www.myscheme.gov.in",
    "https://www.buddy4study.com/scholarships",
];

/// Scheme finder configuration
#[derive(Debug, Clone, PartialEq)]
pub struct FinderConfig {
    pub proxy_url: String,
    pub sources: Vec<String>,
    /// Per-request timeout for the reader proxy
    pub request_timeout: Duration,
    pub max_results: usize,
    /// Skip remote sources and rank the bundled catalog
    pub offline: bool,
    /// Fixed jitter seed for reproducible rankings
    pub jitter_seed: Option<u64>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
            request_timeout: Duration::from_secs(10),
            max_results: MAX_RESULTS,
            offline: false,
            jitter_seed: None,
        }
    }
}

impl FinderConfig {
    /// Load from the process environment (after reading `.env` if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(proxy_url) = lookup("SCHEME_FINDER_PROXY_URL") {
            config.proxy_url = proxy_url.trim().to_string();
        }

        if let Some(sources) = lookup("SCHEME_FINDER_SOURCES") {
            config.sources = sources
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if let Some(secs) = lookup("SCHEME_FINDER_TIMEOUT_SECS") {
            let secs = parse_number::<u64>("SCHEME_FINDER_TIMEOUT_SECS", &secs)?;
            config.request_timeout = Duration::from_secs(secs);
        }

        if let Some(max) = lookup("SCHEME_FINDER_MAX_RESULTS") {
            let max: usize = parse_number("SCHEME_FINDER_MAX_RESULTS", &max)?;
            if max > MAX_RESULTS {
                return Err(SchemeFinderError::Config(format!(
                    "SCHEME_FINDER_MAX_RESULTS must be at most {}, got {}",
                    MAX_RESULTS, max
                )));
            }
            config.max_results = max;
        }

        if let Some(offline) = lookup("SCHEME_FINDER_OFFLINE") {
            config.offline = parse_flag("SCHEME_FINDER_OFFLINE", &offline)?;
        }

        if let Some(seed) = lookup("SCHEME_FINDER_SEED") {
            config.jitter_seed = Some(parse_number("SCHEME_FINDER_SEED", &seed)?);
        }

        Ok(config)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse::<T>().map_err(|_| {
        SchemeFinderError::Config(format!(
            "{} must be a non-negative integer, got '{}'",
            key, value
        ))
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(SchemeFinderError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, value
        ))),
    }
}
