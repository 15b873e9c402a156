use crate::config::FinderConfig;
use crate::core::{MatchResponse, PoolOrigin, Profile, Scheme};
use crate::error::Result;
use crate::providers::{ReaderProvider, SchemeProvider, StaticCatalog};
use crate::ranking::{RandomJitter, SchemeRanker};
use std::sync::Arc;
use std::time::Instant;

/// Candidate pool handed to the ranker, fully materialized
#[derive(Debug, Clone)]
pub struct SchemePool {
    pub schemes: Vec<Scheme>,
    pub origin: PoolOrigin,
}

/// Main scheme finder orchestrator
///
/// Owns the fetch-and-fallback policy; the ranker it drives is pure.
pub struct SchemeFinder {
    providers: Vec<Arc<dyn SchemeProvider>>,
    fallback: Arc<dyn SchemeProvider>,
    ranker: SchemeRanker,
    jitter_seed: Option<u64>,
}

impl SchemeFinder {
    /// Finder with no remote providers, falling back to the bundled catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            providers: Vec::new(),
            fallback: Arc::new(StaticCatalog::bundled()?),
            ranker: SchemeRanker::default(),
            jitter_seed: None,
        })
    }

    /// Finder wired from configuration: one reader per source unless offline
    pub fn from_config(config: &FinderConfig) -> Result<Self> {
        let mut finder = Self::new()?;
        finder.ranker = SchemeRanker::default().with_max_results(config.max_results);
        finder.jitter_seed = config.jitter_seed;

        if config.offline {
            tracing::info!("📴 Offline mode, ranking the bundled catalog only");
            return Ok(finder);
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        for source in &config.sources {
            finder.add_provider(Arc::new(ReaderProvider::with_client(
                client.clone(),
                &config.proxy_url,
                source,
            )));
        }

        Ok(finder)
    }

    /// Add a scheme provider
    pub fn add_provider(&mut self, provider: Arc<dyn SchemeProvider>) {
        self.providers.push(provider);
    }

    /// Replace the fallback provider (defaults to the bundled catalog)
    pub fn with_fallback(mut self, fallback: Arc<dyn SchemeProvider>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_ranker(mut self, ranker: SchemeRanker) -> Self {
        self.ranker = ranker;
        self
    }

    /// Pin the jitter so repeated runs rank identically
    pub fn with_jitter_seed(mut self, seed: u64) -> Self {
        self.jitter_seed = Some(seed);
        self
    }

    pub fn ranker(&self) -> &SchemeRanker {
        &self.ranker
    }

    /// Collect schemes from every provider, or the fallback when none yields any
    pub async fn fetch_pool(&self) -> Result<SchemePool> {
        let mut all_schemes = Vec::new();
        for provider in &self.providers {
            match provider.fetch().await {
                Ok(mut schemes) => {
                    tracing::debug!("Provider {} returned {} schemes", provider.name(), schemes.len());
                    all_schemes.append(&mut schemes);
                }
                Err(e) => {
                    tracing::warn!("Provider {} failed: {}", provider.name(), e);
                }
            }
        }

        if !all_schemes.is_empty() {
            return Ok(SchemePool {
                schemes: all_schemes,
                origin: PoolOrigin::Remote,
            });
        }

        tracing::warn!("⚠️ No remote schemes, using {} fallback", self.fallback.name());
        Ok(SchemePool {
            schemes: self.fallback.fetch().await?,
            origin: PoolOrigin::Fallback,
        })
    }

    /// Fetch the pool and rank it for a profile
    pub async fn find(&self, profile: &Profile) -> Result<MatchResponse> {
        let start = Instant::now();

        let pool = self.fetch_pool().await?;

        let schemes = match self.jitter_seed {
            Some(seed) => self
                .ranker
                .rank_with(profile, &pool.schemes, &mut RandomJitter::seeded(seed)),
            None => self.ranker.rank(profile, &pool.schemes),
        };

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let response = MatchResponse {
            schemes,
            origin: pool.origin,
            pool_size: pool.schemes.len(),
            latency_ms,
            scorer: self.ranker.scorer_name().to_string(),
        };

        tracing::info!("✅ Ranked {}", response.display());

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_providers_uses_catalog() {
        let finder = SchemeFinder::new().unwrap();
        let pool = finder.fetch_pool().await.unwrap();

        assert_eq!(pool.origin, PoolOrigin::Fallback);
        assert_eq!(pool.schemes.len(), 10);
    }

    #[tokio::test]
    async fn test_offline_config_skips_readers() {
        let config = FinderConfig {
            offline: true,
            jitter_seed: Some(1),
            ..FinderConfig::default()
        };
        let finder = SchemeFinder::from_config(&config).unwrap();

        let response = finder.find(&Profile::new("farmer", "", "male", "none")).await.unwrap();

        assert_eq!(response.origin, PoolOrigin::Fallback);
        assert_eq!(response.schemes.len(), 10);
        assert_eq!(response.scorer, "rules");
        assert_eq!(response.schemes[0].scheme.name, "PM-KISAN Samman Nidhi Yojana");
    }

    #[tokio::test]
    async fn test_seeded_find_is_reproducible() {
        let finder = SchemeFinder::new().unwrap().with_jitter_seed(2026);
        let profile = Profile::new("student", "sc", "female", "bpl");

        let first = finder.find(&profile).await.unwrap();
        let second = finder.find(&profile).await.unwrap();
        assert_eq!(first.schemes, second.schemes);
    }
}
