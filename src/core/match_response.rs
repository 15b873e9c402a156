use serde::{Deserialize, Serialize};
use crate::core::ScoredScheme;

/// Where the ranked pool came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolOrigin {
    /// Parsed from the remote portals
    Remote,
    /// Bundled static catalog (every remote source failed or was empty)
    Fallback,
}

/// Ranked schemes for one profile submission, with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    /// Best matches first, at most `max_results`
    pub schemes: Vec<ScoredScheme>,

    pub origin: PoolOrigin,

    /// Candidate count before truncation
    pub pool_size: usize,

    /// Fetch + ranking latency in milliseconds
    pub latency_ms: f64,

    /// Scorer used (e.g. "rules")
    pub scorer: String,
}

impl MatchResponse {
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    /// Highest scoring scheme, if any
    pub fn best(&self) -> Option<&ScoredScheme> {
        self.schemes.first()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        format!(
            "{} of {} schemes ({:?}) [{}] {:.2}ms",
            self.schemes.len(),
            self.pool_size,
            self.origin,
            self.scorer,
            self.latency_ms
        )
    }
}
