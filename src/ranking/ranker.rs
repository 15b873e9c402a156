use std::sync::Arc;

use crate::core::{Profile, Scheme, ScoredScheme};
use crate::ranking::jitter::{JitterSource, RandomJitter};
use crate::ranking::{RuleScorer, Scorer};

/// Upper bound on ranked results
pub const MAX_RESULTS: usize = 10;

/// Scores a whole pool, orders it and keeps the best matches
#[derive(Clone)]
pub struct SchemeRanker {
    scorer: Arc<dyn Scorer>,
    max_results: usize,
}

impl SchemeRanker {
    pub fn new(scorer: Arc<dyn Scorer>) -> Self {
        Self {
            scorer,
            max_results: MAX_RESULTS,
        }
    }

    /// Lower the result cap; values above `MAX_RESULTS` are clamped to it
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.min(MAX_RESULTS);
        self
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Scorer name for logging
    pub fn scorer_name(&self) -> &str {
        self.scorer.name()
    }

    /// Rank with a fresh entropy-seeded jitter owned by this call
    pub fn rank(&self, profile: &Profile, pool: &[Scheme]) -> Vec<ScoredScheme> {
        self.rank_with(profile, pool, &mut RandomJitter::from_entropy())
    }

    /// Rank with a caller-supplied jitter source
    ///
    /// The sort is stable, so schemes with equal scores keep their pool order.
    pub fn rank_with(
        &self,
        profile: &Profile,
        pool: &[Scheme],
        jitter: &mut dyn JitterSource,
    ) -> Vec<ScoredScheme> {
        let mut ranked: Vec<ScoredScheme> = pool
            .iter()
            .map(|scheme| {
                let score = self.scorer.score(profile, scheme, &mut *jitter);
                ScoredScheme::new(scheme.clone(), score)
            })
            .collect();

        // Sort by score descending
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        ranked.truncate(self.max_results);

        ranked
    }
}

impl Default for SchemeRanker {
    fn default() -> Self {
        Self::new(Arc::new(RuleScorer::new()))
    }
}

impl std::fmt::Debug for SchemeRanker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeRanker")
            .field("scorer", &self.scorer.name())
            .field("max_results", &self.max_results)
            .finish()
    }
}
