pub mod jitter;
pub mod ranker;
pub mod rules;

use crate::core::{Profile, Scheme, ScoredScheme};

pub use jitter::{FixedJitter, JitterSource, RandomJitter, MAX_JITTER};
pub use ranker::{SchemeRanker, MAX_RESULTS};
pub use rules::{RuleScorer, BASE_SCORE, MAX_SCORE, MIN_SCORE, RULES};

/// Trait for scheme scoring implementations
pub trait Scorer: Send + Sync {
    /// Score one scheme for a profile, within `[MIN_SCORE, MAX_SCORE]`
    fn score(&self, profile: &Profile, scheme: &Scheme, jitter: &mut dyn JitterSource) -> u32;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Score one scheme with the rule table and a call-local random jitter
pub fn score(profile: &Profile, scheme: &Scheme) -> u32 {
    RuleScorer::new().score(profile, scheme, &mut RandomJitter::from_entropy())
}

/// Rank a pool with the rule table, keeping the best `MAX_RESULTS`
pub fn rank(profile: &Profile, pool: &[Scheme]) -> Vec<ScoredScheme> {
    SchemeRanker::default().rank(profile, pool)
}
