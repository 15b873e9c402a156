use chrono::{DateTime, Utc};

use crate::core::{MatchResponse, PoolOrigin, Profile, ScoredScheme};
use crate::engine::SchemeFinder;
use crate::error::Result;
use crate::report;
use crate::view::{self, CategoryFilter, SortBy};

/// One wizard submission: the profile and its ranked schemes
///
/// A new submission builds a new session; nothing is carried over.
#[derive(Debug, Clone)]
pub struct Session {
    profile: Profile,
    schemes: Vec<ScoredScheme>,
    origin: PoolOrigin,
    submitted_at: DateTime<Utc>,
}

impl Session {
    /// Rank schemes for a profile and open a results session
    pub async fn submit(finder: &SchemeFinder, profile: Profile) -> Result<Self> {
        let response = finder.find(&profile).await?;
        Ok(Self::from_response(profile, response))
    }

    pub fn from_response(profile: Profile, response: MatchResponse) -> Self {
        Self {
            profile,
            schemes: response.schemes,
            origin: response.origin,
            submitted_at: Utc::now(),
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Ranked schemes, best match first
    pub fn schemes(&self) -> &[ScoredScheme] {
        &self.schemes
    }

    pub fn origin(&self) -> PoolOrigin {
        self.origin
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<ScoredScheme> {
        view::filter_by_category(&self.schemes, filter)
    }

    pub fn sorted(&self, by: SortBy) -> Vec<ScoredScheme> {
        view::sort_schemes(&self.schemes, by)
    }

    /// Filter then sort, without re-scoring
    pub fn view(&self, filter: &CategoryFilter, by: SortBy) -> Vec<ScoredScheme> {
        view::sort_schemes(&self.filtered(filter), by)
    }

    /// Plain-text export of the ranked results
    pub fn report(&self) -> String {
        report::render(&self.profile, &self.schemes, self.submitted_at)
    }
}
