//! Post-ranking filter and sort operations
//!
//! Everything here works on an already scored list and never calls a scorer.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::core::ScoredScheme;
use crate::error::SchemeFinderError;

/// First run of ASCII digits. "₹1,00,000" yields 1, not 100000.
static RE_FIRST_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Category filter with `all` as the wildcard
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, scheme: &ScoredScheme) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => scheme.scheme.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = SchemeFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.is_empty() {
            return Err(SchemeFinderError::Other("empty category filter".to_string()));
        }
        if value == "all" {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(value.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(category) => write!(f, "{}", category),
        }
    }
}

/// Re-sort key for the results view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Match,
    Amount,
}

impl FromStr for SortBy {
    type Err = SchemeFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "match" => Ok(SortBy::Match),
            "amount" => Ok(SortBy::Amount),
            other => Err(SchemeFinderError::Other(format!(
                "unknown sort key '{}' (expected match or amount)",
                other
            ))),
        }
    }
}

/// Magnitude of the first digit run in an amount string, 0 when there is none
///
/// Digit runs too long for `u64` saturate.
pub fn extract_amount(amount: &str) -> u64 {
    RE_FIRST_DIGITS
        .find(amount)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// Keep the schemes whose category equals the filter exactly
pub fn filter_by_category(schemes: &[ScoredScheme], filter: &CategoryFilter) -> Vec<ScoredScheme> {
    schemes
        .iter()
        .filter(|scheme| filter.matches(scheme))
        .cloned()
        .collect()
}

/// Stable descending sort by the requested key
pub fn sort_schemes(schemes: &[ScoredScheme], by: SortBy) -> Vec<ScoredScheme> {
    let mut sorted = schemes.to_vec();

    match by {
        SortBy::Match => sorted.sort_by(|a, b| b.match_score.cmp(&a.match_score)),
        SortBy::Amount => {
            sorted.sort_by_cached_key(|s| std::cmp::Reverse(extract_amount(&s.scheme.amount)))
        }
    }

    sorted
}
