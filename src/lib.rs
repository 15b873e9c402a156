//! # SchemeFinder
//!
//! Government scheme matching engine with:
//! - Rule-table scoring of schemes against a citizen profile
//! - Bounded, seedable jitter to spread tied scores
//! - Remote portals read through a text-extraction proxy
//! - Bundled fallback catalog when every remote source fails
//! - Category filter, match/amount re-sort and plain-text export
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use scheme_finder::{FinderConfig, Profile, SchemeFinder};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let finder = SchemeFinder::from_config(&FinderConfig::from_env()?)?;
//!
//!     let profile = Profile::new("farmer", "st", "male", "bpl");
//!     let response = finder.find(&profile).await?;
//!
//!     for scored in &response.schemes {
//!         println!("{} - {}%", scored.scheme.name, scored.match_score);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod providers;
pub mod ranking;
pub mod report;
pub mod session;
pub mod view;

// Re-export primary types
pub use config::FinderConfig;
pub use crate::core::{MatchResponse, PoolOrigin, Profile, Scheme, ScoredScheme};
pub use engine::{SchemeFinder, SchemePool};
pub use error::{Result, SchemeFinderError};
pub use ranking::{rank, score, RuleScorer, SchemeRanker, Scorer};
pub use session::Session;
pub use view::{CategoryFilter, SortBy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
