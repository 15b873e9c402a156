pub mod match_response;
pub mod profile;
pub mod scheme;

pub use match_response::{MatchResponse, PoolOrigin};
pub use profile::Profile;
pub use scheme::{Scheme, ScoredScheme};
