pub mod catalog;
pub mod parser;
pub mod reader;

use async_trait::async_trait;
use crate::core::Scheme;
use crate::error::Result;

pub use catalog::StaticCatalog;
pub use parser::parse_schemes;
pub use reader::ReaderProvider;

/// Trait for scheme sources (reader-proxied portals, static catalog, ...)
#[async_trait]
pub trait SchemeProvider: Send + Sync {
    /// Fetch every scheme this source currently offers
    async fn fetch(&self) -> Result<Vec<Scheme>>;

    /// Get provider name
    fn name(&self) -> &str;
}
