use async_trait::async_trait;

use crate::core::Scheme;
use crate::error::{Result, SchemeFinderError};
use crate::providers::SchemeProvider;

const BUNDLED_CATALOG: &str = include_str!("../../data/fallback_schemes.json");

/// Bundled static catalog, used when no remote source yields a scheme
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    schemes: Vec<Scheme>,
}

impl StaticCatalog {
    /// Load the catalog compiled into the crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load a catalog from JSON (array of scheme objects)
    pub fn from_json(json: &str) -> Result<Self> {
        let schemes: Vec<Scheme> = serde_json::from_str(json)?;

        if schemes.is_empty() {
            return Err(SchemeFinderError::Catalog("catalog has no schemes".to_string()));
        }
        if let Some(bad) = schemes.iter().find(|s| s.name.is_empty() || s.category.is_empty()) {
            return Err(SchemeFinderError::Catalog(format!(
                "scheme '{}' is missing a name or category",
                bad.name
            )));
        }

        Ok(Self { schemes })
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

#[async_trait]
impl SchemeProvider for StaticCatalog {
    async fn fetch(&self) -> Result<Vec<Scheme>> {
        Ok(self.schemes.clone())
    }

    fn name(&self) -> &str {
        "catalog"
    }
}
