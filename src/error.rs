use thiserror::Error;

/// Main error type for the scheme finder
#[derive(Error, Debug)]
pub enum SchemeFinderError {
    /// HTTP request errors
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Provider errors
    #[error("Provider '{provider}' error: {message}")]
    Provider { provider: String, message: String },

    /// Bundled catalog errors
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl SchemeFinderError {
    pub(crate) fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        SchemeFinderError::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }
}

impl From<String> for SchemeFinderError {
    fn from(s: String) -> Self {
        SchemeFinderError::Other(s)
    }
}

impl From<&str> for SchemeFinderError {
    fn from(s: &str) -> Self {
        SchemeFinderError::Other(s.to_string())
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, SchemeFinderError>;
