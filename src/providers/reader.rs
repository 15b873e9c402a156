use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;

use crate::core::Scheme;
use crate::error::{Result, SchemeFinderError};
use crate::providers::parser::parse_schemes;
use crate::providers::SchemeProvider;

/// Portal fetched through a text-extraction reader proxy
///
/// The proxy renders `{proxy_url}/{source_url}` as plain text, which is then
/// scanned for scheme titles.
pub struct ReaderProvider {
    client: Client,
    proxy_url: String,
    source_url: String,
    name: String,
}

impl ReaderProvider {
    /// Create a reader for one portal
    pub fn new(
        proxy_url: impl Into<String>,
        source_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, proxy_url, source_url))
    }

    /// Create a reader sharing an existing HTTP client
    pub fn with_client(
        client: Client,
        proxy_url: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        let proxy_url = proxy_url.into().trim_end_matches('/').to_string();
        let source_url = source_url.into();
        let name = source_host(&source_url);

        Self {
            client,
            proxy_url,
            source_url,
            name,
        }
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Proxy URL for this portal
    pub fn request_url(&self) -> String {
        format!("{}/{}", self.proxy_url, self.source_url)
    }

    async fn fetch_text(&self) -> Result<String> {
        let response = self
            .client
            .get(self.request_url())
            .header(ACCEPT, "text/plain")
            .send()
            .await
            .map_err(|e| {
                SchemeFinderError::provider(&self.name, format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(SchemeFinderError::provider(
                &self.name,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| SchemeFinderError::provider(&self.name, format!("Invalid body: {}", e)))
    }
}

/// Host part of a URL, used as the provider name
fn source_host(url: &str) -> String {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);
    without_scheme
        .split('/')
        .next()
        .filter(|host| !host.is_empty())
        .unwrap_or(url)
        .to_string()
}

#[async_trait]
impl SchemeProvider for ReaderProvider {
    async fn fetch(&self) -> Result<Vec<Scheme>> {
        let text = self.fetch_text().await?;
        let schemes = parse_schemes(&text, &self.source_url);

        tracing::debug!(
            "Reader {} parsed {} schemes from {} bytes",
            self.name,
            schemes.len(),
            text.len()
        );

        Ok(schemes)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
