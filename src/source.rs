//! Where the article document comes from.
//!
//! [`ArticleSource`] is the seam between the loader and the outside world.
//! The service uses [`HttpSource`], which downloads the document on every
//! call. [`StaticSource`] serves a fixed body and is meant for tests and
//! for embedding the service with a bundled document.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// Produces the raw article document as parsed JSON.
///
/// Implementations are called once per request and must not cache; every
/// call reflects the current state of the underlying document.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Human-readable location, used in log lines.
    fn location(&self) -> &str;

    /// Fetch and parse the document.
    async fn fetch(&self) -> Result<Value, FetchError>;
}

/// Downloads the document from a fixed URL.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ArticleSource for HttpSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: self.url.clone(),
            });
        }

        // Raw bytes: invalid UTF-8 must fail the parse, not be replaced.
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Serves the same body on every call.
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_value(value: &Value) -> Self {
        Self::new(value.to_string())
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    fn location(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<Value, FetchError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}
