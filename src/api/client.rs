//! reqwest-backed fortune source talking to the Vibe backend over HTTP.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use super::source::{FetchError, FortuneSource};
use super::types::{EndpointTarget, display_text};

/// Fetches fortunes with plain `GET {base_url}{path}` requests.
///
/// No retry and no timeout of its own; reqwest's defaults apply.
pub struct HttpFortuneSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFortuneSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Full request URL for a target. The base URL is used verbatim.
    pub fn url_for(&self, target: EndpointTarget) -> String {
        format!("{}{}", self.base_url, target.path())
    }
}

#[async_trait]
impl FortuneSource for HttpFortuneSource {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, target: EndpointTarget) -> Result<String, FetchError> {
        let url = self.url_for(target);
        info!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(describe(&e)))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Backend returned {} for {}", status, url);
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(describe(&e)))?;

        let json: Value = serde_json::from_str(&body).map_err(|e| {
            warn!("Unparseable body from {}: {}", url, e);
            FetchError::Parse(e.to_string())
        })?;

        Ok(display_text(&json))
    }
}

/// Flattens an error and its sources into one line.
///
/// reqwest's top-level message only names the URL; the cause (e.g.
/// "Connection refused") sits further down the chain.
fn describe(err: &dyn std::error::Error) -> String {
    let mut parts = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !parts.iter().any(|p| p.contains(&text)) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}
