use std::fmt;

use async_trait::async_trait;

use super::types::EndpointTarget;

/// Errors that can occur while fetching a fortune.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The backend answered with a non-2xx status.
    Http { status: u16 },
    /// The request never completed (DNS, connection refused, reset, ...).
    Network(String),
    /// The body was not valid JSON.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Http { status } => write!(f, "HTTP error! status: {status}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can produce fortunes for the viewer.
#[async_trait]
pub trait FortuneSource: Send + Sync {
    /// Base URL requests are issued against, shown in the status line.
    fn base_url(&self) -> &str;

    /// Fetches one fortune and returns the text to display.
    async fn fetch(&self, target: EndpointTarget) -> Result<String, FetchError>;
}
