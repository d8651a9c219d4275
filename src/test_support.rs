//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::api::{EndpointTarget, FetchError, FortuneSource};

/// A source that replays canned outcomes in order and records each request.
/// Once the script runs out every fetch fails with a network error.
pub struct ScriptedSource {
    outcomes: Mutex<VecDeque<Result<String, FetchError>>>,
    requests: Mutex<Vec<EndpointTarget>>,
}

impl ScriptedSource {
    pub fn new(outcomes: Vec<Result<String, FetchError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<EndpointTarget> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl FortuneSource for ScriptedSource {
    fn base_url(&self) -> &str {
        "http://scripted.test"
    }

    async fn fetch(&self, target: EndpointTarget) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(target);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("script exhausted".into())))
    }
}
