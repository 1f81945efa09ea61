// src/fetch.rs
// One bounded GET against the agenda page. No retries, no backoff:
// a failed fetch just means this run reports nothing.

use std::time::Duration;

use crate::error::FetchError;

/// Where the raw page markup comes from.
/// Frontends pass the real [`Fetcher`]; tests pass canned pages.
pub trait PageSource {
    fn fetch(&self) -> Result<String, FetchError>;
}

pub struct Fetcher {
    url: String,
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { url: url.into(), client })
    }
}

impl PageSource for Fetcher {
    fn fetch(&self) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| FetchError::Transport { url: self.url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: self.url.clone(), status });
        }

        resp.text()
            .map_err(|source| FetchError::Transport { url: self.url.clone(), source })
    }
}
