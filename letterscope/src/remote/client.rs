//! HTTP transport for the counting service

use letterscope_common::{Category, FrequencyMap};
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde_json::Value;

use super::adapt_response;
use crate::config::RemoteConfig;
use crate::domain::{ConfigError, RemoteError};

/// Counting service client.
///
/// Cheap to clone: the underlying reqwest client is reference-counted, so
/// each in-flight request can own a copy.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: Client,
    vowels_url: Url,
    consonants_url: Url,
}

impl HttpAnalyzer {
    /// Build a client for the configured service.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if an endpoint URL cannot be built or the HTTP
    /// client fails to initialise.
    pub fn new(config: &RemoteConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            vowels_url: config.endpoint(Category::Vowels)?,
            consonants_url: config.endpoint(Category::Consonants)?,
        })
    }

    /// Endpoint used for `category`
    #[must_use]
    pub fn endpoint(&self, category: Category) -> &Url {
        match category {
            Category::Vowels => &self.vowels_url,
            Category::Consonants => &self.consonants_url,
        }
    }

    /// Ask the service to count `category` in `text`.
    ///
    /// No retries and no local fallback: the caller decides what to do with
    /// the failure.
    ///
    /// # Errors
    /// - [`RemoteError::Unreachable`] if the request could not be delivered
    ///   (connection refused, DNS failure, timeout)
    /// - [`RemoteError::Service`] for a non-success HTTP status
    /// - [`RemoteError::Protocol`] if the exchange failed after the service
    ///   was reached (for example a redirect loop)
    /// - [`RemoteError::InvalidResponse`] if the body is not a usable tally
    pub async fn analyze(&self, text: &str, category: Category) -> Result<FrequencyMap, RemoteError> {
        let url = self.endpoint(category);
        debug!("POST {url} ({} chars)", text.chars().count());

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(text.to_owned())
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {url} failed: {e}");
                classify_send_error(&e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Counting service answered {status} for {url}");
            return Err(RemoteError::Service { status: status.as_u16() });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| RemoteError::InvalidResponse(e.to_string()))?;
        adapt_response(&value, category)
    }
}

/// Network-level failures are unreachable; anything else is the service's fault
fn classify_send_error(err: &reqwest::Error) -> RemoteError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        RemoteError::Unreachable(err.to_string())
    } else {
        RemoteError::Protocol(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_endpoints_follow_category() {
        let config = RemoteConfig::new("http://127.0.0.1:9000", Duration::from_secs(1)).unwrap();
        let analyzer = HttpAnalyzer::new(&config).unwrap();
        assert_eq!(analyzer.endpoint(Category::Vowels).path(), "/analyzeVowels");
        assert_eq!(analyzer.endpoint(Category::Consonants).path(), "/analyzeConsonants");
    }
}
