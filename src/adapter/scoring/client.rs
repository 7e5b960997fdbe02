//! Scoring server REST API client.
//!
//! Fetches the API version, event details, and full match results from the
//! competition-management server. Implements the [`MatchLookup`] port for
//! the translation pipeline.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::messages::{EventResponse, MatchResponse, VersionResponse};
use crate::domain::{EventCode, MatchNumber, MatchResult};
use crate::error::Result;
use crate::port::MatchLookup;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the scoring server REST API.
pub struct ScoringClient {
    client: Client,
    base_url: String,
}

impl ScoringClient {
    /// Create a new client against the given base URL
    /// (e.g. `http://localhost:18080`).
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the scoring API version.
    ///
    /// Used by the startup connection check to verify the server is
    /// reachable before any stream is opened.
    pub async fn get_version(&self) -> Result<String> {
        let url = format!("{}/api/v1/version/", self.base_url);
        debug!(url = %url, "Fetching API version");

        let response: VersionResponse = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .json()
            .await?;
        Ok(response.version)
    }

    /// Fetch an event's details, verifying the event exists.
    pub async fn get_event(&self, event: &EventCode) -> Result<EventResponse> {
        let url = format!("{}/api/v1/events/{}/", self.base_url, event);
        debug!(url = %url, "Fetching event");

        let response: EventResponse = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .json()
            .await?;
        Ok(response)
    }

    /// Fetch the full result for one match of an event.
    pub async fn get_match(&self, event: &EventCode, number: MatchNumber) -> Result<MatchResult> {
        let url = format!(
            "{}/api/v1/events/{}/matches/{}/",
            self.base_url, event, number
        );
        info!(url = %url, "Fetching match result");

        let response: MatchResponse = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .json()
            .await?;
        Ok(response.into_result(number))
    }
}

#[async_trait]
impl MatchLookup for ScoringClient {
    async fn fetch_match(&self, event: &EventCode, number: MatchNumber) -> Result<MatchResult> {
        self.get_match(event, number).await
    }

    fn source_name(&self) -> &'static str {
        "scoring-api"
    }
}
