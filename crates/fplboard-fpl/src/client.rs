//! HTTP client for the public FPL REST API.
//!
//! Wraps `reqwest` with typed response deserialization and FPL-specific
//! error handling. The [`FplApi`] trait abstracts the four fetch operations
//! the aggregation pipeline needs, so tests can substitute deterministic
//! canned responses without network access.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::FplError;
use crate::types::{BootstrapStatic, EntryHistory, PicksResponse, StandingsResponse};

const DEFAULT_BASE_URL: &str = "https://fantasy.premierleague.com/api";

/// The four upstream fetch operations used by the aggregation pipeline.
///
/// Implemented by [`FplClient`] for production and by in-memory stubs in
/// pipeline tests. Every fetch is attempted exactly once; there is no retry
/// layer, so callers decide per operation whether a failure is fatal.
pub trait FplApi {
    /// Fetches one page of classic-league standings.
    fn league_standings(
        &self,
        league: &str,
        page: u32,
    ) -> impl Future<Output = Result<StandingsResponse, FplError>> + Send;

    /// Fetches an entry's full-season gameweek history and chip activations.
    fn entry_history(
        &self,
        entry: i64,
    ) -> impl Future<Output = Result<EntryHistory, FplError>> + Send;

    /// Fetches an entry's lineup picks for one gameweek.
    ///
    /// Returns `Ok(None)` when the upstream reports a non-success status for
    /// the pair — picks are simply unavailable, not an error.
    fn event_picks(
        &self,
        entry: i64,
        gameweek: i32,
    ) -> impl Future<Output = Result<Option<PicksResponse>, FplError>> + Send;

    /// Fetches the bulk static reference data (player id to display name).
    fn bootstrap_static(&self) -> impl Future<Output = Result<BootstrapStatic, FplError>> + Send;
}

/// Client for the public FPL REST API.
///
/// Use [`FplClient::new`] for production or [`FplClient::with_base_url`] to
/// point at a mock server in tests.
pub struct FplClient {
    client: Client,
    base_url: String,
}

impl FplClient {
    /// Creates a new client pointed at the production FPL API.
    ///
    /// # Errors
    ///
    /// Returns [`FplError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, FplError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout_secs)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`FplError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`FplError::InvalidBaseUrl`] if `base_url` does not
    /// parse as a URL.
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> Result<Self, FplError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("fplboard/0.1 (league-aggregation)")
            .build()?;

        // Endpoint paths are appended with a leading slash, so strip any
        // trailing one here to avoid doubled separators.
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| FplError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: trimmed.to_owned(),
        })
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FplError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FplError::Status {
                context: url.to_owned(),
                status,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FplError::Deserialize {
            context: url.to_owned(),
            source: e,
        })
    }
}

impl FplApi for FplClient {
    async fn league_standings(
        &self,
        league: &str,
        page: u32,
    ) -> Result<StandingsResponse, FplError> {
        let url = format!(
            "{}/leagues-classic/{league}/standings/?page_standings={page}",
            self.base_url
        );
        self.get_json(&url).await
    }

    async fn entry_history(&self, entry: i64) -> Result<EntryHistory, FplError> {
        let url = format!("{}/entry/{entry}/history/", self.base_url);
        self.get_json(&url).await
    }

    async fn event_picks(
        &self,
        entry: i64,
        gameweek: i32,
    ) -> Result<Option<PicksResponse>, FplError> {
        let url = format!("{}/entry/{entry}/event/{gameweek}/picks/", self.base_url);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            tracing::debug!(entry, gameweek, status = %response.status(), "picks unavailable");
            return Ok(None);
        }
        let body = response.text().await?;
        let picks = serde_json::from_str(&body).map_err(|e| FplError::Deserialize {
            context: url,
            source: e,
        })?;
        Ok(Some(picks))
    }

    async fn bootstrap_static(&self) -> Result<BootstrapStatic, FplError> {
        let url = format!("{}/bootstrap-static/", self.base_url);
        self.get_json(&url).await
    }
}
