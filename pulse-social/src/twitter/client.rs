//! Wrapper around the Twitter/X recent-search API.
//!
//! Handles auth and request parameter shaping before delegating to the shared
//! HTTP client. Pagination (`next_token`) is deliberately not followed: one
//! call fetches exactly one page.
use crate::twitter::types::SearchResponse;
use anyhow::Result;
use pulse_http::{Auth, HttpClient, RequestOpts};

const TWITTER_API_BASE: &str = "https://api.twitter.com";

/// Bounds enforced by the provider for `max_results`.
const MIN_RESULTS: u32 = 10;
const MAX_RESULTS: u32 = 100;

#[derive(Clone)]
pub struct TwitterApi {
    http: HttpClient,
    bearer: String,
}

impl TwitterApi {
    pub fn new(bearer_token: String) -> Result<Self> {
        Self::with_base(TWITTER_API_BASE, bearer_token)
    }

    /// Anchor the client at an alternate base URL (tests point this at a
    /// local mock server).
    pub fn with_base(base: &str, bearer_token: String) -> Result<Self> {
        let http = HttpClient::new(base)?;
        Ok(Self {
            http,
            bearer: bearer_token,
        })
    }

    /// Fetch one page of recent tweets matching `query`.
    ///
    /// `max_results` is clamped to the provider's 10..=100 window. A non-200
    /// response surfaces as `pulse_http::HttpError::Api` with the status and
    /// the provider's error message preserved.
    pub async fn recent_search(&self, query: &str, max_results: u32) -> Result<SearchResponse> {
        let requested = max_results;
        let max_results = max_results.clamp(MIN_RESULTS, MAX_RESULTS);
        if max_results != requested {
            tracing::debug!(requested, used = max_results, "twitter.search.max_results_adjusted");
        }

        let params: Vec<(&str, std::borrow::Cow<'_, str>)> = vec![
            ("query", query.into()),
            ("max_results", max_results.to_string().into()),
        ];

        let resp: SearchResponse = self
            .http
            .get_json(
                "2/tweets/search/recent",
                RequestOpts {
                    auth: Some(Auth::Bearer(&self.bearer)),
                    query: Some(params),
                    ..Default::default()
                },
            )
            .await?;

        tracing::debug!(
            result_count = resp.result_count(),
            next_token = ?resp.meta.as_ref().and_then(|m| m.next_token.as_deref()),
            "twitter.search.response"
        );
        Ok(resp)
    }
}
