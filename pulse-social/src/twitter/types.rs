use serde::{Deserialize, Serialize};

/// Payload of `/2/tweets/search/recent`.
///
/// The provider omits `data` entirely when nothing matched, so callers should
/// go through [`SearchResponse::into_tweets`] rather than touching the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub data: Option<Vec<Tweet>>,
    pub meta: Option<Meta>,
}

impl SearchResponse {
    /// Result records in provider order; a missing `data` field is an empty set.
    pub fn into_tweets(self) -> Vec<Tweet> {
        self.data.unwrap_or_default()
    }

    pub fn result_count(&self) -> usize {
        self.data.as_ref().map(Vec::len).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Meta {
    #[serde(default)]
    pub result_count: Option<u32>,
    // Present when more pages exist; we never follow it.
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,

    #[serde(default)]
    pub author_id: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PublicMetrics {
    pub like_count: Option<u64>,
    #[serde(alias = "retweet_count")]
    pub repost_count: Option<u64>,
    pub reply_count: Option<u64>,
    pub quote_count: Option<u64>,
}
