//! Twitter/X API integration surface.
//!
//! Submodules provide the HTTP client wrapper and strongly typed response
//! models for `/2/tweets/search/recent`.
pub mod client;
pub mod types;

pub use client::TwitterApi;
pub use types::{SearchResponse, Tweet};
