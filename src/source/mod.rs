//! Headlines source abstraction layer.
//!
//! This module defines the [`HeadlinesSource`] trait, the wire types in
//! [`article`], and the [`FetchError`] taxonomy.  The concrete NewsAPI
//! implementation lives in [`newsapi`].
//!
//! The fetch worker calls [`fetch()`](HeadlinesSource::fetch) on a background
//! thread, so implementations must be [`Send`].  Tests substitute their own
//! implementations to exercise the app without a network.

mod article;
mod newsapi;

pub use article::{Article, ArticleSource, HeadlinesPage};
pub use newsapi::NewsApiSource;

use thiserror::Error;

use crate::category::Category;

/// Articles per page. Fixed by the client, sent as `pageSize`.
pub const PAGE_SIZE: u32 = 20;

/// The filter parameters of one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlinesQuery {
    pub category: Category,
    /// 1-based page number.
    pub page: u32,
}

/// Everything that can go wrong fetching a page of headlines.
///
/// The `Display` strings are the exact messages shown to the user; nothing
/// here propagates past the app's status area.
#[derive(Debug, Error)]
pub enum FetchError {
    /// No API key configured. Detected before any network I/O.
    #[error("API Key is missing. Please check your environment variables.")]
    MissingApiKey,

    /// The service answered HTTP 429.
    #[error("Rate limit exceeded. Try again later or check your API plan.")]
    RateLimited,

    /// Any other transport failure, non-2xx status, or malformed body.
    #[error("Failed to fetch news. Check your API key or network connection.")]
    Upstream(#[from] reqwest::Error),
}

/// Trait that every headlines source must implement.
pub trait HeadlinesSource: Send {
    /// Human-readable label for this source.
    fn name(&self) -> &str;

    /// Fetch one page of headlines matching `query`.
    ///
    /// Implementations perform their own HTTP/IO work and return decoded
    /// [`HeadlinesPage`] values.  Errors surface to the user as status
    /// messages.
    fn fetch(&self, query: &HeadlinesQuery) -> Result<HeadlinesPage, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_match_user_facing_text() {
        assert_eq!(
            FetchError::MissingApiKey.to_string(),
            "API Key is missing. Please check your environment variables."
        );
        assert_eq!(
            FetchError::RateLimited.to_string(),
            "Rate limit exceeded. Try again later or check your API plan."
        );
    }
}
