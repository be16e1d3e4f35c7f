//! NewsAPI top-headlines source.
//!
//! Fetches `GET <base>/v2/top-headlines` with the country fixed to `us` and
//! decodes the JSON reply.  HTTP 429 is the one status the service
//! distinguishes (plan rate limits); everything else non-2xx is a uniform
//! upstream failure.

use tracing::debug;

use super::{FetchError, HeadlinesPage, HeadlinesQuery, HeadlinesSource, PAGE_SIZE};

/// Default endpoint of the hosted service.
pub const NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "NEWS_API_KEY";

/// A NewsAPI-compatible headlines source.
pub struct NewsApiSource {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
}

impl NewsApiSource {
    /// Create a source against `base_url` with an optional API key.
    ///
    /// A `None` (or empty) key is not an immediate error: every fetch fails
    /// fast with [`FetchError::MissingApiKey`] instead, so the UI can show
    /// the problem without crashing.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.is_empty()),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Source against the hosted endpoint, key taken from `NEWS_API_KEY`.
    pub fn from_env() -> Self {
        Self::new(NEWS_API_URL, std::env::var(API_KEY_VAR).ok())
    }

    /// The query-string parameters for one request. Pure, so tests can
    /// check the request shape without a server.
    fn query_params(query: &HeadlinesQuery, api_key: &str) -> [(&'static str, String); 5] {
        [
            ("country", "us".to_string()),
            ("category", query.category.as_str().to_string()),
            ("page", query.page.to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("apiKey", api_key.to_string()),
        ]
    }
}

impl HeadlinesSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    fn fetch(&self, query: &HeadlinesQuery) -> Result<HeadlinesPage, FetchError> {
        // Fail fast before any network I/O when no key is configured.
        let api_key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;

        debug!(category = query.category.as_str(), page = query.page, "requesting headlines");

        let response = self
            .client
            .get(&self.base_url)
            .query(&Self::query_params(query, api_key))
            .send()?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(FetchError::RateLimited);
        }

        let page = response.error_for_status()?.json::<HeadlinesPage>()?;
        debug!(
            articles = page.articles.len(),
            total_results = page.total_results,
            "headlines received"
        );
        Ok(page)
    }
}
