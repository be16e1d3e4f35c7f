//! The wire types returned by a headlines service.
//!
//! `Article` mirrors the service's JSON shape (camelCase keys, almost every
//! field optional).  Every source implementation decodes its payload into
//! these structs so the rest of the application is source-agnostic.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One page of headline results.
///
/// Both fields default when absent from the payload: a reply with no
/// `articles` key decodes to an empty list rather than a decode error, and a
/// missing `totalResults` counts as zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesPage {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub total_results: u64,
}

/// A single headline, normalised from the service's JSON.
///
/// The `url` is the only required field and serves as the article's identity
/// within one page of results.  Everything else degrades gracefully when the
/// service omits it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline text.
    #[serde(default)]
    pub title: Option<String>,

    /// Optional summary paragraph.
    #[serde(default)]
    pub description: Option<String>,

    /// Link to the full story. Required, unique within a page.
    pub url: String,

    /// Optional lead-image URL. Unused by the TUI renderer but kept so the
    /// record round-trips the full service contract.
    #[serde(default)]
    pub url_to_image: Option<String>,

    /// The outlet that published the story.
    #[serde(default)]
    pub source: ArticleSource,

    /// Publication timestamp as the ISO-8601 string the service sent.
    ///
    /// Kept as a string so a malformed date degrades to "no date" instead of
    /// failing the whole page decode; see [`Article::published`].
    #[serde(default)]
    pub published_at: Option<String>,
}

/// The `source` sub-object of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: Option<String>,
}

impl Article {
    /// Parse the publication timestamp, if present and well-formed.
    pub fn published(&self) -> Option<DateTime<Utc>> {
        self.published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Headline text with the same fallback the list renderer uses.
    pub fn title_or_untitled(&self) -> &str {
        self.title.as_deref().unwrap_or("(untitled)")
    }
}
