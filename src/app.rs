//! Application state and the fetch/state controller.
//!
//! [`App`] owns the filter state (category, page), the fetch state (loading
//! flag, error, articles, totals) and the list scroll position.  All
//! mutation goes through its methods; the main loop asks it for
//! [`FetchRequest`]s and feeds it [`FetchMsg`] replies.

use ratatui::widgets::ListState;
use tracing::{debug, warn};

use crate::category::Category;
use crate::fetch::{FetchMsg, FetchRequest};
use crate::source::{Article, HeadlinesQuery, PAGE_SIZE};

/// Pages needed for `total_results` articles. Never less than one, so the
/// pager always has something to show.
pub fn total_pages_for(total_results: u64) -> u32 {
    total_results
        .div_ceil(u64::from(PAGE_SIZE))
        .max(1)
        .try_into()
        .unwrap_or(u32::MAX)
}

pub struct App {
    // -- filter state --------------------------------------------------------
    /// Currently selected category.
    pub category: Category,
    /// Current 1-based page.
    pub page: u32,

    // -- fetch state ---------------------------------------------------------
    /// Whether a fetch is outstanding.
    pub loading: bool,
    /// User-facing message from the last failed fetch, if any.
    pub error: Option<String>,
    /// The most recently fetched page of articles.
    pub articles: Vec<Article>,
    /// Total matching articles reported by the service.
    pub total_results: u64,
    /// Derived page count, `max(1, ceil(total_results / PAGE_SIZE))`.
    pub total_pages: u32,

    // -- ui state ------------------------------------------------------------
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,

    /// Sequence number of the most recently dispatched fetch.  Replies
    /// carrying an older number are stale and get dropped, so a slow
    /// response can never overwrite the result of a newer request.
    seq: u64,
}

impl App {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            page: 1,
            loading: false,
            error: None,
            articles: Vec::new(),
            total_results: 0,
            total_pages: 1,
            list_state: ListState::default(),
            quit: false,
            seq: 0,
        }
    }

    // -- filter transitions --------------------------------------------------
    // Each returns whether a re-fetch is needed.

    /// Switch to `category` and reset to page 1.
    ///
    /// Re-selecting the active category still re-fetches page 1, matching
    /// the behaviour of clicking the already-active selector button.
    pub fn set_category(&mut self, category: Category) -> bool {
        self.category = category;
        self.page = 1;
        true
    }

    pub fn next_category(&mut self) -> bool {
        self.set_category(self.category.next())
    }

    pub fn prev_category(&mut self) -> bool {
        self.set_category(self.category.prev())
    }

    /// Advance one page; no-op at the last page.
    pub fn next_page(&mut self) -> bool {
        if self.page < self.total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op at page 1.
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// Whether the pager's "previous" direction is available.
    pub fn can_prev_page(&self) -> bool {
        self.page > 1
    }

    /// Whether the pager's "next" direction is available.
    pub fn can_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    // -- fetch lifecycle -----------------------------------------------------

    /// Enter the loading state and produce the request for the worker.
    ///
    /// Bumps the sequence number, so any reply still in flight for an older
    /// request becomes stale.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.seq += 1;
        self.loading = true;
        self.error = None;
        debug!(seq = self.seq, category = self.category.as_str(), page = self.page, "dispatching fetch");
        FetchRequest {
            seq: self.seq,
            query: HeadlinesQuery {
                category: self.category,
                page: self.page,
            },
        }
    }

    /// Apply a worker reply, unless it is stale.
    ///
    /// On success the previous page is wholly replaced and the scroll
    /// position resets to the top.  On failure the error message is shown
    /// and the article list cleared.
    pub fn apply_fetch(&mut self, msg: FetchMsg) {
        if msg.seq != self.seq {
            debug!(seq = msg.seq, latest = self.seq, "dropping stale fetch reply");
            return;
        }
        self.loading = false;

        match msg.result {
            Ok(page) => {
                self.total_results = page.total_results;
                self.total_pages = total_pages_for(page.total_results);
                self.articles = page.articles;
                self.error = None;
                self.list_state
                    .select((!self.articles.is_empty()).then_some(0));
            }
            Err(e) => {
                warn!(error = %e, "fetch failed");
                self.error = Some(e.to_string());
                self.articles.clear();
                self.list_state.select(None);
            }
        }
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.articles.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.articles.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.articles.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.articles.is_empty() {
            self.list_state.select(Some(self.articles.len() - 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{ArticleSource, FetchError, HeadlinesPage};

    fn make_article(url: &str, title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            description: None,
            url: url.to_string(),
            url_to_image: None,
            source: ArticleSource::default(),
            published_at: None,
        }
    }

    fn page_of(count: usize, total_results: u64) -> HeadlinesPage {
        HeadlinesPage {
            articles: (0..count)
                .map(|i| make_article(&format!("https://example.com/{i}"), &format!("Story {i}")))
                .collect(),
            total_results,
        }
    }

    /// Dispatch + immediately apply a successful reply, as if the worker
    /// answered instantly.
    fn fetch_ok(app: &mut App, page: HeadlinesPage) {
        let req = app.begin_fetch();
        app.apply_fetch(FetchMsg {
            seq: req.seq,
            result: Ok(page),
        });
    }

    // -- construction --------------------------------------------------------

    #[test]
    fn new_app_starts_idle_on_page_one() {
        let app = App::new(Category::General);
        assert!(!app.loading);
        assert!(app.error.is_none());
        assert!(app.articles.is_empty());
        assert_eq!(app.page, 1);
        assert_eq!(app.total_pages, 1);
        assert!(!app.quit);
    }

    // -- total_pages_for -----------------------------------------------------

    #[test]
    fn total_pages_is_at_least_one() {
        assert_eq!(total_pages_for(0), 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages_for(45), 3);
        assert_eq!(total_pages_for(40), 2);
        assert_eq!(total_pages_for(41), 3);
        assert_eq!(total_pages_for(1), 1);
        assert_eq!(total_pages_for(20), 1);
        assert_eq!(total_pages_for(21), 2);
    }

    // -- category transitions ------------------------------------------------

    #[test]
    fn set_category_resets_page_and_requests_fetch() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(20, 100));
        app.next_page();
        assert_eq!(app.page, 2);

        assert!(app.set_category(Category::Sports));
        assert_eq!(app.category, Category::Sports);
        assert_eq!(app.page, 1);

        let req = app.begin_fetch();
        assert_eq!(req.query.category, Category::Sports);
        assert_eq!(req.query.page, 1);
    }

    #[test]
    fn reselecting_active_category_still_fetches_page_one() {
        let mut app = App::new(Category::Health);
        fetch_ok(&mut app, page_of(20, 100));
        app.next_page();

        assert!(app.set_category(Category::Health));
        assert_eq!(app.page, 1);
    }

    #[test]
    fn category_cycling_wraps() {
        let mut app = App::new(Category::Technology);
        app.next_category();
        assert_eq!(app.category, Category::General);
        app.prev_category();
        assert_eq!(app.category, Category::Technology);
    }

    // -- paging --------------------------------------------------------------

    #[test]
    fn prev_page_is_noop_on_first_page() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(20, 100));
        assert!(!app.prev_page());
        assert_eq!(app.page, 1);
    }

    #[test]
    fn next_page_is_noop_on_last_page() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(5, 45)); // 3 pages
        app.next_page();
        app.next_page();
        assert_eq!(app.page, 3);
        assert!(!app.next_page());
        assert_eq!(app.page, 3);
    }

    #[test]
    fn next_page_is_noop_with_no_results() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(0, 0));
        assert!(!app.next_page());
        assert_eq!(app.page, 1);
    }

    // -- fetch lifecycle -----------------------------------------------------

    #[test]
    fn begin_fetch_enters_loading_and_clears_error() {
        let mut app = App::new(Category::General);
        app.error = Some("old error".to_string());

        let req = app.begin_fetch();
        assert!(app.loading);
        assert!(app.error.is_none());
        assert_eq!(req.seq, 1);
        assert_eq!(req.query.category, Category::General);
    }

    #[test]
    fn successful_fetch_replaces_state() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(5, 45));

        assert!(!app.loading);
        assert!(app.error.is_none());
        assert_eq!(app.articles.len(), 5);
        assert_eq!(app.total_results, 45);
        assert_eq!(app.total_pages, 3);
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn empty_success_clears_selection() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(5, 45));
        fetch_ok(&mut app, page_of(0, 0));

        assert!(app.articles.is_empty());
        assert_eq!(app.total_pages, 1);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn failed_fetch_sets_message_and_clears_articles() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(5, 45));

        let req = app.begin_fetch();
        app.apply_fetch(FetchMsg {
            seq: req.seq,
            result: Err(FetchError::RateLimited),
        });

        assert!(!app.loading);
        assert_eq!(
            app.error.as_deref(),
            Some("Rate limit exceeded. Try again later or check your API plan.")
        );
        assert!(app.articles.is_empty());
    }

    #[test]
    fn missing_key_failure_surfaces_without_loading() {
        let mut app = App::new(Category::General);
        let req = app.begin_fetch();
        app.apply_fetch(FetchMsg {
            seq: req.seq,
            result: Err(FetchError::MissingApiKey),
        });

        assert!(!app.loading);
        assert_eq!(
            app.error.as_deref(),
            Some("API Key is missing. Please check your environment variables.")
        );
    }

    #[test]
    fn stale_reply_is_dropped() {
        let mut app = App::new(Category::General);
        let old = app.begin_fetch(); // seq 1
        let _new = app.begin_fetch(); // seq 2, e.g. user changed category

        // The older request resolves late; its reply must not apply.
        app.apply_fetch(FetchMsg {
            seq: old.seq,
            result: Ok(page_of(5, 45)),
        });

        assert!(app.loading, "still waiting on the newest request");
        assert!(app.articles.is_empty());
        assert_eq!(app.total_pages, 1);
    }

    #[test]
    fn latest_reply_applies_after_stale_one() {
        let mut app = App::new(Category::General);
        let old = app.begin_fetch();
        let new = app.begin_fetch();

        app.apply_fetch(FetchMsg {
            seq: old.seq,
            result: Ok(page_of(20, 200)),
        });
        app.apply_fetch(FetchMsg {
            seq: new.seq,
            result: Ok(page_of(5, 45)),
        });

        assert!(!app.loading);
        assert_eq!(app.articles.len(), 5);
        assert_eq!(app.total_pages, 3);
    }

    // -- end-to-end paging scenario ------------------------------------------

    #[test]
    fn technology_page_two_of_three() {
        let mut app = App::new(Category::Technology);
        fetch_ok(&mut app, page_of(20, 45));
        assert!(app.next_page());
        fetch_ok(&mut app, page_of(5, 45));

        assert_eq!(app.articles.len(), 5);
        assert_eq!(app.page, 2);
        assert_eq!(app.total_pages, 3);
        assert!(app.can_prev_page());
        assert!(app.can_next_page());
    }

    // -- navigation ----------------------------------------------------------

    #[test]
    fn selection_noops_on_empty_list() {
        let mut app = App::new(Category::General);
        app.select_next();
        app.select_previous();
        app.select_first();
        app.select_last();
        assert!(app.list_state.selected().is_none());
    }

    #[test]
    fn selection_clamps_at_both_ends() {
        let mut app = App::new(Category::General);
        fetch_ok(&mut app, page_of(3, 3));

        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_last();
        app.select_next();
        assert_eq!(app.list_state.selected(), Some(2));
    }
}
