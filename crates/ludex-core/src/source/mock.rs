//! Mock catalog source for tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use ludex_rawg::{GameDetail, GameSummary, Page, Screenshot};

use super::{BoxFuture, CatalogSource, SourceError};

/// A hand-rolled mock implementing [`CatalogSource`] for tests.
///
/// Listing responses are a scripted sequence (one per call, repeating the
/// last when exhausted); the other endpoints return fixed responses. Every
/// endpoint counts its calls so tests can assert "no network call occurred".
pub struct MockSource {
    pages: Mutex<Vec<Result<Page, SourceError>>>,
    page_fallback: Result<Page, SourceError>,
    search_response: Result<Vec<GameSummary>, SourceError>,
    detail_response: Result<GameDetail, SourceError>,
    screenshots_response: Result<Vec<Screenshot>, SourceError>,
    trailer_response: Result<Option<String>, SourceError>,
    delay: Option<Duration>,
    list_calls: AtomicUsize,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// A source with nothing in it: empty pages, empty search, no details.
    pub fn new() -> Self {
        Self {
            pages: Mutex::new(Vec::new()),
            page_fallback: Ok(Page {
                results: Vec::new(),
                has_next: false,
            }),
            search_response: Ok(Vec::new()),
            detail_response: Err(SourceError::NotFound),
            screenshots_response: Ok(Vec::new()),
            trailer_response: Ok(None),
            delay: None,
            list_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    /// Script the listing responses, served in order. The last one repeats
    /// if more calls arrive.
    pub fn with_pages(mut self, mut pages: Vec<Result<Page, SourceError>>) -> Self {
        assert!(!pages.is_empty(), "sequence must have at least one page");
        self.page_fallback = pages.last().cloned().unwrap();
        // Reverse so we can pop() from the front cheaply.
        pages.reverse();
        self.pages = Mutex::new(pages);
        self
    }

    pub fn with_search(mut self, response: Result<Vec<GameSummary>, SourceError>) -> Self {
        self.search_response = response;
        self
    }

    pub fn with_detail(mut self, response: Result<GameDetail, SourceError>) -> Self {
        self.detail_response = response;
        self
    }

    pub fn with_screenshots(mut self, response: Result<Vec<Screenshot>, SourceError>) -> Self {
        self.screenshots_response = response;
        self
    }

    pub fn with_trailer(mut self, response: Result<Option<String>, SourceError>) -> Self {
        self.trailer_response = response;
        self
    }

    /// Simulated network latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn next_page(&self) -> Result<Page, SourceError> {
        let mut seq = self.pages.lock().unwrap();
        seq.pop().unwrap_or_else(|| self.page_fallback.clone())
    }

    async fn maybe_sleep(delay: Option<Duration>) {
        if let Some(d) = delay {
            tokio::time::sleep(d).await;
        }
    }
}

impl CatalogSource for MockSource {
    fn list_page(&self, _page: u32) -> BoxFuture<'_, Result<Page, SourceError>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let response = self.next_page();
        let delay = self.delay;
        Box::pin(async move {
            Self::maybe_sleep(delay).await;
            response
        })
    }

    fn search<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<GameSummary>, SourceError>> {
        let response = if query.trim().is_empty() {
            Ok(Vec::new())
        } else {
            self.search_calls.fetch_add(1, Ordering::SeqCst);
            self.search_response.clone()
        };
        let delay = self.delay;
        Box::pin(async move {
            Self::maybe_sleep(delay).await;
            response
        })
    }

    fn detail(&self, _id: u64) -> BoxFuture<'_, Result<GameDetail, SourceError>> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        let response = self.detail_response.clone();
        let delay = self.delay;
        Box::pin(async move {
            Self::maybe_sleep(delay).await;
            response
        })
    }

    fn screenshots(&self, _id: u64) -> BoxFuture<'_, Result<Vec<Screenshot>, SourceError>> {
        let response = self.screenshots_response.clone();
        let delay = self.delay;
        Box::pin(async move {
            Self::maybe_sleep(delay).await;
            response
        })
    }

    fn trailer(&self, _id: u64) -> BoxFuture<'_, Result<Option<String>, SourceError>> {
        let response = self.trailer_response.clone();
        let delay = self.delay;
        Box::pin(async move {
            Self::maybe_sleep(delay).await;
            response
        })
    }
}
