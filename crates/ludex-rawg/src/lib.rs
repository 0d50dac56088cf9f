//! Typed client for the RAWG video-game database API.
//!
//! Wraps the handful of read-only endpoints the browser needs: the paged
//! catalog listing (ordered by Metacritic score), free-text search, and the
//! per-game detail/screenshot/movie lookups. Authentication is an API key
//! passed as a query parameter on every request.

pub mod model;

use thiserror::Error;

pub use model::{GameDetail, GameSummary, Page, Screenshot};

/// Base URL of the public RAWG API.
pub const DEFAULT_BASE_URL: &str = "https://api.rawg.io/api";

/// Items requested per listing/search page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Catalog listing order: best Metacritic score first.
pub const LIST_ORDERING: &str = "-metacritic";

const USER_AGENT: &str = concat!("ludex/", env!("CARGO_PKG_VERSION"));

#[derive(Error, Debug)]
pub enum RawgError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),
    #[error("no record with id {0}")]
    NotFound(u64),
}

/// Handle to the remote catalog service.
///
/// Holds a shared [`reqwest::Client`]; cloning is cheap. Every call is a
/// single attempt — there is no retry logic at this layer.
#[derive(Debug, Clone)]
pub struct RawgClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    page_size: u32,
}

impl RawgClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the base URL (used by tests against a local stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch one page of the catalog listing, ordered by `-metacritic`.
    ///
    /// `has_next` in the returned [`Page`] reflects whether the service
    /// advertised a further page.
    pub async fn list_page(&self, page: u32) -> Result<Page, RawgError> {
        tracing::debug!(page, "fetching catalog page");
        let url = format!("{}/games", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("page", &page.to_string()),
                ("page_size", &self.page_size.to_string()),
                ("ordering", LIST_ORDERING),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RawgError::Status(status));
        }

        let wire: model::PageWire = resp.json().await?;
        Ok(wire.into())
    }

    /// Free-text search over the catalog.
    ///
    /// An empty (trimmed) query means "no constraint", not "no results":
    /// it short-circuits to an empty vec without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<GameSummary>, RawgError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        tracing::debug!(query, "searching catalog");

        let url = format!("{}/games", self.base_url);
        let resp = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("search", query),
                ("page_size", &self.page_size.to_string()),
            ])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RawgError::Status(status));
        }

        let wire: model::PageWire = resp.json().await?;
        Ok(wire.into_results())
    }

    /// Fetch the full record for a single game.
    pub async fn detail(&self, id: u64) -> Result<GameDetail, RawgError> {
        let url = format!("{}/games/{}", self.base_url, id);
        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(RawgError::NotFound(id));
        }
        if !status.is_success() {
            return Err(RawgError::Status(status));
        }

        let wire: model::GameDetailWire = resp.json().await?;
        Ok(wire.into())
    }

    /// Fetch the screenshot collection for a game. Absence of screenshots
    /// is a normal empty result.
    pub async fn screenshots(&self, id: u64) -> Result<Vec<Screenshot>, RawgError> {
        let url = format!("{}/games/{}/screenshots", self.base_url, id);
        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RawgError::Status(status));
        }

        let wire: model::ScreenshotsWire = resp.json().await?;
        Ok(wire.results)
    }

    /// Fetch the trailer URL for a game: the first movie record's full-size
    /// stream, if any. `Ok(None)` means the game simply has no trailer.
    pub async fn trailer(&self, id: u64) -> Result<Option<String>, RawgError> {
        let url = format!("{}/games/{}/movies", self.base_url, id);
        let resp = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(RawgError::Status(status));
        }

        let wire: model::MoviesWire = resp.json().await?;
        Ok(wire.first_max_url())
    }
}
