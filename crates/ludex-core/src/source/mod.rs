//! Catalog source trait and implementations.

pub mod mock;
mod rawg;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use ludex_rawg::{GameDetail, GameSummary, Page, RawgError, Screenshot};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// How a remote call failed. The engine collapses every variant to the same
/// benign terminal/empty state; the distinction only matters for logging and
/// for mapping a missing detail record to "not found".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("not found")]
    NotFound,
}

impl From<RawgError> for SourceError {
    fn from(err: RawgError) -> Self {
        match err {
            RawgError::NotFound(_) => Self::NotFound,
            other => Self::Request(other.to_string()),
        }
    }
}

/// A remote catalog that can be listed, searched, and queried per item.
///
/// Object-safe so front ends can hold `Arc<dyn CatalogSource>` and tests can
/// substitute [`mock::MockSource`]. Each call is attempted exactly once;
/// retrying is nobody's job.
pub trait CatalogSource: Send + Sync {
    /// One page of the quality-ordered listing.
    fn list_page(&self, page: u32) -> BoxFuture<'_, Result<Page, SourceError>>;

    /// Free-text search. An empty query must resolve without a network call.
    fn search<'a>(&'a self, query: &'a str)
    -> BoxFuture<'a, Result<Vec<GameSummary>, SourceError>>;

    /// Full record for one item.
    fn detail(&self, id: u64) -> BoxFuture<'_, Result<GameDetail, SourceError>>;

    /// Screenshot collection for one item.
    fn screenshots(&self, id: u64) -> BoxFuture<'_, Result<Vec<Screenshot>, SourceError>>;

    /// Trailer URL for one item, if it has one.
    fn trailer(&self, id: u64) -> BoxFuture<'_, Result<Option<String>, SourceError>>;
}
