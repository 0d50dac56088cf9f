//! Catalog accumulation and filtering engine.
//!
//! The heart of the browser: an insertion-ordered, deduplicated accumulation
//! of catalog pages ([`Catalog`]), a conjunctive predicate filter
//! ([`FilterSet`]), a free-text search override that bypasses the filter
//! pipeline entirely, and a pagination state machine with an in-flight guard
//! ([`CatalogSession`]). All of it is pure state + transition functions;
//! the async fetching lives behind the [`CatalogSource`] trait so front ends
//! (and tests) decide how results come home.

pub mod catalog;
pub mod config_file;
pub mod detail;
pub mod filter;
pub mod search;
pub mod session;
pub mod source;

// Re-export for convenience
pub use catalog::Catalog;
pub use detail::{DetailBundle, load_detail};
pub use filter::{FilterDim, FilterSet, YearDomain, available_values};
pub use search::SearchState;
pub use session::{CatalogSession, SearchDirective, SessionOptions, StreamPhase};
pub use source::{CatalogSource, SourceError};

// The wire models are defined next to the client; everything above works in
// terms of them.
pub use ludex_rawg::{GameDetail, GameSummary, Page, Screenshot};
