use ludex_core::{DetailBundle, GameSummary, Page, SourceError};

/// Commands sent from the TUI to the backend fetch task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    /// Fetch one catalog listing page.
    LoadPage { page: u32 },
    /// Run a free-text search.
    Search { query: String },
    /// Fetch the detail record plus media for one game.
    LoadDetail { id: u64 },
}

/// Events flowing from the backend fetch task to the TUI.
///
/// Each event carries enough identity (page number, query, id) for the app
/// to discard completions that have gone stale since the request was issued.
#[derive(Debug)]
pub enum BackendEvent {
    PageLoaded {
        page: u32,
        outcome: Result<Page, SourceError>,
    },
    SearchLoaded {
        query: String,
        outcome: Result<Vec<GameSummary>, SourceError>,
    },
    DetailLoaded {
        id: u64,
        bundle: DetailBundle,
    },
}
