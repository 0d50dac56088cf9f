//! Free-text search state.
//!
//! While a query is active the search result set *is* the visible set;
//! the predicate filters are suspended (their stored values are retained,
//! not cleared) and pagination state is untouched.

use ludex_rawg::GameSummary;

/// The current query plus the most recent remote result set.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    results: Vec<GameSummary>,
    /// Whether `results` reflects a completed fetch for `query`. Until then
    /// the previous result set is shown and "no results" stays quiet.
    loaded: bool,
}

impl SearchState {
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[GameSummary] {
        &self.results
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Begin (or retarget) a search. The previous result set stays visible
    /// until the new one arrives.
    pub fn begin(&mut self, query: &str) {
        self.query = query.to_string();
        self.loaded = false;
    }

    /// Record the result set for `query`. Returns false (and changes
    /// nothing) if the query has moved on since the fetch was issued.
    pub fn complete(&mut self, query: &str, results: Vec<GameSummary>) -> bool {
        if query != self.query {
            return false;
        }
        self.results = results;
        self.loaded = true;
        true
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.loaded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64) -> GameSummary {
        GameSummary {
            id,
            name: format!("game-{id}"),
            released: None,
            metacritic: None,
            background_image: None,
            genres: Vec::new(),
            platforms: Vec::new(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn empty_query_is_inactive() {
        let state = SearchState::default();
        assert!(!state.is_active());
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut state = SearchState::default();
        state.begin("zelda");
        state.begin("zeld"); // user deleted a char before the fetch landed

        assert!(!state.complete("zelda", vec![game(1)]));
        assert!(state.results().is_empty());
        assert!(!state.is_loaded());

        assert!(state.complete("zeld", vec![game(2)]));
        assert_eq!(state.results().len(), 1);
    }

    #[test]
    fn retarget_keeps_previous_results_until_loaded() {
        let mut state = SearchState::default();
        state.begin("mario");
        state.complete("mario", vec![game(1), game(2)]);

        state.begin("mario kart");
        assert!(state.is_active());
        assert!(!state.is_loaded());
        // Old results remain on display while the new fetch is in flight.
        assert_eq!(state.results().len(), 2);
    }

    #[test]
    fn clear_resets_everything() {
        let mut state = SearchState::default();
        state.begin("mario");
        state.complete("mario", vec![game(1)]);
        state.clear();
        assert!(!state.is_active());
        assert!(state.results().is_empty());
        assert!(!state.is_loaded());
    }
}
