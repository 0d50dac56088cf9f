//! Browsing-session state machine.
//!
//! One [`CatalogSession`] owns everything a list view needs: the accumulated
//! collection, the predicate set, the search override, and the pagination
//! cursor. All mutation happens through explicit transition functions
//! (`begin_page_fetch` / `on_page_loaded` / `on_search_loaded` / filter
//! setters / `reset`), so the no-op and terminal conditions are plain state
//! properties, testable without any timing tricks. The session performs no
//! I/O itself; callers fetch through a [`crate::CatalogSource`] and report
//! outcomes back.

use ludex_rawg::{GameSummary, Page};

use crate::catalog::Catalog;
use crate::filter::{FilterDim, FilterSet, YearDomain, available_values};
use crate::search::SearchState;
use crate::source::SourceError;

/// Pagination stream phase.
///
/// `Exhausted` is one-way within a session: a fetch error, an empty page, or
/// the service reporting no further page all land here, and only an explicit
/// [`CatalogSession::reset`] leaves it. `Fetching` is the in-flight guard —
/// while a page request is outstanding no second one can start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamPhase {
    Idle,
    Fetching,
    Exhausted,
}

/// Session tuning knobs.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub year_domain: YearDomain,
    /// When the filtered view comes up empty and more pages remain, hint the
    /// caller to fetch one more page. Off by default; bounded to a single
    /// hint per recomputation so an unsatisfiable filter combination cannot
    /// trigger runaway fetching.
    pub backfill: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            year_domain: YearDomain::default(),
            backfill: false,
        }
    }
}

/// What a search submission asks of the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchDirective {
    /// Query was empty: search deactivated, the predicate-filtered view is
    /// current again. Nothing to fetch.
    Cleared,
    /// Fetch this query and report back via
    /// [`CatalogSession::on_search_loaded`].
    Fetch(String),
}

const FIRST_PAGE: u32 = 1;

pub struct CatalogSession {
    catalog: Catalog,
    filters: FilterSet,
    search: SearchState,
    next_page: u32,
    phase: StreamPhase,
    options: SessionOptions,
    backfill_armed: bool,
}

impl CatalogSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            catalog: Catalog::new(),
            filters: FilterSet::default(),
            search: SearchState::default(),
            next_page: FIRST_PAGE,
            phase: StreamPhase::Idle,
            options,
            backfill_armed: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn phase(&self) -> StreamPhase {
        self.phase
    }

    /// Whether further pages may exist.
    pub fn has_more(&self) -> bool {
        self.phase != StreamPhase::Exhausted
    }

    pub fn year_domain(&self) -> YearDomain {
        self.options.year_domain
    }

    // ── pagination ───────────────────────────────────────────────

    /// Claim the next page for fetching.
    ///
    /// Returns the page number and moves to `Fetching`, or `None` when a
    /// fetch is already outstanding (in-flight guard) or the stream is
    /// exhausted. `None` means: do not touch the network.
    pub fn begin_page_fetch(&mut self) -> Option<u32> {
        match self.phase {
            StreamPhase::Idle => {
                self.phase = StreamPhase::Fetching;
                Some(self.next_page)
            }
            StreamPhase::Fetching | StreamPhase::Exhausted => None,
        }
    }

    /// Apply the outcome of a page fetch.
    ///
    /// A fetch failure is treated exactly like end-of-data: the stream goes
    /// `Exhausted` for the rest of the session. An empty page is the normal
    /// terminal state, not an error. Outcomes for a page we are not waiting
    /// on (a fetch that outlived a `reset`) are discarded.
    pub fn on_page_loaded(&mut self, page: u32, outcome: Result<Page, SourceError>) {
        if self.phase != StreamPhase::Fetching || page != self.next_page {
            tracing::debug!(page, "discarding stale page result");
            return;
        }

        match outcome {
            Err(err) => {
                tracing::warn!(page, error = %err, "listing fetch failed; treating as end of data");
                self.phase = StreamPhase::Exhausted;
            }
            Ok(fetched) if fetched.results.is_empty() => {
                self.phase = StreamPhase::Exhausted;
            }
            Ok(fetched) => {
                self.catalog.merge_page(fetched.results);
                self.next_page += 1;
                self.phase = if fetched.has_next {
                    StreamPhase::Idle
                } else {
                    StreamPhase::Exhausted
                };
                self.recompute();
            }
        }
    }

    /// Clear the whole session back to its start state. Only ever driven by
    /// an explicit user action, never automatically.
    pub fn reset(&mut self) {
        self.catalog.clear();
        self.filters.clear();
        self.search.clear();
        self.next_page = FIRST_PAGE;
        self.phase = StreamPhase::Idle;
        self.backfill_armed = false;
    }

    // ── filters ──────────────────────────────────────────────────

    pub fn set_year(&mut self, value: Option<i32>) {
        self.filters.year = value;
        self.recompute();
    }

    pub fn set_genre(&mut self, value: Option<String>) {
        self.filters.genre = value;
        self.recompute();
    }

    pub fn set_platform(&mut self, value: Option<String>) {
        self.filters.platform = value;
        self.recompute();
    }

    pub fn set_tag(&mut self, value: Option<String>) {
        self.filters.tag = value;
        self.recompute();
    }

    /// Selectable values for a label dimension, derived from items passing
    /// the *other* predicates. Year uses [`Self::year_domain`] instead.
    pub fn available(&self, dim: FilterDim) -> Vec<String> {
        available_values(self.catalog.items(), &self.filters, dim)
    }

    // ── search override ──────────────────────────────────────────

    /// Submit a query. Empty input deactivates the search (predicates resume
    /// effect); anything else suspends the filter pipeline and asks the
    /// caller to fetch.
    pub fn submit_search(&mut self, query: &str) -> SearchDirective {
        let query = query.trim();
        if query.is_empty() {
            self.search.clear();
            self.recompute();
            return SearchDirective::Cleared;
        }
        self.search.begin(query);
        SearchDirective::Fetch(query.to_string())
    }

    /// Apply the outcome of a search fetch. Failures are logged and the
    /// previously visible set stays put; results for a query the user has
    /// since edited away are silently discarded.
    pub fn on_search_loaded(&mut self, query: &str, outcome: Result<Vec<GameSummary>, SourceError>) {
        match outcome {
            Ok(results) => {
                if !self.search.complete(query, results) {
                    tracing::debug!(query, "discarding stale search result");
                }
            }
            Err(err) => {
                tracing::warn!(query, error = %err, "search failed; keeping previous view");
            }
        }
    }

    pub fn search_active(&self) -> bool {
        self.search.is_active()
    }

    pub fn search_query(&self) -> &str {
        self.search.query()
    }

    // ── the visible set ──────────────────────────────────────────

    /// The items currently on display, in accumulation order. While a search
    /// query is active this is the raw remote result set and the predicate
    /// filters have no effect.
    pub fn visible(&self) -> Vec<&GameSummary> {
        if self.search.is_active() {
            self.search.results().iter().collect()
        } else {
            self.catalog
                .items()
                .iter()
                .filter(|g| self.filters.matches(g))
                .collect()
        }
    }

    /// "Nothing matches" — as opposed to "nothing loaded yet". For the
    /// filtered view that means an empty visible set over a non-empty
    /// collection; for an active search, a completed fetch with zero hits.
    pub fn no_results(&self) -> bool {
        if self.search.is_active() {
            self.search.is_loaded() && self.search.results().is_empty()
        } else {
            !self.catalog.is_empty() && self.visible().is_empty()
        }
    }

    /// One-shot backfill hint; consuming it disarms it until the next
    /// recomputation re-arms it. Callers follow up with
    /// [`Self::begin_page_fetch`], whose own guards still apply.
    pub fn wants_backfill(&mut self) -> bool {
        std::mem::take(&mut self.backfill_armed)
    }

    /// Re-arm the backfill hint after any event that changed the filtered
    /// view (page merge or predicate edit).
    fn recompute(&mut self) {
        self.backfill_armed = self.options.backfill
            && !self.search.is_active()
            && self.phase == StreamPhase::Idle
            && !self.catalog.is_empty()
            && self.visible().is_empty();
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn game(id: u64, year: i32, genre: &str) -> GameSummary {
        GameSummary {
            id,
            name: format!("game-{id}"),
            released: NaiveDate::from_ymd_opt(year, 1, 15),
            metacritic: Some(80),
            background_image: None,
            genres: vec![genre.to_string()],
            platforms: vec!["PC".to_string()],
            tags: Vec::new(),
        }
    }

    fn page(games: Vec<GameSummary>, has_next: bool) -> Page {
        Page {
            results: games,
            has_next,
        }
    }

    fn visible_ids(session: &CatalogSession) -> Vec<u64> {
        session.visible().iter().map(|g| g.id).collect()
    }

    // ── pagination state machine ────────────────────────────────

    #[test]
    fn begin_page_fetch_claims_sequential_pages() {
        let mut session = CatalogSession::default();
        assert_eq!(session.begin_page_fetch(), Some(1));
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], true)));
        assert_eq!(session.begin_page_fetch(), Some(2));
    }

    #[test]
    fn in_flight_guard_suppresses_second_fetch() {
        let mut session = CatalogSession::default();
        assert_eq!(session.begin_page_fetch(), Some(1));
        // A second call while the first is outstanding is a no-op.
        assert_eq!(session.begin_page_fetch(), None);
        assert_eq!(session.phase(), StreamPhase::Fetching);
    }

    #[test]
    fn empty_page_exhausts_without_error() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![], true)));
        assert_eq!(session.phase(), StreamPhase::Exhausted);
        assert!(!session.has_more());
        assert_eq!(session.begin_page_fetch(), None);
        // Nothing loaded yet, so this is not "no results".
        assert!(!session.no_results());
    }

    #[test]
    fn fetch_error_exhausts_for_the_session() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(1, Err(SourceError::Request("boom".to_string())));
        assert_eq!(session.phase(), StreamPhase::Exhausted);
        assert_eq!(session.begin_page_fetch(), None);
    }

    #[test]
    fn service_reporting_no_next_page_exhausts_after_merge() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], false)));
        assert_eq!(session.catalog().len(), 1);
        assert_eq!(session.phase(), StreamPhase::Exhausted);
    }

    #[test]
    fn stale_page_outcome_is_discarded() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.reset();
        // The old fetch completes after the reset, but we are not Fetching.
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], true)));
        assert!(session.catalog().is_empty());
        assert_eq!(session.phase(), StreamPhase::Idle);
    }

    #[test]
    fn overlapping_pages_accumulate_without_duplicates() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(
            1,
            Ok(page((1..=20).map(|i| game(i, 2020, "Action")).collect(), true)),
        );
        session.begin_page_fetch();
        session.on_page_loaded(
            2,
            Ok(page((15..=34).map(|i| game(i, 2020, "Action")).collect(), true)),
        );

        assert_eq!(session.catalog().len(), 34);
        let expected: Vec<u64> = (1..=34).collect();
        assert_eq!(visible_ids(&session), expected);
    }

    #[test]
    fn reset_restores_start_state() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], false)));
        session.set_genre(Some("Action".to_string()));
        session.submit_search("zelda");

        session.reset();

        assert!(session.catalog().is_empty());
        assert!(session.filters().is_empty());
        assert!(!session.search_active());
        assert_eq!(session.phase(), StreamPhase::Idle);
        assert_eq!(session.begin_page_fetch(), Some(1));
    }

    // ── filtering ───────────────────────────────────────────────

    #[test]
    fn filters_narrow_the_visible_set_in_order() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(
            1,
            Ok(page(
                vec![
                    game(1, 2020, "Action"),
                    game(2, 2021, "Puzzle"),
                    game(3, 2020, "Action"),
                ],
                true,
            )),
        );

        session.set_genre(Some("Action".to_string()));
        assert_eq!(visible_ids(&session), vec![1, 3]);

        session.set_year(Some(2021));
        assert!(session.visible().is_empty());
        assert!(session.no_results());

        session.set_genre(None);
        assert_eq!(visible_ids(&session), vec![2]);
    }

    #[test]
    fn no_results_is_false_before_anything_loads() {
        let session = CatalogSession::default();
        assert!(!session.no_results());
        assert!(session.visible().is_empty());
    }

    #[test]
    fn available_values_follow_other_predicates() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(
            1,
            Ok(page(
                vec![game(1, 2020, "Action"), game(2, 2021, "Puzzle")],
                true,
            )),
        );
        session.set_year(Some(2020));

        assert_eq!(session.available(FilterDim::Genre), vec!["Action"]);
        // The year domain is fixed, not derived from loaded data.
        assert!(!session.year_domain().years().is_empty());
    }

    // ── search override ─────────────────────────────────────────

    #[test]
    fn active_search_bypasses_filters() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], true)));
        session.set_genre(Some("Puzzle".to_string()));
        assert!(session.visible().is_empty());

        let directive = session.submit_search("mario");
        assert_eq!(directive, SearchDirective::Fetch("mario".to_string()));
        session.on_search_loaded("mario", Ok(vec![game(99, 1996, "Platformer")]));

        // The raw search result is visible even though it fails the genre
        // predicate; the predicate is suspended, not cleared.
        assert_eq!(visible_ids(&session), vec![99]);
        assert_eq!(session.filters().genre.as_deref(), Some("Puzzle"));

        // Editing filters while searching does not change the visible set.
        session.set_genre(Some("Action".to_string()));
        assert_eq!(visible_ids(&session), vec![99]);
    }

    #[test]
    fn empty_query_falls_back_to_filtered_view() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(
            1,
            Ok(page(vec![game(1, 2020, "Action"), game(2, 2020, "Puzzle")], true)),
        );
        session.set_genre(Some("Action".to_string()));

        session.submit_search("mario");
        session.on_search_loaded("mario", Ok(vec![game(99, 1996, "Platformer")]));
        assert_eq!(visible_ids(&session), vec![99]);

        // Clearing the query restores the predicate-filtered view, not the
        // full collection and not an empty list.
        assert_eq!(session.submit_search(""), SearchDirective::Cleared);
        assert_eq!(visible_ids(&session), vec![1]);
    }

    #[test]
    fn whitespace_query_counts_as_empty() {
        let mut session = CatalogSession::default();
        assert_eq!(session.submit_search("   "), SearchDirective::Cleared);
        assert!(!session.search_active());
    }

    #[test]
    fn search_no_results_flag() {
        let mut session = CatalogSession::default();
        session.submit_search("qqqqq");
        // In flight: not "no results" yet.
        assert!(!session.no_results());
        session.on_search_loaded("qqqqq", Ok(vec![]));
        assert!(session.no_results());
    }

    #[test]
    fn failed_search_keeps_previous_view() {
        let mut session = CatalogSession::default();
        session.submit_search("mario");
        session.on_search_loaded("mario", Ok(vec![game(99, 1996, "Platformer")]));
        assert_eq!(visible_ids(&session), vec![99]);

        session.submit_search("mario kart");
        session.on_search_loaded("mario kart", Err(SourceError::Request("boom".to_string())));

        // Failure only logs; the last result set stays on display.
        assert_eq!(visible_ids(&session), vec![99]);
    }

    #[test]
    fn stale_search_result_is_discarded() {
        let mut session = CatalogSession::default();
        session.submit_search("zelda");
        session.submit_search("zeld");
        session.on_search_loaded("zelda", Ok(vec![game(1, 2017, "Adventure")]));
        assert!(session.visible().is_empty());
    }

    // ── backfill policy ─────────────────────────────────────────

    #[test]
    fn backfill_is_off_by_default() {
        let mut session = CatalogSession::default();
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], true)));
        session.set_genre(Some("Puzzle".to_string()));
        assert!(session.visible().is_empty());
        assert!(!session.wants_backfill());
    }

    #[test]
    fn backfill_hints_once_per_recomputation() {
        let mut session = CatalogSession::new(SessionOptions {
            backfill: true,
            ..Default::default()
        });
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], true)));
        session.set_genre(Some("Puzzle".to_string()));

        // One hint, consumed once.
        assert!(session.wants_backfill());
        assert!(!session.wants_backfill());

        // A backfilled page that still matches nothing re-arms exactly once.
        let p = session.begin_page_fetch().unwrap();
        assert!(!session.wants_backfill()); // nothing while in flight
        session.on_page_loaded(p, Ok(page(vec![game(2, 2020, "Action")], true)));
        assert!(session.wants_backfill());
        assert!(!session.wants_backfill());
    }

    #[test]
    fn backfill_never_hints_when_exhausted() {
        let mut session = CatalogSession::new(SessionOptions {
            backfill: true,
            ..Default::default()
        });
        session.begin_page_fetch();
        session.on_page_loaded(1, Ok(page(vec![game(1, 2020, "Action")], false)));
        session.set_genre(Some("Puzzle".to_string()));
        assert!(!session.wants_backfill());
    }
}
