//! End-to-end session flow against the mock source: paginate with overlap,
//! filter, search, deactivate, reset — asserting the network is only touched
//! when the state machine says so.

use chrono::NaiveDate;
use ludex_core::source::mock::MockSource;
use ludex_core::{
    CatalogSession, CatalogSource, GameSummary, Page, SearchDirective, SessionOptions, SourceError,
    StreamPhase,
};

fn game(id: u64, year: i32, genre: &str) -> GameSummary {
    GameSummary {
        id,
        name: format!("game-{id}"),
        released: NaiveDate::from_ymd_opt(year, 3, 1),
        metacritic: Some(85),
        background_image: None,
        genres: vec![genre.to_string()],
        platforms: vec!["PC".to_string()],
        tags: vec!["Singleplayer".to_string()],
    }
}

fn page(games: Vec<GameSummary>, has_next: bool) -> Page {
    Page {
        results: games,
        has_next,
    }
}

/// Drive one load-more round trip through the source.
async fn load_next(session: &mut CatalogSession, source: &MockSource) {
    if let Some(page) = session.begin_page_fetch() {
        let outcome = source.list_page(page).await;
        session.on_page_loaded(page, outcome);
    }
}

#[tokio::test]
async fn browse_filter_search_reset_flow() {
    let source = MockSource::new()
        .with_pages(vec![
            Ok(page((1..=20).map(|i| game(i, 2020, "Action")).collect(), true)),
            Ok(page(
                (15..=34).map(|i| game(i, 2021, "Adventure")).collect(),
                true,
            )),
            Ok(page(vec![], true)),
        ])
        .with_search(Ok(vec![game(500, 2017, "Adventure")]));

    let mut session = CatalogSession::new(SessionOptions::default());

    // Two pages with an overlap: 34 unique entries, first-seen order.
    load_next(&mut session, &source).await;
    load_next(&mut session, &source).await;
    assert_eq!(session.catalog().len(), 34);
    let ids: Vec<u64> = session.visible().iter().map(|g| g.id).collect();
    assert_eq!(ids, (1..=34).collect::<Vec<u64>>());
    // Overlapping ids keep their position but carry the fresher content.
    assert_eq!(session.catalog().get(15).unwrap().genres, vec!["Adventure"]);

    // Conjunctive filtering over the accumulated collection.
    session.set_genre(Some("Adventure".to_string()));
    session.set_year(Some(2021));
    assert_eq!(session.visible().len(), 20);
    assert!(!session.no_results());

    // Search bypasses the predicates entirely.
    let SearchDirective::Fetch(query) = session.submit_search("lost relic") else {
        panic!("expected a fetch directive");
    };
    let outcome = source.search(&query).await;
    session.on_search_loaded(&query, outcome);
    let ids: Vec<u64> = session.visible().iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![500]);

    // Deactivating restores the predicate-filtered view.
    assert_eq!(session.submit_search(""), SearchDirective::Cleared);
    assert_eq!(session.visible().len(), 20);

    // Third page is empty: terminal state, and no further calls go out.
    load_next(&mut session, &source).await;
    assert_eq!(session.phase(), StreamPhase::Exhausted);
    let calls_before = source.list_calls();
    load_next(&mut session, &source).await;
    load_next(&mut session, &source).await;
    assert_eq!(source.list_calls(), calls_before);

    // Reset starts the whole session over.
    session.reset();
    assert!(session.catalog().is_empty());
    assert_eq!(session.begin_page_fetch(), Some(1));
}

#[tokio::test]
async fn listing_failure_is_end_of_data() {
    let source =
        MockSource::new().with_pages(vec![Err(SourceError::Request("connection reset".into()))]);
    let mut session = CatalogSession::default();

    load_next(&mut session, &source).await;
    assert_eq!(session.phase(), StreamPhase::Exhausted);
    assert!(session.catalog().is_empty());

    // Permanently done for this session: no more network traffic.
    load_next(&mut session, &source).await;
    assert_eq!(source.list_calls(), 1);
}

#[tokio::test]
async fn empty_search_query_never_reaches_the_network() {
    let source = MockSource::new();
    let results = source.search("   ").await.unwrap();
    assert!(results.is_empty());
    assert_eq!(source.search_calls(), 0);
}

#[tokio::test]
async fn backfill_fetches_one_extra_page_when_enabled() {
    let source = MockSource::new().with_pages(vec![
        Ok(page(vec![game(1, 2020, "Action")], true)),
        Ok(page(vec![game(2, 2021, "Adventure")], true)),
    ]);
    let mut session = CatalogSession::new(SessionOptions {
        backfill: true,
        ..Default::default()
    });

    load_next(&mut session, &source).await;
    session.set_genre(Some("Adventure".to_string()));
    assert!(session.visible().is_empty());

    // The empty filtered view hints exactly one proactive fetch.
    assert!(session.wants_backfill());
    load_next(&mut session, &source).await;
    assert_eq!(source.list_calls(), 2);
    assert_eq!(session.visible().len(), 1);

    // View is non-empty now; no further hint.
    assert!(!session.wants_backfill());
}
