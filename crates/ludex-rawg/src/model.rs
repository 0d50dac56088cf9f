//! Wire-format structures for RAWG responses and the flattened records the
//! rest of the workspace consumes.
//!
//! RAWG nests label collections (`genres: [{name}]`, `platforms:
//! [{platform: {name}}]`, `tags: [{name}]`); the public types flatten those
//! to plain string vecs. Records are immutable once fetched — the UI never
//! mutates them, only replaces them wholesale on refetch.

use chrono::NaiveDate;
use serde::Deserialize;

/// A catalog list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSummary {
    pub id: u64,
    pub name: String,
    pub released: Option<NaiveDate>,
    pub metacritic: Option<i32>,
    pub background_image: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub tags: Vec<String>,
}

impl GameSummary {
    /// Calendar year of the release date, if known.
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.released.map(|d| d.year())
    }
}

/// The full record shown in the detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct GameDetail {
    pub id: u64,
    pub name: String,
    pub released: Option<NaiveDate>,
    pub metacritic: Option<i32>,
    pub background_image: Option<String>,
    pub description_raw: Option<String>,
    pub genres: Vec<String>,
    pub platforms: Vec<String>,
    pub developers: Vec<String>,
    pub publishers: Vec<String>,
    /// Playtime estimate in hours. The service reports 0 for "unknown".
    pub playtime: Option<u32>,
}

/// One screenshot reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Screenshot {
    pub id: u64,
    pub image: String,
}

/// One page of the catalog listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub results: Vec<GameSummary>,
    /// Whether the service advertised a further page (`next` was non-null).
    pub has_next: bool,
}

// ── wire structs ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PlatformRef {
    platform: NamedRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameWire {
    id: u64,
    name: String,
    released: Option<String>,
    metacritic: Option<i32>,
    background_image: Option<String>,
    #[serde(default)]
    genres: Vec<NamedRef>,
    #[serde(default)]
    platforms: Vec<PlatformRef>,
    // Tags are absent on some records; treat missing as empty.
    #[serde(default)]
    tags: Vec<NamedRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PageWire {
    next: Option<String>,
    #[serde(default)]
    results: Vec<GameWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GameDetailWire {
    id: u64,
    name: String,
    released: Option<String>,
    metacritic: Option<i32>,
    background_image: Option<String>,
    description_raw: Option<String>,
    #[serde(default)]
    genres: Vec<NamedRef>,
    #[serde(default)]
    platforms: Vec<PlatformRef>,
    #[serde(default)]
    developers: Vec<NamedRef>,
    #[serde(default)]
    publishers: Vec<NamedRef>,
    playtime: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScreenshotsWire {
    #[serde(default)]
    pub(crate) results: Vec<Screenshot>,
}

#[derive(Debug, Deserialize)]
struct MovieData {
    max: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieWire {
    data: MovieData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoviesWire {
    #[serde(default)]
    results: Vec<MovieWire>,
}

impl MoviesWire {
    pub(crate) fn first_max_url(self) -> Option<String> {
        self.results.into_iter().next().and_then(|m| m.data.max)
    }
}

/// Parse a RAWG `YYYY-MM-DD` release date; anything unparseable collapses
/// to "no release date".
fn parse_released(raw: Option<String>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
}

fn names(refs: Vec<NamedRef>) -> Vec<String> {
    refs.into_iter().map(|r| r.name).collect()
}

fn platform_names(refs: Vec<PlatformRef>) -> Vec<String> {
    refs.into_iter().map(|r| r.platform.name).collect()
}

impl From<GameWire> for GameSummary {
    fn from(wire: GameWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            released: parse_released(wire.released),
            metacritic: wire.metacritic,
            background_image: wire.background_image,
            genres: names(wire.genres),
            platforms: platform_names(wire.platforms),
            tags: names(wire.tags),
        }
    }
}

impl From<PageWire> for Page {
    fn from(wire: PageWire) -> Self {
        Self {
            has_next: wire.next.is_some(),
            results: wire.results.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageWire {
    pub(crate) fn into_results(self) -> Vec<GameSummary> {
        self.results.into_iter().map(Into::into).collect()
    }
}

impl From<GameDetailWire> for GameDetail {
    fn from(wire: GameDetailWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            released: parse_released(wire.released),
            metacritic: wire.metacritic,
            background_image: wire.background_image,
            description_raw: wire.description_raw.filter(|d| !d.is_empty()),
            genres: names(wire.genres),
            platforms: platform_names(wire.platforms),
            developers: names(wire.developers),
            publishers: names(wire.publishers),
            playtime: wire.playtime.filter(|&h| h > 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_JSON: &str = r#"{
        "count": 2,
        "next": "https://api.rawg.io/api/games?page=2",
        "previous": null,
        "results": [
            {
                "id": 3498,
                "name": "Grand Theft Auto V",
                "released": "2013-09-17",
                "metacritic": 92,
                "background_image": "https://media.rawg.io/media/games/456.jpg",
                "genres": [{"name": "Action"}, {"name": "Adventure"}],
                "platforms": [
                    {"platform": {"name": "PC"}},
                    {"platform": {"name": "PlayStation 5"}}
                ],
                "tags": [{"name": "Multiplayer"}, {"name": "Open World"}]
            },
            {
                "id": 4200,
                "name": "Portal 2",
                "released": null,
                "metacritic": null,
                "background_image": null,
                "genres": [],
                "platforms": []
            }
        ]
    }"#;

    #[test]
    fn page_parses_and_flattens() {
        let wire: PageWire = serde_json::from_str(PAGE_JSON).unwrap();
        let page: Page = wire.into();

        assert!(page.has_next);
        assert_eq!(page.results.len(), 2);

        let gta = &page.results[0];
        assert_eq!(gta.id, 3498);
        assert_eq!(gta.release_year(), Some(2013));
        assert_eq!(gta.metacritic, Some(92));
        assert_eq!(gta.genres, vec!["Action", "Adventure"]);
        assert_eq!(gta.platforms, vec!["PC", "PlayStation 5"]);
        assert_eq!(gta.tags, vec!["Multiplayer", "Open World"]);
    }

    #[test]
    fn missing_optionals_collapse_to_none_or_empty() {
        let wire: PageWire = serde_json::from_str(PAGE_JSON).unwrap();
        let page: Page = wire.into();

        let portal = &page.results[1];
        assert_eq!(portal.released, None);
        assert_eq!(portal.release_year(), None);
        assert_eq!(portal.metacritic, None);
        assert!(portal.genres.is_empty());
        // Tags were absent entirely, not just empty.
        assert!(portal.tags.is_empty());
    }

    #[test]
    fn last_page_has_no_next() {
        let json = r#"{"count": 0, "next": null, "previous": null, "results": []}"#;
        let wire: PageWire = serde_json::from_str(json).unwrap();
        let page: Page = wire.into();
        assert!(!page.has_next);
        assert!(page.results.is_empty());
    }

    #[test]
    fn garbage_release_date_is_dropped() {
        let json = r#"{
            "next": null,
            "results": [{"id": 1, "name": "X", "released": "soon(tm)"}]
        }"#;
        let wire: PageWire = serde_json::from_str(json).unwrap();
        let page: Page = wire.into();
        assert_eq!(page.results[0].released, None);
    }

    #[test]
    fn detail_parses() {
        let json = r#"{
            "id": 3498,
            "name": "Grand Theft Auto V",
            "released": "2013-09-17",
            "metacritic": 92,
            "background_image": null,
            "description_raw": "An open world adventure.",
            "genres": [{"name": "Action"}],
            "platforms": [{"platform": {"name": "PC"}}],
            "developers": [{"name": "Rockstar North"}],
            "publishers": [{"name": "Rockstar Games"}],
            "playtime": 73
        }"#;
        let wire: GameDetailWire = serde_json::from_str(json).unwrap();
        let detail: GameDetail = wire.into();

        assert_eq!(detail.description_raw.as_deref(), Some("An open world adventure."));
        assert_eq!(detail.developers, vec!["Rockstar North"]);
        assert_eq!(detail.publishers, vec!["Rockstar Games"]);
        assert_eq!(detail.playtime, Some(73));
    }

    #[test]
    fn zero_playtime_means_unknown() {
        let json = r#"{"id": 1, "name": "X", "playtime": 0}"#;
        let wire: GameDetailWire = serde_json::from_str(json).unwrap();
        let detail: GameDetail = wire.into();
        assert_eq!(detail.playtime, None);
    }

    #[test]
    fn trailer_takes_first_movie_max() {
        let json = r#"{
            "results": [
                {"data": {"480": "https://cdn/480.mp4", "max": "https://cdn/full.mp4"}},
                {"data": {"max": "https://cdn/other.mp4"}}
            ]
        }"#;
        let wire: MoviesWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.first_max_url().as_deref(), Some("https://cdn/full.mp4"));
    }

    #[test]
    fn no_movies_is_no_trailer() {
        let json = r#"{"results": []}"#;
        let wire: MoviesWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.first_max_url(), None);
    }

    #[test]
    fn screenshots_parse() {
        let json = r#"{"results": [{"id": 10, "image": "https://media/shot1.jpg"}]}"#;
        let wire: ScreenshotsWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.results.len(), 1);
        assert_eq!(wire.results[0].image, "https://media/shot1.jpg");
    }
}
