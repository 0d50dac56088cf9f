//! Conjunctive predicate filtering and selectable-value derivation.

use chrono::Datelike;
use ludex_rawg::GameSummary;

/// The four filter dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDim {
    Year,
    Genre,
    Platform,
    Tag,
}

impl FilterDim {
    pub fn all() -> [FilterDim; 4] {
        [Self::Year, Self::Genre, Self::Platform, Self::Tag]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Genre => "Genre",
            Self::Platform => "Platform",
            Self::Tag => "Tag",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Year => Self::Genre,
            Self::Genre => Self::Platform,
            Self::Platform => Self::Tag,
            Self::Tag => Self::Year,
        }
    }
}

/// Four independent optional predicates, ANDed together.
///
/// An unset predicate imposes no restriction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub tag: Option<String>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && self.genre.is_none()
            && self.platform.is_none()
            && self.tag.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Does `game` pass every set predicate?
    pub fn matches(&self, game: &GameSummary) -> bool {
        if let Some(year) = self.year
            && game.release_year() != Some(year)
        {
            return false;
        }
        if let Some(ref genre) = self.genre
            && !game.genres.iter().any(|g| g == genre)
        {
            return false;
        }
        if let Some(ref platform) = self.platform
            && !game.platforms.iter().any(|p| p == platform)
        {
            return false;
        }
        if let Some(ref tag) = self.tag
            && !game.tags.iter().any(|t| t == tag)
        {
            return false;
        }
        true
    }

    /// Copy of this set with one dimension unset. Used when deriving the
    /// selectable values for that dimension.
    pub fn without(&self, dim: FilterDim) -> FilterSet {
        let mut out = self.clone();
        match dim {
            FilterDim::Year => out.year = None,
            FilterDim::Genre => out.genre = None,
            FilterDim::Platform => out.platform = None,
            FilterDim::Tag => out.tag = None,
        }
        out
    }
}

/// Values selectable in `dim` without contradicting the other predicates:
/// the sorted, deduplicated labels occurring among items that pass every
/// predicate *except* `dim`'s own.
///
/// The year dimension has a fixed domain instead — see [`YearDomain`].
pub fn available_values(items: &[GameSummary], filters: &FilterSet, dim: FilterDim) -> Vec<String> {
    let others = filters.without(dim);
    let mut values: Vec<String> = items
        .iter()
        .filter(|g| others.matches(g))
        .flat_map(|g| {
            let labels: &[String] = match dim {
                FilterDim::Genre => &g.genres,
                FilterDim::Platform => &g.platforms,
                FilterDim::Tag => &g.tags,
                FilterDim::Year => &[],
            };
            labels.iter().cloned()
        })
        .collect();
    values.sort();
    values.dedup();
    values
}

/// The fixed year domain offered by the UI: a descending span of the most
/// recent `span` years, independent of what has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearDomain {
    pub newest: i32,
    pub span: u32,
}

/// Default number of years offered (1995 through the current year, at the
/// time the default was chosen).
pub const DEFAULT_YEAR_SPAN: u32 = 31;

impl YearDomain {
    /// Domain ending at the current calendar year.
    pub fn current(span: u32) -> Self {
        Self {
            newest: chrono::Local::now().year(),
            span: span.max(1),
        }
    }

    /// Newest-first list of selectable years.
    pub fn years(&self) -> Vec<i32> {
        (0..self.span as i32).map(|i| self.newest - i).collect()
    }
}

impl Default for YearDomain {
    fn default() -> Self {
        Self::current(DEFAULT_YEAR_SPAN)
    }
}
