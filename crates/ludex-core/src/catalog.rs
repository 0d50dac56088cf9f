//! Insertion-ordered, identity-deduplicated accumulation of catalog items.

use std::collections::HashMap;

use ludex_rawg::GameSummary;

/// The accumulated collection.
///
/// Invariants: no two entries share an id; an item's position is fixed at
/// first insertion (first-seen wins on position), while a later page that
/// re-contains the id overwrites the entry's content in place (last-write
/// wins on content). Re-merging an overlapping page is therefore idempotent
/// with respect to membership and order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<GameSummary>,
    index: HashMap<u64, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[GameSummary] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&GameSummary> {
        self.index.get(&id).map(|&i| &self.items[i])
    }

    /// Merge one fetched page into the collection.
    pub fn merge_page(&mut self, page: Vec<GameSummary>) {
        for item in page {
            match self.index.get(&item.id) {
                Some(&pos) => self.items[pos] = item,
                None => {
                    self.index.insert(item.id, self.items.len());
                    self.items.push(item);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.index.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(id: u64, name: &str) -> GameSummary {
        GameSummary {
            id,
            name: name.to_string(),
            released: None,
            metacritic: None,
            background_image: None,
            genres: Vec::new(),
            platforms: Vec::new(),
            tags: Vec::new(),
        }
    }

    fn ids(catalog: &Catalog) -> Vec<u64> {
        catalog.items().iter().map(|g| g.id).collect()
    }

    #[test]
    fn merge_appends_new_items_in_order() {
        let mut catalog = Catalog::new();
        catalog.merge_page(vec![game(1, "a"), game(2, "b"), game(3, "c")]);
        assert_eq!(ids(&catalog), vec![1, 2, 3]);
    }

    #[test]
    fn merge_is_idempotent() {
        let page = vec![game(1, "a"), game(2, "b")];
        let mut once = Catalog::new();
        once.merge_page(page.clone());

        let mut twice = Catalog::new();
        twice.merge_page(page.clone());
        twice.merge_page(page);

        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn overlap_keeps_first_seen_position() {
        // The canonical scenario: ids 1-20, then 15-34 with overlap 15-20.
        let mut catalog = Catalog::new();
        catalog.merge_page((1..=20).map(|i| game(i, "first")).collect());
        catalog.merge_page((15..=34).map(|i| game(i, "second")).collect());

        assert_eq!(catalog.len(), 34);
        let expected: Vec<u64> = (1..=34).collect();
        assert_eq!(ids(&catalog), expected);
    }

    #[test]
    fn overlap_overwrites_content_in_place() {
        let mut catalog = Catalog::new();
        catalog.merge_page(vec![game(1, "old"), game(2, "other")]);
        catalog.merge_page(vec![game(1, "new")]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "new");
        assert_eq!(ids(&catalog), vec![1, 2]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut catalog = Catalog::new();
        catalog.merge_page(vec![game(1, "a")]);
        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.get(1).is_none());
    }
}
