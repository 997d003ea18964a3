//! Filterable record catalog.
//!
//! A [`Catalog`] is an ordered, immutable view over a static fixture slice
//! with one active filter token. Filtering is stable (original order, never
//! re-sorted) and the token must come from the catalog's predeclared set -
//! an unknown token is a programmer error and panics rather than silently
//! showing nothing.

use pelagic_content::classify::Classifier;
use pelagic_content::record::{ALL_TOKEN, Record};

/// An ordered catalog of static records with a single active filter.
#[derive(Debug, Clone)]
pub struct Catalog<R: Record + 'static> {
    records: &'static [R],
    tokens: &'static [&'static str],
    active: &'static str,
}

impl<R: Record + 'static> Catalog<R> {
    /// Build a catalog over a fixture slice and its declared filter tokens.
    ///
    /// # Panics
    ///
    /// Panics if the token set does not include the `all` sentinel.
    pub fn new(records: &'static [R], tokens: &'static [&'static str]) -> Self {
        assert!(
            tokens.contains(&ALL_TOKEN),
            "catalog token set must include the `{ALL_TOKEN}` sentinel"
        );
        Self {
            records,
            tokens,
            active: ALL_TOKEN,
        }
    }

    /// The declared filter tokens, `all` sentinel included.
    pub fn tokens(&self) -> &'static [&'static str] {
        self.tokens
    }

    /// The active filter token.
    pub fn active_filter(&self) -> &'static str {
        self.active
    }

    /// Set the active filter.
    ///
    /// # Panics
    ///
    /// Panics if `token` is not one of the predeclared tokens. Invalid
    /// tokens are a programmer error, not a runtime condition.
    pub fn set_filter(&mut self, token: &str) {
        let canonical = self
            .tokens
            .iter()
            .copied()
            .find(|t| t.eq_ignore_ascii_case(token))
            .unwrap_or_else(|| panic!("invalid filter token `{token}` for this catalog"));
        if canonical != self.active {
            tracing::debug!(from = self.active, to = canonical, "filter changed");
            self.active = canonical;
        }
    }

    /// Reset the filter to the `all` sentinel.
    pub fn clear_filter(&mut self) {
        self.active = ALL_TOKEN;
    }

    /// The full underlying fixture slice, unfiltered.
    pub fn all(&self) -> &'static [R] {
        self.records
    }

    /// Records matching the active filter, in original catalog order.
    pub fn visible(&self) -> Vec<&'static R> {
        self.records
            .iter()
            .filter(|r| r.matches(self.active))
            .collect()
    }

    /// Whether a record with this id exists in the full catalog.
    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    /// Look up a record by id in the full catalog.
    pub fn get(&self, id: &str) -> Option<&'static R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Group the visible records by classifier bucket.
    ///
    /// Groups come back in rule-table order with the fallback bucket last;
    /// empty buckets are omitted. Within a group, records keep catalog
    /// order. Every visible record lands in exactly one group.
    pub fn grouped(&self, classifier: &Classifier) -> Vec<(&'static str, Vec<&'static R>)> {
        let visible = self.visible();
        classifier
            .buckets()
            .filter_map(|bucket| {
                let members: Vec<_> = visible
                    .iter()
                    .copied()
                    .filter(|r| classifier.classify(r.category()) == bucket)
                    .collect();
                (!members.is_empty()).then_some((bucket, members))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pelagic_content::record::Metric;

    struct Item {
        id: &'static str,
        category: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> &'static str {
            self.id
        }
        fn title(&self) -> &'static str {
            self.id
        }
        fn category(&self) -> &'static str {
            self.category
        }
        fn body(&self) -> &'static str {
            ""
        }
        fn metrics(&self) -> &'static [Metric] {
            &[]
        }
    }

    static ITEMS: [Item; 3] = [
        Item {
            id: "a",
            category: "tech",
        },
        Item {
            id: "b",
            category: "sustain",
        },
        Item {
            id: "c",
            category: "tech",
        },
    ];
    static TOKENS: &[&str] = &["all", "tech", "sustain"];

    #[test]
    fn all_sentinel_returns_everything_in_order() {
        let catalog = Catalog::new(&ITEMS, TOKENS);
        let ids: Vec<_> = catalog.visible().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_preserves_catalog_order() {
        let mut catalog = Catalog::new(&ITEMS, TOKENS);
        catalog.set_filter("tech");
        let ids: Vec<_> = catalog.visible().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn filter_returns_only_matching_records() {
        let mut catalog = Catalog::new(&ITEMS, TOKENS);
        for token in &TOKENS[1..] {
            catalog.set_filter(token);
            assert!(catalog.visible().iter().all(|r| r.matches(token)));
        }
    }

    #[test]
    fn set_filter_is_case_insensitive() {
        let mut catalog = Catalog::new(&ITEMS, TOKENS);
        catalog.set_filter("Tech");
        assert_eq!(catalog.active_filter(), "tech");
    }

    #[test]
    #[should_panic(expected = "invalid filter token")]
    fn unknown_token_panics() {
        let mut catalog = Catalog::new(&ITEMS, TOKENS);
        catalog.set_filter("bogus");
    }

    #[test]
    fn clear_filter_restores_sentinel() {
        let mut catalog = Catalog::new(&ITEMS, TOKENS);
        catalog.set_filter("sustain");
        catalog.clear_filter();
        assert_eq!(catalog.visible().len(), 3);
    }

    #[test]
    fn contains_and_get() {
        let catalog = Catalog::new(&ITEMS, TOKENS);
        assert!(catalog.contains("b"));
        assert!(!catalog.contains("z"));
        assert_eq!(catalog.get("c").unwrap().id(), "c");
    }

    #[test]
    fn grouped_partitions_team_roster() {
        use pelagic_content::team::{FILTER_TOKENS, TEAM};

        let catalog = Catalog::new(&TEAM, FILTER_TOKENS);
        let classifier = Classifier::team();
        let groups = catalog.grouped(&classifier);

        // Partition: nothing lost, nothing duplicated.
        let mut ids: Vec<_> = groups
            .iter()
            .flat_map(|(_, members)| members.iter().map(|m| m.id()))
            .collect();
        assert_eq!(ids.len(), TEAM.len());
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), TEAM.len());

        // Groups follow rule-table order.
        let order: Vec<_> = groups.iter().map(|(bucket, _)| *bucket).collect();
        let expected: Vec<_> = classifier
            .buckets()
            .filter(|b| order.contains(b))
            .collect();
        assert_eq!(order, expected);
    }

    #[test]
    fn grouped_respects_active_filter() {
        use pelagic_content::team::{FILTER_TOKENS, TEAM};

        let mut catalog = Catalog::new(&TEAM, FILTER_TOKENS);
        catalog.set_filter("robotics");
        let classifier = Classifier::team();
        let visible = catalog.visible().len();
        let grouped: usize = catalog
            .grouped(&classifier)
            .iter()
            .map(|(_, members)| members.len())
            .sum();
        assert_eq!(visible, grouped);
        assert!(visible < TEAM.len());
    }
}
