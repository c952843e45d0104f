//! Incremental search over the catalog, one instance per picker.

use crate::catalog::Catalog;
use crate::country::Country;

/// Query text for one picker. Filtering is recomputed on every call;
/// catalogs are small enough that a linear scan per keystroke is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySearch {
    query: String,
}

impl CountrySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Countries matching the current query, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Country> {
        catalog.filter(&self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Country::new("Brazil", "BR", "+55"),
            Country::new("France", "FR", "+33"),
            Country::new("Germany", "DE", "+49"),
        ])
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let catalog = catalog();
        let search = CountrySearch::new();
        assert_eq!(search.apply(&catalog).len(), 3);
    }

    #[test]
    fn test_incremental_typing() {
        let catalog = catalog();
        let mut search = CountrySearch::new();
        search.push('F');
        let names: Vec<&str> = search.apply(&catalog).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["France"]);

        search.pop();
        search.push('e');
        let names: Vec<&str> = search.apply(&catalog).iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["France", "Germany"]);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut active = CountrySearch::new();
        let default = CountrySearch::new();
        active.set_query("bra");
        assert_eq!(active.query(), "bra");
        assert_eq!(default.query(), "");
    }
}
