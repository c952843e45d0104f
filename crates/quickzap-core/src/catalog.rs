//! The ordered set of selectable countries.

use std::collections::HashSet;

use crate::country::Country;
use crate::fallback::fallback_countries;

/// Code of the country selected when no preference resolves.
pub const BRAZIL_CODE: &str = "BR";

/// Countries sorted by display name, unique by code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    /// Build a catalog, dropping repeated codes (first occurrence wins)
    /// and sorting by name.
    pub fn new(countries: Vec<Country>) -> Self {
        let mut seen = HashSet::new();
        let mut countries: Vec<Country> = countries
            .into_iter()
            .filter(|c| seen.insert(c.code.clone()))
            .collect();
        countries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Self { countries }
    }

    /// The built-in fallback list.
    pub fn builtin() -> Self {
        Self::new(fallback_countries())
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn as_slice(&self) -> &[Country] {
        &self.countries
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Brazil if present, otherwise the first entry.
    pub fn default_country(&self) -> Option<&Country> {
        self.find_by_code(BRAZIL_CODE).or_else(|| self.countries.first())
    }

    /// Countries whose name or code contains `query`, ignoring case.
    /// An empty query yields the whole catalog.
    pub fn filter(&self, query: &str) -> Vec<&Country> {
        let query = query.to_lowercase();
        self.countries.iter().filter(|c| c.matches(&query)).collect()
    }
}
