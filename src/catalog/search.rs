//! Partial-name suggestions for guess input

use crate::catalog::{Catalog, Location};

impl Catalog {
    /// Suggest locations for partially typed input
    ///
    /// Prefix matches come first, then names that merely contain the query.
    /// Catalog order is kept within each group. Blank input yields nothing.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&Location> {
        let query = query.trim().to_lowercase();
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let (prefix, contains): (Vec<&Location>, Vec<&Location>) = self
            .locations()
            .iter()
            .filter(|l| l.name.to_lowercase().contains(&query))
            .partition(|l| l.name.to_lowercase().starts_with(&query));

        prefix.into_iter().chain(contains).take(limit).collect()
    }
}
