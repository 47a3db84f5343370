use serde::Serialize;

use folio_core::{CatalogEntry, CatalogFilter};

/// Project list page model: the filtered entries split into the featured
/// strip and the regular grid, both in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectListing {
    pub filter: CatalogFilter,
    pub featured: Vec<CatalogEntry>,
    pub regular: Vec<CatalogEntry>,
}

impl ProjectListing {
    pub fn len(&self) -> usize {
        self.featured.len() + self.regular.len()
    }

    /// No entry matched; the view shows the "reset filters" empty state.
    pub fn is_empty(&self) -> bool {
        self.featured.is_empty() && self.regular.is_empty()
    }

    /// Featured entries first, then the rest.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.featured.iter().chain(self.regular.iter())
    }
}
