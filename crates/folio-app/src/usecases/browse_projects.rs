use std::sync::Arc;

use tracing::debug;

use folio_core::{Catalog, CatalogFilter, CategoryCount};

use crate::models::ProjectListing;

/// Use case backing the project list page.
pub struct BrowseProjects {
    catalog: Arc<Catalog>,
}

impl BrowseProjects {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Apply `filter` and split the result into featured / regular.
    ///
    /// An empty listing is a normal outcome, not an error.
    pub fn execute(&self, filter: &CatalogFilter) -> ProjectListing {
        let (featured, regular): (Vec<_>, Vec<_>) = self
            .catalog
            .filter(filter)
            .into_iter()
            .cloned()
            .partition(|entry| entry.featured);

        debug!(
            category = filter.category.slug(),
            toggles = filter.toggles.len(),
            query = %filter.query,
            matched = featured.len() + regular.len(),
            "Project list filtered"
        );

        ProjectListing {
            filter: filter.clone(),
            featured,
            regular,
        }
    }

    /// Filter-bar counts over the whole catalog, independent of the current filter.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        self.catalog.category_counts()
    }
}
