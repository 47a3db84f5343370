use async_trait::async_trait;
use tracing::debug;

use folio_core::ports::{CatalogSourceError, CatalogSourcePort};
use folio_core::CatalogEntry;

use super::CatalogDocument;

const BUNDLED_CATALOG: &str = include_str!("../../assets/catalog.json");

/// Catalog compiled into the binary. Changing content means rebuilding.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedCatalogSource {
    content: &'static str,
}

impl EmbeddedCatalogSource {
    pub fn new() -> Self {
        Self {
            content: BUNDLED_CATALOG,
        }
    }

    /// Use another static document, e.g. one bundled by a downstream crate.
    pub fn from_static(content: &'static str) -> Self {
        Self { content }
    }
}

impl Default for EmbeddedCatalogSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSourcePort for EmbeddedCatalogSource {
    async fn load_entries(&self) -> Result<Vec<CatalogEntry>, CatalogSourceError> {
        debug!(bytes = self.content.len(), "Parsing embedded catalog");
        CatalogDocument::parse_entries(self.content)
    }
}
