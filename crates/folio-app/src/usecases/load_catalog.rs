//! Use case for loading the content catalog at startup

use std::sync::Arc;

use tracing::{info, info_span, Instrument};

use folio_core::ports::{CatalogSourceError, CatalogSourcePort};
use folio_core::{Catalog, CatalogError};

#[derive(Debug, thiserror::Error)]
pub enum LoadCatalogError {
    #[error("load catalog source failed: {0}")]
    Source(#[from] CatalogSourceError),
    #[error("catalog content is invalid: {0}")]
    Invalid(#[from] CatalogError),
}

/// Use case for building the immutable [`Catalog`].
///
/// ## Behavior
/// - Reads every entry from the content source
/// - Validates shape (unique, non-blank ids and display strings)
/// - Returns the catalog ready to be shared read-only
pub struct LoadCatalog {
    source: Arc<dyn CatalogSourcePort>,
}

impl LoadCatalog {
    pub fn new(source: Arc<dyn CatalogSourcePort>) -> Self {
        Self { source }
    }

    pub async fn execute(&self) -> Result<Catalog, LoadCatalogError> {
        let span = info_span!("usecase.load_catalog.execute");

        async {
            let entries = self.source.load_entries().await?;
            info!(count = entries.len(), "Catalog entries read from source");

            let catalog = Catalog::new(entries)?;
            info!(
                featured = catalog.featured().len(),
                "Catalog loaded successfully"
            );
            Ok(catalog)
        }
        .instrument(span)
        .await
    }
}
