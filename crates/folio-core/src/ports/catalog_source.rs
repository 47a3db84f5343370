use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::CatalogEntry;

#[derive(Debug, Error)]
pub enum CatalogSourceError {
    #[error("catalog source not found: {0}")]
    NotFound(String),

    #[error("catalog source unreadable: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog document malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported catalog schema version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },
}

/// Static content source yielding the catalog entries in declaration order.
///
/// Called exactly once at startup; shape validation happens afterwards in
/// [`Catalog::new`](crate::catalog::Catalog::new).
#[async_trait]
pub trait CatalogSourcePort: Send + Sync {
    async fn load_entries(&self) -> Result<Vec<CatalogEntry>, CatalogSourceError>;
}
