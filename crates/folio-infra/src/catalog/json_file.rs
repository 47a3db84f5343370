use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use folio_core::ports::{CatalogSourceError, CatalogSourcePort};
use folio_core::CatalogEntry;

use super::CatalogDocument;

/// Catalog read from a JSON document on disk.
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    /// Creates a source reading the given catalog file.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_infra::catalog::JsonFileCatalogSource;
    ///
    /// let source = JsonFileCatalogSource::new("content/catalog.json");
    /// assert!(source.path().ends_with("catalog.json"));
    /// ```
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSourcePort for JsonFileCatalogSource {
    /// Reads and parses the catalog file.
    ///
    /// A missing file is reported as [`CatalogSourceError::NotFound`] with
    /// the path; other I/O failures as [`CatalogSourceError::Io`].
    async fn load_entries(&self) -> Result<Vec<CatalogEntry>, CatalogSourceError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CatalogSourceError::NotFound(
                    self.path.display().to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        };

        debug!(path = %self.path.display(), bytes = content.len(), "Read catalog file");
        CatalogDocument::parse_entries(&content)
    }
}
