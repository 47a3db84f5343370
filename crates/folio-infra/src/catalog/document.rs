use serde::{Deserialize, Serialize};

use folio_core::ports::CatalogSourceError;
use folio_core::CatalogEntry;

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

fn current_schema_version() -> u32 {
    CURRENT_SCHEMA_VERSION
}

/// On-disk catalog format shared by every JSON-backed source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,

    #[serde(default)]
    pub entries: Vec<CatalogEntry>,
}

impl CatalogDocument {
    /// Parse a document and hand back its entries.
    ///
    /// Documents written by a newer schema are rejected rather than
    /// half-understood.
    pub fn parse_entries(content: &str) -> Result<Vec<CatalogEntry>, CatalogSourceError> {
        let document: CatalogDocument = serde_json::from_str(content)?;
        if document.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(CatalogSourceError::UnsupportedVersion {
                found: document.schema_version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }
        Ok(document.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_schema_version_defaults_to_current() {
        let entries = CatalogDocument::parse_entries(r#"{ "entries": [] }"#).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_newer_schema_version_is_rejected() {
        let err = CatalogDocument::parse_entries(r#"{ "schema_version": 99, "entries": [] }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogSourceError::UnsupportedVersion { found: 99, supported: 1 }
        ));
    }

    #[test]
    fn test_unknown_category_is_a_parse_error() {
        let content = r#"{
            "entries": [{
                "id": "1", "title": "t", "agency_name": "a", "brand_name": "b",
                "role": "r", "summary": "s", "category": "Furniture", "year": "2024"
            }]
        }"#;
        let err = CatalogDocument::parse_entries(content).unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse(_)));
    }
}
