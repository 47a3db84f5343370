use std::io::Write;

use tempfile::NamedTempFile;

use folio_core::ports::{CatalogSourceError, CatalogSourcePort};
use folio_core::{Catalog, CatalogFilter, Category, CategoryFilter, ViewToggle};
use folio_infra::catalog::{EmbeddedCatalogSource, JsonFileCatalogSource};

#[tokio::test]
async fn test_embedded_catalog_is_valid() {
    let entries = EmbeddedCatalogSource::new().load_entries().await.unwrap();
    let catalog = Catalog::new(entries).expect("bundled catalog passes validation");

    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.list_all()[0].id.as_str(), "1");
    assert!(catalog.get_by_id("1").unwrap().case_study.is_some());
}

#[tokio::test]
async fn test_embedded_catalog_supports_sonic_grid_search() {
    let entries = EmbeddedCatalogSource::new().load_entries().await.unwrap();
    let catalog = Catalog::new(entries).unwrap();

    let filter = CatalogFilter::new()
        .with_category(CategoryFilter::All)
        .with_toggle(ViewToggle::Povs)
        .with_query("sonic");
    let hits = catalog.filter(&filter);

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].brand_name, "SEGA");
}

#[tokio::test]
async fn test_embedded_catalog_category_counts() {
    let entries = EmbeddedCatalogSource::new().load_entries().await.unwrap();
    let catalog = Catalog::new(entries).unwrap();

    let gaming = CatalogFilter::new().with_category(Category::GameEntertainmentIp);
    assert_eq!(catalog.filter(&gaming).len(), 3);

    let stands = catalog
        .category_counts()
        .into_iter()
        .find(|c| c.filter == CategoryFilter::Only(Category::Stands))
        .unwrap();
    assert_eq!(stands.count, 0);
}

#[tokio::test]
async fn test_json_file_source_reads_document() {
    let content = r#"{
        "schema_version": 1,
        "entries": [{
            "id": "a",
            "title": "Pepsi Event Stand",
            "agency_name": "JHDS",
            "brand_name": "Pepsi",
            "role": "Stand design",
            "summary": "Event stand",
            "tags": ["POVs"],
            "category": "Stands",
            "year": "2025",
            "image_refs": ["/renders/pepsi/pepsi-hero.png"]
        }]
    }"#;
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();

    let source = JsonFileCatalogSource::new(file.path());
    let entries = source.load_entries().await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].category, Category::Stands);
    assert!(!entries[0].featured);
    assert_eq!(entries[0].hero_image(), Some("/renders/pepsi/pepsi-hero.png"));
}

#[tokio::test]
async fn test_json_file_source_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonFileCatalogSource::new(dir.path().join("missing.json"));

    let err = source.load_entries().await.unwrap_err();

    assert!(matches!(err, CatalogSourceError::NotFound(path) if path.ends_with("missing.json")));
}

#[tokio::test]
async fn test_json_file_source_malformed_json_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let err = JsonFileCatalogSource::new(file.path())
        .load_entries()
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogSourceError::Parse(_)));
}
