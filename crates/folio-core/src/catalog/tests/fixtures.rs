use crate::catalog::{Catalog, CatalogEntry, Category};
use crate::ids::EntryId;

pub(crate) fn entry(id: &str, category: Category, tags: &[&str]) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::new(id),
        title: format!("Project {id}"),
        agency_name: "Studio".to_string(),
        brand_name: format!("Brand {id}"),
        role: "3D modeling".to_string(),
        summary: format!("Summary for {id}"),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category,
        year: "2024".to_string(),
        image_refs: vec![format!("/renders/{id}.png")],
        featured: false,
        accent_color: None,
        case_study: None,
    }
}

/// Four entries with ids "1".."4", the first two featured.
pub(crate) fn sample_catalog() -> Catalog {
    let mut entries = vec![
        entry("1", Category::BrandedVehicles, &["Moodboard", "POVs"]),
        entry("2", Category::GameEntertainmentIp, &["Plan Layout", "Grid"]),
        entry("3", Category::GameEntertainmentIp, &["Touchpoints", "POVs"]),
        entry("4", Category::RetailPopUps, &["No Grid"]),
    ];
    entries[0].featured = true;
    entries[1].featured = true;
    Catalog::new(entries).expect("sample catalog is valid")
}
