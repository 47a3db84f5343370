//! Business logic use cases
//!
//! [CatalogSourcePort]
//!        ↓
//! LoadCatalog            → immutable Catalog (startup, once)
//!        ↓
//! BrowseProjects         → project list (filter bar, featured split)
//! NavigationController   → NavigationState → ViewDescriptor

pub mod browse_projects;
pub mod load_catalog;
pub mod navigation;

pub use browse_projects::BrowseProjects;
pub use load_catalog::{LoadCatalog, LoadCatalogError};
pub use navigation::NavigationController;
