//! Ports implemented by infrastructure and view-layer adapters.

mod catalog_source;
mod navigation_event;

pub use catalog_source::{CatalogSourceError, CatalogSourcePort};
pub use navigation_event::NavigationEventPort;
