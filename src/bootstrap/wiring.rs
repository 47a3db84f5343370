//! # Dependency Injection
//!
//! ## Responsibilities
//!
//! - Pick the catalog source adapter named by the config
//! - Inject every port into `AppDeps`
//!
//! ## Prohibited
//!
//! No business logic: the wiring assembles, it does not decide what a
//! catalog or a navigation means.

use std::sync::Arc;

use tracing::info;

use folio_app::AppDeps;
use folio_core::ports::{CatalogSourcePort, NavigationEventPort};
use folio_core::SiteConfig;
use folio_infra::catalog::{EmbeddedCatalogSource, JsonFileCatalogSource};

/// Empty `catalog.path` selects the catalog compiled into the binary.
pub fn catalog_source_for(config: &SiteConfig) -> Arc<dyn CatalogSourcePort> {
    if config.catalog_path.as_os_str().is_empty() {
        info!("Using embedded catalog");
        Arc::new(EmbeddedCatalogSource::new())
    } else {
        info!(path = %config.catalog_path.display(), "Using catalog file");
        Arc::new(JsonFileCatalogSource::new(config.catalog_path.clone()))
    }
}

pub fn wire_dependencies(
    config: SiteConfig,
    navigation_events: Arc<dyn NavigationEventPort>,
) -> AppDeps {
    AppDeps {
        catalog_source: catalog_source_for(&config),
        navigation_events,
        config,
    }
}
