//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use folio_core::ports::{CatalogSourcePort, NavigationEventPort};
use folio_core::SiteConfig;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Content dependencies
    pub catalog_source: Arc<dyn CatalogSourcePort>,

    // UI dependencies
    pub navigation_events: Arc<dyn NavigationEventPort>,

    // Configuration
    pub config: SiteConfig,
}
