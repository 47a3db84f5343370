use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, Instrument};

use folio_core::carousel::DEFAULT_AUTO_ADVANCE;
use folio_core::{BookingLink, Carousel, Catalog, SiteConfig};

use crate::usecases::{BrowseProjects, LoadCatalog, LoadCatalogError, NavigationController};
use crate::AppDeps;

/// The assembled application: one catalog, one controller, and the
/// helpers a view layer needs around them.
pub struct App {
    pub config: SiteConfig,
    pub catalog: Arc<Catalog>,
    pub navigation: NavigationController,
    pub projects: BrowseProjects,
}

impl App {
    /// Load the catalog and wire the use cases around it.
    ///
    /// This constructor signature IS the dependency manifest.
    pub async fn bootstrap(deps: AppDeps) -> Result<Self, LoadCatalogError> {
        let AppDeps {
            catalog_source,
            navigation_events,
            config,
        } = deps;

        async move {
            let catalog = Arc::new(LoadCatalog::new(catalog_source).execute().await?);

            let app = Self {
                navigation: NavigationController::new(catalog.clone(), navigation_events),
                projects: BrowseProjects::new(catalog.clone()),
                catalog,
                config,
            };
            info!(entries = app.catalog.len(), "App bootstrapped");
            Ok(app)
        }
        .instrument(info_span!("app.bootstrap"))
        .await
    }

    /// Hero carousel over the featured entries.
    pub fn featured_carousel(&self) -> Carousel {
        Carousel::new(self.catalog.featured().len())
    }

    /// Configured auto-advance period, or the default when unset.
    pub fn carousel_interval(&self) -> Duration {
        match self.config.carousel_interval_secs {
            0 => DEFAULT_AUTO_ADVANCE,
            secs => Duration::from_secs(secs),
        }
    }

    /// `None` when no booking URL is configured.
    pub fn booking_link(&self) -> Option<BookingLink> {
        let url = self.config.booking_url.trim();
        (!url.is_empty()).then(|| BookingLink::new(url))
    }
}
