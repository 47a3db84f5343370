use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use folio_app::App;
use folio_core::SiteConfig;

use super::{load_config, resolve_config_path, wire_dependencies};
use crate::shell::{LoggingNavigationEvents, Shell};

/// Load config, bootstrap the app, and hand stdin/stdout to the shell.
pub async fn run_app() -> anyhow::Result<()> {
    let config = match resolve_config_path() {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "Loading site config");
            load_config(&path)?
        }
        Some(path) => {
            warn!(path = %path.display(), "Config file not found, using empty config");
            SiteConfig::empty()
        }
        None => {
            warn!("No config location available, using empty config");
            SiteConfig::empty()
        }
    };

    let deps = wire_dependencies(config, Arc::new(LoggingNavigationEvents));
    let app = App::bootstrap(deps)
        .await
        .context("Failed to bootstrap Folio")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(app).run(stdin.lock(), stdout.lock())?;

    Ok(())
}
