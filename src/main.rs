use tracing::error;

fn main() {
    // .env is optional; FOLIO_CONFIG and RUST_LOG may come from it
    let _ = dotenvy::dotenv();

    if let Err(err) = folio_lib::bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Failed to create tokio runtime: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = runtime.block_on(folio_lib::bootstrap::run::run_app()) {
        error!("Folio exited with error: {err:#}");
        std::process::exit(1);
    }
}
