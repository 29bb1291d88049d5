use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::connection::{init_db, Database};
use crate::router::{handle, AppState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;


fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agp_listings=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 1️⃣ Database handle + schema
    let db = Database::new(cfg.db_path.clone());
    if let Err(e) = init_db(&db, &cfg.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // 2️⃣ Static listings document
    let catalog = match Catalog::load(&cfg.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::error!(error = %e, path = %cfg.catalog_path, "catalog load failed");
            std::process::exit(1);
        }
    };

    let state = AppState {
        db,
        catalog,
        page_size: cfg.page_size,
    };

    // 3️⃣ Serve
    tracing::info!(addr = %cfg.addr, workers = cfg.workers, "starting server");
    let server = Server::bind(&cfg.addr).max_workers(cfg.workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
