// config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub catalog_path: String,
    pub page_size: usize,
    pub workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "agp.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            catalog_path: "data/properties.json".to_string(),
            page_size: 6,
            workers: 8,
        }
    }
}

impl Config {
    /// Overlay `AGP_*` environment variables on top of the defaults.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(addr) = lookup("AGP_ADDR") {
            cfg.addr = addr
                .parse()
                .map_err(|e| ServerError::Config(format!("AGP_ADDR '{addr}': {e}")))?;
        }
        if let Some(path) = lookup("AGP_DB") {
            cfg.db_path = path;
        }
        if let Some(path) = lookup("AGP_SCHEMA") {
            cfg.schema_path = path;
        }
        if let Some(path) = lookup("AGP_CATALOG") {
            cfg.catalog_path = path;
        }
        if let Some(size) = lookup("AGP_PAGE_SIZE") {
            cfg.page_size = parse_positive("AGP_PAGE_SIZE", &size)?;
        }
        if let Some(workers) = lookup("AGP_WORKERS") {
            cfg.workers = parse_positive("AGP_WORKERS", &workers)?;
        }

        Ok(cfg)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<usize, ServerError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ServerError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}
