//! Stockroom interactive store

use std::io;

use anyhow::{Context, Result};
use tracing::info;

use stockroom::{
    config::Config,
    fixtures::{default_catalog, load_catalog},
    observability::init_subscriber,
    session::Session,
};

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| e.exit());

    init_subscriber(&config.logging)?;

    let mut store = match &config.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => default_catalog().context("Failed to load built-in catalog")?,
    };

    info!(
        products = store.len(),
        total_quantity = %store.total_quantity(),
        "store stocked"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();

    Session::new(&mut store, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
