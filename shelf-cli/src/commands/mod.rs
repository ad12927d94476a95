//! CLI command implementations

mod browse;
mod genres;
mod list;
mod show;

pub use browse::browse;
pub use genres::genres;
pub use list::list;
pub use show::show;

use anyhow::{Context as _, Result};
use shelf_core::{load_catalog, Catalog, ShelfConfig};
use std::path::Path;

/// Configuration and catalog shared by every command
pub struct Context {
    pub config: ShelfConfig,
    pub catalog: Catalog,
}

impl Context {
    /// Load configuration, then the catalog it (or `--catalog`) points at
    pub fn load(config_path: Option<&Path>, catalog_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => ShelfConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => ShelfConfig::default(),
        };

        let catalog = match catalog_path.or(config.catalog.as_deref()) {
            Some(path) => Catalog::from_path(path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))?,
            None => load_catalog().context("Failed to load bundled catalog")?,
        };

        tracing::debug!(books = catalog.len(), "catalog ready");
        Ok(Self { config, catalog })
    }

    /// Genre selector options for this catalog
    pub fn genre_options(&self) -> Vec<String> {
        shelf_core::genre_options(&self.config.genres, &self.catalog)
    }
}
