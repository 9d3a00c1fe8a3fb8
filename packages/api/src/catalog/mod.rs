//! # Catalog module: in-memory store of users and creations
//!
//! The data-access layer behind every server function in this crate. It is
//! gated behind `#[cfg(feature = "server")]` so browser builds never pull in
//! Tokio or file I/O.
//!
//! ## Design
//!
//! The catalog is a **lazy, process-wide singleton** backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_catalog`] reads the seed
//! path from [`crate::settings`], loads the JSON seed file, and caches the
//! result for all subsequent callers. Mutations (un-pick) go through an
//! internal `RwLock`; nothing is written back to disk.
//!
//! ## Re-exports
//!
//! - [`get_catalog`] returns `&'static Catalog`, initialising it on first use.
//! - [`Catalog`], [`CatalogSeed`]: the store and its on-disk seed shape.

mod store;

pub use store::{Catalog, CatalogSeed};

use tokio::sync::OnceCell;

use crate::error::CatalogError;
use crate::settings::get_settings;

static CATALOG: OnceCell<Catalog> = OnceCell::const_new();

/// Get or initialize the catalog from the configured seed file.
pub async fn get_catalog() -> Result<&'static Catalog, CatalogError> {
    CATALOG
        .get_or_try_init(|| async {
            let settings = get_settings().await?;
            let catalog = Catalog::load(&settings.catalog.seed_path).await?;
            tracing::info!(
                path = %settings.catalog.seed_path,
                users = catalog.user_count().await,
                "catalog seeded"
            );
            Ok(catalog)
        })
        .await
}
