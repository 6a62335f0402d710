pub mod catalog;
pub mod config;
pub mod config_processors;
pub mod dataframeutils;
pub mod endpoints;
pub mod error;
pub mod html;
pub mod io;
pub mod logging;
pub mod similarity;

use std::sync::Arc;

use anyhow::Context;

use crate::catalog::Catalog;
use crate::dataframeutils::{determine_catalog_statistics, CatalogStats};
use crate::similarity::index::SimilarityIndex;

/// Loads the product file and builds every read-only structure the service
/// needs. Any failure here is fatal for the process.
pub fn build_index(products_path: &str) -> anyhow::Result<(Arc<SimilarityIndex>, Arc<CatalogStats>)> {
    let products = io::read_products(products_path)
        .with_context(|| format!("Loading product data from {} failed", products_path))?;
    let index = SimilarityIndex::new(Catalog::new(products));
    let stats = determine_catalog_statistics(products_path, &index);
    Ok((Arc::new(index), Arc::new(stats)))
}
