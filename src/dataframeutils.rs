use std::sync::Arc;

use chrono::{NaiveDateTime, Utc};
use itertools::Itertools;
use tracing::info;

use crate::similarity::index::SimilarityIndex;

/// Everything a request handler needs; cloned into every actix worker.
pub struct SharedHandlesAndConfig {
    pub similarity_index: Arc<SimilarityIndex>,
    pub catalog_stats: Arc<CatalogStats>,
    pub num_items_to_recommend: usize,
    pub qty_workers: usize,
}

pub struct CatalogStats {
    pub descriptive_name: String,
    pub qty_products: usize,
    pub qty_unique_names: usize,
    pub qty_categories: usize,
    pub vocabulary_size: usize,
    pub qty_nonzero_weights: usize,
    pub qty_products_without_terms: usize,
    pub loaded_at: NaiveDateTime,
}

pub fn determine_catalog_statistics(
    descriptive_name: &str,
    index: &SimilarityIndex,
) -> CatalogStats {
    let products = index.catalog().products();
    let qty_unique_names = products.iter().map(|product| &product.name).unique().count();
    let qty_categories = products
        .iter()
        .map(|product| &product.category)
        .unique()
        .count();
    let qty_nonzero_weights = index.vectors().iter().map(|vector| vector.nnz()).sum();
    let qty_products_without_terms = index
        .vectors()
        .iter()
        .filter(|vector| vector.nnz() == 0)
        .count();

    let stats = CatalogStats {
        descriptive_name: descriptive_name.to_string(),
        qty_products: products.len(),
        qty_unique_names,
        qty_categories,
        vocabulary_size: index.vectorizer().vocabulary_size(),
        qty_nonzero_weights,
        qty_products_without_terms,
        loaded_at: Utc::now().naive_utc(),
    };

    info!(
        source = %stats.descriptive_name,
        products = stats.qty_products,
        unique_names = stats.qty_unique_names,
        categories = stats.qty_categories,
        vocabulary = stats.vocabulary_size,
        nonzero_weights = stats.qty_nonzero_weights,
        "loaded catalog"
    );
    if stats.qty_unique_names < stats.qty_products {
        info!(
            duplicates = stats.qty_products - stats.qty_unique_names,
            "duplicate product names, lookups use the first occurrence"
        );
    }

    stats
}
