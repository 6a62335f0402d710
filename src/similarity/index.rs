use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use crate::catalog::{Catalog, Product, ProductIdx};
use crate::similarity::tfidf::{cosine, SparseVector, TfIdfVectorizer};
use crate::similarity::ItemScore;

/// Outcome of a lookup by product name.
#[derive(Debug, PartialEq)]
pub enum Recommendation<'a> {
    NotFound,
    Found {
        product: &'a Product,
        similar: Vec<ScoredProduct<'a>>,
    },
}

impl<'a> Recommendation<'a> {
    pub fn product(&self) -> Option<&'a Product> {
        match self {
            Recommendation::NotFound => None,
            Recommendation::Found { product, .. } => Some(product),
        }
    }

    pub fn similar(&self) -> &[ScoredProduct<'a>] {
        match self {
            Recommendation::NotFound => &[],
            Recommendation::Found { similar, .. } => similar,
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: f64,
}

/// Catalog plus its tf-idf vectors and the dense cosine similarity matrix,
/// all built once and never changed.
pub struct SimilarityIndex {
    catalog: Catalog,
    vectorizer: TfIdfVectorizer,
    vectors: Vec<SparseVector>,
    // row major, qty_products x qty_products
    similarities: Vec<f64>,
}

impl SimilarityIndex {
    pub fn new(catalog: Catalog) -> Self {
        let start_time = Instant::now();
        let vectorizer = TfIdfVectorizer::fit(catalog.combined_texts());
        let vectors: Vec<SparseVector> = catalog
            .combined_texts()
            .par_iter()
            .map(|text| vectorizer.transform(text))
            .collect();
        info!(
            qty_products = catalog.len(),
            vocabulary_size = vectorizer.vocabulary_size(),
            micros = start_time.elapsed().as_micros() as u64,
            "fitted tf-idf vectors"
        );

        let start_time = Instant::now();
        let similarities = similarity_matrix(&vectors);
        info!(
            micros = start_time.elapsed().as_micros() as u64,
            "computed similarity matrix"
        );

        SimilarityIndex {
            catalog,
            vectorizer,
            vectors,
            similarities,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.vectors
    }

    /// `None` when either index is outside the catalog.
    pub fn similarity(&self, a: ProductIdx, b: ProductIdx) -> Option<f64> {
        if a < self.catalog.len() {
            self.row(a).get(b).copied()
        } else {
            None
        }
    }

    fn row(&self, idx: ProductIdx) -> &[f64] {
        let qty_products = self.catalog.len();
        &self.similarities[idx * qty_products..(idx + 1) * qty_products]
    }

    /// Looks `name` up by exact match and returns the `how_many` products most
    /// similar to it. Equal scores keep catalog order and the product itself is
    /// never part of its own recommendations.
    pub fn recommend(&self, name: &str, how_many: usize) -> Recommendation<'_> {
        let query_idx = match self.catalog.position(name) {
            Some(idx) => idx,
            None => return Recommendation::NotFound,
        };

        let mut ranked: Vec<ItemScore> = self
            .row(query_idx)
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != query_idx)
            .map(|(idx, score)| ItemScore::new(idx, *score))
            .collect();
        // sort is stable, ties stay in catalog order
        ranked.sort();

        let similar = ranked
            .into_iter()
            .take(how_many)
            .filter_map(|scored| {
                self.catalog.get(scored.id).map(|product| ScoredProduct {
                    product,
                    score: scored.score,
                })
            })
            .collect();

        Recommendation::Found {
            product: &self.catalog.products()[query_idx],
            similar,
        }
    }
}

fn similarity_matrix(vectors: &[SparseVector]) -> Vec<f64> {
    let qty_products = vectors.len();
    let mut similarities = vec![0.0; qty_products * qty_products];
    if qty_products == 0 {
        return similarities;
    }
    similarities
        .par_chunks_mut(qty_products)
        .enumerate()
        .for_each(|(row_idx, row)| {
            let current = &vectors[row_idx];
            for (col_idx, other) in vectors.iter().enumerate() {
                row[col_idx] = cosine(current, other);
            }
        });
    similarities
}
