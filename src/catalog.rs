use std::collections::BTreeMap;

use serde::Serialize;

pub type ProductIdx = usize;

/// One row of the product data. The four named columns are required, every
/// other column of the file ends up in `attributes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub tags: String,
    pub description: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
}

impl Product {
    pub fn new(name: &str, category: &str, tags: &str, description: &str) -> Self {
        Product {
            name: name.to_string(),
            category: category.to_string(),
            tags: tags.to_string(),
            description: description.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    /// The text that gets vectorized: category, tags and description separated by single spaces.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.category, self.tags, self.description)
    }
}

/// The immutable, ordered product table. Row `i` here is row `i` in every
/// matrix built from it.
pub struct Catalog {
    products: Vec<Product>,
    combined_texts: Vec<String>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        let combined_texts = products.iter().map(Product::combined_text).collect();
        Catalog {
            products,
            combined_texts,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn combined_texts(&self) -> &[String] {
        &self.combined_texts
    }

    pub fn get(&self, idx: ProductIdx) -> Option<&Product> {
        self.products.get(idx)
    }

    /// Index of the first product whose name equals `name` exactly.
    pub fn position(&self, name: &str) -> Option<ProductIdx> {
        self.products.iter().position(|product| product.name == name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
