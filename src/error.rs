use thiserror::Error;

/// Reasons the product catalog cannot be loaded. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not open product data {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed product data: {0}")]
    Csv(#[from] csv::Error),
    #[error("product data lacks required column `{0}`")]
    MissingColumn(&'static str),
}
