use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;

use csv::StringRecord;

use crate::catalog::Product;
use crate::error::CatalogError;

const NAME: &str = "name";
const CATEGORY: &str = "category";
const TAGS: &str = "tags";
const DESCRIPTION: &str = "description";

pub fn read_products(products_path: &str) -> Result<Vec<Product>, CatalogError> {
    let file = File::open(products_path).map_err(|source| CatalogError::Open {
        path: products_path.to_string(),
        source,
    })?;
    read_products_from_reader(file)
}

/// Parses product rows from csv with a header line. The header is checked
/// once for the required columns; rows keep their file order.
pub fn read_products_from_reader<R: Read>(reader: R) -> Result<Vec<Product>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let column = |wanted: &'static str| {
        headers
            .iter()
            .position(|header| header.trim() == wanted)
            .ok_or(CatalogError::MissingColumn(wanted))
    };
    let name_col = column(NAME)?;
    let category_col = column(CATEGORY)?;
    let tags_col = column(TAGS)?;
    let description_col = column(DESCRIPTION)?;
    let required = [name_col, category_col, tags_col, description_col];

    let mut products = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        let field = |idx: usize| record.get(idx).unwrap_or_default().to_string();
        products.push(Product {
            name: field(name_col),
            category: field(category_col),
            tags: field(tags_col),
            description: field(description_col),
            attributes: remaining_columns(&headers, &record, &required),
        });
    }
    Ok(products)
}

fn remaining_columns(
    headers: &StringRecord,
    record: &StringRecord,
    required: &[usize],
) -> BTreeMap<String, String> {
    headers
        .iter()
        .zip(record.iter())
        .enumerate()
        .filter(|(idx, _)| !required.contains(idx))
        .map(|(_, (header, value))| (header.trim().to_string(), value.to_string()))
        .collect()
}
