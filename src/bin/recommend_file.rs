use anyhow::bail;

use lookalike::config::AppConfig;
use lookalike::similarity::index::Recommendation;
use lookalike::{build_index, logging};

/// Prints the recommendations for one product name, using the same config
/// as the server: `recommend_file <product name> [config-file]`.
fn main() -> anyhow::Result<()> {
    let product_name = match std::env::args().nth(1) {
        Some(name) => name,
        None => bail!("usage: recommend_file <product name> [config-file]"),
    };
    let config_path = std::env::args().nth(2).unwrap_or_default();
    let config = AppConfig::new(&config_path)?;
    logging::init(&config.log.level);

    let (similarity_index, _catalog_stats) = build_index(&config.data.products_path)?;

    match similarity_index.recommend(&product_name, config.model.num_items_to_recommend) {
        Recommendation::NotFound => println!("{}: not found", product_name),
        Recommendation::Found { product, similar } => {
            println!("{} ({})", product.name, product.category);
            for (rank, scored) in similar.iter().enumerate() {
                println!(
                    "{:>3}. {:<40} {:.4}",
                    rank + 1,
                    scored.product.name,
                    scored.score
                );
            }
        }
    }
    Ok(())
}
