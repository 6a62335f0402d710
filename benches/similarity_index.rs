#[macro_use]
extern crate bencher;

use bencher::Bencher;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use lookalike::catalog::{Catalog, Product};
use lookalike::similarity::index::SimilarityIndex;

benchmark_group!(benches, build_index_500, recommend_500);
benchmark_main!(benches);

const QTY_PRODUCTS: usize = 500;
const WORDS: &[&str] = &[
    "running", "shoe", "trail", "leather", "boots", "winter", "ceramic", "mug", "steel",
    "tumbler", "coffee", "espresso", "yoga", "mat", "dumbbell", "weights", "cotton", "wool",
    "sweater", "shorts", "waterproof", "lightweight", "breathable", "insulated", "knife",
];
const CATEGORIES: &[&str] = &["Footwear", "Kitchen", "Fitness", "Apparel", "Outdoor"];

fn random_catalog(qty_products: usize) -> Catalog {
    let mut rng = StdRng::seed_from_u64(42);
    let products = (0..qty_products)
        .map(|i| {
            let mut words = |qty: usize| {
                (0..qty)
                    .filter_map(|_| WORDS.choose(&mut rng))
                    .copied()
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            let tags = words(2);
            let description = words(8);
            let category = CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
            Product::new(&format!("product-{}", i), category, &tags, &description)
        })
        .collect();
    Catalog::new(products)
}

fn build_index_500(bench: &mut Bencher) {
    bench.iter(|| SimilarityIndex::new(random_catalog(QTY_PRODUCTS)));
}

fn recommend_500(bench: &mut Bencher) {
    let index = SimilarityIndex::new(random_catalog(QTY_PRODUCTS));
    bench.iter(|| index.recommend("product-250", 5));
}
