use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::Value;

use lookalike::build_index;
use lookalike::catalog::{Catalog, Product};
use lookalike::dataframeutils::{determine_catalog_statistics, SharedHandlesAndConfig};
use lookalike::endpoints::index_resource::index;
use lookalike::endpoints::internal_resource::internal;
use lookalike::endpoints::recommend_resource::{api_recommend, recommend};
use lookalike::similarity::index::SimilarityIndex;

fn shared(similarity_index: SimilarityIndex) -> web::Data<SharedHandlesAndConfig> {
    let stats = determine_catalog_statistics("inline", &similarity_index);
    web::Data::new(SharedHandlesAndConfig {
        similarity_index: Arc::new(similarity_index),
        catalog_stats: Arc::new(stats),
        num_items_to_recommend: 5,
        qty_workers: 1,
    })
}

fn shoes_and_mug() -> web::Data<SharedHandlesAndConfig> {
    shared(SimilarityIndex::new(Catalog::new(vec![
        Product::new("Red Shoes", "Footwear", "running", "lightweight running shoe"),
        Product::new("Blue Shoes", "Footwear", "running", "comfortable running shoe"),
        Product::new("Coffee Mug", "Kitchen", "drinkware", "ceramic mug"),
    ])))
}

macro_rules! app {
    ($data:expr) => {
        test::init_service(
            App::new()
                .app_data($data)
                .service(index)
                .service(recommend)
                .service(api_recommend)
                .service(internal),
        )
        .await
    };
}

#[actix_web::test]
async fn test_index_lists_all_products() {
    let app = app!(shoes_and_mug());
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    for name in ["Red Shoes", "Blue Shoes", "Coffee Mug"] {
        assert!(body.contains(name), "missing {}", name);
    }
}

#[actix_web::test]
async fn test_recommend_form_ranks_similar_products() {
    let app = app!(shoes_and_mug());
    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_form([("product", "Red Shoes")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    let recommendations = &body[body.find("<ol>").unwrap()..];
    let blue = recommendations.find("Blue Shoes").unwrap();
    let mug = recommendations.find("Coffee Mug").unwrap();
    assert!(blue < mug);
    assert!(!recommendations.contains("Red Shoes"));
}

#[actix_web::test]
async fn test_recommend_form_unknown_product_is_still_ok() {
    let app = app!(shoes_and_mug());
    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_form([("product", "red shoes")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(200, resp.status().as_u16());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Product not found"));
    assert!(body.contains("<ol></ol>"));
}

#[actix_web::test]
async fn test_recommend_form_requires_product_field() {
    let app = app!(shoes_and_mug());
    let req = test::TestRequest::post()
        .uri("/recommend")
        .set_form([("name", "Red Shoes")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}

#[actix_web::test]
async fn test_api_recommend_returns_json() {
    let app = app!(shoes_and_mug());
    let req = test::TestRequest::get()
        .uri("/api/recommend?product=Red%20Shoes")
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!("Red Shoes", json["product"]["name"]);
    let names: Vec<&str> = json["recommendations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|scored| scored["product"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(vec!["Blue Shoes", "Coffee Mug"], names);
}

#[actix_web::test]
async fn test_api_recommend_not_found() {
    let app = app!(shoes_and_mug());
    let req = test::TestRequest::get()
        .uri("/api/recommend?product=Teapot")
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;

    assert!(json["product"].is_null());
    assert_eq!(0, json["recommendations"].as_array().unwrap().len());
}

#[actix_web::test]
async fn test_bundled_catalog_recommends_five() {
    let (similarity_index, catalog_stats) = build_index("data/products.csv").unwrap();
    let data = web::Data::new(SharedHandlesAndConfig {
        similarity_index,
        catalog_stats,
        num_items_to_recommend: 5,
        qty_workers: 1,
    });
    let app = app!(data);

    let req = test::TestRequest::get()
        .uri("/api/recommend?product=Red%20Shoes")
        .to_request();
    let json: Value = test::call_and_read_body_json(&app, req).await;
    let recommendations = json["recommendations"].as_array().unwrap();
    assert_eq!(5, recommendations.len());

    let scores: Vec<f64> = recommendations
        .iter()
        .map(|scored| scored["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));

    let req = test::TestRequest::get().uri("/internal").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}
