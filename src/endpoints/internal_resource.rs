use actix_web::{get, web, HttpResponse};
use chrono::Utc;

use crate::dataframeutils::SharedHandlesAndConfig;
use crate::html::escape;
use web::Data;

#[get("/internal")]
pub async fn internal(config: Data<SharedHandlesAndConfig>) -> HttpResponse {
    let mut html = "<html>lookalike: content-based product recommendations.<br />".to_string();

    let stats = &config.catalog_stats;
    html.push_str("<h3>Catalog</h3>");
    html.push_str("Loaded: ");
    html.push_str(&escape(&stats.descriptive_name));
    html.push_str("<br />Qty products: ");
    html.push_str(&stats.qty_products.to_string());
    html.push_str("<br />Qty unique names: ");
    html.push_str(&stats.qty_unique_names.to_string());
    html.push_str("<br />Qty categories: ");
    html.push_str(&stats.qty_categories.to_string());
    html.push_str("<br />Loaded at: ");
    html.push_str(&stats.loaded_at.to_string());
    html.push_str("<br />Age (minutes): ");
    let age_minutes = (Utc::now().naive_utc() - stats.loaded_at).num_minutes();
    html.push_str(&age_minutes.to_string());

    html.push_str("<h3>Model</h3>");
    html.push_str("tf-idf with english stop words, cosine similarity");
    html.push_str("<br />Vocabulary size: ");
    html.push_str(&stats.vocabulary_size.to_string());
    html.push_str("<br />Non-zero weights: ");
    html.push_str(&stats.qty_nonzero_weights.to_string());
    html.push_str("<br />Products without terms: ");
    html.push_str(&stats.qty_products_without_terms.to_string());
    html.push_str("<br />Qty items to recommend: ");
    html.push_str(&config.num_items_to_recommend.to_string());

    html.push_str("<h3>Machine instance</h3>");
    html.push_str("Qty CPU's detected: ");
    html.push_str(&sys_info::cpu_num().unwrap_or(0).to_string());
    html.push_str("<br />Qty actix workers set: ");
    html.push_str(&config.qty_workers.to_string());
    html.push_str("<br />CPU speed: ");
    html.push_str(&sys_info::cpu_speed().unwrap_or(0).to_string());
    html.push_str("MHz");
    html.push_str("<h3>Metrics</h3>");
    html.push_str("<a href=\"/internal/prometheus\">prometheus</a>");
    html.push_str("</html>");

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
