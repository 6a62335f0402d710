use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::dataframeutils::SharedHandlesAndConfig;
use crate::html;
use crate::similarity::index::{Recommendation, ScoredProduct};

#[derive(Debug, Deserialize)]
pub struct RecommendParams {
    product: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse<'a> {
    product: Option<&'a Product>,
    recommendations: &'a [ScoredProduct<'a>],
}

fn lookup<'a>(data: &'a SharedHandlesAndConfig, name: &str) -> Recommendation<'a> {
    let recommendation = data
        .similarity_index
        .recommend(name, data.num_items_to_recommend);
    debug!(
        product = name,
        found = recommendation.product().is_some(),
        qty_recommended = recommendation.similar().len(),
        "recommend"
    );
    recommendation
}

// Form endpoint used by the product listing. Unknown products render the same
// page with no product and no recommendations.
#[post("/recommend")]
pub async fn recommend(
    data: web::Data<SharedHandlesAndConfig>,
    form: web::Form<RecommendParams>,
) -> HttpResponse {
    let recommendation = lookup(&data, &form.product);
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::render_recommendations(&recommendation))
}

#[get("/api/recommend")]
pub async fn api_recommend(
    data: web::Data<SharedHandlesAndConfig>,
    query: web::Query<RecommendParams>,
) -> HttpResponse {
    let recommendation = lookup(&data, &query.product);
    HttpResponse::Ok().json(RecommendResponse {
        product: recommendation.product(),
        recommendations: recommendation.similar(),
    })
}
