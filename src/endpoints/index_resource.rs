use actix_web::{get, web, HttpResponse};
use tracing::debug;

use crate::dataframeutils::SharedHandlesAndConfig;
use crate::html;

#[get("/")]
pub async fn index(data: web::Data<SharedHandlesAndConfig>) -> HttpResponse {
    let products = data.similarity_index.catalog().products();
    debug!(qty_products = products.len(), "listing products");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::render_index(products))
}
