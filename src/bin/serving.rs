use actix_web::{middleware, web, App, HttpServer};
use actix_web_prom::PrometheusMetricsBuilder;
use anyhow::anyhow;
use tracing::info;

use lookalike::config::AppConfig;
use lookalike::dataframeutils::SharedHandlesAndConfig;
use lookalike::endpoints::index_resource::index;
use lookalike::endpoints::internal_resource::internal;
use lookalike::endpoints::recommend_resource::{api_recommend, recommend};
use lookalike::{build_index, logging};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_default();
    let config = AppConfig::new(&config_path)?;
    logging::init(&config.log.level);

    let bind_address = config.bind_address();
    let num_items_to_recommend = config.model.num_items_to_recommend;
    let qty_workers = config.server.num_workers;

    // The index is complete before the server accepts its first connection.
    let (similarity_index, catalog_stats) = build_index(&config.data.products_path)?;

    info!("start metrics");
    let prometheus = PrometheusMetricsBuilder::new("api")
        .endpoint("/internal/prometheus")
        .build()
        .map_err(|e| anyhow!("Could not set up prometheus metrics: {}", e))?;

    info!("Done. start httpd at http://{}", &bind_address);
    HttpServer::new(move || {
        let handles_and_config = SharedHandlesAndConfig {
            similarity_index: similarity_index.clone(),
            catalog_stats: catalog_stats.clone(),
            num_items_to_recommend,
            qty_workers,
        };

        App::new()
            .wrap(prometheus.clone())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Cache-Control", "no-cache, no-store, must-revalidate"))
                    .add(("Pragma", "no-cache"))
                    .add(("Expires", "0")),
            )
            .app_data(web::Data::new(handles_and_config))
            .service(index)
            .service(recommend)
            .service(api_recommend)
            .service(internal)
    })
    .workers(qty_workers)
    .bind(&bind_address)
    .map_err(|e| anyhow!("Could not bind server to address {}: {}", &bind_address, e))?
    .run()
    .await?;

    Ok(())
}
