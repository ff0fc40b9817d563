use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_inventory_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use rental_inventory::config::AppConfig;
use rental_inventory::error::AppError;
use rental_inventory::inventory::{known_location_count, InventoryGenerator};
use rental_inventory::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let generator = Arc::new(InventoryGenerator::from_config(&config.inventory));
    let app = with_inventory_routes(generator)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        environment = config.environment.as_str(),
        %addr,
        locations = known_location_count(),
        min_offers = config.inventory.min_offers,
        max_offers = config.inventory.max_offers,
        "rental inventory service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
