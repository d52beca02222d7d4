use crate::cli::ServeArgs;
use crate::infra::{load_desk, AppState};
use crate::routes::with_booking_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use corporate_booking::config::AppConfig;
use corporate_booking::error::AppError;
use corporate_booking::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(catalog) = args.catalog.take() {
        config.catalog = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let (desk, seeded) = load_desk(config.catalog.as_deref())?;
    if let Some(summary) = seeded {
        info!(
            hotels = summary.hotels,
            rooms = summary.rooms,
            employees = summary.employees,
            policies = summary.policies,
            "booking desk seeded from catalog"
        );
    }

    let app = with_booking_routes(Arc::new(desk))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(%addr, catalog = ?config.catalog, "corporate booking service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
