use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState, InMemoryEffortStore};
use crate::routes::with_timecard_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use timecard::config::AppConfig;
use timecard::error::AppError;
use timecard::submission::TimecardService;
use timecard::telemetry;
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
        config.directory.catalog_path = Some(catalog);
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let directory = Arc::new(load_catalog(config.directory.catalog_path.as_deref())?);
    info!(projects = directory.len(), "project catalog loaded");
    let store = Arc::new(InMemoryEffortStore::default());
    let timecard_service = Arc::new(TimecardService::new(store, directory));

    let app = with_timecard_routes(timecard_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "timecard service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
