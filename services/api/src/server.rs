use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryReportStore};
use crate::routes::report_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use support_report::config::AppConfig;
use support_report::error::AppError;
use support_report::report::ReportStore;
use support_report::telemetry;
use tower_http::cors::{Any, CorsLayer};
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store: Arc<dyn ReportStore> = Arc::new(InMemoryReportStore::default());

    let app = report_router(store)
        .layer(Extension(app_state))
        .layer(cors_layer())
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "support report service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

// The form is filled in from a static browser client, so preflights from any
// origin must succeed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
