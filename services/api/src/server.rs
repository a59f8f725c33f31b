use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAssessmentRepository};
use crate::routes::service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

use hse_risk::assessment::{AssessmentService, ScoringEngine};
use hse_risk::config::AppConfig;
use hse_risk::error::AppError;
use hse_risk::telemetry;

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

    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = Arc::new(AssessmentService::with_required_coverage(
        repository,
        ScoringEngine::hse_reference(),
        config.assessment.required_coverage,
    ));

    let app = service_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
