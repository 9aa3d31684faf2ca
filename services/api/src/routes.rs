use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use support_report::report::{self, NewReport, ReportRequest, ReportStore};
use tracing::{error, warn};

pub(crate) fn report_router(store: Arc<dyn ReportStore>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/generate-report", post(generate_report_endpoint))
        .with_state(store)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn generate_report_endpoint(
    State(store): State<Arc<dyn ReportStore>>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> Response {
    // Validation failures short-circuit before any side effects.
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            let body = Json(json!({ "error": rejection.body_text() }));
            return (rejection.status(), body).into_response();
        }
    };

    let document = match report::render(&request) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!(%err, "report generation failed");
            let body = Json(json!({ "error": "Failed to generate report" }));
            return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        }
    };

    // Archive append is fire-and-forget: the caller still gets the document
    // even if the store write fails.
    let record = NewReport {
        final_score: request.final_score,
        created_at: Utc::now(),
        assessment_data: request,
    };
    if let Err(err) = store.put(record) {
        warn!(%err, "report archive write failed");
    }

    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, report::DOCX_CONTENT_TYPE.to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", report::REPORT_FILENAME),
            ),
            (
                CACHE_CONTROL,
                "no-cache, no-store, must-revalidate".to_string(),
            ),
        ],
        document,
    )
        .into_response()
}
