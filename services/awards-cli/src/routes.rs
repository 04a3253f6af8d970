use crate::infra::{evaluation_clock, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use club_awards::error::AppError;
use club_awards::workflows::eligibility::{
    EligibilityEngine, EligibilityVerdict, RunSummary, UnmatchedShooter,
};
use club_awards::workflows::reference::ReferenceTables;
use club_awards::workflows::roster::RosterImporter;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A complete snapshot: roster export plus both threshold tables.
#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    pub(crate) roster_xml: String,
    pub(crate) achievement_csv: String,
    pub(crate) senior_csv: String,
    #[serde(default)]
    pub(crate) evaluation_year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    pub(crate) evaluation_year: i32,
    pub(crate) verdicts: Vec<EligibilityVerdict>,
    pub(crate) unmatched: Vec<UnmatchedShooter>,
    pub(crate) diagnostics: Vec<String>,
    pub(crate) summary: RunSummary,
}

pub(crate) fn evaluation_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/evaluations", post(evaluation_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
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
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluation_endpoint(
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let EvaluationRequest {
        roster_xml,
        achievement_csv,
        senior_csv,
        evaluation_year,
    } = payload;

    let tables = ReferenceTables::from_readers(achievement_csv.as_bytes(), senior_csv.as_bytes())?;
    let shooters = RosterImporter::from_xml(&roster_xml)?;

    let engine = EligibilityEngine::new(
        tables.achievements,
        tables.seniors,
        evaluation_clock(evaluation_year),
    );
    let run = engine.run(&shooters);
    let summary = run.summary();
    let diagnostics = run.diagnostics();

    Ok(Json(EvaluationResponse {
        evaluation_year: run.evaluation_year,
        verdicts: run.verdicts,
        unmatched: run.unmatched,
        diagnostics,
        summary,
    }))
}
