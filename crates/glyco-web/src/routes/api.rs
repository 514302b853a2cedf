//! REST API endpoints for the intake.

use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use glyco::prelude::{
    evaluate_risk_factors, mock_predict, Assessment, FactorReport, ModelInfo, PredictionOutcome,
    Predictor, PredictorError, ValidationError, Vitals,
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

/// Errors returned by intake endpoints.
pub enum ApiError {
    Validation(ValidationError),
    Predictor(PredictorError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "detail": format!("Invalid vitals: {}", e),
                    "violations": e.violations,
                })),
            )
                .into_response(),
            ApiError::Predictor(e) => {
                let status = if e.is_unreachable() {
                    StatusCode::SERVICE_UNAVAILABLE
                } else {
                    StatusCode::BAD_GATEWAY
                };
                (status, Json(json!({ "detail": format!("Prediction failed: {}", e) })))
                    .into_response()
            }
        }
    }
}

/// Predict and explain one submission.
pub async fn assess(
    State(state): State<AppState>,
    Json(vitals): Json<Vitals>,
) -> Result<Json<Assessment>, ApiError> {
    if state.strict_validation {
        vitals.validate().map_err(ApiError::Validation)?;
    }

    let assessment = glyco::predictor::assess(state.predictor(), &vitals)
        .await
        .map_err(|e| {
            warn!(error = %e, "assessment failed");
            ApiError::Predictor(e)
        })?;

    info!(
        risk_level = %assessment.outcome.risk_band,
        source = ?assessment.outcome.source,
        risk_factors = assessment.factors.risk_factors.len(),
        "assessment complete"
    );
    Ok(Json(assessment))
}

/// Rule-derived factors only.
pub async fn factors(Json(vitals): Json<Vitals>) -> Json<FactorReport> {
    Json(evaluate_risk_factors(&vitals))
}

/// Local estimate for a live preview. Always tagged `source: "mock"`.
pub async fn preview(Json(vitals): Json<Vitals>) -> Json<PredictionOutcome> {
    Json(PredictionOutcome::from_mock(mock_predict(&vitals)))
}

/// Accepted input ranges and risk band descriptions.
pub async fn info() -> Json<ModelInfo> {
    Json(ModelInfo::local("Glyco intake"))
}

/// Intake health response.
#[derive(Debug, Serialize)]
pub struct IntakeHealth {
    pub status: &'static str,
    pub predictor: String,
    pub predictor_reachable: bool,
}

/// Predictor reachability from the background health poll.
pub async fn intake_health(State(state): State<AppState>) -> Json<IntakeHealth> {
    let reachable = state.predictor_reachable();
    Json(IntakeHealth {
        status: if reachable { "healthy" } else { "degraded" },
        predictor: state.predictor().name().to_string(),
        predictor_reachable: reachable,
    })
}

/// Liveness.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": "glyco-web" }))
}
