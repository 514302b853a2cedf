//! HttpPredictor against an in-process stand-in predictor.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use glyco_core::prelude::*;
use glyco_predictor::prelude::*;
use serde_json::{json, Value};

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn predictor(base_url: &str) -> HttpPredictor {
    HttpPredictor::new(PredictorConfig::default().with_base_url(base_url)).unwrap()
}

async fn echo_predict(Json(body): Json<Value>) -> Json<Value> {
    // Diabetic only for a snake_case body with glucose above 125.
    let diabetic = body["glucose"].as_f64().unwrap_or(0.0) > 125.0
        && body.get("blood_pressure").is_some();
    let positive = if diabetic { 82.0 } else { 12.0 };
    Json(json!({
        "prediction": if diabetic { 1 } else { 0 },
        "is_diabetic": diabetic,
        "probability_negative": 100.0 - positive,
        "probability_positive": positive,
        "risk_level": if diabetic { "HIGH" } else { "LOW" },
        "message": "ok",
    }))
}

fn healthy_app() -> Router {
    Router::new()
        .route("/api/diabetes/predict", post(echo_predict))
        .route(
            "/api/diabetes/health",
            get(|| async { Json(json!({"status": "healthy"})) }),
        )
        .route(
            "/api/diabetes/info",
            get(|| async {
                Json(json!({
                    "model": "Random Forest Classifier (v2)",
                    "features": [{"name": "glucose", "min": 0, "max": 200, "unit": "mg/dL"}],
                    "risk_levels": {"LOW": "< 30% probability"}
                }))
            }),
        )
}

#[tokio::test]
async fn predicts_through_remote_service() {
    let base = serve(healthy_app()).await;
    let p = predictor(&base);

    let outcome = p
        .predict(&Vitals::default().with_glucose(150.0))
        .await
        .unwrap();
    assert_eq!(outcome.source, OutcomeSource::Predictor);
    assert!(outcome.is_diabetic);
    assert_eq!(outcome.risk_band, RiskBand::High);
    assert_eq!(outcome.probability_positive + outcome.probability_negative, 100.0);

    assert!(p.health_check().await);
    let info = p.model_info().await.unwrap();
    assert_eq!(info.model, "Random Forest Classifier (v2)");
}

#[tokio::test]
async fn api_errors_carry_detail_and_are_not_replaced() {
    let app = Router::new().route(
        "/api/diabetes/predict",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Prediction failed: scaler mismatch"})),
            )
        }),
    );
    let base = serve(app).await;

    let fallback = FallbackPredictor::new(predictor(&base));
    let err = fallback.predict(&Vitals::default()).await.unwrap_err();
    match err {
        PredictorError::Api { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Prediction failed: scaler mismatch");
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn service_without_model_falls_back() {
    let app = Router::new()
        .route(
            "/api/diabetes/predict",
            post(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({"detail": "Prediction service is not available"})),
                )
            }),
        )
        .route(
            "/api/diabetes/health",
            get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
        );
    let base = serve(app).await;

    let fallback = FallbackPredictor::new(predictor(&base));
    assert!(!fallback.health_check().await);

    let outcome = fallback.predict(&Vitals::default()).await.unwrap();
    assert_eq!(outcome.source, OutcomeSource::Mock);
}

#[tokio::test]
async fn unreachable_predictor_falls_back() {
    let fallback = FallbackPredictor::new(predictor("http://127.0.0.1:1"));

    let assessment = assess(&fallback, &Vitals::default().with_glucose(150.0))
        .await
        .unwrap();
    assert!(assessment.is_estimate());
    assert_eq!(assessment.factors.risk_factors[0].label, "High Glucose");

    let info = fallback.model_info().await.unwrap();
    assert_eq!(info.features.len(), FEATURE_RANGES.len());
}

#[tokio::test]
async fn malformed_probabilities_are_rejected() {
    let app = Router::new().route(
        "/api/diabetes/predict",
        post(|| async {
            Json(json!({
                "prediction": 1,
                "is_diabetic": true,
                "probability_negative": 10.0,
                "probability_positive": 60.0,
                "risk_level": "MODERATE",
                "message": ""
            }))
        }),
    );
    let base = serve(app).await;

    let err = FallbackPredictor::new(predictor(&base))
        .predict(&Vitals::default())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictorError::InvalidResponse(_)));
}
