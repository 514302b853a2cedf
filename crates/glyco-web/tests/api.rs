//! Intake API tests against an in-process server backed by the local scorer.

use glyco::prelude::*;
use glyco_web::{create_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;

async fn spawn_app(strict: bool) -> String {
    let state = AppState::new(Arc::new(MockPredictor::new()), Duration::from_millis(100))
        .with_strict_validation(strict);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn high_risk_body() -> Value {
    json!({
        "gender": "female",
        "age": 50,
        "pregnancies": 2,
        "glucose": 150,
        "bloodPressure": 85,
        "skinThickness": 20,
        "insulin": 220,
        "bmi": 32,
        "diabetesPedigreeFunction": 0.6
    })
}

#[tokio::test]
async fn assess_returns_outcome_factors_and_recommendations() {
    let base = spawn_app(false).await;
    let body: Value = reqwest::Client::new()
        .post(format!("{}/api/intake/assess", base))
        .json(&high_risk_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["outcome"]["riskLevel"], "HIGH");
    assert_eq!(body["outcome"]["probabilityPositive"], 95.0);
    assert_eq!(body["outcome"]["source"], "mock");
    assert_eq!(body["factors"]["riskFactors"].as_array().unwrap().len(), 6);
    assert_eq!(body["factors"]["positiveFactors"].as_array().unwrap().len(), 0);
    assert_eq!(body["recommendations"][0]["title"], "Consult a Professional");
    assert_eq!(body["summary"]["title"], "High Risk");
}

#[test]
fn prelude_glob_leaves_std_result_intact() -> Result<(), Box<dyn std::error::Error>> {
    let vitals: Vitals = serde_json::from_value(high_risk_body())?;
    vitals.validate()?;
    assert_eq!(evaluate_risk_factors(&vitals).risk_factors.len(), 6);
    Ok(())
}

#[tokio::test]
async fn factors_endpoint_keeps_rule_order() {
    let base = spawn_app(false).await;
    let body: Value = reqwest::Client::new()
        .post(format!("{}/api/intake/factors", base))
        .json(&json!({
            "gender": "male",
            "age": 22,
            "pregnancies": 0,
            "glucose": 85,
            "bloodPressure": 70,
            "skinThickness": 15,
            "insulin": 50,
            "bmi": 21.5,
            "diabetesPedigreeFunction": 0.2
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let labels: Vec<&str> = body["positiveFactors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["Normal Glucose", "Healthy BMI", "Normal BP"]);
    assert!(body["riskFactors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn strict_mode_rejects_out_of_range_vitals() {
    let base = spawn_app(true).await;
    let mut vitals = high_risk_body();
    vitals["glucose"] = json!(450);

    let resp = reqwest::Client::new()
        .post(format!("{}/api/intake/assess", base))
        .json(&vitals)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status().as_u16(), 422);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["violations"][0]["field"], "glucose");
}

#[tokio::test]
async fn lenient_mode_accepts_out_of_range_vitals() {
    let base = spawn_app(false).await;
    let mut vitals = high_risk_body();
    vitals["glucose"] = json!(450);

    let resp = reqwest::Client::new()
        .post(format!("{}/api/intake/assess", base))
        .json(&vitals)
        .send()
        .await
        .unwrap();
    assert!(resp.status().is_success());
}

#[tokio::test]
async fn preview_info_and_health() {
    let base = spawn_app(false).await;
    let client = reqwest::Client::new();

    let preview: Value = client
        .post(format!("{}/api/intake/preview", base))
        .json(&json!({
            "gender": "female", "age": 30, "pregnancies": 0, "glucose": 120,
            "bloodPressure": 70, "skinThickness": 20, "insulin": 80, "bmi": 25.0,
            "diabetesPedigreeFunction": 0.5
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(preview["source"], "mock");
    assert_eq!(preview["probabilityPositive"], 20.0);

    let info: Value = client
        .get(format!("{}/api/intake/info", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(info["features"].as_array().unwrap().len(), 8);

    let live: Value = client
        .get(format!("{}/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(live["status"], "ok");

    // The mock predictor is always healthy once polled.
    tokio::time::sleep(Duration::from_millis(300)).await;
    let health: Value = client
        .get(format!("{}/api/intake/health", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(health["predictor_reachable"], true);
    assert_eq!(health["predictor"], "mock");
}
