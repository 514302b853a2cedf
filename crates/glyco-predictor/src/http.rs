//! HTTP client for the remote predictor service.
//!
//! Requires the `http` feature.

use async_trait::async_trait;
use glyco_core::outcome::PredictionOutcome;
use glyco_core::vitals::Vitals;
use glyco_core::wire::{ModelInfo, PredictRequest, PredictResponse};
use reqwest::StatusCode;
use tracing::debug;

use crate::backend::{Predictor, PredictorConfig, PredictorError, PredictorResult};

/// Remote predictor reached over HTTP.
///
/// | Method | Path |
/// |--------|------|
/// | POST | `/api/diabetes/predict` |
/// | GET | `/api/diabetes/health` |
/// | GET | `/api/diabetes/info` |
///
/// # Example
///
/// ```rust,ignore
/// use glyco_predictor::{HttpPredictor, Predictor, PredictorConfig};
///
/// let predictor = HttpPredictor::new(PredictorConfig::default())?;
/// let outcome = predictor.predict(&vitals).await?;
/// ```
pub struct HttpPredictor {
    config: PredictorConfig,
    client: reqwest::Client,
}

impl HttpPredictor {
    pub fn new(config: PredictorConfig) -> PredictorResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PredictorError::Client(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/diabetes/{}", self.config.base_url, path)
    }

    fn map_send_error(&self, e: reqwest::Error) -> PredictorError {
        if e.is_connect() {
            PredictorError::ConnectionFailed(format!(
                "Cannot connect to predictor at {}",
                self.config.base_url
            ))
        } else if e.is_timeout() {
            PredictorError::Timeout(self.config.timeout_secs)
        } else {
            PredictorError::Client(e.to_string())
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> PredictorResult<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| PredictorError::InvalidResponse(e.to_string()))
    }
}

/// Build an error from a non-success response, preferring the JSON `detail` field.
async fn api_error(response: reqwest::Response) -> PredictorError {
    let status = response.status();
    let detail = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| body.get("detail").and_then(|d| d.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("API Error: {}", status.as_u16()));

    if status == StatusCode::SERVICE_UNAVAILABLE {
        PredictorError::Unavailable(detail)
    } else {
        PredictorError::Api {
            status: status.as_u16(),
            detail,
        }
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    fn name(&self) -> &str {
        "http"
    }

    async fn predict(&self, vitals: &Vitals) -> PredictorResult<PredictionOutcome> {
        let request = PredictRequest::from(vitals);
        debug!(url = %self.url("predict"), "sending prediction request");

        let response = self
            .client
            .post(self.url("predict"))
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictorError::InvalidResponse(e.to_string()))?;

        Ok(body.into_outcome()?)
    }

    async fn health_check(&self) -> bool {
        match self.client.get(self.url("health")).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    async fn model_info(&self) -> PredictorResult<ModelInfo> {
        self.get_json("info").await
    }
}
