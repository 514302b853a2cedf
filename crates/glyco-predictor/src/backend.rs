//! Core predictor trait, configuration and the local mock.

use async_trait::async_trait;
use glyco_core::error::WireError;
use glyco_core::outcome::PredictionOutcome;
use glyco_core::scoring::mock_predict;
use glyco_core::vitals::Vitals;
use glyco_core::wire::ModelInfo;
use thiserror::Error;

/// Predictor-related errors.
#[derive(Debug, Error)]
pub enum PredictorError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Timeout after {0} seconds")]
    Timeout(u64),

    #[error("Predictor unavailable: {0}")]
    Unavailable(String),

    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

impl PredictorError {
    /// True when the predictor could not be reached or has no model loaded.
    ///
    /// Only these errors allow a local estimate to stand in; a predictor
    /// that answered with an error is reported as such.
    pub fn is_unreachable(&self) -> bool {
        matches!(
            self,
            PredictorError::ConnectionFailed(_)
                | PredictorError::Timeout(_)
                | PredictorError::Unavailable(_)
        )
    }
}

impl From<WireError> for PredictorError {
    fn from(e: WireError) -> Self {
        PredictorError::InvalidResponse(e.to_string())
    }
}

/// Result type for predictor operations.
pub type PredictorResult<T> = Result<T, PredictorError>;

/// Default predictor endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the predictor endpoint.
pub const BASE_URL_ENV: &str = "GLYCO_API_URL";

/// Configuration for predictor requests.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictorConfig {
    /// Base URL of the predictor service, without trailing slash.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

impl PredictorConfig {
    /// Defaults, with the base URL taken from `GLYCO_API_URL` when set.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs.max(1);
        self
    }
}

/// A source of predictions for a vitals record.
#[async_trait]
pub trait Predictor: Send + Sync {
    /// Get the predictor name.
    fn name(&self) -> &str;

    /// Predict diabetes risk for one record.
    async fn predict(&self, vitals: &Vitals) -> PredictorResult<PredictionOutcome>;

    /// Whether the predictor is ready to answer.
    async fn health_check(&self) -> bool;

    /// Describe the model and its accepted inputs.
    async fn model_info(&self) -> PredictorResult<ModelInfo> {
        Ok(ModelInfo::local(self.name()))
    }
}

/// The local additive scorer behind the [`Predictor`] interface.
///
/// Always healthy; every outcome is tagged as a mock estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPredictor;

impl MockPredictor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Predictor for MockPredictor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn predict(&self, vitals: &Vitals) -> PredictorResult<PredictionOutcome> {
        Ok(PredictionOutcome::from_mock(mock_predict(vitals)))
    }

    async fn health_check(&self) -> bool {
        true
    }

    async fn model_info(&self) -> PredictorResult<ModelInfo> {
        Ok(ModelInfo::local("Local additive estimate"))
    }
}
