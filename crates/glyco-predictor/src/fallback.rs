//! Remote-first predictor that falls back to the local scorer.

use async_trait::async_trait;
use glyco_core::outcome::PredictionOutcome;
use glyco_core::vitals::Vitals;
use glyco_core::wire::ModelInfo;
use tracing::{debug, warn};

use crate::backend::{MockPredictor, Predictor, PredictorResult};

/// Tries the primary predictor and substitutes a local estimate only when it
/// is unreachable.
///
/// Errors from a predictor that did answer (API errors, malformed payloads)
/// are returned unchanged.
pub struct FallbackPredictor<P> {
    primary: P,
    fallback: MockPredictor,
}

impl<P: Predictor> FallbackPredictor<P> {
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            fallback: MockPredictor,
        }
    }
}

#[async_trait]
impl<P: Predictor> Predictor for FallbackPredictor<P> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    async fn predict(&self, vitals: &Vitals) -> PredictorResult<PredictionOutcome> {
        match self.primary.predict(vitals).await {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_unreachable() => {
                warn!(
                    predictor = self.primary.name(),
                    error = %e,
                    "predictor unreachable, using local estimate"
                );
                self.fallback.predict(vitals).await
            }
            Err(e) => Err(e),
        }
    }

    async fn health_check(&self) -> bool {
        self.primary.health_check().await
    }

    async fn model_info(&self) -> PredictorResult<ModelInfo> {
        match self.primary.model_info().await {
            Err(e) if e.is_unreachable() => {
                debug!(error = %e, "model info unavailable, describing local ranges");
                self.fallback.model_info().await
            }
            other => other,
        }
    }
}
