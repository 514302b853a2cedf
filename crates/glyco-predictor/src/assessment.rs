//! A full assessment: prediction, factors and recommendations together.

use glyco_core::factor::FactorReport;
use glyco_core::outcome::{GaugeZone, PredictionOutcome, StatusSummary};
use glyco_core::recommendations::{recommendations, Recommendation};
use glyco_core::rules::evaluate_risk_factors;
use glyco_core::scoring::mock_predict;
use glyco_core::vitals::Vitals;
use serde::Serialize;

use crate::backend::{Predictor, PredictorResult};

/// Everything the result view shows for one submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub vitals: Vitals,
    pub outcome: PredictionOutcome,
    pub summary: StatusSummary,
    pub gauge: GaugeZone,
    pub factors: FactorReport,
    pub recommendations: Vec<Recommendation>,
}

impl Assessment {
    /// Combine an outcome with the rule-derived factors for the same vitals.
    pub fn new(vitals: Vitals, outcome: PredictionOutcome) -> Self {
        Self {
            summary: outcome.summary(),
            gauge: outcome.gauge(),
            factors: evaluate_risk_factors(&vitals),
            recommendations: recommendations(outcome.is_diabetic).to_vec(),
            vitals,
            outcome,
        }
    }

    /// True when the outcome is a local estimate rather than the predictor's answer.
    pub fn is_estimate(&self) -> bool {
        self.outcome.is_estimate()
    }
}

/// Ask `predictor` for an outcome and assemble the assessment.
pub async fn assess(predictor: &dyn Predictor, vitals: &Vitals) -> PredictorResult<Assessment> {
    let outcome = predictor.predict(vitals).await?;
    Ok(Assessment::new(*vitals, outcome))
}

/// Assessment from the local scorer alone.
pub fn assess_offline(vitals: &Vitals) -> Assessment {
    Assessment::new(*vitals, PredictionOutcome::from_mock(mock_predict(vitals)))
}
