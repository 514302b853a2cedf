//! Request and response shapes of the remote predictor.
//!
//! The predictor speaks snake_case JSON. These types adapt a [`Vitals`]
//! record to its request body and its response back to a
//! [`PredictionOutcome`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::WireError;
use crate::outcome::{OutcomeSource, PredictionOutcome, RiskBand};
use crate::ranges::FEATURE_RANGES;
use crate::vitals::Vitals;

/// Largest accepted deviation of `positive + negative` from 100.
pub const PROBABILITY_TOLERANCE: f64 = 0.01;

/// Body of `POST /api/diabetes/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub pregnancies: u32,
    pub glucose: f64,
    pub blood_pressure: f64,
    pub skin_thickness: f64,
    pub insulin: f64,
    pub bmi: f64,
    pub diabetes_pedigree_function: f64,
    pub age: u32,
}

impl From<&Vitals> for PredictRequest {
    fn from(v: &Vitals) -> Self {
        Self {
            pregnancies: v.effective_pregnancies(),
            glucose: v.glucose,
            blood_pressure: v.blood_pressure,
            skin_thickness: v.skin_thickness,
            insulin: v.insulin,
            bmi: v.bmi,
            diabetes_pedigree_function: v.pedigree_function,
            age: v.age,
        }
    }
}

/// Response of `POST /api/diabetes/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub is_diabetic: bool,
    pub probability_negative: f64,
    pub probability_positive: f64,
    pub risk_level: RiskBand,
    #[serde(default)]
    pub message: String,
}

impl PredictResponse {
    /// Convert to an outcome tagged [`OutcomeSource::Predictor`].
    ///
    /// Rejects a prediction class other than 0/1 and a probability pair
    /// whose sum strays from 100 by more than [`PROBABILITY_TOLERANCE`].
    pub fn into_outcome(self) -> Result<PredictionOutcome, WireError> {
        let prediction = match self.prediction {
            0 => 0u8,
            1 => 1u8,
            other => return Err(WireError::InvalidPrediction(other)),
        };

        let sum = self.probability_positive + self.probability_negative;
        if !sum.is_finite() || (sum - 100.0).abs() > PROBABILITY_TOLERANCE {
            return Err(WireError::ProbabilityMismatch {
                positive: self.probability_positive,
                negative: self.probability_negative,
            });
        }

        Ok(PredictionOutcome {
            prediction,
            is_diabetic: self.is_diabetic,
            probability_positive: self.probability_positive,
            // Re-derive so the pair sums to exactly 100.
            probability_negative: 100.0 - self.probability_positive,
            risk_band: self.risk_level,
            message: self.message,
            source: OutcomeSource::Predictor,
        })
    }
}

/// One feature as listed by `GET /api/diabetes/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureInfo {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub unit: String,
}

/// Response of `GET /api/diabetes/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model: String,
    pub features: Vec<FeatureInfo>,
    #[serde(default)]
    pub risk_levels: BTreeMap<String, String>,
}

impl ModelInfo {
    /// Info describing the local ranges, for use when no predictor is reachable.
    pub fn local(model: impl Into<String>) -> Self {
        let features = FEATURE_RANGES
            .iter()
            .map(|r| FeatureInfo {
                name: r.name.to_string(),
                min: r.min,
                max: r.max,
                unit: r.unit.to_string(),
            })
            .collect();

        let risk_levels = [RiskBand::Low, RiskBand::Moderate, RiskBand::High]
            .iter()
            .map(|b| (b.as_str().to_string(), b.describe().to_string()))
            .collect();

        Self {
            model: model.into(),
            features,
            risk_levels,
        }
    }
}
