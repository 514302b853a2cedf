//! Glyco Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use glyco_core::prelude::*;
//! ```

pub use crate::vitals::{Gender, Vitals};

pub use crate::factor::{Factor, FactorKind, FactorReport, Severity};

pub use crate::rules::{evaluate_risk_factors, Measurement, Rule, Threshold, RULES};

pub use crate::scoring::{mock_predict, mock_risk_score, MockPrediction};

pub use crate::outcome::{
    outcome_message, status_summary, GaugeZone, OutcomeSource, PredictionOutcome, RiskBand,
    StatusSummary,
};

pub use crate::recommendations::{recommendations, Recommendation};

pub use crate::ranges::{FeatureRange, FEATURE_RANGES};

pub use crate::wire::{ModelInfo, PredictRequest, PredictResponse};

pub use crate::error::{RangeViolation, ValidationError, WireError};
