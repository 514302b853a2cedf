//! Prediction outcomes, risk bands and the text shown alongside them.

use serde::{Deserialize, Serialize};

use crate::scoring::MockPrediction;

/// Probability below which the risk band is LOW.
pub const LOW_RISK_THRESHOLD: f64 = 30.0;
/// Probability above which the risk band is HIGH.
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;

/// Coarse three-level classification of a positive probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    /// `< 30` is LOW, `> 70` is HIGH, everything else (both bounds included)
    /// is MODERATE.
    pub fn from_probability(probability_positive: f64) -> Self {
        if probability_positive < LOW_RISK_THRESHOLD {
            RiskBand::Low
        } else if probability_positive > HIGH_RISK_THRESHOLD {
            RiskBand::High
        } else {
            RiskBand::Moderate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskBand::Low => "LOW",
            RiskBand::Moderate => "MODERATE",
            RiskBand::High => "HIGH",
        }
    }

    /// Probability range description, as published by the predictor's info endpoint.
    pub fn describe(&self) -> &'static str {
        match self {
            RiskBand::Low => "< 30% probability",
            RiskBand::Moderate => "30-70% probability",
            RiskBand::High => "> 70% probability",
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RiskBand {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOW" => Ok(RiskBand::Low),
            "MODERATE" => Ok(RiskBand::Moderate),
            "HIGH" => Ok(RiskBand::High),
            other => Err(format!("unknown risk level '{}'", other)),
        }
    }
}

/// Where an outcome came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeSource {
    /// The remote predictor answered.
    Predictor,
    /// The local scorer produced an estimate.
    Mock,
}

/// A complete prediction, from either the remote predictor or the local scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionOutcome {
    /// 0 = not diabetic, 1 = diabetic.
    pub prediction: u8,
    pub is_diabetic: bool,
    /// Percent, 0 to 100.
    pub probability_positive: f64,
    /// Always `100 - probability_positive`.
    pub probability_negative: f64,
    #[serde(rename = "riskLevel")]
    pub risk_band: RiskBand,
    pub message: String,
    pub source: OutcomeSource,
}

impl PredictionOutcome {
    /// Wrap a local estimate. The result is tagged [`OutcomeSource::Mock`].
    pub fn from_mock(estimate: MockPrediction) -> Self {
        Self {
            prediction: u8::from(estimate.diabetic),
            is_diabetic: estimate.diabetic,
            probability_positive: estimate.probability_positive,
            probability_negative: estimate.probability_negative,
            risk_band: estimate.risk_band,
            message: outcome_message(estimate.diabetic, estimate.risk_band).to_string(),
            source: OutcomeSource::Mock,
        }
    }

    pub fn is_estimate(&self) -> bool {
        self.source == OutcomeSource::Mock
    }

    pub fn summary(&self) -> StatusSummary {
        status_summary(self.is_diabetic, self.risk_band)
    }

    pub fn gauge(&self) -> GaugeZone {
        GaugeZone::for_probability(self.probability_positive)
    }
}

/// One-line outcome message, as produced by the predictor service.
pub fn outcome_message(is_diabetic: bool, band: RiskBand) -> &'static str {
    match (is_diabetic, band) {
        (false, RiskBand::Low) => "Low risk - Patient is not predicted to be diabetic",
        (false, _) => {
            "Moderate risk - Patient is not predicted to be diabetic, but some risk factors present"
        }
        (true, RiskBand::High) => {
            "High risk - Patient is predicted to be diabetic. Medical consultation recommended"
        }
        (true, _) => {
            "Moderate to high risk - Patient is predicted to be diabetic. Please consult a healthcare professional"
        }
    }
}

/// Result-card text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub detail: &'static str,
}

pub fn status_summary(is_diabetic: bool, band: RiskBand) -> StatusSummary {
    match (is_diabetic, band) {
        (false, RiskBand::Low) => StatusSummary {
            title: "Low Risk",
            subtitle: "Not Diabetic",
            detail: "The model predicts a low probability of diabetes based on the provided health metrics.",
        },
        (false, RiskBand::Moderate) => StatusSummary {
            title: "Moderate Risk",
            subtitle: "Not Diabetic",
            detail: "While the prediction is negative, some risk factors are present.",
        },
        (true, RiskBand::High) => StatusSummary {
            title: "High Risk",
            subtitle: "Diabetic",
            detail: "The model indicates a high probability of diabetes. Medical consultation is recommended.",
        },
        // Remaining combinations, including a non-diabetic HIGH from the
        // remote model, share the cautious card.
        _ => StatusSummary {
            title: "Moderate Risk",
            subtitle: "Diabetic",
            detail: "The model suggests diabetes risk. Please consult a healthcare professional.",
        },
    }
}

/// Colour zone of the risk gauge.
///
/// The gauge uses its own ladder (`< 30`, `< 70`, else high), so a
/// probability of exactly 70 reads "High Risk" here while its [`RiskBand`]
/// is MODERATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GaugeZone {
    Low,
    Moderate,
    High,
}

impl GaugeZone {
    pub fn for_probability(probability: f64) -> Self {
        if probability < 30.0 {
            GaugeZone::Low
        } else if probability < 70.0 {
            GaugeZone::Moderate
        } else {
            GaugeZone::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GaugeZone::Low => "Low Risk",
            GaugeZone::Moderate => "Moderate Risk",
            GaugeZone::High => "High Risk",
        }
    }

    /// Zone colour as RGB.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            GaugeZone::Low => (0x16, 0xa3, 0x4a),
            GaugeZone::Moderate => (0xca, 0x8a, 0x04),
            GaugeZone::High => (0xdc, 0x26, 0x26),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(RiskBand::from_probability(29.99), RiskBand::Low);
        assert_eq!(RiskBand::from_probability(30.0), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(70.0), RiskBand::Moderate);
        assert_eq!(RiskBand::from_probability(70.01), RiskBand::High);
    }

    #[test]
    fn test_gauge_differs_from_band_at_70() {
        assert_eq!(GaugeZone::for_probability(70.0), GaugeZone::High);
        assert_eq!(RiskBand::from_probability(70.0), RiskBand::Moderate);
        assert_eq!(GaugeZone::for_probability(29.0).label(), "Low Risk");
    }

    #[test]
    fn test_gauge_zone_colors() {
        assert_eq!(GaugeZone::for_probability(10.0).rgb(), (0x16, 0xa3, 0x4a));
        assert_eq!(GaugeZone::for_probability(50.0).rgb(), (0xca, 0x8a, 0x04));
        assert_eq!(GaugeZone::for_probability(70.0).rgb(), (0xdc, 0x26, 0x26));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            outcome_message(false, RiskBand::Low),
            "Low risk - Patient is not predicted to be diabetic"
        );
        assert!(outcome_message(false, RiskBand::High).starts_with("Moderate risk"));
        assert!(outcome_message(true, RiskBand::High).starts_with("High risk"));
        assert!(outcome_message(true, RiskBand::Low).starts_with("Moderate to high risk"));
    }

    #[test]
    fn test_status_summary() {
        let s = status_summary(true, RiskBand::High);
        assert_eq!((s.title, s.subtitle), ("High Risk", "Diabetic"));
        let s = status_summary(true, RiskBand::Moderate);
        assert_eq!((s.title, s.subtitle), ("Moderate Risk", "Diabetic"));
        let s = status_summary(false, RiskBand::Moderate);
        assert_eq!(s.subtitle, "Not Diabetic");
    }

    #[test]
    fn test_from_mock_is_tagged() {
        let estimate = MockPrediction {
            probability_positive: 95.0,
            probability_negative: 5.0,
            risk_band: RiskBand::High,
            diabetic: true,
        };
        let outcome = PredictionOutcome::from_mock(estimate);
        assert_eq!(outcome.prediction, 1);
        assert!(outcome.is_estimate());
        assert!(outcome.message.starts_with("High risk"));

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["riskLevel"], "HIGH");
        assert_eq!(json["source"], "mock");
    }

    #[test]
    fn test_band_parse() {
        assert_eq!("moderate".parse::<RiskBand>().unwrap(), RiskBand::Moderate);
        assert!("extreme".parse::<RiskBand>().is_err());
    }
}
