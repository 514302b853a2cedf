//! Local additive risk scorer.
//!
//! A coarse stand-in used when the remote predictor is unreachable or for an
//! offline preview. Its weights are independent of the remote model and its
//! output must be labelled as a local estimate wherever it is shown.

use serde::{Deserialize, Serialize};

use crate::outcome::RiskBand;
use crate::vitals::Vitals;

/// Lowest probability the scorer will report.
pub const MIN_PROBABILITY: f64 = 5.0;
/// Highest probability the scorer will report.
pub const MAX_PROBABILITY: f64 = 95.0;
/// Probability at or above which the estimate is flagged diabetic.
pub const DIABETIC_CUTOFF: f64 = 50.0;

/// Result of the local scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockPrediction {
    pub probability_positive: f64,
    pub probability_negative: f64,
    pub risk_band: RiskBand,
    pub diabetic: bool,
}

fn glucose_points(glucose: f64) -> u32 {
    if glucose > 125.0 {
        25
    } else if glucose > 100.0 {
        10
    } else {
        0
    }
}

fn bmi_points(bmi: f64) -> u32 {
    if bmi >= 30.0 {
        20
    } else if bmi >= 25.0 {
        10
    } else {
        0
    }
}

fn age_points(age: u32) -> u32 {
    if age >= 45 {
        15
    } else if age >= 35 {
        5
    } else {
        0
    }
}

fn blood_pressure_points(blood_pressure: f64) -> u32 {
    if blood_pressure > 80.0 {
        10
    } else {
        0
    }
}

fn pedigree_points(pedigree_function: f64) -> u32 {
    if pedigree_function > 0.5 {
        15
    } else {
        0
    }
}

fn insulin_points(insulin: f64) -> u32 {
    if insulin > 200.0 {
        10
    } else {
        0
    }
}

/// Raw additive score before clamping. Ranges from 0 to 95.
pub fn mock_risk_score(vitals: &Vitals) -> u32 {
    glucose_points(vitals.glucose)
        + bmi_points(vitals.bmi)
        + age_points(vitals.age)
        + blood_pressure_points(vitals.blood_pressure)
        + pedigree_points(vitals.pedigree_function)
        + insulin_points(vitals.insulin)
}

/// Score a vitals record locally.
///
/// `probability_positive` is the raw score clamped to
/// [`MIN_PROBABILITY`, `MAX_PROBABILITY`]; the two probabilities always sum
/// to exactly 100.
pub fn mock_predict(vitals: &Vitals) -> MockPrediction {
    let score = f64::from(mock_risk_score(vitals));
    let probability_positive = score.clamp(MIN_PROBABILITY, MAX_PROBABILITY);
    let probability_negative = 100.0 - probability_positive;

    MockPrediction {
        probability_positive,
        probability_negative,
        risk_band: RiskBand::from_probability(probability_positive),
        diabetic: probability_positive >= DIABETIC_CUTOFF,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_rule_weights() {
        assert_eq!(glucose_points(126.0), 25);
        assert_eq!(glucose_points(125.0), 10);
        assert_eq!(glucose_points(100.0), 0);
        assert_eq!(bmi_points(30.0), 20);
        assert_eq!(bmi_points(25.0), 10);
        assert_eq!(bmi_points(24.9), 0);
        assert_eq!(age_points(45), 15);
        assert_eq!(age_points(35), 5);
        assert_eq!(age_points(34), 0);
        assert_eq!(blood_pressure_points(80.0), 0);
        assert_eq!(pedigree_points(0.5), 0);
        assert_eq!(insulin_points(200.1), 10);
    }

    #[test]
    fn test_clamps_low() {
        let v = Vitals::default()
            .with_glucose(80.0)
            .with_bmi(20.0)
            .with_age(20);
        assert_eq!(mock_risk_score(&v), 0);
        let p = mock_predict(&v);
        assert_eq!(p.probability_positive, MIN_PROBABILITY);
        assert_eq!(p.probability_negative, 95.0);
        assert_eq!(p.risk_band, RiskBand::Low);
        assert!(!p.diabetic);
    }

    #[test]
    fn test_diabetic_cutoff_inclusive() {
        // 25 + 10 + 15 = 50
        let v = Vitals::default()
            .with_glucose(130.0)
            .with_bmi(26.0)
            .with_age(50);
        let p = mock_predict(&v);
        assert_eq!(p.probability_positive, 50.0);
        assert!(p.diabetic);
        assert_eq!(p.risk_band, RiskBand::Moderate);
    }
}
