//! Accepted input ranges and opt-in validation.
//!
//! The bounds mirror the intake form's sliders and the predictor's request
//! schema. Validation is an extension for callers that want to reject bad
//! input before it reaches the predictor; the rule evaluator and the local
//! scorer never consult it.

use serde::Serialize;

use crate::error::{RangeViolation, ValidationError};
use crate::vitals::Vitals;

/// Bounds and unit for one input feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
}

impl FeatureRange {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    fn check(&self, value: f64) -> Option<RangeViolation> {
        if self.contains(value) {
            None
        } else {
            Some(RangeViolation {
                field: self.name,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Feature ranges in the predictor's column order.
#[rustfmt::skip]
pub const FEATURE_RANGES: [FeatureRange; 8] = [
    FeatureRange { name: "pregnancies", min: 0.0, max: 20.0, step: 1.0, unit: "count" },
    FeatureRange { name: "glucose", min: 0.0, max: 200.0, step: 1.0, unit: "mg/dL" },
    FeatureRange { name: "blood_pressure", min: 0.0, max: 130.0, step: 1.0, unit: "mm Hg" },
    FeatureRange { name: "skin_thickness", min: 0.0, max: 100.0, step: 1.0, unit: "mm" },
    FeatureRange { name: "insulin", min: 0.0, max: 900.0, step: 1.0, unit: "uU/mL" },
    FeatureRange { name: "bmi", min: 10.0, max: 70.0, step: 0.1, unit: "kg/m²" },
    FeatureRange { name: "diabetes_pedigree_function", min: 0.0, max: 2.5, step: 0.01, unit: "ratio" },
    FeatureRange { name: "age", min: 1.0, max: 100.0, step: 1.0, unit: "years" },
];

/// Look up a feature range by its snake_case name.
pub fn feature_range(name: &str) -> Option<&'static FeatureRange> {
    FEATURE_RANGES.iter().find(|r| r.name == name)
}

impl Vitals {
    /// Values in [`FEATURE_RANGES`] order.
    pub fn features(&self) -> [f64; 8] {
        [
            f64::from(self.effective_pregnancies()),
            self.glucose,
            self.blood_pressure,
            self.skin_thickness,
            self.insulin,
            self.bmi,
            self.pedigree_function,
            f64::from(self.age),
        ]
    }

    /// Check every feature against [`FEATURE_RANGES`], collecting all violations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let violations: Vec<RangeViolation> = FEATURE_RANGES
            .iter()
            .zip(self.features())
            .filter_map(|(range, value)| range.check(value))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations })
        }
    }
}
