//! Error types for Glyco intake operations.
//!
//! The rule evaluator and the local scorer never fail. Errors arise only from
//! opt-in range validation and from decoding the remote predictor's payloads.

use serde::Serialize;
use std::error::Error;
use std::fmt;

/// A single field outside its accepted range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeViolation {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_finite() {
            write!(
                f,
                "{} out of range: {} (must be {}-{})",
                self.field, self.value, self.min, self.max
            )
        } else {
            write!(f, "{} is not a finite number", self.field)
        }
    }
}

/// Every range violation found in one vitals record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub violations: Vec<RangeViolation>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl Error for ValidationError {}

/// Predictor payload errors.
#[derive(Debug, Clone, PartialEq)]
pub enum WireError {
    /// Probabilities that do not sum to 100.
    ProbabilityMismatch { positive: f64, negative: f64 },
    /// A prediction class other than 0 or 1.
    InvalidPrediction(i64),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::ProbabilityMismatch { positive, negative } => write!(
                f,
                "Probabilities do not sum to 100: {} + {}",
                positive, negative
            ),
            WireError::InvalidPrediction(p) => {
                write!(f, "Invalid prediction class: {} (must be 0 or 1)", p)
            }
        }
    }
}

impl Error for WireError {}
