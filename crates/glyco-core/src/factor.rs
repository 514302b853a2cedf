//! Qualitative observations derived from a vitals record.

use serde::{Deserialize, Serialize};

/// Whether a factor counts against or in favour of the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorKind {
    Risk,
    Positive,
}

/// How strongly a risk factor weighs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Moderate,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::High => write!(f, "high"),
        }
    }
}

/// A single risk or positive observation.
///
/// Factors are built fresh on every evaluation and carry no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    #[serde(rename = "type")]
    pub kind: FactorKind,
    /// Short name, e.g. "High Glucose".
    pub label: String,
    /// Sentence shown to the patient.
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Factor {
    /// Create a risk factor.
    pub fn risk(label: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            kind: FactorKind::Risk,
            label: label.into(),
            message: message.into(),
            severity: Some(severity),
        }
    }

    /// Create a positive factor. Positive factors have no severity.
    pub fn positive(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: FactorKind::Positive,
            label: label.into(),
            message: message.into(),
            severity: None,
        }
    }

    pub fn is_risk(&self) -> bool {
        self.kind == FactorKind::Risk
    }
}

/// The two ordered factor lists produced by the rule evaluator.
///
/// Order follows the rule table and is shown top-to-bottom by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorReport {
    pub risk_factors: Vec<Factor>,
    pub positive_factors: Vec<Factor>,
}

impl FactorReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a factor to the list matching its kind.
    pub fn push(&mut self, factor: Factor) {
        match factor.kind {
            FactorKind::Risk => self.risk_factors.push(factor),
            FactorKind::Positive => self.positive_factors.push(factor),
        }
    }

    /// True when no risk factor fired.
    pub fn is_clear(&self) -> bool {
        self.risk_factors.is_empty()
    }

    /// Highest severity among the risk factors.
    pub fn worst_severity(&self) -> Option<Severity> {
        self.risk_factors.iter().filter_map(|f| f.severity).max()
    }

    pub fn len(&self) -> usize {
        self.risk_factors.len() + self.positive_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
