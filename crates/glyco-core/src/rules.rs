//! Threshold rule table deriving risk and positive factors from vitals.
//!
//! Six rules are evaluated in a fixed order. Within a rule the arms form a
//! ladder where the first matching arm wins; rules never short-circuit each
//! other, so one record can fire several factors at once.
//!
//! | # | Measurement | Arms |
//! |---|-------------|------|
//! | 1 | Glucose | > 125 risk/high, < 100 positive |
//! | 2 | BMI | ≥ 30 risk/high, ≥ 25 risk/moderate, [18.5, 24.9] positive |
//! | 3 | Age | ≥ 45 risk/moderate |
//! | 4 | Blood pressure | > 80 risk/moderate, [60, 80] positive |
//! | 5 | Pedigree function | > 0.5 risk/high |
//! | 6 | Insulin | > 200 risk/moderate |
//!
//! Values outside every arm produce nothing for that rule. There is no
//! error path: negative or absurd input simply falls through the ladder.

use crate::factor::{Factor, FactorKind, FactorReport, Severity};
use crate::vitals::Vitals;

/// The vitals field a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    Glucose,
    Bmi,
    Age,
    BloodPressure,
    PedigreeFunction,
    Insulin,
}

impl Measurement {
    /// Read this measurement from a vitals record.
    pub fn read(&self, vitals: &Vitals) -> f64 {
        match self {
            Measurement::Glucose => vitals.glucose,
            Measurement::Bmi => vitals.bmi,
            Measurement::Age => f64::from(vitals.age),
            Measurement::BloodPressure => vitals.blood_pressure,
            Measurement::PedigreeFunction => vitals.pedigree_function,
            Measurement::Insulin => vitals.insulin,
        }
    }
}

/// A comparison against a fixed bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    /// Strictly greater than.
    Above(f64),
    /// Greater than or equal.
    AtLeast(f64),
    /// Strictly less than.
    Below(f64),
    /// Inclusive on both ends.
    Within(f64, f64),
}

impl Threshold {
    /// NaN matches nothing.
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Threshold::Above(bound) => value > bound,
            Threshold::AtLeast(bound) => value >= bound,
            Threshold::Below(bound) => value < bound,
            Threshold::Within(lo, hi) => value >= lo && value <= hi,
        }
    }
}

/// The factor an arm emits, kept as static text until it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorTemplate {
    pub kind: FactorKind,
    pub label: &'static str,
    pub message: &'static str,
    pub severity: Option<Severity>,
}

impl FactorTemplate {
    const fn risk(label: &'static str, message: &'static str, severity: Severity) -> Self {
        Self {
            kind: FactorKind::Risk,
            label,
            message,
            severity: Some(severity),
        }
    }

    const fn positive(label: &'static str, message: &'static str) -> Self {
        Self {
            kind: FactorKind::Positive,
            label,
            message,
            severity: None,
        }
    }

    pub fn build(&self) -> Factor {
        Factor {
            kind: self.kind,
            label: self.label.to_string(),
            message: self.message.to_string(),
            severity: self.severity,
        }
    }
}

/// One rung of a rule's ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arm {
    pub threshold: Threshold,
    pub emits: FactorTemplate,
}

/// A rule: one measurement and an ordered ladder of arms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub measurement: Measurement,
    pub arms: &'static [Arm],
}

impl Rule {
    /// Evaluate this rule alone. Returns the factor of the first matching arm.
    pub fn evaluate(&self, vitals: &Vitals) -> Option<Factor> {
        let value = self.measurement.read(vitals);
        self.arms
            .iter()
            .find(|arm| arm.threshold.matches(value))
            .map(|arm| arm.emits.build())
    }
}

const GLUCOSE: Rule = Rule {
    measurement: Measurement::Glucose,
    arms: &[
        Arm {
            threshold: Threshold::Above(125.0),
            emits: FactorTemplate::risk(
                "High Glucose",
                "High Glucose Level (>125 mg/dL) - Indicates potential diabetes",
                Severity::High,
            ),
        },
        Arm {
            threshold: Threshold::Below(100.0),
            emits: FactorTemplate::positive("Normal Glucose", "Normal Glucose Level (<100 mg/dL)"),
        },
    ],
};

const BMI: Rule = Rule {
    measurement: Measurement::Bmi,
    arms: &[
        Arm {
            threshold: Threshold::AtLeast(30.0),
            emits: FactorTemplate::risk(
                "Obesity",
                "Obesity (BMI >= 30) - Significantly increases diabetes risk",
                Severity::High,
            ),
        },
        Arm {
            threshold: Threshold::AtLeast(25.0),
            emits: FactorTemplate::risk(
                "Overweight",
                "Overweight (BMI 25-29.9) - Moderate risk factor",
                Severity::Moderate,
            ),
        },
        // (24.9, 25.0) and < 18.5 intentionally emit nothing.
        Arm {
            threshold: Threshold::Within(18.5, 24.9),
            emits: FactorTemplate::positive("Healthy BMI", "Healthy BMI (18.5-24.9 kg/m²)"),
        },
    ],
};

// No positive arm for age.
const AGE: Rule = Rule {
    measurement: Measurement::Age,
    arms: &[Arm {
        threshold: Threshold::AtLeast(45.0),
        emits: FactorTemplate::risk(
            "Age Factor",
            "Age Factor (>= 45 years) - Increased risk with age",
            Severity::Moderate,
        ),
    }],
};

const BLOOD_PRESSURE: Rule = Rule {
    measurement: Measurement::BloodPressure,
    arms: &[
        Arm {
            threshold: Threshold::Above(80.0),
            emits: FactorTemplate::risk(
                "Elevated BP",
                "Elevated Blood Pressure (>80 mm Hg)",
                Severity::Moderate,
            ),
        },
        Arm {
            threshold: Threshold::Within(60.0, 80.0),
            emits: FactorTemplate::positive("Normal BP", "Normal Blood Pressure (60-80 mm Hg)"),
        },
    ],
};

const PEDIGREE: Rule = Rule {
    measurement: Measurement::PedigreeFunction,
    arms: &[Arm {
        threshold: Threshold::Above(0.5),
        emits: FactorTemplate::risk(
            "Genetic Predisposition",
            "Genetic Predisposition (DPF >0.5) - Family history indicates higher risk",
            Severity::High,
        ),
    }],
};

const INSULIN: Rule = Rule {
    measurement: Measurement::Insulin,
    arms: &[Arm {
        threshold: Threshold::Above(200.0),
        emits: FactorTemplate::risk(
            "Elevated Insulin",
            "Elevated Insulin (>200 uU/mL) - May indicate insulin resistance",
            Severity::Moderate,
        ),
    }],
};

/// The rule table, in evaluation order.
pub const RULES: [Rule; 6] = [GLUCOSE, BMI, AGE, BLOOD_PRESSURE, PEDIGREE, INSULIN];

/// Derive risk and positive factors from a vitals record.
///
/// Pure and total: identical input always yields identical output.
pub fn evaluate_risk_factors(vitals: &Vitals) -> FactorReport {
    let mut report = FactorReport::new();
    for factor in RULES.iter().filter_map(|rule| rule.evaluate(vitals)) {
        report.push(factor);
    }
    report
}
