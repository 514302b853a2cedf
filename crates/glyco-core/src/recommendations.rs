//! Health recommendations shown after an assessment.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub title: &'static str,
    pub detail: &'static str,
}

const DIABETIC: [Recommendation; 5] = [
    Recommendation {
        title: "Consult a Professional",
        detail: "Schedule a diabetes screening",
    },
    Recommendation {
        title: "Regular Monitoring",
        detail: "Check blood glucose regularly",
    },
    Recommendation {
        title: "Dietary Changes",
        detail: "Consider a low-glycemic diet",
    },
    Recommendation {
        title: "Physical Activity",
        detail: "150+ minutes exercise weekly",
    },
    Recommendation {
        title: "Medication Review",
        detail: "Discuss treatments with your doctor",
    },
];

const MAINTAIN: [Recommendation; 5] = [
    Recommendation {
        title: "Regular Check-ups",
        detail: "Annual health screenings",
    },
    Recommendation {
        title: "Balanced Nutrition",
        detail: "Vegetables and whole grains",
    },
    Recommendation {
        title: "Stay Active",
        detail: "30+ minutes exercise daily",
    },
    Recommendation {
        title: "Healthy Weight",
        detail: "Maintain optimal BMI",
    },
    Recommendation {
        title: "Quality Sleep",
        detail: "7-9 hours per night",
    },
];

/// Recommended actions for a diabetic or non-diabetic outcome.
pub fn recommendations(is_diabetic: bool) -> &'static [Recommendation] {
    if is_diabetic {
        &DIABETIC
    } else {
        &MAINTAIN
    }
}
