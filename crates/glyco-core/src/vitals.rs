//! The patient vitals record collected by the intake form.

use serde::{Deserialize, Serialize};

/// Biological sex as captured by the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Default for Gender {
    fn default() -> Self {
        Self::Female
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("unknown gender '{}': expected male or female", other)),
        }
    }
}

/// One patient's measurements, immutable for the duration of an evaluation.
///
/// Values are taken as given. Range checking is opt-in through
/// [`Vitals::validate`](crate::ranges); the rule evaluator and the mock
/// scorer accept any finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vitals {
    pub gender: Gender,
    /// Age in whole years.
    pub age: u32,
    /// Number of pregnancies. Meaningless for male patients.
    pub pregnancies: u32,
    /// Plasma glucose (mg/dL).
    pub glucose: f64,
    /// Diastolic blood pressure (mm Hg).
    pub blood_pressure: f64,
    /// Triceps skin fold thickness (mm).
    pub skin_thickness: f64,
    /// Two-hour serum insulin (uU/mL).
    pub insulin: f64,
    /// Body-mass index (kg/m²).
    pub bmi: f64,
    /// Diabetes pedigree function score, practically 0 to 2.5.
    #[serde(rename = "diabetesPedigreeFunction", alias = "pedigreeFunction")]
    pub pedigree_function: f64,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            gender: Gender::Female,
            age: 30,
            pregnancies: 0,
            glucose: 120.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            pedigree_function: 0.5,
        }
    }
}

impl Vitals {
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = age;
        self
    }

    pub fn with_pregnancies(mut self, pregnancies: u32) -> Self {
        self.pregnancies = pregnancies;
        self
    }

    pub fn with_glucose(mut self, glucose: f64) -> Self {
        self.glucose = glucose;
        self
    }

    pub fn with_blood_pressure(mut self, blood_pressure: f64) -> Self {
        self.blood_pressure = blood_pressure;
        self
    }

    pub fn with_skin_thickness(mut self, skin_thickness: f64) -> Self {
        self.skin_thickness = skin_thickness;
        self
    }

    pub fn with_insulin(mut self, insulin: f64) -> Self {
        self.insulin = insulin;
        self
    }

    pub fn with_bmi(mut self, bmi: f64) -> Self {
        self.bmi = bmi;
        self
    }

    pub fn with_pedigree_function(mut self, pedigree_function: f64) -> Self {
        self.pedigree_function = pedigree_function;
        self
    }

    /// Pregnancy count as sent to the predictor: always zero for male patients.
    pub fn effective_pregnancies(&self) -> u32 {
        match self.gender {
            Gender::Male => 0,
            Gender::Female => self.pregnancies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_form_defaults() {
        let v = Vitals::default();
        assert_eq!(v.gender, Gender::Female);
        assert_eq!(v.age, 30);
        assert_eq!(v.glucose, 120.0);
        assert_eq!(v.bmi, 25.0);
        assert_eq!(v.pedigree_function, 0.5);
    }

    #[test]
    fn test_male_pregnancies_are_zeroed() {
        let v = Vitals::default()
            .with_gender(Gender::Male)
            .with_pregnancies(3);
        assert_eq!(v.pregnancies, 3);
        assert_eq!(v.effective_pregnancies(), 0);

        let f = v.with_gender(Gender::Female);
        assert_eq!(f.effective_pregnancies(), 3);
    }

    #[test]
    fn test_camel_case_json() {
        let json = r#"{
            "gender": "male",
            "age": 22,
            "pregnancies": 0,
            "glucose": 85,
            "bloodPressure": 70,
            "skinThickness": 15,
            "insulin": 50,
            "bmi": 21.5,
            "diabetesPedigreeFunction": 0.2
        }"#;
        let v: Vitals = serde_json::from_str(json).unwrap();
        assert_eq!(v.gender, Gender::Male);
        assert_eq!(v.blood_pressure, 70.0);
        assert_eq!(v.pedigree_function, 0.2);

        let out = serde_json::to_value(&v).unwrap();
        assert!(out.get("bloodPressure").is_some());
        assert!(out.get("diabetesPedigreeFunction").is_some());
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("m".parse::<Gender>().unwrap(), Gender::Male);
        assert!("other".parse::<Gender>().is_err());
    }
}
