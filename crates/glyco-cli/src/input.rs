//! Vitals from command-line flags or a JSON file.

use anyhow::{Context, Result};
use clap::Args;
use glyco::prelude::{Gender, Vitals};
use std::path::PathBuf;

/// Vitals input. Flags override values read from `--file`; anything left
/// unset takes the intake form's default.
#[derive(Args, Debug, Clone, Default)]
pub struct VitalsArgs {
    /// JSON file with a vitals record (camelCase fields)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// male or female
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Age in years
    #[arg(long)]
    pub age: Option<u32>,

    /// Number of pregnancies (ignored for male patients)
    #[arg(long)]
    pub pregnancies: Option<u32>,

    /// Glucose (mg/dL)
    #[arg(long)]
    pub glucose: Option<f64>,

    /// Blood pressure (mm Hg)
    #[arg(long)]
    pub blood_pressure: Option<f64>,

    /// Skin thickness (mm)
    #[arg(long)]
    pub skin_thickness: Option<f64>,

    /// Insulin (uU/mL)
    #[arg(long)]
    pub insulin: Option<f64>,

    /// Body-mass index (kg/m²)
    #[arg(long)]
    pub bmi: Option<f64>,

    /// Diabetes pedigree function score
    #[arg(long)]
    pub pedigree: Option<f64>,
}

impl VitalsArgs {
    pub fn resolve(&self) -> Result<Vitals> {
        let mut vitals = match &self.file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read vitals: {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse vitals: {}", path.display()))?
            }
            None => Vitals::default(),
        };

        if let Some(gender) = self.gender {
            vitals.gender = gender;
        }
        if let Some(age) = self.age {
            vitals.age = age;
        }
        if let Some(pregnancies) = self.pregnancies {
            vitals.pregnancies = pregnancies;
        }
        if let Some(glucose) = self.glucose {
            vitals.glucose = glucose;
        }
        if let Some(blood_pressure) = self.blood_pressure {
            vitals.blood_pressure = blood_pressure;
        }
        if let Some(skin_thickness) = self.skin_thickness {
            vitals.skin_thickness = skin_thickness;
        }
        if let Some(insulin) = self.insulin {
            vitals.insulin = insulin;
        }
        if let Some(bmi) = self.bmi {
            vitals.bmi = bmi;
        }
        if let Some(pedigree) = self.pedigree {
            vitals.pedigree_function = pedigree;
        }

        Ok(vitals)
    }
}
