//! Predict diabetes risk and explain it.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use glyco::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::config::Config;
use crate::input::VitalsArgs;
use crate::render::print_assessment;

pub async fn run(args: &VitalsArgs, offline: bool, strict: bool, json: bool) -> Result<()> {
    let config = Config::load()?;
    let vitals = args.resolve()?;

    if strict || config.intake.strict_validation {
        if let Err(e) = vitals.validate() {
            for violation in &e.violations {
                eprintln!("  {} {}", "✗".red(), violation);
            }
            bail!("Vitals rejected: {} value(s) out of range", e.violations.len());
        }
    }

    let predictor = super::predictor_from_config(&config, offline)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    spinner.set_message("Analyzing health data...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = assess(predictor.as_ref(), &vitals).await;
    spinner.finish_and_clear();

    let assessment = result.context("Failed to generate prediction")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_assessment(&assessment);
    }

    Ok(())
}
