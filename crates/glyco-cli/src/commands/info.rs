//! Show model info and accepted input ranges.

use anyhow::{Context, Result};
use colored::Colorize;
use glyco::prelude::*;

use crate::config::Config;

pub async fn run(local: bool) -> Result<()> {
    let info = if local {
        ModelInfo::local("Local input ranges")
    } else {
        let config = Config::load()?;
        let predictor = super::predictor_from_config(&config, false)?;
        predictor
            .model_info()
            .await
            .context("Failed to fetch model info")?
    };

    println!("{} {}", "Model:".blue().bold(), info.model.white().bold());
    println!();

    println!("{}", "Features".blue().bold());
    for feature in &info.features {
        println!(
            "  {:<28} {:>6} - {:<6} {}",
            feature.name,
            feature.min,
            feature.max,
            feature.unit.dimmed()
        );
    }

    if !info.risk_levels.is_empty() {
        println!();
        println!("{}", "Risk Levels".blue().bold());
        for (level, description) in &info.risk_levels {
            println!("  {:<10} {}", level.cyan(), description);
        }
    }

    Ok(())
}
