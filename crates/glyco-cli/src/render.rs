//! Terminal rendering of factors and assessments.

use colored::{ColoredString, Colorize};
use glyco::prelude::*;

fn severity_tag(severity: Option<Severity>) -> ColoredString {
    match severity {
        Some(Severity::High) => "high".red().bold(),
        Some(Severity::Moderate) => "moderate".yellow(),
        Some(Severity::Low) => "low".normal(),
        None => "".normal(),
    }
}

fn band_colored(text: &str, band: RiskBand) -> ColoredString {
    match band {
        RiskBand::Low => text.green().bold(),
        RiskBand::Moderate => text.yellow().bold(),
        RiskBand::High => text.red().bold(),
    }
}

pub fn print_factors(report: &FactorReport) {
    println!("{}", "Risk Factor Analysis".blue().bold());
    if report.is_clear() {
        println!("  {} No significant risk factors identified!", "✓".green());
    } else {
        println!("  {}", "Identified Risk Factors:".yellow());
        for factor in &report.risk_factors {
            println!(
                "    {} {} {}",
                "•".red(),
                factor.message,
                format!("[{}]", severity_tag(factor.severity)).dimmed()
            );
        }
    }

    if !report.positive_factors.is_empty() {
        println!("  {}", "Positive Health Indicators:".green());
        for factor in &report.positive_factors {
            println!("    {} {}", "•".green(), factor.message);
        }
    }
}

pub fn print_assessment(assessment: &Assessment) {
    let outcome = &assessment.outcome;
    let summary = &assessment.summary;

    println!("{}", "Glyco Assessment".white().bold());
    println!("{}", "═".repeat(48).dimmed());
    println!();

    if assessment.is_estimate() {
        println!(
            "{} {}",
            "!".yellow().bold(),
            "Local estimate - the predictor was not consulted. Not a clinical result.".yellow()
        );
        println!();
    }

    println!("  {}", summary.subtitle.dimmed());
    println!("  {}", band_colored(summary.title, outcome.risk_band));
    println!("  {}", summary.detail);
    println!();

    println!("{}", "Probability Breakdown".blue().bold());
    println!(
        "  Non-Diabetic:  {}",
        format!("{:.1}%", outcome.probability_negative).green()
    );
    println!(
        "  Diabetic:      {}",
        format!("{:.1}%", outcome.probability_positive).red()
    );
    let (r, g, b) = assessment.gauge.rgb();
    println!(
        "  Gauge:         {} ({})",
        assessment.gauge.label().truecolor(r, g, b).bold(),
        outcome.risk_band
    );
    println!();

    print_factors(&assessment.factors);
    println!();

    let heading = if outcome.is_diabetic {
        "Recommended Actions".red().bold()
    } else {
        "Maintain Your Health".green().bold()
    };
    println!("{}", heading);
    for (i, rec) in assessment.recommendations.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        println!("  {} {} - {}", rank.blue(), rec.title.white().bold(), rec.detail);
    }

    println!();
    println!("{}", "═".repeat(48).dimmed());
}
