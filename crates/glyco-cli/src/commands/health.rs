//! Check predictor reachability.

use anyhow::{bail, Result};
use colored::Colorize;
use glyco::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;

pub async fn run(watch: bool) -> Result<()> {
    let config = Config::load()?;
    let predictor_config = config.predictor_config();
    let predictor = HttpPredictor::new(predictor_config.clone())?;

    if watch {
        return watch_health(predictor, &config).await;
    }

    if predictor.health_check().await {
        print_status(true, &predictor_config.base_url);
        Ok(())
    } else {
        print_status(false, &predictor_config.base_url);
        if config.predictor.fallback_to_mock {
            println!(
                "  {} Assessments will use the local estimate",
                "•".yellow()
            );
        }
        bail!("predictor health check failed");
    }
}

/// Poll until interrupted, printing every reachability change.
async fn watch_health(predictor: HttpPredictor, config: &Config) -> Result<()> {
    let base_url = predictor.config().base_url.clone();
    let interval = Duration::from_secs(config.predictor.health_interval_secs);
    println!(
        "{} Watching {} every {}s (Ctrl-C to stop)",
        "→".blue(),
        base_url.cyan(),
        interval.as_secs()
    );

    let predictor = Arc::new(predictor);
    let mut last = predictor.health_check().await;
    print_status(last, &base_url);

    let monitor = HealthMonitor::spawn(predictor, interval);
    let mut rx = monitor.subscribe();
    loop {
        if rx.changed().await.is_err() {
            bail!("health monitor stopped");
        }
        let healthy = *rx.borrow_and_update();
        if healthy != last {
            print_status(healthy, &base_url);
            last = healthy;
        }
    }
}

fn print_status(healthy: bool, base_url: &str) {
    if healthy {
        println!("{} Predictor reachable at {}", "✓".green(), base_url.cyan());
    } else {
        println!("{} Predictor unreachable at {}", "✗".red(), base_url.cyan());
    }
}
