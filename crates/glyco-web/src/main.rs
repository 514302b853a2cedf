//! Glyco Web - intake JSON API.

use anyhow::Result;
use clap::Parser;
use glyco::prelude::*;
use glyco_web::{create_router, AppState};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "glyco-web")]
#[command(about = "Glyco Web - diabetes risk intake API")]
struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Predictor base URL (default: $GLYCO_API_URL or http://localhost:8000)
    #[arg(long)]
    predictor_url: Option<String>,

    /// Predictor request timeout in seconds
    #[arg(long, default_value = "10")]
    timeout: u64,

    /// Serve local estimates only, never contacting the predictor
    #[arg(long)]
    offline: bool,

    /// Report predictor outages as errors instead of falling back to local estimates
    #[arg(long)]
    no_fallback: bool,

    /// Reject vitals outside the accepted input ranges
    #[arg(long)]
    strict: bool,

    /// Seconds between predictor health checks
    #[arg(long, default_value = "30")]
    health_interval: u64,
}

fn build_predictor(cli: &Cli) -> Result<Arc<dyn Predictor>> {
    if cli.offline {
        return Ok(Arc::new(MockPredictor::new()));
    }

    let mut config = PredictorConfig::from_env().with_timeout(cli.timeout);
    if let Some(url) = &cli.predictor_url {
        config = config.with_base_url(url.as_str());
    }
    info!(base_url = %config.base_url, "using remote predictor");

    let remote = HttpPredictor::new(config)?;
    if cli.no_fallback {
        Ok(Arc::new(remote))
    } else {
        Ok(Arc::new(FallbackPredictor::new(remote)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let addr = format!("{}:{}", cli.host, cli.port);

    let predictor = build_predictor(&cli)?;
    let state = AppState::new(predictor, Duration::from_secs(cli.health_interval))
        .with_strict_validation(cli.strict);

    let app = create_router(state);

    info!("Glyco intake API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
