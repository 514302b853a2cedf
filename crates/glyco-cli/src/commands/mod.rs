//! CLI command implementations.

pub mod assess;
pub mod factors;
pub mod health;
pub mod info;
pub mod init;

use anyhow::Result;
use glyco::prelude::*;

use crate::config::Config;

/// Build the predictor described by the config.
pub(crate) fn predictor_from_config(config: &Config, offline: bool) -> Result<Box<dyn Predictor>> {
    if offline {
        return Ok(Box::new(MockPredictor::new()));
    }

    let remote = HttpPredictor::new(config.predictor_config())?;
    if config.predictor.fallback_to_mock {
        Ok(Box::new(FallbackPredictor::new(remote)))
    } else {
        Ok(Box::new(remote))
    }
}
