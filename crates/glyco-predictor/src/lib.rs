//! # Glyco Predictor
//!
//! Access to the remote diabetes predictor, with a local fallback.
//!
//! The remote service owns the authoritative model. This crate sends it a
//! vitals record and adapts the answer; when it cannot be reached, the
//! [`FallbackPredictor`] substitutes the local scorer and tags the outcome
//! as an estimate.
//!
//! ## Features
//!
//! - `http`: the reqwest-based [`HttpPredictor`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use glyco_predictor::{assess, FallbackPredictor, HttpPredictor, PredictorConfig};
//!
//! let remote = HttpPredictor::new(PredictorConfig::from_env())?;
//! let predictor = FallbackPredictor::new(remote);
//! let assessment = assess(&predictor, &vitals).await?;
//! ```

mod assessment;
mod backend;
mod fallback;
mod monitor;

pub use assessment::{assess, assess_offline, Assessment};
pub use backend::{
    MockPredictor, Predictor, PredictorConfig, PredictorError, PredictorResult, BASE_URL_ENV,
    DEFAULT_BASE_URL,
};
pub use fallback::FallbackPredictor;
pub use monitor::HealthMonitor;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::HttpPredictor;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{assess, assess_offline, Assessment};
    pub use crate::{FallbackPredictor, HealthMonitor, MockPredictor};
    pub use crate::{Predictor, PredictorConfig, PredictorError, PredictorResult};

    #[cfg(feature = "http")]
    pub use crate::HttpPredictor;
}
