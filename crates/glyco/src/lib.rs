//! # Glyco
//!
//! Diabetes risk intake: collect vitals, ask a remote predictor for a risk
//! score and explain it with deterministic risk-factor rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use glyco::prelude::*;
//!
//! let vitals = Vitals::default().with_glucose(150.0).with_age(50);
//!
//! // Rule-derived factors, in display order
//! let report = evaluate_risk_factors(&vitals);
//! for factor in &report.risk_factors {
//!     println!("{} ({:?})", factor.message, factor.severity);
//! }
//!
//! // Offline assessment from the local scorer
//! let assessment = assess_offline(&vitals);
//! assert!(assessment.is_estimate());
//! ```
//!
//! ## Architecture
//!
//! - [`glyco_core`] - Vitals, rule evaluator, local scorer, outcome text, wire shapes
//! - [`glyco_predictor`] - Predictor trait, HTTP client, fallback, health monitor
//!
//! ## Remote Prediction
//!
//! With the `http` feature:
//!
//! ```rust,ignore
//! use glyco::prelude::*;
//!
//! let predictor = FallbackPredictor::new(HttpPredictor::new(PredictorConfig::from_env())?);
//! let assessment = assess(&predictor, &vitals).await?;
//! if assessment.is_estimate() {
//!     println!("predictor offline, showing a local estimate");
//! }
//! ```

// Re-export all subcrates
pub use glyco_core as core;
pub use glyco_predictor as predictor;

/// Prelude module for convenient imports.
///
/// ```rust
/// use glyco::prelude::*;
/// ```
pub mod prelude {
    pub use glyco_core::prelude::*;
    pub use glyco_core::ranges::feature_range;

    pub use glyco_predictor::{
        assess, assess_offline, Assessment, FallbackPredictor, HealthMonitor, MockPredictor,
        Predictor, PredictorConfig, PredictorError, PredictorResult,
    };

    #[cfg(feature = "http")]
    pub use glyco_predictor::HttpPredictor;
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
