//! # Glyco Core
//!
//! Core types and pure logic for the Glyco diabetes risk intake.
//!
//! Nothing in this crate performs I/O. It provides:
//!
//! - **Vitals** — the patient measurements collected by the intake form
//! - **Rules** — an ordered threshold table deriving risk and positive factors
//! - **Scoring** — a coarse additive scorer used when the remote predictor is offline
//! - **Outcome** — risk bands, outcome messages, result-card and gauge text
//! - **Wire** — the snake_case request/response shapes of the remote predictor
//!
//! ## Quick Start
//!
//! ```rust
//! use glyco_core::prelude::*;
//!
//! let vitals = Vitals::default()
//!     .with_glucose(150.0)
//!     .with_bmi(32.0)
//!     .with_age(50);
//!
//! let report = evaluate_risk_factors(&vitals);
//! assert_eq!(report.risk_factors.len(), 3);
//!
//! let estimate = mock_predict(&vitals);
//! assert_eq!(estimate.probability_positive + estimate.probability_negative, 100.0);
//! ```

pub mod error;
pub mod factor;
pub mod outcome;
pub mod prelude;
pub mod ranges;
pub mod recommendations;
pub mod rules;
pub mod scoring;
pub mod vitals;
pub mod wire;
