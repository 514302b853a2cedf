//! # Glyco Web
//!
//! JSON intake API consumed by a presentation layer (form, gauge, result cards).
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server against a predictor on localhost:8000
//! cargo run -p glyco-web -- --port 3000
//!
//! # Without a predictor
//! cargo run -p glyco-web -- --offline
//! ```
//!
//! ## API Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | `/api/intake/assess` | Prediction, factors and recommendations |
//! | POST | `/api/intake/factors` | Rule-derived factors only |
//! | POST | `/api/intake/preview` | Local estimate, never the predictor |
//! | GET | `/api/intake/info` | Accepted input ranges and risk bands |
//! | GET | `/api/intake/health` | Predictor reachability |
//! | GET | `/health` | Liveness |

pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
