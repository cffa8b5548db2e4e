//! ADR decision engine — pure, deterministic link adaptation.
//!
//! The engine makes its decision from an [`AdrRequest`] alone. It holds
//! no state between calls, so one instance may serve every device
//! concurrently.
//!
//! - [`loss`]: packet-loss estimate and the nbTrans rule.
//! - [`planner`]: bounded DR / TX power step search.
//! - [`engine`]: `decide` orchestration and the [`AdrAlgorithm`] seam.

pub mod engine;
pub mod loss;
pub mod planner;
pub mod types;

// Re-export the canonical entrypoint and core types.
pub use engine::{decide, decide_with, AdrAlgorithm, DefaultAdr};
pub use types::{AdrRequest, AdrResponse, UplinkHistoryEntry};
