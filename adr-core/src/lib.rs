//! ADR Core — LoRaWAN Adaptive Data Rate decision engine.
//!
//! Given a device's recent uplink history and its current MAC
//! parameters, the engine recommends a new data rate, transmit-power
//! index and nbTrans (retransmission count). It trades link margin
//! against airtime and energy, and refuses to raise power on a handful
//! of noisy readings.
//!
//! The engine is a pure function: no IO, no clocks, no global state.
//! The network server builds an [`adr::AdrRequest`] per accepted uplink
//! and turns the [`adr::AdrResponse`] into a LinkADRReq.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`constants`] | Algorithm constants and default identity |
//! | [`errors`] | Error type for registry and config edges |
//! | [`adr`] | Types, loss estimator, step planner, `decide` |
//! | [`config`] | Tunable engine parameters |
//! | [`registry`] | Pluggable algorithm selection by id |
//! | [`vectors`] | Golden vector generator (test-only) |

/// Algorithm constants.
pub mod constants;

/// Error types for adr-core operations.
pub mod errors;

/// ADR decision engine.
pub mod adr;

/// Engine configuration.
pub mod config;

/// Algorithm registry.
pub mod registry;

/// Deterministic golden vector generator (test use only).
/// Requires the `vectors` feature: `cargo test --features vectors`.
#[cfg(feature = "vectors")]
pub mod vectors;

pub use adr::{decide, AdrAlgorithm, AdrRequest, AdrResponse, DefaultAdr, UplinkHistoryEntry};
pub use config::AdrConfig;
pub use errors::AdrError;
pub use registry::AdrRegistry;
