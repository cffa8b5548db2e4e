//! Error types for adr-core.
//!
//! `decide` is total and never fails. Errors only surface at the edges:
//! selecting an algorithm from the registry and loading configuration.

/// Unified error type for all fallible adr-core operations.
#[derive(Debug, thiserror::Error)]
pub enum AdrError {
    /// No algorithm registered under the requested id.
    #[error("Unknown ADR algorithm: {0}")]
    UnknownAlgorithm(String),

    /// An algorithm with this id is already registered.
    #[error("Duplicate ADR algorithm: {0}")]
    DuplicateAlgorithm(String),

    /// Configuration values that cannot drive the engine.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration text that failed to parse.
    #[cfg(feature = "serde")]
    #[error("Config parse error: {0}")]
    Config(String),
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for AdrError {
    fn from(err: serde_json::Error) -> Self {
        AdrError::Config(err.to_string())
    }
}
