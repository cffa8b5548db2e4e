//! Engine configuration.
//!
//! The defaults reproduce the standard algorithm exactly. Hosts that
//! want a differently tuned variant build a [`DefaultAdr`] from their
//! own [`AdrConfig`] and register it under a separate id.
//!
//! [`DefaultAdr`]: crate::adr::DefaultAdr

use crate::constants::{MARGIN_STEP_DB, NO_SIGNAL_SNR, REQUIRED_HISTORY_COUNT};
use crate::errors::AdrError;

/// Tunable parameters of the default engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdrConfig {
    /// History length needed before loss is estimated, and the exact
    /// number of samples at the current power needed to raise power.
    pub required_history_count: usize,
    /// dB of link margin per DR / TX power step.
    pub margin_step_db: f64,
    /// SNR assumed when there is no history.
    pub no_signal_snr: f64,
}

impl Default for AdrConfig {
    fn default() -> Self {
        AdrConfig {
            required_history_count: REQUIRED_HISTORY_COUNT,
            margin_step_db: MARGIN_STEP_DB,
            no_signal_snr: NO_SIGNAL_SNR,
        }
    }
}

impl AdrConfig {
    /// Check that the config can drive the engine.
    pub fn validate(&self) -> Result<(), AdrError> {
        if self.required_history_count == 0 {
            return Err(AdrError::InvalidConfig(
                "required_history_count must be >= 1".into(),
            ));
        }
        if !self.margin_step_db.is_finite() || self.margin_step_db <= 0.0 {
            return Err(AdrError::InvalidConfig(format!(
                "margin_step_db must be finite and > 0, got {}",
                self.margin_step_db
            )));
        }
        if !self.no_signal_snr.is_finite() {
            return Err(AdrError::InvalidConfig(format!(
                "no_signal_snr must be finite, got {}",
                self.no_signal_snr
            )));
        }
        Ok(())
    }

    /// Parse a JSON config. Missing fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, AdrError> {
        let config: AdrConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
