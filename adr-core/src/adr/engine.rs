//! ADR decision — deterministic DR / TX power / nbTrans selection.
//!
//! The decision is pure: identical requests produce identical responses.
//! No IO, no clocks, no global state.

use tracing::{debug, trace};

use super::loss::{nb_trans_for_loss, packet_loss_percent};
use super::planner::plan;
use super::types::{AdrRequest, AdrResponse};
use crate::config::AdrConfig;
use crate::constants::{DEFAULT_ALGORITHM_ID, DEFAULT_ALGORITHM_NAME};
use crate::errors::AdrError;

/// A pluggable ADR algorithm, selected per device profile.
pub trait AdrAlgorithm: Send + Sync {
    /// Stable identifier referenced by device-profile configuration.
    fn id(&self) -> &str;

    /// Human-readable display name.
    fn name(&self) -> &str;

    /// Recommend new MAC parameters for `req`. Never fails.
    fn decide(&self, req: &AdrRequest) -> AdrResponse;
}

/// The standard margin-based ADR algorithm.
#[derive(Debug, Clone, Default)]
pub struct DefaultAdr {
    config: AdrConfig,
}

impl DefaultAdr {
    /// Engine with the standard parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an engine with tuned parameters.
    pub fn with_config(config: AdrConfig) -> Result<Self, AdrError> {
        config.validate()?;
        Ok(DefaultAdr { config })
    }

    /// Parameters this engine decides with.
    pub fn config(&self) -> &AdrConfig {
        &self.config
    }
}

impl AdrAlgorithm for DefaultAdr {
    fn id(&self) -> &str {
        DEFAULT_ALGORITHM_ID
    }

    fn name(&self) -> &str {
        DEFAULT_ALGORITHM_NAME
    }

    fn decide(&self, req: &AdrRequest) -> AdrResponse {
        decide_with(req, &self.config)
    }
}

/// Compute the ADR recommendation with the default configuration.
///
/// # Contract
///
/// - **Passthrough**: if `req.adr` is false the current values are
///   returned unchanged.
/// - **Bounded**: `dr <= req.max_dr`; `1 <= nb_trans <= 3`;
///   `tx_power_index <= req.max_tx_power_index` when the current index
///   is within range.
/// - **Hysteresis**: power is only raised (or DR held against a
///   negative margin) after exactly `REQUIRED_HISTORY_COUNT` uplinks at
///   the current power index.
pub fn decide(req: &AdrRequest) -> AdrResponse {
    decide_with(req, &AdrConfig::default())
}

/// Compute the ADR recommendation with an explicit configuration.
pub fn decide_with(req: &AdrRequest, config: &AdrConfig) -> AdrResponse {
    let mut resp = AdrResponse::unchanged(req);

    if !req.adr {
        trace!(dr = req.dr, tx_power_index = req.tx_power_index, "adr disabled, no change");
        return resp;
    }

    if req.dr > req.max_dr {
        resp.dr = req.max_dr;
    }

    let loss_percent = packet_loss_percent(&req.uplink_history, config.required_history_count);
    resp.nb_trans = nb_trans_for_loss(req.nb_trans, loss_percent);

    let snr_max = req.snr_max().unwrap_or(config.no_signal_snr);
    let snr_margin = snr_max - req.required_snr_for_dr - req.installation_margin;
    // Saturating cast: NaN -> 0, infinities clamp to i64 range.
    let n_step = (snr_margin / config.margin_step_db).floor() as i64;
    let history_count = req.history_count_at_current_power();

    debug!(
        snr_max,
        snr_margin,
        n_step,
        history_count,
        loss_percent,
        "adr margin computed"
    );

    if n_step < 0 && history_count != config.required_history_count {
        debug!(
            history_count,
            required = config.required_history_count,
            "negative margin, holding tx power until history is complete"
        );
        return resp;
    }

    let step = plan(resp.tx_power_index, resp.dr, n_step, req.max_tx_power_index, req.max_dr);
    resp.tx_power_index = step.tx_power_index;
    resp.dr = step.dr;

    debug!(
        dr = resp.dr,
        tx_power_index = resp.tx_power_index,
        nb_trans = resp.nb_trans,
        "adr decision"
    );
    resp
}
