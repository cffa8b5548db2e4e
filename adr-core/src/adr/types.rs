//! ADR value types.
//!
//! The network server builds a fresh [`AdrRequest`] for every accepted
//! uplink and consumes the [`AdrResponse`] immediately. Neither type is
//! cached or shared across calls.

/// One previously received uplink.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UplinkHistoryEntry {
    /// Frame counter of the uplink.
    pub f_cnt: u32,
    /// Best SNR (dB) observed across the receiving gateways.
    pub max_snr: f64,
    /// TX power index the device used for this uplink.
    pub tx_power_index: u8,
}

/// Input to the ADR decision.
///
/// `uplink_history` is ordered ascending by `f_cnt`. The caller owns
/// retention; in practice it is capped near
/// [`REQUIRED_HISTORY_COUNT`](crate::constants::REQUIRED_HISTORY_COUNT).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdrRequest {
    /// ADR bit of the last uplink.
    pub adr: bool,
    /// Current data rate.
    pub dr: u8,
    /// Current TX power index.
    pub tx_power_index: u8,
    /// Current number of transmissions per unconfirmed frame.
    pub nb_trans: u8,
    /// Highest data rate the device may be moved to.
    pub max_dr: u8,
    /// Highest TX power index (lowest power) allowed.
    pub max_tx_power_index: u8,
    /// Required SNR (dB) for the current data rate.
    pub required_snr_for_dr: f64,
    /// Installation margin (dB).
    pub installation_margin: f64,
    /// Recent uplinks, oldest first.
    pub uplink_history: Vec<UplinkHistoryEntry>,
}

/// Recommended MAC parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdrResponse {
    pub dr: u8,
    pub tx_power_index: u8,
    pub nb_trans: u8,
}

impl AdrResponse {
    /// The request's current values, unchanged.
    pub fn unchanged(req: &AdrRequest) -> Self {
        AdrResponse {
            dr: req.dr,
            tx_power_index: req.tx_power_index,
            nb_trans: req.nb_trans,
        }
    }
}

impl AdrRequest {
    /// Best SNR in the history, `None` when the history is empty.
    ///
    /// NaN samples are ignored.
    pub fn snr_max(&self) -> Option<f64> {
        if self.uplink_history.is_empty() {
            return None;
        }
        Some(
            self.uplink_history
                .iter()
                .map(|e| e.max_snr)
                .fold(f64::NEG_INFINITY, f64::max),
        )
    }

    /// Number of history entries sent at the current TX power index.
    pub fn history_count_at_current_power(&self) -> usize {
        self.uplink_history
            .iter()
            .filter(|e| e.tx_power_index == self.tx_power_index)
            .count()
    }
}
