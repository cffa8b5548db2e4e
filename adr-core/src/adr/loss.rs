//! Packet-loss estimate and nbTrans selection.

use super::types::UplinkHistoryEntry;
use crate::constants::{LOSS_BUCKETS_PERCENT, NB_TRANS_MAX, NB_TRANS_MIN, NB_TRANS_TABLE};

/// Estimate uplink packet loss (percent) from frame counter gaps.
///
/// Returns `0.0` while fewer than `required_history_count` uplinks are
/// known, so a freshly (re)activated device never gets its nbTrans
/// raised on thin evidence.
///
/// Each consecutive pair contributes `curr.f_cnt - prev.f_cnt - 1`
/// missed uplinks. The sum is divided by the number of entries, not the
/// number of pairs.
pub fn packet_loss_percent(history: &[UplinkHistoryEntry], required_history_count: usize) -> f64 {
    if history.len() < required_history_count || history.is_empty() {
        return 0.0;
    }

    let lost: i64 = history
        .windows(2)
        .map(|pair| i64::from(pair[1].f_cnt) - i64::from(pair[0].f_cnt) - 1)
        .sum();

    lost as f64 / history.len() as f64 * 100.0
}

/// Pick the nbTrans for the observed loss.
///
/// `current` is clamped into `[NB_TRANS_MIN, NB_TRANS_MAX]` before it
/// selects the table column. The row is the first loss bucket whose
/// bound `loss_percent` is below.
pub fn nb_trans_for_loss(current: u8, loss_percent: f64) -> u8 {
    let col = usize::from(current.clamp(NB_TRANS_MIN, NB_TRANS_MAX) - 1);
    let row = LOSS_BUCKETS_PERCENT
        .iter()
        .position(|&bound| loss_percent < bound)
        .unwrap_or(LOSS_BUCKETS_PERCENT.len());
    NB_TRANS_TABLE[row][col]
}
