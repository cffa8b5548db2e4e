//! Deterministic golden vector generator.
//!
//! Rebuilds the canonical ADR cases from code and pairs each request
//! with the engine's response. The committed file
//! `tests/vectors/adr.vectors.json` must match these cases exactly;
//! `tests/vector_compat.rs` enforces that in both directions.

use serde::{Deserialize, Serialize};

use crate::adr::{decide, AdrRequest, AdrResponse, UplinkHistoryEntry};
use crate::errors::AdrError;

/// Vector file schema version.
pub const VECTORS_VERSION: u32 = 1;

/// Top-level vector file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdrVectors {
    pub version: u32,
    pub cases: Vec<AdrVectorCase>,
}

/// One request/response pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdrVectorCase {
    pub id: String,
    pub description: String,
    pub request: AdrRequest,
    pub expected: AdrResponse,
}

fn contiguous(start: u32, len: u32, max_snr: f64, tx_power_index: u8) -> Vec<UplinkHistoryEntry> {
    (start..start + len)
        .map(|f_cnt| UplinkHistoryEntry {
            f_cnt,
            max_snr,
            tx_power_index,
        })
        .collect()
}

fn from_f_cnts(f_cnts: &[u32], max_snr: f64, tx_power_index: u8) -> Vec<UplinkHistoryEntry> {
    f_cnts
        .iter()
        .map(|&f_cnt| UplinkHistoryEntry {
            f_cnt,
            max_snr,
            tx_power_index,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn request(
    adr: bool,
    dr: u8,
    tx_power_index: u8,
    nb_trans: u8,
    max_dr: u8,
    max_tx_power_index: u8,
    required_snr_for_dr: f64,
    installation_margin: f64,
    uplink_history: Vec<UplinkHistoryEntry>,
) -> AdrRequest {
    AdrRequest {
        adr,
        dr,
        tx_power_index,
        nb_trans,
        max_dr,
        max_tx_power_index,
        required_snr_for_dr,
        installation_margin,
        uplink_history,
    }
}

fn case(id: &str, description: &str, request: AdrRequest) -> AdrVectorCase {
    let expected = decide(&request);
    AdrVectorCase {
        id: id.to_owned(),
        description: description.to_owned(),
        request,
        expected,
    }
}

/// The canonical cases, in file order.
pub fn canonical_cases() -> Vec<AdrVectorCase> {
    let f_cnts_two_gaps: Vec<u32> = [100, 102, 104].into_iter().chain(105..122).collect();
    let f_cnts_wide_gap: Vec<u32> = [0].into_iter().chain(11..30).collect();
    let f_cnts_single_gap: Vec<u32> = [100, 101].into_iter().chain(103..121).collect();

    vec![
        case(
            "adr_disabled_passthrough",
            "ADR bit off returns current values unchanged",
            request(false, 3, 2, 1, 5, 7, -5.0, 10.0, vec![]),
        ),
        case(
            "dr_clamped_to_max",
            "DR above max_dr is clamped even when the hysteresis guard fires",
            request(true, 6, 0, 1, 5, 7, 0.0, 0.0, vec![]),
        ),
        case(
            "empty_history_holds_power",
            "No history: sentinel SNR gives a negative step and the guard holds power",
            request(true, 2, 1, 1, 5, 3, -5.0, 10.0, vec![]),
        ),
        case(
            "positive_margin_raises_dr",
            "10 dB margin is three steps, all spent raising DR",
            request(true, 0, 0, 1, 5, 3, 0.0, 0.0, contiguous(0, 20, 10.0, 0)),
        ),
        case(
            "dr_saturated_lowers_power",
            "Steps left after DR reaches max_dr raise the TX power index",
            request(true, 4, 0, 1, 5, 7, 0.0, 0.0, contiguous(0, 20, 10.0, 0)),
        ),
        case(
            "negative_margin_full_history_raises_power",
            "Exactly the required samples at current power allow raising power",
            request(true, 2, 3, 1, 5, 7, -5.0, 2.0, contiguous(0, 20, -10.0, 3)),
        ),
        case(
            "negative_fraction_floors",
            "A -0.5 dB margin floors to one negative step",
            request(true, 1, 2, 1, 5, 7, 0.0, 0.0, contiguous(0, 20, -0.5, 2)),
        ),
        case(
            "moderate_loss_raises_nb_trans",
            "Two missed counters over 20 entries is 10% loss",
            request(true, 0, 0, 1, 5, 7, 0.0, 0.0, from_f_cnts(&f_cnts_two_gaps, 5.0, 0)),
        ),
        case(
            "heavy_loss_caps_nb_trans",
            "50% loss selects the last bucket",
            request(true, 2, 0, 1, 5, 7, 0.0, 0.0, from_f_cnts(&f_cnts_wide_gap, 0.0, 0)),
        ),
        case(
            "single_gap_loss",
            "One missed counter over 20 entries is exactly 5% loss",
            request(true, 0, 0, 2, 5, 7, 0.0, 0.0, from_f_cnts(&f_cnts_single_gap, 0.0, 0)),
        ),
        case(
            "nb_trans_clamped_before_lookup",
            "nbTrans above 3 selects the last table column",
            request(true, 1, 0, 9, 5, 7, 0.0, 0.0, vec![]),
        ),
        case(
            "history_over_required_count_holds_power",
            "25 samples at current power is not exactly 20, so the guard fires",
            request(true, 3, 2, 3, 5, 7, 0.0, 0.0, contiguous(0, 25, -20.0, 2)),
        ),
    ]
}

/// Build the full vector set.
pub fn generate() -> AdrVectors {
    AdrVectors {
        version: VECTORS_VERSION,
        cases: canonical_cases(),
    }
}

/// Pretty-printed JSON of [`generate`].
pub fn generate_json() -> Result<String, AdrError> {
    Ok(serde_json::to_string_pretty(&generate())?)
}
