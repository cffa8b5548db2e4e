//! ADR constants — fixed values of the default algorithm.
//!
//! [`crate::config::AdrConfig::default`] is built from these. Changing
//! a value here changes the behavior of every device on the default
//! algorithm.

/// Number of uplinks required before packet loss is estimated, and the
/// exact number of samples at the current TX power index required
/// before the engine will raise power / lower DR.
pub const REQUIRED_HISTORY_COUNT: usize = 20;

/// Link margin (dB) consumed by one DR or TX power step.
pub const MARGIN_STEP_DB: f64 = 3.0;

/// SNR used when the history is empty ("no usable signal").
pub const NO_SIGNAL_SNR: f64 = -999.0;

/// Lowest nbTrans the engine will recommend.
pub const NB_TRANS_MIN: u8 = 1;

/// Highest nbTrans the engine will recommend.
pub const NB_TRANS_MAX: u8 = 3;

/// Upper bounds (exclusive, percent) of the first three loss buckets.
/// Loss at or above the last bound falls into the final bucket.
pub const LOSS_BUCKETS_PERCENT: [f64; 3] = [5.0, 10.0, 30.0];

/// nbTrans lookup: row = loss bucket, column = current nbTrans - 1.
pub const NB_TRANS_TABLE: [[u8; 3]; 4] = [
    [1, 1, 2], // < 5%
    [1, 2, 3], // < 10%
    [2, 3, 3], // < 30%
    [3, 3, 3], // >= 30%
];

/// Identifier of the default algorithm, referenced by device profiles.
pub const DEFAULT_ALGORITHM_ID: &str = "default";

/// Display name of the default algorithm.
pub const DEFAULT_ALGORITHM_NAME: &str = "Default ADR algorithm (LoRa only)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_algorithm() {
        assert_eq!(REQUIRED_HISTORY_COUNT, 20);
        assert_eq!(MARGIN_STEP_DB, 3.0);
        assert_eq!(NO_SIGNAL_SNR, -999.0);
        assert_eq!(NB_TRANS_MIN, 1);
        assert_eq!(NB_TRANS_MAX, 3);
        assert_eq!(LOSS_BUCKETS_PERCENT, [5.0, 10.0, 30.0]);
    }

    #[test]
    fn nb_trans_table_within_range() {
        for row in &NB_TRANS_TABLE {
            for &cell in row {
                assert!((NB_TRANS_MIN..=NB_TRANS_MAX).contains(&cell));
            }
        }
    }

    #[test]
    fn nb_trans_table_monotonic_in_loss() {
        // More loss never recommends fewer transmissions.
        for col in 0..3 {
            for row in 1..NB_TRANS_TABLE.len() {
                assert!(NB_TRANS_TABLE[row][col] >= NB_TRANS_TABLE[row - 1][col]);
            }
        }
    }

    #[test]
    fn loss_buckets_ascending() {
        assert!(LOSS_BUCKETS_PERCENT.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(LOSS_BUCKETS_PERCENT.len() + 1, NB_TRANS_TABLE.len());
    }
}
