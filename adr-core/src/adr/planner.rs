//! Step planner — walks the link margin one step at a time.
//!
//! A positive step spends margin: raise DR first, then lower power
//! (raise the TX power index). A negative step buys margin back by
//! raising power (lowering the index). DR is never lowered here.

/// Result of a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPlan {
    pub tx_power_index: u8,
    pub dr: u8,
}

/// Apply `n_step` unit steps starting from `(tx_power_index, dr)`.
///
/// Every step advances the counter toward zero whether or not it moved
/// anything. Once neither value can move in the step direction the
/// remaining steps are no-ops and the walk stops, so the loop is bounded
/// by `max_dr + max_tx_power_index` regardless of `n_step`.
pub fn plan(tx_power_index: u8, dr: u8, n_step: i64, max_tx_power_index: u8, max_dr: u8) -> StepPlan {
    let mut tx_power_index = tx_power_index;
    let mut dr = dr;
    let mut n_step = n_step;

    while n_step != 0 {
        if n_step > 0 {
            if dr < max_dr {
                dr += 1;
            } else if tx_power_index < max_tx_power_index {
                tx_power_index += 1;
            } else {
                break;
            }
            n_step -= 1;
        } else {
            if tx_power_index > 0 {
                tx_power_index -= 1;
            } else {
                break;
            }
            n_step += 1;
        }
    }

    StepPlan { tx_power_index, dr }
}
