//! Assertion helpers checked by the test suites after state-changing calls.

extern crate std;

use crate::types::{SaleConfig, SaleState, WhitelistEntry};

/// Funds raised never pass the last stage's cap.
pub fn assert_within_hard_cap(config: &SaleConfig, state: &SaleState) {
    let hard_cap = config.stages.last().map(|s| s.cap).unwrap_or(0);
    assert!(
        state.funds_raised <= hard_cap,
        "funds raised {} above hard cap {}",
        state.funds_raised,
        hard_cap
    );
}

/// Funds raised never pass the active stage's cap.
pub fn assert_within_active_cap(config: &SaleConfig, state: &SaleState) {
    let stage = config
        .stages
        .get(state.active_stage)
        .expect("active stage out of range");
    assert!(
        state.funds_raised <= stage.cap,
        "funds raised {} above stage {} cap {}",
        state.funds_raised,
        state.active_stage,
        stage.cap
    );
}

/// Escrow is never negative and never more than what was raised.
pub fn assert_escrow_bounded(state: &SaleState) {
    assert!(state.escrowed >= 0, "negative escrow {}", state.escrowed);
    assert!(
        state.escrowed <= state.funds_raised,
        "escrow {} above funds raised {}",
        state.escrowed,
        state.funds_raised
    );
}

pub fn assert_spend_within_allowance(entry: &WhitelistEntry) {
    assert!(
        entry.spent <= entry.allowance,
        "spent {} above allowance {}",
        entry.spent,
        entry.allowance
    );
}

/// The active stage index only ever moves forward by one.
pub fn assert_stage_advanced(before: u32, after: u32) {
    assert_eq!(after, before + 1, "stage moved from {} to {}", before, after);
}

pub fn assert_withdrawn_within_total(withdrawn: i128, total: i128) {
    assert!(
        withdrawn <= total,
        "withdrawn {} above allocation {}",
        withdrawn,
        total
    );
}
