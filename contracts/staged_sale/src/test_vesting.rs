extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::invariants;
use crate::test_utils::{setup, CAPS, RATES};
use crate::Error;

/// One 5-share slice of the supply minted by a single stage-0 fill.
const SLICE: i128 = CAPS[0] * RATES[0] * 5 / 60;

#[test]
fn test_vesting_unavailable_before_finalization() {
    let sale = setup();
    sale.open();
    assert_eq!(
        sale.client.try_withdraw_core_team_tokens(&sale.admin),
        Err(Ok(Error::NotVesting))
    );
    assert_eq!(
        sale.client.try_withdraw_advisor_tokens(&sale.admin),
        Err(Ok(Error::NotVesting))
    );
}

#[test]
fn test_vesting_unavailable_in_refund_mode() {
    let sale = setup();
    sale.close();
    sale.client.finish_crowdsale(&sale.admin);
    assert_eq!(
        sale.client.try_withdraw_core_team_tokens(&sale.admin),
        Err(Ok(Error::NotVesting))
    );
}

#[test]
fn test_vesting_requires_admin() {
    let sale = setup();
    sale.finalize_successful();
    let stranger = Address::generate(&sale.env);
    assert_eq!(
        sale.client.try_withdraw_core_team_tokens(&stranger),
        Err(Ok(Error::Unauthorized))
    );
    assert_eq!(
        sale.client.try_withdraw_advisor_tokens(&stranger),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_team_withdraw_before_first_cliff_pays_nothing() {
    let sale = setup();
    sale.finalize_successful();
    sale.days_after_start(359);

    assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), 0);
    assert_eq!(sale.shares.balance(&sale.config.team_wallet), 0);
    assert_eq!(sale.client.team_withdrawn(), 0);
}

#[test]
fn test_team_full_allocation_after_last_cliff() {
    let sale = setup();
    sale.finalize_successful();
    sale.days_after_start(720);

    assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), 4 * SLICE);
    assert_eq!(sale.shares.balance(&sale.config.team_wallet), 4 * SLICE);
    assert_eq!(sale.client.team_withdrawn(), 4 * SLICE);
    assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), 0);
}

#[test]
fn test_team_incremental_release() {
    let sale = setup();
    sale.finalize_successful();

    sale.days_after_start(361);
    assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), SLICE);
    // Same cliff window: nothing new.
    assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), 0);

    sale.days_after_start(720);
    assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), 3 * SLICE);

    let withdrawn = sale.client.team_withdrawn();
    assert_eq!(withdrawn, 4 * SLICE);
    invariants::assert_withdrawn_within_total(withdrawn, 4 * SLICE);
    assert_eq!(sale.shares.balance(&sale.config.team_wallet), 4 * SLICE);
}

#[test]
fn test_team_release_follows_each_cliff() {
    let sale = setup();
    sale.finalize_successful();

    for (tranche, day) in [360u64, 480, 600, 720].iter().enumerate() {
        sale.days_after_start(*day);
        assert_eq!(sale.client.withdraw_core_team_tokens(&sale.admin), SLICE);
        assert_eq!(sale.client.team_withdrawn(), (tranche as i128 + 1) * SLICE);
    }
    assert_eq!(sale.shares.balance(&sale.client.address), SLICE);
}

#[test]
fn test_advisor_release_at_single_cliff() {
    let sale = setup();
    sale.finalize_successful();
    let bounty_before = sale.shares.balance(&sale.config.bounty_wallet);

    sale.days_after_start(179);
    assert_eq!(sale.client.withdraw_advisor_tokens(&sale.admin), 0);

    sale.days_after_start(180);
    assert_eq!(sale.client.withdraw_advisor_tokens(&sale.admin), SLICE);
    assert_eq!(
        sale.shares.balance(&sale.config.bounty_wallet),
        bounty_before + SLICE
    );
    assert_eq!(sale.client.advisors_withdrawn(), SLICE);
    assert_eq!(sale.client.withdraw_advisor_tokens(&sale.admin), 0);
}

#[test]
fn test_vested_queries() {
    let sale = setup();
    assert_eq!(sale.client.vested_team(&0), 0);
    assert_eq!(sale.client.vested_advisors(), 0);

    sale.finalize_successful();
    for index in 0..4 {
        assert_eq!(sale.client.vested_team(&index), SLICE);
    }
    assert_eq!(
        sale.client.try_vested_team(&4),
        Err(Ok(Error::TrancheNotFound))
    );

    // Sizes are not netted against withdrawals.
    sale.days_after_start(720);
    sale.client.withdraw_core_team_tokens(&sale.admin);
    assert_eq!(sale.client.vested_team(&0), SLICE);
}
