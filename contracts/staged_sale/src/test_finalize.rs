extern crate std;

use soroban_sdk::{testutils::Address as _, Address};

use crate::test_utils::{setup, CAPS, RATES};
use crate::types::SaleOutcome;
use crate::Error;

// ── Finalization ────────────────────────────────────────────

#[test]
fn test_finish_before_end_fails() {
    let sale = setup();
    sale.open();
    assert_eq!(
        sale.client.try_finish_crowdsale(&sale.admin),
        Err(Ok(Error::TooEarly))
    );
}

#[test]
fn test_finish_requires_admin() {
    let sale = setup();
    sale.close();
    let stranger = Address::generate(&sale.env);
    assert_eq!(
        sale.client.try_finish_crowdsale(&stranger),
        Err(Ok(Error::Unauthorized))
    );
}

#[test]
fn test_finish_twice_fails() {
    let sale = setup();
    sale.finalize_successful();
    assert_eq!(
        sale.client.try_finish_crowdsale(&sale.admin),
        Err(Ok(Error::AlreadyFinalized))
    );
}

#[test]
fn test_successful_finish_mints_reserved_pools() {
    let sale = setup();
    let buyer = sale.finalize_successful();

    let sold = CAPS[0] * RATES[0];
    // Each 5-share slice of a 60-share contributor supply.
    let slice = sold * 5 / 60;

    assert_eq!(sale.client.outcome(), SaleOutcome::Succeeded);
    assert!(sale.client.is_finalized());
    assert!(sale.client.has_ended());
    assert!(sale.shares.minting_finished());
    assert!(!sale.shares.transfers_locked());

    assert_eq!(sale.shares.balance(&buyer), sold);
    // Bounty (1 slice) and platform (2 slices) minted to the operating wallet.
    assert_eq!(sale.shares.balance(&sale.config.wallet), 3 * slice);
    assert_eq!(sale.shares.balance(&sale.config.bounty_wallet), 0);
    assert_eq!(sale.shares.balance(&sale.config.platform_wallet), 0);
    // Team (4 slices) and advisors (1 slice) held in custody.
    assert_eq!(sale.shares.balance(&sale.client.address), 5 * slice);
    assert_eq!(sale.shares.total_supply(), sold * 100 / 60);

    for index in 0..4 {
        assert_eq!(sale.client.vested_team(&index), slice);
    }
    assert_eq!(sale.client.vested_advisors(), slice);
}

#[test]
fn test_successful_finish_unlocks_transfers() {
    let sale = setup();
    let buyer = sale.finalize_successful();
    let other = Address::generate(&sale.env);

    sale.shares.transfer(&buyer, &other, &1_000);
    assert_eq!(sale.shares.balance(&other), 1_000);
}

#[test]
fn test_finish_as_soon_as_hard_cap_is_reached() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(CAPS[4]);
    sale.fill_to_hard_cap(&buyer);

    assert!(sale.env.ledger().timestamp() < sale.config.end_time);
    assert_eq!(
        sale.client.finish_crowdsale(&sale.admin),
        SaleOutcome::Succeeded
    );
}

#[test]
fn test_no_purchases_after_finalization() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(CAPS[4]);
    sale.fill_to_hard_cap(&buyer);
    sale.client.finish_crowdsale(&sale.admin);

    assert_eq!(
        sale.client.try_buy_tokens(&buyer, &buyer, &10),
        Err(Ok(Error::AlreadyEnded))
    );
    assert_eq!(
        sale.client.try_activate_next_stage(&sale.admin),
        Err(Ok(Error::AlreadyFinalized))
    );
}

#[test]
fn test_failed_finish_mints_nothing_extra() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(10);
    sale.buy(&buyer, 10);
    sale.close();

    assert_eq!(
        sale.client.finish_crowdsale(&sale.admin),
        SaleOutcome::Refunding
    );
    assert!(!sale.client.soft_cap_reached());
    assert!(sale.shares.minting_finished());
    assert!(sale.shares.transfers_locked());
    assert_eq!(sale.shares.total_supply(), 10 * RATES[0]);
    assert_eq!(sale.client.vested_advisors(), 0);
    assert_eq!(sale.client.vested_team(&0), 0);
}

// ── Refunds ─────────────────────────────────────────────────

#[test]
fn test_refund_returns_contribution_and_keeps_tokens_locked() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(10);
    sale.buy(&buyer, 10);
    assert_eq!(sale.payment.balance(&buyer), 0);

    sale.close();
    sale.client.finish_crowdsale(&sale.admin);

    assert_eq!(sale.client.refund(&buyer), 10);
    assert_eq!(sale.payment.balance(&buyer), 10);
    assert_eq!(sale.client.deposited(&buyer), 0);
    assert_eq!(sale.client.escrowed(), 0);

    let other = Address::generate(&sale.env);
    assert_eq!(
        sale.shares.try_transfer(&buyer, &other, &1),
        Err(Ok(share_token::Error::TransfersLocked))
    );
}

#[test]
fn test_refund_is_paid_once() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(10);
    sale.buy(&buyer, 10);
    sale.close();
    sale.client.finish_crowdsale(&sale.admin);

    sale.client.refund(&buyer);
    assert_eq!(sale.client.try_refund(&buyer), Err(Ok(Error::NothingToRefund)));
}

#[test]
fn test_refund_tracks_each_payer_separately() {
    let sale = setup();
    sale.open();
    let first = sale.participant(300);
    let second = sale.participant(200);
    sale.buy(&first, 300);
    sale.buy(&second, 150);
    sale.close();
    sale.client.finish_crowdsale(&sale.admin);

    assert_eq!(sale.client.refund(&second), 150);
    assert_eq!(sale.client.escrowed(), 300);
    assert_eq!(sale.client.refund(&first), 300);
    assert_eq!(sale.payment.balance(&sale.client.address), 0);
}

#[test]
fn test_refund_before_finalization_fails() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(10);
    sale.buy(&buyer, 10);

    assert_eq!(sale.client.try_refund(&buyer), Err(Ok(Error::TooEarly)));
    sale.close();
    assert_eq!(sale.client.try_refund(&buyer), Err(Ok(Error::TooEarly)));
}

#[test]
fn test_refund_without_contribution_fails() {
    let sale = setup();
    sale.close();
    sale.client.finish_crowdsale(&sale.admin);

    let stranger = Address::generate(&sale.env);
    assert_eq!(
        sale.client.try_refund(&stranger),
        Err(Ok(Error::NothingToRefund))
    );
}

#[test]
fn test_refund_after_soft_cap_fails() {
    let sale = setup();
    let buyer = sale.finalize_successful();
    assert_eq!(sale.client.try_refund(&buyer), Err(Ok(Error::SoftCapReached)));
}

#[test]
fn test_withdraw_unavailable_in_refund_mode() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(10);
    sale.buy(&buyer, 10);
    sale.close();
    sale.client.finish_crowdsale(&sale.admin);

    assert_eq!(
        sale.client.try_withdraw(&sale.admin),
        Err(Ok(Error::SoftCapNotReached))
    );
}
