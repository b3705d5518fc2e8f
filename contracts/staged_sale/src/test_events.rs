extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, IntoVal, TryIntoVal, Val, Vec,
};

use crate::events::{
    AdminTransferred, FundsWithdrawn, Refunded, SaleFinalized, SaleInitialized, StageActivated,
    TokensPurchased, VestingReleased, Whitelisted,
};
use crate::test_utils::{deploy, setup, Sale, CAPS, RATES};
use crate::types::ReservedPools;

/// Last event published by the sale contract itself.
fn last_sale_event(sale: &Sale) -> (Vec<Val>, Val) {
    let (_, topics, data) = sale
        .env
        .events()
        .all()
        .iter()
        .filter(|event| event.0 == sale.client.address)
        .last()
        .expect("No sale events found");
    (topics, data)
}

#[test]
fn test_sale_initialized_event() {
    let sale = deploy();
    sale.client.init(&sale.admin, &sale.config);

    let (topics, data) = last_sale_event(&sale);
    assert_eq!(topics, vec![&sale.env, symbol_short!("init").into_val(&sale.env)]);

    let event: SaleInitialized = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        SaleInitialized {
            admin: sale.admin.clone(),
            start_time: sale.config.start_time,
            end_time: sale.config.end_time,
            soft_cap: CAPS[0],
            hard_cap: CAPS[4],
        }
    );
}

#[test]
fn test_whitelisted_event() {
    let sale = setup();
    let participant = Address::generate(&sale.env);
    sale.client.add_whitelist(&sale.admin, &participant, &250);

    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("whitelist").into_val(&sale.env)]
    );
    let event: Whitelisted = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        Whitelisted {
            participant,
            allowance: 250,
        }
    );
}

#[test]
fn test_tokens_purchased_event() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(CAPS[1]);
    sale.buy(&buyer, 1_200);

    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![
            &sale.env,
            symbol_short!("purchase").into_val(&sale.env),
            0u32.into_val(&sale.env),
        ]
    );
    let event: TokensPurchased = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        TokensPurchased {
            buyer: buyer.clone(),
            beneficiary: buyer,
            amount: CAPS[0],
            refunded: 200,
            units: CAPS[0] * RATES[0],
        }
    );
}

#[test]
fn test_stage_activated_event() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(CAPS[0]);
    sale.buy(&buyer, CAPS[0]);
    sale.client.activate_next_stage(&sale.admin);

    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![
            &sale.env,
            symbol_short!("stage").into_val(&sale.env),
            1u32.into_val(&sale.env),
        ]
    );
    let event: StageActivated = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        StageActivated {
            stage: 1,
            funds_raised: CAPS[0],
        }
    );
}

#[test]
fn test_funds_withdrawn_event() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(CAPS[0]);
    sale.buy(&buyer, CAPS[0]);
    sale.client.withdraw(&sale.admin);

    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("withdraw").into_val(&sale.env)]
    );
    let event: FundsWithdrawn = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        FundsWithdrawn {
            wallet: sale.config.wallet.clone(),
            amount: CAPS[0],
        }
    );
}

#[test]
fn test_pause_events() {
    let sale = setup();

    sale.client.pause(&sale.admin);
    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("paused").into_val(&sale.env)]
    );
    let admin: Address = data.try_into_val(&sale.env).unwrap();
    assert_eq!(admin, sale.admin);

    sale.client.unpause(&sale.admin);
    let (topics, _) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("unpaused").into_val(&sale.env)]
    );
}

#[test]
fn test_admin_transferred_event() {
    let sale = setup();
    let successor = Address::generate(&sale.env);
    sale.client.transfer_admin(&sale.admin, &successor);

    let (_, data) = last_sale_event(&sale);
    let event: AdminTransferred = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        AdminTransferred {
            previous: sale.admin.clone(),
            admin: successor,
        }
    );
}

#[test]
fn test_sale_finalized_event() {
    let sale = setup();
    sale.finalize_successful();

    let sold = CAPS[0] * RATES[0];
    let slice = sold * 5 / 60;
    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("finalized").into_val(&sale.env)]
    );
    let event: SaleFinalized = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        SaleFinalized {
            succeeded: true,
            funds_raised: CAPS[0],
            total_supply: sold * 100 / 60,
            pools: ReservedPools {
                team: 4 * slice,
                advisors: slice,
                bounty: slice,
                platform: 2 * slice,
            },
        }
    );
}

#[test]
fn test_refunded_event() {
    let sale = setup();
    sale.open();
    let buyer = sale.participant(10);
    sale.buy(&buyer, 10);
    sale.close();
    sale.client.finish_crowdsale(&sale.admin);
    sale.client.refund(&buyer);

    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("refund").into_val(&sale.env)]
    );
    let event: Refunded = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        Refunded {
            participant: buyer,
            amount: 10,
        }
    );
}

#[test]
fn test_vesting_released_events() {
    let sale = setup();
    sale.finalize_successful();
    let slice = CAPS[0] * RATES[0] * 5 / 60;

    sale.days_after_start(200);
    sale.client.withdraw_advisor_tokens(&sale.admin);
    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("adv_vest").into_val(&sale.env)]
    );
    let event: VestingReleased = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        VestingReleased {
            wallet: sale.config.bounty_wallet.clone(),
            amount: slice,
            withdrawn: slice,
        }
    );

    sale.days_after_start(480);
    sale.client.withdraw_core_team_tokens(&sale.admin);
    let (topics, data) = last_sale_event(&sale);
    assert_eq!(
        topics,
        vec![&sale.env, symbol_short!("team_vest").into_val(&sale.env)]
    );
    let event: VestingReleased = data.try_into_val(&sale.env).unwrap();
    assert_eq!(
        event,
        VestingReleased {
            wallet: sale.config.team_wallet.clone(),
            amount: 2 * slice,
            withdrawn: 2 * slice,
        }
    );
}
