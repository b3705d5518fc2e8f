//! Boundary to the issued-asset ledger.
//!
//! The sale never touches balances of the issued asset directly; every
//! effect goes through this interface. `init` on the sale binds the ledger
//! to the sale contract as its admin, so that `mint`, `set_transfers_locked`
//! and `finish_minting` accept the sale's calls.

use soroban_sdk::{contractclient, Address, Env};

#[contractclient(name = "IssuedAssetClient")]
pub trait IssuedAssetLedger {
    fn init(env: Env, admin: Address);
    fn mint(env: Env, to: Address, amount: i128);
    fn set_transfers_locked(env: Env, locked: bool);
    fn finish_minting(env: Env);
    fn total_supply(env: Env) -> i128;
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}
