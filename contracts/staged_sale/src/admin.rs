//! Single-identity administrative role.
//!
//! The admin is stored at `init` and checked on every privileged entry
//! point: the caller must sign and must be the stored identity.

use soroban_sdk::{Address, Env};

use crate::storage;
use crate::Error;

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let admin = storage::get_admin(env)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

/// Hand the role to `new_admin`. Returns the previous admin.
pub fn transfer(env: &Env, caller: &Address, new_admin: &Address) -> Result<Address, Error> {
    require_admin(env, caller)?;
    storage::set_admin(env, new_admin);
    Ok(caller.clone())
}
