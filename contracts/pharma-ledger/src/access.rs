use soroban_sdk::{log, Address, Env};

use crate::error::ContractError;
use crate::records::Role;
use crate::storage;

// Capability predicates. Each one depends only on the identity and the role
// the admin registered for it; unregistered identities hold no capability.

pub fn is_manufacturer(env: &Env, who: &Address) -> bool {
    matches!(storage::get_role(env, who), Some(Role::Manufacturer))
}

pub fn is_wholesaler(env: &Env, who: &Address) -> bool {
    matches!(storage::get_role(env, who), Some(Role::Wholesaler))
}

/// Manufacturers auction their own analyzed batches; distributors run
/// auctions on behalf of the network.
pub fn is_auctioneer(env: &Env, who: &Address) -> bool {
    matches!(
        storage::get_role(env, who),
        Some(Role::Manufacturer) | Some(Role::Distributor)
    )
}

pub fn require_manufacturer(env: &Env, who: &Address) -> Result<(), ContractError> {
    if !is_manufacturer(env, who) {
        log!(env, "caller must be a manufacturer", who.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn require_wholesaler(env: &Env, who: &Address) -> Result<(), ContractError> {
    if !is_wholesaler(env, who) {
        log!(env, "caller must be a wholesaler", who.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn require_auctioneer(env: &Env, who: &Address) -> Result<(), ContractError> {
    if !is_auctioneer(env, who) {
        log!(env, "caller must be an auctioneer", who.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Fails unless `who` is the recorded owner of the record being changed.
pub fn require_owner(env: &Env, who: &Address, owner: &Address) -> Result<(), ContractError> {
    if who != owner {
        log!(env, "caller is not the record owner", who.clone(), owner.clone());
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn require_admin(env: &Env, who: &Address) -> Result<(), ContractError> {
    let admin = storage::get_admin(env).ok_or(ContractError::NotInitialized)?;
    if admin != *who {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
