use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::records::{Batch, BatchState, LedgerKey, Pharmacy, Shipment, ShipmentState, SCHEMA_VERSION};
use crate::storage;
use crate::utils;

/// Ships part of a wholesaled batch to a pharmacy. Every check runs before
/// the batch is debited, so a rejected shipment leaves the batch untouched.
pub fn ship_batch(
    env: &Env,
    caller: &Address,
    patent_number: String,
    batch_number: String,
    shipping_number: String,
    ship_date: u64,
    quantity: u32,
    pharmacy: Pharmacy,
) -> Result<Shipment, ContractError> {
    utils::require_identifier(&shipping_number)?;
    if pharmacy.name.len() == 0 {
        return Err(ContractError::InvalidArgument);
    }

    let batch_key = LedgerKey::Batch(patent_number.clone(), batch_number.clone());
    let mut batch: Batch = storage::load(env, &batch_key)?;

    access::require_owner(env, caller, &batch.owner)?;
    if batch.state != BatchState::Wholesale {
        log!(env, "batch is not wholesaled", batch_key);
        return Err(ContractError::InvalidState);
    }

    if quantity == 0 || quantity > batch.quantity {
        log!(env, "shipment quantity exceeds batch", batch_key, quantity, batch.quantity);
        return Err(ContractError::InvalidArgument);
    }

    let shipment_key = LedgerKey::Shipment(shipping_number.clone());
    if storage::exists(env, &shipment_key) {
        log!(env, "shipment already exists", shipment_key);
        return Err(ContractError::AlreadyExists);
    }

    let old_quantity = batch.quantity;
    batch.quantity -= quantity;
    storage::put(env, &batch_key, &batch);

    let shipment = Shipment {
        schema_version: SCHEMA_VERSION,
        shipping_number,
        patent_number,
        batch_number,
        shipped_by: caller.clone(),
        ship_date,
        quantity,
        pharmacy,
        state: ShipmentState::OnPharmacy,
    };
    storage::put(env, &shipment_key, &shipment);

    events::emit_batch_shipped(env, &shipment, old_quantity, batch.quantity);
    Ok(shipment)
}
