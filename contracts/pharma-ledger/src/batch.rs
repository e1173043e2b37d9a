use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::records::{AnalysisResult, Batch, BatchState, LedgerKey, Patent, PatentState, SCHEMA_VERSION};
use crate::storage;
use crate::utils;

pub fn fabricate_batch(
    env: &Env,
    caller: &Address,
    patent_number: String,
    batch_number: String,
    drug_name: String,
    fabrication_date: u64,
    expiration_date: u64,
    quantity: u32,
) -> Result<Batch, ContractError> {
    utils::require_identifier(&batch_number)?;

    let patent_key = LedgerKey::Patent(patent_number.clone());
    let patent: Patent = storage::load(env, &patent_key)?;
    access::require_owner(env, caller, &patent.owner)?;
    if patent.state != PatentState::Registered {
        log!(env, "patent is not registered", patent_key);
        return Err(ContractError::InvalidState);
    }

    let key = LedgerKey::Batch(patent_number.clone(), batch_number.clone());
    if storage::exists(env, &key) {
        log!(env, "batch already exists", key);
        return Err(ContractError::AlreadyExists);
    }

    if quantity == 0 || expiration_date <= fabrication_date {
        return Err(ContractError::InvalidArgument);
    }

    let batch = Batch {
        schema_version: SCHEMA_VERSION,
        patent_number: patent_number.clone(),
        batch_number: batch_number.clone(),
        drug_name,
        fabricated_by: caller.clone(),
        owner: caller.clone(),
        fabrication_date,
        expiration_date,
        quantity,
        state: BatchState::Fabricated,
        analysis_date: None,
        analysis_result: None,
    };

    storage::put(env, &key, &batch);
    storage::add_patent_batch(env, &patent_number, &batch_number);
    events::emit_batch_fabricated(env, &batch);
    Ok(batch)
}

pub fn analyze_batch(
    env: &Env,
    caller: &Address,
    patent_number: String,
    batch_number: String,
    analysis_date: u64,
    result: AnalysisResult,
) -> Result<Batch, ContractError> {
    let key = LedgerKey::Batch(patent_number, batch_number);
    let mut batch: Batch = storage::load(env, &key)?;

    access::require_owner(env, caller, &batch.owner)?;
    if batch.state != BatchState::Fabricated {
        log!(env, "batch is not fabricated", key);
        return Err(ContractError::InvalidState);
    }

    batch.analysis_date = Some(analysis_date);
    batch.analysis_result = Some(result);
    batch.state = BatchState::Analyzed;

    storage::put(env, &key, &batch);
    events::emit_batch_analyzed(env, &batch);
    Ok(batch)
}

/// Hands custody of a batch to `to` as wholesale stock. Callers check that
/// the current owner is entitled to give it up.
pub(crate) fn transfer_to_wholesale(env: &Env, mut batch: Batch, to: &Address) -> Batch {
    let from = batch.owner.clone();
    batch.owner = to.clone();
    batch.state = BatchState::Wholesale;

    let key = LedgerKey::Batch(batch.patent_number.clone(), batch.batch_number.clone());
    storage::put(env, &key, &batch);

    events::emit_batch_transferred(
        env,
        batch.patent_number.clone(),
        batch.batch_number.clone(),
        from,
        to.clone(),
        utils::now(env),
    );
    batch
}
