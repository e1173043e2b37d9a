use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::records::{ClinicalTrial, LedgerKey, Patent, PatentState, TrialState, SCHEMA_VERSION};
use crate::storage;
use crate::utils;

/// Registers a patent over the drug of a completed clinical trial.
pub fn register_patent(
    env: &Env,
    caller: &Address,
    patent_number: String,
    name: String,
    trial_number: String,
    date: u64,
) -> Result<Patent, ContractError> {
    access::require_manufacturer(env, caller)?;
    utils::require_identifier(&patent_number)?;

    let trial_key = LedgerKey::Trial(trial_number.clone());
    let trial: ClinicalTrial = storage::load(env, &trial_key)?;
    if trial.state != TrialState::Completed {
        log!(env, "trial is not completed", trial_key);
        return Err(ContractError::InvalidState);
    }

    let key = LedgerKey::Patent(patent_number.clone());
    if storage::exists(env, &key) {
        log!(env, "patent already exists", key);
        return Err(ContractError::AlreadyExists);
    }

    let patent = Patent {
        schema_version: SCHEMA_VERSION,
        patent_number,
        trial_number,
        name,
        owner: caller.clone(),
        date,
        state: PatentState::Registered,
    };

    storage::put(env, &key, &patent);
    events::emit_patent_registered(env, &patent);
    Ok(patent)
}
