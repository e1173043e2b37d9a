use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::error::ContractError;
use crate::events;
use crate::records::{ClinicalTrial, LedgerKey, TrialState, SCHEMA_VERSION};
use crate::storage;
use crate::utils;

pub fn initiate_clinical_trial(
    env: &Env,
    caller: &Address,
    trial_number: String,
    drug_name: String,
    trial_name: String,
    start_date: u64,
    end_date: u64,
    description: String,
) -> Result<ClinicalTrial, ContractError> {
    access::require_manufacturer(env, caller)?;
    utils::require_identifier(&trial_number)?;

    let key = LedgerKey::Trial(trial_number.clone());
    if storage::exists(env, &key) {
        log!(env, "trial already exists", key);
        return Err(ContractError::AlreadyExists);
    }

    let trial = ClinicalTrial {
        schema_version: SCHEMA_VERSION,
        trial_number,
        drug_name,
        trial_name,
        start_date,
        end_date,
        version: String::from_str(env, "1.0"),
        last_update: utils::now(env),
        description,
        result: None,
        conclusion: None,
        state: TrialState::Initiated,
        owner: caller.clone(),
    };

    storage::put(env, &key, &trial);
    events::emit_trial_initiated(env, &trial);
    Ok(trial)
}

pub fn register_clinical_trial_results(
    env: &Env,
    caller: &Address,
    trial_number: String,
    version: Option<String>,
    result: String,
    conclusion: String,
    new_state: TrialState,
    description: String,
) -> Result<ClinicalTrial, ContractError> {
    let key = LedgerKey::Trial(trial_number);
    let mut trial: ClinicalTrial = storage::load(env, &key)?;

    access::require_owner(env, caller, &trial.owner)?;

    if new_state == TrialState::Initiated {
        return Err(ContractError::InvalidArgument);
    }

    trial.description = description;
    trial.result = Some(result);
    trial.conclusion = Some(conclusion);
    trial.state = new_state;
    if let Some(version) = version {
        trial.version = version;
    }
    trial.last_update = utils::now(env);

    storage::put(env, &key, &trial);
    events::emit_trial_results(env, &trial);
    Ok(trial)
}
