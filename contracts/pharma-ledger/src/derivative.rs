use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::batch;
use crate::error::ContractError;
use crate::events;
use crate::records::{
    CallOption, LedgerKey, OptionExecution, OptionState, Patent, SCHEMA_VERSION,
};
use crate::storage::{self, BatchScan};
use crate::utils;

pub fn create_option(
    env: &Env,
    caller: &Address,
    patent_number: String,
    option_number: String,
    price: i128,
    quantity: u32,
    contract_details: String,
    expiry_date: u64,
) -> Result<CallOption, ContractError> {
    utils::require_identifier(&option_number)?;

    let patent: Patent = storage::load(env, &LedgerKey::Patent(patent_number.clone()))?;
    access::require_owner(env, caller, &patent.owner)?;

    if price <= 0 || quantity == 0 {
        return Err(ContractError::InvalidArgument);
    }
    if expiry_date <= utils::now(env) {
        log!(env, "option expiry must be in the future", expiry_date);
        return Err(ContractError::InvalidArgument);
    }

    let key = LedgerKey::CallOption(option_number.clone());
    if storage::exists(env, &key) {
        log!(env, "option already exists", key);
        return Err(ContractError::AlreadyExists);
    }

    let option = CallOption {
        schema_version: SCHEMA_VERSION,
        option_number,
        patent_number,
        price,
        quantity,
        contract_details,
        expiry_date,
        state: OptionState::Created,
        short_call: caller.clone(),
        long_call: None,
        premium: None,
    };

    storage::put(env, &key, &option);
    events::emit_option_created(env, &option);
    Ok(option)
}

pub fn buy_option(
    env: &Env,
    caller: &Address,
    option_number: String,
    premium: i128,
) -> Result<CallOption, ContractError> {
    let key = LedgerKey::CallOption(option_number);
    let mut option: CallOption = storage::load(env, &key)?;

    if option.state != OptionState::Created {
        log!(env, "option is not for sale", key);
        return Err(ContractError::InvalidState);
    }
    if option.expiry_date < utils::now(env) {
        log!(env, "option is expired", key);
        return Err(ContractError::Expired);
    }
    access::require_wholesaler(env, caller)?;
    if premium < 0 {
        return Err(ContractError::InvalidArgument);
    }

    option.long_call = Some(caller.clone());
    option.premium = Some(premium);
    option.state = OptionState::Bought;

    storage::put(env, &key, &option);
    events::emit_option_bought(env, &option);
    Ok(option)
}

/// Fails unless `caller` currently holds the option.
fn require_long_call(env: &Env, caller: &Address, option: &CallOption) -> Result<(), ContractError> {
    match &option.long_call {
        Some(holder) if holder == caller => Ok(()),
        _ => {
            log!(env, "caller does not hold the option", caller.clone());
            Err(ContractError::Unauthorized)
        }
    }
}

pub fn transfer_option(
    env: &Env,
    caller: &Address,
    option_number: String,
    new_owner: Address,
) -> Result<CallOption, ContractError> {
    let key = LedgerKey::CallOption(option_number);
    let mut option: CallOption = storage::load(env, &key)?;

    require_long_call(env, caller, &option)?;
    if option.state != OptionState::Bought {
        log!(env, "option is settled", key);
        return Err(ContractError::InvalidState);
    }

    option.long_call = Some(new_owner);

    storage::put(env, &key, &option);
    events::emit_option_transferred(env, &option, caller.clone());
    Ok(option)
}

pub fn execute_option(
    env: &Env,
    caller: &Address,
    option_number: String,
) -> Result<OptionExecution, ContractError> {
    let key = LedgerKey::CallOption(option_number);
    let mut option: CallOption = storage::load(env, &key)?;

    require_long_call(env, caller, &option)?;
    if option.state != OptionState::Bought {
        log!(env, "option is not bought", key);
        return Err(ContractError::InvalidState);
    }
    if utils::is_past_expiry_day(utils::now(env), option.expiry_date) {
        log!(env, "option is expired", key);
        return Err(ContractError::Expired);
    }

    let exercised_batch = exercise(env, &option.patent_number, &option.short_call, caller)?;
    option.state = if exercised_batch.is_some() {
        OptionState::Executed
    } else {
        OptionState::FailedBySeller
    };

    storage::put(env, &key, &option);
    events::emit_option_executed(env, &option, exercised_batch.clone());
    Ok(OptionExecution {
        exercised_batch,
        option,
    })
}

/// Records the expiry of an option that was never executed. Only the parties
/// to the option may do so, and only once the expiry date has passed.
pub fn expire_option(
    env: &Env,
    caller: &Address,
    option_number: String,
) -> Result<CallOption, ContractError> {
    let key = LedgerKey::CallOption(option_number);
    let mut option: CallOption = storage::load(env, &key)?;

    let is_party = option.short_call == *caller || option.long_call.as_ref() == Some(caller);
    if !is_party {
        log!(env, "caller is not a party to the option", caller.clone());
        return Err(ContractError::Unauthorized);
    }
    if option.state != OptionState::Created && option.state != OptionState::Bought {
        return Err(ContractError::InvalidState);
    }
    if utils::now(env) <= option.expiry_date {
        log!(env, "option has not expired yet", key);
        return Err(ContractError::InvalidState);
    }

    option.state = OptionState::Expired;

    storage::put(env, &key, &option);
    events::emit_option_expired(env, &option);
    Ok(option)
}

/// Delivers to `buyer` the first batch of `patent_number` that `seller`
/// still owns and no open auction holds, and returns its number. Yields
/// `None` when there is no such batch within the scan bound, or when a stored
/// batch cannot be read.
pub(crate) fn exercise(
    env: &Env,
    patent_number: &String,
    seller: &Address,
    buyer: &Address,
) -> Result<Option<String>, ContractError> {
    let _: Patent = storage::load(env, &LedgerKey::Patent(patent_number.clone()))?;

    let limit = storage::get_config(env).max_batch_scan;
    for (batch_number, record) in BatchScan::new(env, patent_number, limit) {
        let candidate = match record {
            Ok(candidate) => candidate,
            Err(_) => {
                log!(env, "skipping exercise, unreadable batch", patent_number.clone(), batch_number);
                return Ok(None);
            }
        };
        let batch_key = LedgerKey::Batch(patent_number.clone(), batch_number.clone());
        if storage::batch_auction(env, &batch_key).is_some() {
            continue;
        }
        if candidate.owner == *seller {
            batch::transfer_to_wholesale(env, candidate, buyer);
            return Ok(Some(batch_number));
        }
    }
    Ok(None)
}
