use soroban_sdk::{Env, String, Vec};

use crate::error::ContractError;
use crate::records::{
    Auction, AuctionEntry, Batch, BatchEntry, BatchLineage, BatchView, CallOption, ClinicalTrial,
    LedgerKey, OptionEntry, Patent, PatentEntry, Shipment, ShipmentEntry, ShipmentTrail,
    TrialEntry,
};
use crate::storage;

pub fn trial(env: &Env, trial_number: String) -> Result<TrialEntry, ContractError> {
    let key = LedgerKey::Trial(trial_number);
    let record = storage::load(env, &key)?;
    Ok(TrialEntry { key, record })
}

pub fn trial_history(env: &Env, trial_number: String) -> Result<Vec<ClinicalTrial>, ContractError> {
    storage::history(env, &LedgerKey::Trial(trial_number))
}

pub fn patent(env: &Env, patent_number: String) -> Result<PatentEntry, ContractError> {
    let key = LedgerKey::Patent(patent_number);
    let record = storage::load(env, &key)?;
    Ok(PatentEntry { key, record })
}

pub fn patent_history(env: &Env, patent_number: String) -> Result<Vec<Patent>, ContractError> {
    storage::history(env, &LedgerKey::Patent(patent_number))
}

pub fn patent_batches(env: &Env, patent_number: String) -> Result<Vec<String>, ContractError> {
    let _: Patent = storage::load(env, &LedgerKey::Patent(patent_number.clone()))?;
    Ok(storage::patent_batch_numbers(env, &patent_number))
}

/// Current batch together with the patent and trial it was made under.
pub fn batch(env: &Env, patent_number: String, batch_number: String) -> Result<BatchView, ContractError> {
    let key = LedgerKey::Batch(patent_number.clone(), batch_number);
    let record: Batch = storage::load(env, &key)?;

    let patent = patent(env, patent_number)?;
    let trial = trial(env, patent.record.trial_number.clone())?;

    Ok(BatchView {
        batch: BatchEntry { key, record },
        patent,
        trial,
    })
}

pub fn batch_history(
    env: &Env,
    patent_number: String,
    batch_number: String,
) -> Result<Vec<Batch>, ContractError> {
    storage::history(env, &LedgerKey::Batch(patent_number, batch_number))
}

pub fn batch_lineage(
    env: &Env,
    patent_number: String,
    batch_number: String,
) -> Result<BatchLineage, ContractError> {
    let batch = batch_history(env, patent_number.clone(), batch_number)?;

    let current: Patent = storage::load(env, &LedgerKey::Patent(patent_number.clone()))?;
    let patent = patent_history(env, patent_number)?;
    let trial = trial_history(env, current.trial_number)?;

    Ok(BatchLineage { batch, patent, trial })
}

pub fn option(env: &Env, option_number: String) -> Result<OptionEntry, ContractError> {
    let key = LedgerKey::CallOption(option_number);
    let record = storage::load(env, &key)?;
    Ok(OptionEntry { key, record })
}

pub fn option_history(env: &Env, option_number: String) -> Result<Vec<CallOption>, ContractError> {
    storage::history(env, &LedgerKey::CallOption(option_number))
}

pub fn auction(env: &Env, auction_number: String) -> Result<AuctionEntry, ContractError> {
    let key = LedgerKey::Auction(auction_number);
    let record = storage::load(env, &key)?;
    Ok(AuctionEntry { key, record })
}

pub fn auction_history(env: &Env, auction_number: String) -> Result<Vec<Auction>, ContractError> {
    storage::history(env, &LedgerKey::Auction(auction_number))
}

pub fn shipment(env: &Env, shipping_number: String) -> Result<ShipmentEntry, ContractError> {
    let key = LedgerKey::Shipment(shipping_number);
    let record = storage::load(env, &key)?;
    Ok(ShipmentEntry { key, record })
}

/// Shipment history followed by the full history of the shipped batch.
pub fn shipment_trail(env: &Env, shipping_number: String) -> Result<ShipmentTrail, ContractError> {
    let key = LedgerKey::Shipment(shipping_number);
    let current: Shipment = storage::load(env, &key)?;

    let shipment = storage::history(env, &key)?;
    let batch = batch_history(env, current.patent_number, current.batch_number)?;

    Ok(ShipmentTrail { shipment, batch })
}
