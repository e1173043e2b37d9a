use soroban_sdk::{contracttype, log, Address, Env, IntoVal, String, TryFromVal, Val, Vec};

use crate::error::ContractError;
use crate::records::{Batch, LedgerConfig, LedgerKey, LedgerRecord, Role, SCHEMA_VERSION};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StorageKey {
    Admin,
    Config,
    Role(Address),
    Current(LedgerKey),             // latest value of a record
    VersionCount(LedgerKey),        // number of values written under the key
    History(LedgerKey, u32),        // value written as version n, from 0
    PatentBatchCount(String),       // patent_number -> number of batches
    PatentBatch(String, u32),       // patent_number, n -> batch_number
    BatchAuction(LedgerKey),        // batch key -> auction_number holding it
}

// Admin and configuration

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Admin)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&StorageKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&StorageKey::Admin, admin);
}

pub fn get_config(env: &Env) -> LedgerConfig {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .unwrap_or_default()
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&StorageKey::Config, config);
}

// Roles

pub fn get_role(env: &Env, entity: &Address) -> Option<Role> {
    env.storage()
        .persistent()
        .get(&StorageKey::Role(entity.clone()))
}

pub fn set_role(env: &Env, entity: &Address, role: &Role) {
    env.storage()
        .persistent()
        .set(&StorageKey::Role(entity.clone()), role);
}

// Versioned records

pub fn exists(env: &Env, key: &LedgerKey) -> bool {
    env.storage()
        .persistent()
        .has(&StorageKey::Current(key.clone()))
}

/// Reads the current value under `key`.
pub fn load<T: LedgerRecord>(env: &Env, key: &LedgerKey) -> Result<T, ContractError> {
    let raw: Val = env
        .storage()
        .persistent()
        .get(&StorageKey::Current(key.clone()))
        .ok_or_else(|| {
            log!(env, "record not found", key.clone());
            ContractError::NotFound
        })?;
    decode(env, key, &raw)
}

pub fn version_count(env: &Env, key: &LedgerKey) -> u32 {
    env.storage()
        .persistent()
        .get(&StorageKey::VersionCount(key.clone()))
        .unwrap_or(0)
}

/// Replaces the current value under `key` and records it as the key's next
/// version. Each version lives in its own entry.
pub fn put<T: LedgerRecord>(env: &Env, key: &LedgerKey, record: &T) {
    let storage = env.storage().persistent();
    let value: Val = record.clone().into_val(env);
    let version = version_count(env, key);

    storage.set(&StorageKey::History(key.clone(), version), &value);
    storage.set(&StorageKey::VersionCount(key.clone()), &(version + 1));
    storage.set(&StorageKey::Current(key.clone()), &value);
}

/// Every value written under `key`, oldest first. Fails with `NotFound` when
/// the key has no current value.
pub fn history<T: LedgerRecord>(env: &Env, key: &LedgerKey) -> Result<Vec<T>, ContractError> {
    if !exists(env, key) {
        log!(env, "record not found", key.clone());
        return Err(ContractError::NotFound);
    }

    let storage = env.storage().persistent();
    let mut records = Vec::new(env);
    for version in 0..version_count(env, key) {
        let raw: Val = storage
            .get(&StorageKey::History(key.clone(), version))
            .ok_or_else(|| {
                log!(env, "history version missing", key.clone(), version);
                ContractError::Corrupted
            })?;
        records.push_back(decode::<T>(env, key, &raw)?);
    }
    Ok(records)
}

fn decode<T: LedgerRecord>(env: &Env, key: &LedgerKey, raw: &Val) -> Result<T, ContractError> {
    let record = T::try_from_val(env, raw).map_err(|_| {
        log!(env, "record does not decode", key.clone());
        ContractError::Corrupted
    })?;
    if record.schema_version() != SCHEMA_VERSION {
        log!(env, "unknown schema version", key.clone(), record.schema_version());
        return Err(ContractError::Corrupted);
    }
    Ok(record)
}

// Patent -> batch index

pub fn patent_batch_count(env: &Env, patent_number: &String) -> u32 {
    env.storage()
        .persistent()
        .get(&StorageKey::PatentBatchCount(patent_number.clone()))
        .unwrap_or(0)
}

pub fn patent_batch_number(env: &Env, patent_number: &String, index: u32) -> Option<String> {
    env.storage()
        .persistent()
        .get(&StorageKey::PatentBatch(patent_number.clone(), index))
}

pub fn patent_batch_numbers(env: &Env, patent_number: &String) -> Vec<String> {
    let mut batches = Vec::new(env);
    for index in 0..patent_batch_count(env, patent_number) {
        if let Some(batch_number) = patent_batch_number(env, patent_number, index) {
            batches.push_back(batch_number);
        }
    }
    batches
}

pub fn add_patent_batch(env: &Env, patent_number: &String, batch_number: &String) {
    let count = patent_batch_count(env, patent_number);
    let storage = env.storage().persistent();
    storage.set(&StorageKey::PatentBatch(patent_number.clone(), count), batch_number);
    storage.set(&StorageKey::PatentBatchCount(patent_number.clone()), &(count + 1));
}

// Auction holds on batches

pub fn batch_auction(env: &Env, batch_key: &LedgerKey) -> Option<String> {
    env.storage()
        .persistent()
        .get(&StorageKey::BatchAuction(batch_key.clone()))
}

pub fn hold_batch(env: &Env, batch_key: &LedgerKey, auction_number: &String) {
    env.storage()
        .persistent()
        .set(&StorageKey::BatchAuction(batch_key.clone()), auction_number);
}

pub fn release_batch(env: &Env, batch_key: &LedgerKey) {
    env.storage()
        .persistent()
        .remove(&StorageKey::BatchAuction(batch_key.clone()));
}

/// Lazy scan over the batches fabricated under one patent, in fabrication
/// order. Index entries and records are read only when reached; the scan
/// stops after `limit` batches.
pub struct BatchScan<'a> {
    env: &'a Env,
    patent_number: String,
    cursor: u32,
    end: u32,
}

impl<'a> BatchScan<'a> {
    pub fn new(env: &'a Env, patent_number: &String, limit: u32) -> Self {
        let end = patent_batch_count(env, patent_number).min(limit);
        BatchScan {
            env,
            patent_number: patent_number.clone(),
            cursor: 0,
            end,
        }
    }
}

impl Iterator for BatchScan<'_> {
    type Item = (String, Result<Batch, ContractError>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }
        let batch_number = patent_batch_number(self.env, &self.patent_number, self.cursor)?;
        self.cursor += 1;

        let key = LedgerKey::Batch(self.patent_number.clone(), batch_number.clone());
        Some((batch_number, load::<Batch>(self.env, &key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{BatchState, ClinicalTrial, TrialState};
    use crate::PharmaLedgerContract;
    use soroban_sdk::testutils::Address as _;

    fn trial(env: &Env, owner: &Address, state: TrialState) -> ClinicalTrial {
        ClinicalTrial {
            schema_version: SCHEMA_VERSION,
            trial_number: String::from_str(env, "T1"),
            drug_name: String::from_str(env, "DrugX"),
            trial_name: String::from_str(env, "Trial1"),
            start_date: 1,
            end_date: 2,
            version: String::from_str(env, "1.0"),
            last_update: 0,
            description: String::from_str(env, "desc"),
            result: None,
            conclusion: None,
            state,
            owner: owner.clone(),
        }
    }

    fn batch(env: &Env, owner: &Address, number: &str) -> Batch {
        Batch {
            schema_version: SCHEMA_VERSION,
            patent_number: String::from_str(env, "P1"),
            batch_number: String::from_str(env, number),
            drug_name: String::from_str(env, "DrugX"),
            fabricated_by: owner.clone(),
            owner: owner.clone(),
            fabrication_date: 1,
            expiration_date: 2,
            quantity: 10,
            state: BatchState::Fabricated,
            analysis_date: None,
            analysis_result: None,
        }
    }

    #[test]
    fn test_put_keeps_every_version() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let owner = Address::generate(&env);
        let key = LedgerKey::Trial(String::from_str(&env, "T1"));

        env.as_contract(&contract_id, || {
            put(&env, &key, &trial(&env, &owner, TrialState::Initiated));
            put(&env, &key, &trial(&env, &owner, TrialState::Completed));

            let current: ClinicalTrial = load(&env, &key).unwrap();
            assert_eq!(current.state, TrialState::Completed);

            let versions: Vec<ClinicalTrial> = history(&env, &key).unwrap();
            assert_eq!(versions.len(), 2);
            assert_eq!(versions.get(0).unwrap().state, TrialState::Initiated);
            assert_eq!(versions.get(1).unwrap().state, TrialState::Completed);
        });
    }

    #[test]
    fn test_missing_and_malformed_values() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let key = LedgerKey::Trial(String::from_str(&env, "T404"));

        env.as_contract(&contract_id, || {
            assert_eq!(load::<ClinicalTrial>(&env, &key), Err(ContractError::NotFound));
            assert_eq!(history::<ClinicalTrial>(&env, &key), Err(ContractError::NotFound));

            env.storage()
                .persistent()
                .set(&StorageKey::Current(key.clone()), &42u32);
            assert_eq!(load::<ClinicalTrial>(&env, &key), Err(ContractError::Corrupted));
        });
    }

    #[test]
    fn test_unknown_schema_version_is_corrupted() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let owner = Address::generate(&env);
        let key = LedgerKey::Trial(String::from_str(&env, "T1"));

        env.as_contract(&contract_id, || {
            let mut record = trial(&env, &owner, TrialState::Initiated);
            record.schema_version = SCHEMA_VERSION + 1;
            put(&env, &key, &record);
            assert_eq!(load::<ClinicalTrial>(&env, &key), Err(ContractError::Corrupted));
        });
    }

    #[test]
    fn test_batch_scan_is_bounded() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let owner = Address::generate(&env);
        let patent = String::from_str(&env, "P1");

        env.as_contract(&contract_id, || {
            for number in ["B1", "B2", "B3"] {
                let record = batch(&env, &owner, number);
                put(
                    &env,
                    &LedgerKey::Batch(patent.clone(), record.batch_number.clone()),
                    &record,
                );
                add_patent_batch(&env, &patent, &record.batch_number);
            }

            assert_eq!(BatchScan::new(&env, &patent, 10).count(), 3);

            let mut scan = BatchScan::new(&env, &patent, 2);
            let (first, record) = scan.next().unwrap();
            assert_eq!(first, String::from_str(&env, "B1"));
            assert_eq!(record.unwrap().owner, owner);
            assert!(scan.next().is_some());
            assert!(scan.next().is_none());
        });
    }

    #[test]
    fn test_versions_are_stored_apart() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let owner = Address::generate(&env);
        let key = LedgerKey::Trial(String::from_str(&env, "T1"));

        env.as_contract(&contract_id, || {
            put(&env, &key, &trial(&env, &owner, TrialState::Initiated));
            put(&env, &key, &trial(&env, &owner, TrialState::Completed));
            assert_eq!(version_count(&env, &key), 2);

            let first: Val = env
                .storage()
                .persistent()
                .get(&StorageKey::History(key.clone(), 0))
                .unwrap();
            let first = ClinicalTrial::try_from_val(&env, &first).unwrap();
            assert_eq!(first.state, TrialState::Initiated);

            // A lost version entry is reported, not skipped
            env.storage()
                .persistent()
                .remove(&StorageKey::History(key.clone(), 1));
            assert_eq!(history::<ClinicalTrial>(&env, &key), Err(ContractError::Corrupted));
        });
    }

    #[test]
    fn test_patent_index_is_ordered() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let patent = String::from_str(&env, "P1");

        env.as_contract(&contract_id, || {
            assert_eq!(patent_batch_count(&env, &patent), 0);
            assert_eq!(BatchScan::new(&env, &patent, 10).count(), 0);

            add_patent_batch(&env, &patent, &String::from_str(&env, "B1"));
            add_patent_batch(&env, &patent, &String::from_str(&env, "B2"));

            assert_eq!(patent_batch_count(&env, &patent), 2);
            assert_eq!(
                patent_batch_number(&env, &patent, 1),
                Some(String::from_str(&env, "B2"))
            );
            assert_eq!(patent_batch_numbers(&env, &patent).len(), 2);
        });
    }

    #[test]
    fn test_auction_hold() {
        let env = Env::default();
        let contract_id = env.register(PharmaLedgerContract, ());
        let batch_key = LedgerKey::Batch(String::from_str(&env, "P1"), String::from_str(&env, "B1"));
        let auction = String::from_str(&env, "A1");

        env.as_contract(&contract_id, || {
            assert_eq!(batch_auction(&env, &batch_key), None);
            hold_batch(&env, &batch_key, &auction);
            assert_eq!(batch_auction(&env, &batch_key), Some(auction.clone()));
            release_batch(&env, &batch_key);
            assert_eq!(batch_auction(&env, &batch_key), None);
        });
    }
}
