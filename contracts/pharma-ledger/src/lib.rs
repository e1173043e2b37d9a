#![no_std]

mod access;
mod auction;
mod batch;
mod derivative;
mod error;
mod events;
mod patent;
mod query;
mod records;
mod shipment;
mod storage;
mod trial;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use error::ContractError;
pub use events::{BatchTransferredEvent, BidPlacedEvent, InventoryUpdatedEvent, RoleAssignedEvent};
pub use records::*;

#[contract]
pub struct PharmaLedgerContract;

#[contractimpl]
impl PharmaLedgerContract {
    /// Initialize the contract with its admin and ledger configuration
    pub fn initialize(
        env: Env,
        admin: Address,
        config: Option<LedgerConfig>,
    ) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = config.unwrap_or_default();
        if config.max_batch_scan == 0 {
            return Err(ContractError::InvalidArgument);
        }

        storage::set_admin(&env, &admin);
        storage::set_config(&env, &config);
        Ok(())
    }

    /// Register the organizational role of a network participant
    pub fn assign_role(
        env: Env,
        admin: Address,
        entity: Address,
        role: Role,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        access::require_admin(&env, &admin)?;

        storage::set_role(&env, &entity, &role);
        events::emit_role_assigned(&env, entity, role);
        Ok(())
    }

    pub fn get_role(env: Env, entity: Address) -> Option<Role> {
        storage::get_role(&env, &entity)
    }

    pub fn update_config(
        env: Env,
        admin: Address,
        config: LedgerConfig,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        access::require_admin(&env, &admin)?;

        if config.max_batch_scan == 0 {
            return Err(ContractError::InvalidArgument);
        }
        storage::set_config(&env, &config);
        Ok(())
    }

    pub fn get_config(env: Env) -> LedgerConfig {
        storage::get_config(&env)
    }

    // Clinical trials and patents

    /// Open a clinical trial for a drug. Manufacturers only.
    pub fn initiate_clinical_trial(
        env: Env,
        manufacturer: Address,
        trial_number: String,
        drug_name: String,
        trial_name: String,
        start_date: u64,
        end_date: u64,
        description: String,
    ) -> Result<ClinicalTrial, ContractError> {
        manufacturer.require_auth();
        trial::initiate_clinical_trial(
            &env,
            &manufacturer,
            trial_number,
            drug_name,
            trial_name,
            start_date,
            end_date,
            description,
        )
    }

    /// Close a trial as completed or failed. Trial owner only.
    pub fn register_clinical_trial_results(
        env: Env,
        owner: Address,
        trial_number: String,
        version: Option<String>,
        result: String,
        conclusion: String,
        state: TrialState,
        description: String,
    ) -> Result<ClinicalTrial, ContractError> {
        owner.require_auth();
        trial::register_clinical_trial_results(
            &env,
            &owner,
            trial_number,
            version,
            result,
            conclusion,
            state,
            description,
        )
    }

    pub fn register_patent(
        env: Env,
        manufacturer: Address,
        patent_number: String,
        name: String,
        trial_number: String,
        date: u64,
    ) -> Result<Patent, ContractError> {
        manufacturer.require_auth();
        patent::register_patent(&env, &manufacturer, patent_number, name, trial_number, date)
    }

    // Batches

    pub fn fabricate_batch(
        env: Env,
        owner: Address,
        patent_number: String,
        batch_number: String,
        drug_name: String,
        fabrication_date: u64,
        expiration_date: u64,
        quantity: u32,
    ) -> Result<Batch, ContractError> {
        owner.require_auth();
        batch::fabricate_batch(
            &env,
            &owner,
            patent_number,
            batch_number,
            drug_name,
            fabrication_date,
            expiration_date,
            quantity,
        )
    }

    /// Record the quality analysis of a fabricated batch
    pub fn analyze_batch(
        env: Env,
        owner: Address,
        patent_number: String,
        batch_number: String,
        analysis_date: u64,
        result: AnalysisResult,
    ) -> Result<Batch, ContractError> {
        owner.require_auth();
        batch::analyze_batch(&env, &owner, patent_number, batch_number, analysis_date, result)
    }

    /// Ship part of a wholesaled batch to a pharmacy
    pub fn ship_batch(
        env: Env,
        owner: Address,
        patent_number: String,
        batch_number: String,
        shipping_number: String,
        ship_date: u64,
        quantity: u32,
        pharmacy: Pharmacy,
    ) -> Result<Shipment, ContractError> {
        owner.require_auth();
        shipment::ship_batch(
            &env,
            &owner,
            patent_number,
            batch_number,
            shipping_number,
            ship_date,
            quantity,
            pharmacy,
        )
    }

    // Call options

    /// Write a call option over a patent. Patent owner only.
    pub fn create_option(
        env: Env,
        owner: Address,
        patent_number: String,
        option_number: String,
        price: i128,
        quantity: u32,
        contract_details: String,
        expiry_date: u64,
    ) -> Result<CallOption, ContractError> {
        owner.require_auth();
        derivative::create_option(
            &env,
            &owner,
            patent_number,
            option_number,
            price,
            quantity,
            contract_details,
            expiry_date,
        )
    }

    pub fn buy_option(
        env: Env,
        buyer: Address,
        option_number: String,
        premium: i128,
    ) -> Result<CallOption, ContractError> {
        buyer.require_auth();
        derivative::buy_option(&env, &buyer, option_number, premium)
    }

    pub fn transfer_option(
        env: Env,
        holder: Address,
        option_number: String,
        new_owner: Address,
    ) -> Result<CallOption, ContractError> {
        holder.require_auth();
        derivative::transfer_option(&env, &holder, option_number, new_owner)
    }

    /// Exercise a bought option: the writer's first batch of the patent is
    /// delivered to the holder, or the option fails by seller.
    pub fn execute_option(
        env: Env,
        holder: Address,
        option_number: String,
    ) -> Result<OptionExecution, ContractError> {
        holder.require_auth();
        derivative::execute_option(&env, &holder, option_number)
    }

    pub fn expire_option(
        env: Env,
        party: Address,
        option_number: String,
    ) -> Result<CallOption, ContractError> {
        party.require_auth();
        derivative::expire_option(&env, &party, option_number)
    }

    // Auctions

    pub fn auction_batch(
        env: Env,
        auctioneer: Address,
        auction_number: String,
        patent_number: String,
        batch_number: String,
        close_date: u64,
        reserve_price: i128,
    ) -> Result<Auction, ContractError> {
        auctioneer.require_auth();
        auction::auction_batch(
            &env,
            &auctioneer,
            auction_number,
            patent_number,
            batch_number,
            close_date,
            reserve_price,
        )
    }

    pub fn bid_for_batch(
        env: Env,
        bidder: Address,
        auction_number: String,
        price: i128,
    ) -> Result<Auction, ContractError> {
        bidder.require_auth();
        auction::bid_for_batch(&env, &bidder, auction_number, price)
    }

    /// Close an auction and hand the batch to the best bidder
    pub fn adjudge_batch(
        env: Env,
        auctioneer: Address,
        auction_number: String,
    ) -> Result<Auction, ContractError> {
        auctioneer.require_auth();
        auction::adjudge_batch(&env, &auctioneer, auction_number)
    }

    // Queries

    pub fn query_clinical_trial(env: Env, trial_number: String) -> Result<TrialEntry, ContractError> {
        query::trial(&env, trial_number)
    }

    pub fn query_clinical_trial_history(
        env: Env,
        trial_number: String,
    ) -> Result<Vec<ClinicalTrial>, ContractError> {
        query::trial_history(&env, trial_number)
    }

    pub fn query_patent(env: Env, patent_number: String) -> Result<PatentEntry, ContractError> {
        query::patent(&env, patent_number)
    }

    pub fn query_patent_history(
        env: Env,
        patent_number: String,
    ) -> Result<Vec<Patent>, ContractError> {
        query::patent_history(&env, patent_number)
    }

    pub fn query_patent_batches(
        env: Env,
        patent_number: String,
    ) -> Result<Vec<String>, ContractError> {
        query::patent_batches(&env, patent_number)
    }

    /// Current batch joined with its patent and trial
    pub fn query_batch(
        env: Env,
        patent_number: String,
        batch_number: String,
    ) -> Result<BatchView, ContractError> {
        query::batch(&env, patent_number, batch_number)
    }

    pub fn query_batch_history(
        env: Env,
        patent_number: String,
        batch_number: String,
    ) -> Result<Vec<Batch>, ContractError> {
        query::batch_history(&env, patent_number, batch_number)
    }

    /// Histories of a batch, its patent and its trial
    pub fn query_batch_history_all(
        env: Env,
        patent_number: String,
        batch_number: String,
    ) -> Result<BatchLineage, ContractError> {
        query::batch_lineage(&env, patent_number, batch_number)
    }

    pub fn query_option(env: Env, option_number: String) -> Result<OptionEntry, ContractError> {
        query::option(&env, option_number)
    }

    pub fn query_option_history(
        env: Env,
        option_number: String,
    ) -> Result<Vec<CallOption>, ContractError> {
        query::option_history(&env, option_number)
    }

    pub fn query_auction(env: Env, auction_number: String) -> Result<AuctionEntry, ContractError> {
        query::auction(&env, auction_number)
    }

    pub fn query_auction_history(
        env: Env,
        auction_number: String,
    ) -> Result<Vec<Auction>, ContractError> {
        query::auction_history(&env, auction_number)
    }

    pub fn query_shipment(env: Env, shipping_number: String) -> Result<ShipmentEntry, ContractError> {
        query::shipment(&env, shipping_number)
    }

    /// Shipment history followed by the shipped batch's history
    pub fn query_shipment_history(
        env: Env,
        shipping_number: String,
    ) -> Result<ShipmentTrail, ContractError> {
        query::shipment_trail(&env, shipping_number)
    }
}
