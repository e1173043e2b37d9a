use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

use crate::records::{Auction, Batch, CallOption, ClinicalTrial, Patent, Role, Shipment};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleAssignedEvent {
    pub entity: Address,
    pub role: Role,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchTransferredEvent {
    pub patent_number: String,
    pub batch_number: String,
    pub from: Address,
    pub to: Address,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEvent {
    pub auction_number: String,
    pub bidder: Address,
    pub price: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InventoryUpdatedEvent {
    pub patent_number: String,
    pub batch_number: String,
    pub old_quantity: u32,
    pub new_quantity: u32,
    pub shipping_number: String,
}

pub fn emit_role_assigned(env: &Env, entity: Address, role: Role) {
    let event = RoleAssignedEvent { entity, role };
    env.events()
        .publish((symbol_short!("role"), symbol_short!("assign")), event);
}

pub fn emit_trial_initiated(env: &Env, trial: &ClinicalTrial) {
    env.events().publish(
        (symbol_short!("trial"), symbol_short!("initiate")),
        trial.clone(),
    );
}

pub fn emit_trial_results(env: &Env, trial: &ClinicalTrial) {
    env.events().publish(
        (symbol_short!("trial"), symbol_short!("results")),
        trial.clone(),
    );
}

pub fn emit_patent_registered(env: &Env, patent: &Patent) {
    env.events().publish(
        (symbol_short!("patent"), symbol_short!("register")),
        patent.clone(),
    );
}

pub fn emit_batch_fabricated(env: &Env, batch: &Batch) {
    env.events().publish(
        (symbol_short!("batch"), symbol_short!("fabricate")),
        batch.clone(),
    );
}

pub fn emit_batch_analyzed(env: &Env, batch: &Batch) {
    env.events().publish(
        (symbol_short!("batch"), symbol_short!("analyze")),
        batch.clone(),
    );
}

pub fn emit_batch_transferred(
    env: &Env,
    patent_number: String,
    batch_number: String,
    from: Address,
    to: Address,
    timestamp: u64,
) {
    let event = BatchTransferredEvent {
        patent_number,
        batch_number,
        from,
        to,
        timestamp,
    };
    env.events()
        .publish((symbol_short!("batch"), symbol_short!("transfer")), event);
}

pub fn emit_batch_shipped(env: &Env, shipment: &Shipment, old_quantity: u32, new_quantity: u32) {
    env.events().publish(
        (symbol_short!("shipment"), symbol_short!("create")),
        shipment.clone(),
    );

    let event = InventoryUpdatedEvent {
        patent_number: shipment.patent_number.clone(),
        batch_number: shipment.batch_number.clone(),
        old_quantity,
        new_quantity,
        shipping_number: shipment.shipping_number.clone(),
    };
    env.events()
        .publish((symbol_short!("batch"), symbol_short!("inventory")), event);
}

pub fn emit_option_created(env: &Env, option: &CallOption) {
    env.events().publish(
        (symbol_short!("option"), symbol_short!("create")),
        option.clone(),
    );
}

pub fn emit_option_bought(env: &Env, option: &CallOption) {
    env.events().publish(
        (symbol_short!("option"), symbol_short!("buy")),
        option.clone(),
    );
}

pub fn emit_option_transferred(env: &Env, option: &CallOption, from: Address) {
    env.events().publish(
        (symbol_short!("option"), symbol_short!("transfer"), from),
        option.clone(),
    );
}

pub fn emit_option_executed(env: &Env, option: &CallOption, exercised_batch: Option<String>) {
    env.events().publish(
        (symbol_short!("option"), symbol_short!("execute")),
        (option.clone(), exercised_batch),
    );
}

pub fn emit_option_expired(env: &Env, option: &CallOption) {
    env.events().publish(
        (symbol_short!("option"), symbol_short!("expire")),
        option.clone(),
    );
}

pub fn emit_auction_created(env: &Env, auction: &Auction) {
    env.events().publish(
        (symbol_short!("auction"), symbol_short!("create")),
        auction.clone(),
    );
}

pub fn emit_bid_placed(env: &Env, auction_number: String, bidder: Address, price: i128, timestamp: u64) {
    let event = BidPlacedEvent {
        auction_number,
        bidder,
        price,
        timestamp,
    };
    env.events()
        .publish((symbol_short!("auction"), symbol_short!("bid")), event);
}

pub fn emit_auction_adjudged(env: &Env, auction: &Auction) {
    env.events().publish(
        (symbol_short!("auction"), symbol_short!("adjudge")),
        auction.clone(),
    );
}
