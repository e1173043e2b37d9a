use soroban_sdk::{log, Address, Env, String};

use crate::access;
use crate::batch;
use crate::error::ContractError;
use crate::events;
use crate::records::{Auction, AuctionState, Batch, BatchState, LedgerKey, SCHEMA_VERSION};
use crate::storage;
use crate::utils;

pub fn auction_batch(
    env: &Env,
    caller: &Address,
    auction_number: String,
    patent_number: String,
    batch_number: String,
    close_date: u64,
    reserve_price: i128,
) -> Result<Auction, ContractError> {
    utils::require_identifier(&auction_number)?;
    access::require_auctioneer(env, caller)?;

    let batch_key = LedgerKey::Batch(patent_number.clone(), batch_number.clone());
    let batch: Batch = storage::load(env, &batch_key)?;
    access::require_owner(env, caller, &batch.owner)?;
    if batch.state != BatchState::Analyzed {
        log!(env, "batch is not analyzed", batch_key);
        return Err(ContractError::InvalidState);
    }
    if let Some(open) = storage::batch_auction(env, &batch_key) {
        log!(env, "batch is already in auction", batch_key, open);
        return Err(ContractError::InvalidState);
    }

    if reserve_price < 0 || close_date <= utils::now(env) {
        return Err(ContractError::InvalidArgument);
    }

    let key = LedgerKey::Auction(auction_number.clone());
    if storage::exists(env, &key) {
        log!(env, "auction already exists", key);
        return Err(ContractError::AlreadyExists);
    }

    let auction = Auction {
        schema_version: SCHEMA_VERSION,
        auction_number,
        patent_number,
        batch_number,
        auctioneer: caller.clone(),
        close_date,
        reserve_price,
        price: 0,
        buyer: None,
        state: AuctionState::InAuction,
    };

    storage::put(env, &key, &auction);
    storage::hold_batch(env, &batch_key, &auction.auction_number);
    events::emit_auction_created(env, &auction);
    Ok(auction)
}

pub fn bid_for_batch(
    env: &Env,
    caller: &Address,
    auction_number: String,
    price: i128,
) -> Result<Auction, ContractError> {
    let key = LedgerKey::Auction(auction_number.clone());
    let mut auction: Auction = storage::load(env, &key)?;

    if auction.state != AuctionState::InAuction {
        log!(env, "auction is closed", key);
        return Err(ContractError::InvalidState);
    }
    let now = utils::now(env);
    if now > auction.close_date {
        log!(env, "auction close date has passed", key);
        return Err(ContractError::Expired);
    }
    access::require_wholesaler(env, caller)?;

    // A bid must beat both the reserve and the current best offer.
    if price <= auction.reserve_price || price <= auction.price {
        log!(env, "bid rejected", key, price, auction.price);
        return Err(ContractError::InvalidArgument);
    }

    auction.price = price;
    auction.buyer = Some(caller.clone());

    storage::put(env, &key, &auction);
    events::emit_bid_placed(env, auction_number, caller.clone(), price, now);
    Ok(auction)
}

pub fn adjudge_batch(
    env: &Env,
    caller: &Address,
    auction_number: String,
) -> Result<Auction, ContractError> {
    let key = LedgerKey::Auction(auction_number);
    let mut auction: Auction = storage::load(env, &key)?;

    if auction.state != AuctionState::InAuction {
        log!(env, "auction already adjudicated", key);
        return Err(ContractError::InvalidState);
    }
    if utils::now(env) <= auction.close_date {
        log!(env, "auction is still open", key);
        return Err(ContractError::InvalidState);
    }
    access::require_owner(env, caller, &auction.auctioneer)?;

    // The hold kept the batch with the auctioneer while bidding was open
    let batch_key = LedgerKey::Batch(auction.patent_number.clone(), auction.batch_number.clone());
    if let Some(buyer) = &auction.buyer {
        let batch: Batch = storage::load(env, &batch_key)?;
        batch::transfer_to_wholesale(env, batch, buyer);
    }
    storage::release_batch(env, &batch_key);

    auction.state = AuctionState::Adjudicated;

    storage::put(env, &key, &auction);
    events::emit_auction_adjudged(env, &auction);
    Ok(auction)
}
