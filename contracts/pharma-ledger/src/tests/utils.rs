#![cfg(test)]
#![allow(dead_code)]

use crate::{
    AnalysisResult, Auction, Batch, ClinicalTrial, Patent, PharmaLedgerContract,
    PharmaLedgerContractClient, Pharmacy, Role, TrialState,
};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, String,
};

pub const DAY: u64 = 86_400;
pub const JAN_01_2024: u64 = 1_704_067_200;
pub const JUN_01_2024: u64 = 1_717_200_000;
pub const JUL_01_2024: u64 = 1_719_792_000;
pub const AUG_01_2024: u64 = 1_722_470_400;
pub const JUL_01_2025: u64 = 1_751_328_000;

pub struct TestContext {
    pub env: Env,
    pub client: PharmaLedgerContractClient<'static>,
    pub admin: Address,
    pub manufacturer: Address,
    pub wholesaler: Address,
    pub distributor: Address,
    pub stranger: Address,
}

impl TestContext {
    /// Registered contract with one participant per role, clock at 2024-07-01.
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(JUL_01_2024);

        let contract_id = env.register(PharmaLedgerContract, ());
        let client = PharmaLedgerContractClient::new(&env, &contract_id);

        let admin = Address::generate(&env);
        let manufacturer = Address::generate(&env);
        let wholesaler = Address::generate(&env);
        let distributor = Address::generate(&env);
        let stranger = Address::generate(&env);

        client.initialize(&admin, &None);
        client.assign_role(&admin, &manufacturer, &Role::Manufacturer);
        client.assign_role(&admin, &wholesaler, &Role::Wholesaler);
        client.assign_role(&admin, &distributor, &Role::Distributor);

        Self {
            env,
            client,
            admin,
            manufacturer,
            wholesaler,
            distributor,
            stranger,
        }
    }

    pub fn s(&self, value: &str) -> String {
        String::from_str(&self.env, value)
    }

    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().set_timestamp(timestamp);
    }

    pub fn advance_time(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    pub fn initiate_trial(&self, trial_number: &str) -> ClinicalTrial {
        self.client.initiate_clinical_trial(
            &self.manufacturer,
            &self.s(trial_number),
            &self.s("Amoxicillin"),
            &self.s("Phase III efficacy"),
            &JAN_01_2024,
            &JUN_01_2024,
            &self.s("Double blind study"),
        )
    }

    pub fn completed_trial(&self, trial_number: &str) -> ClinicalTrial {
        self.initiate_trial(trial_number);
        self.client.register_clinical_trial_results(
            &self.manufacturer,
            &self.s(trial_number),
            &Some(self.s("1.1")),
            &self.s("Primary endpoint met"),
            &self.s("Approved for production"),
            &TrialState::Completed,
            &self.s("Study closed"),
        )
    }

    /// Patent registered over a freshly completed trial named after it.
    pub fn registered_patent(&self, patent_number: &str, trial_number: &str) -> Patent {
        self.completed_trial(trial_number);
        self.client.register_patent(
            &self.manufacturer,
            &self.s(patent_number),
            &self.s("Amoxicillin 500mg"),
            &self.s(trial_number),
            &JUL_01_2024,
        )
    }

    pub fn fabricated_batch(&self, patent_number: &str, batch_number: &str, quantity: u32) -> Batch {
        self.client.fabricate_batch(
            &self.manufacturer,
            &self.s(patent_number),
            &self.s(batch_number),
            &self.s("Amoxicillin"),
            &JUL_01_2024,
            &JUL_01_2025,
            &quantity,
        )
    }

    pub fn analyzed_batch(&self, patent_number: &str, batch_number: &str, quantity: u32) -> Batch {
        self.fabricated_batch(patent_number, batch_number, quantity);
        self.client.analyze_batch(
            &self.manufacturer,
            &self.s(patent_number),
            &self.s(batch_number),
            &(JUL_01_2024 + DAY),
            &AnalysisResult::Conform,
        )
    }

    /// Open auction run by the manufacturer, closing one day from now.
    pub fn open_auction(&self, auction_number: &str, patent_number: &str, batch_number: &str) -> Auction {
        let close_date = self.env.ledger().timestamp() + DAY;
        self.client.auction_batch(
            &self.manufacturer,
            &self.s(auction_number),
            &self.s(patent_number),
            &self.s(batch_number),
            &close_date,
            &100,
        )
    }

    /// Drives a batch through auction into the wholesaler's stock. Moves the
    /// clock past the auction close date.
    pub fn wholesale_batch(&self, patent_number: &str, batch_number: &str, quantity: u32) -> Batch {
        self.analyzed_batch(patent_number, batch_number, quantity);

        let auction = self.open_auction(batch_number, patent_number, batch_number);
        self.client
            .bid_for_batch(&self.wholesaler, &auction.auction_number, &150);
        self.set_time(auction.close_date + 1);
        self.client
            .adjudge_batch(&self.manufacturer, &auction.auction_number);

        self.client
            .query_batch(&self.s(patent_number), &self.s(batch_number))
            .batch
            .record
    }

    pub fn pharmacy(&self) -> Pharmacy {
        Pharmacy {
            name: self.s("Farmacia Central"),
            address: self.s("Calle Mayor 1"),
            phone: self.s("+34 600 000 000"),
        }
    }
}
