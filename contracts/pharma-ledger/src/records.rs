use soroban_sdk::{contracttype, Address, Env, IntoVal, String, TryFromVal, Val, Vec};

/// Version stamped on every record written by this contract. Values with any
/// other version are reported as corrupted on read.
pub const SCHEMA_VERSION: u32 = 1;

/// Composite ledger key. The variant is the namespace, the fields are the
/// ordered key components.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerKey {
    Trial(String),
    Patent(String),
    Batch(String, String), // patent_number, batch_number
    CallOption(String),
    Auction(String),
    Shipment(String),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Manufacturer,
    Wholesaler,
    Distributor,
    Pharmacy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Upper bound on batches visited when exercising an option.
    pub max_batch_scan: u32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        LedgerConfig { max_batch_scan: 100 }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TrialState {
    Initiated,
    Completed,
    Failed,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PatentState {
    Registered,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchState {
    Fabricated,
    Analyzed,
    Wholesale,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnalysisResult {
    Conform,
    NotConform,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OptionState {
    Created,
    Bought,
    Executed,
    FailedBySeller,
    Expired,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionState {
    InAuction,
    Adjudicated,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShipmentState {
    OnPharmacy,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClinicalTrial {
    pub schema_version: u32,
    pub trial_number: String,
    pub drug_name: String,
    pub trial_name: String,
    pub start_date: u64,
    pub end_date: u64,
    pub version: String,
    pub last_update: u64,
    pub description: String,
    pub result: Option<String>,
    pub conclusion: Option<String>,
    pub state: TrialState,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Patent {
    pub schema_version: u32,
    pub patent_number: String,
    pub trial_number: String,
    pub name: String,
    pub owner: Address,
    pub date: u64,
    pub state: PatentState,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Batch {
    pub schema_version: u32,
    pub patent_number: String,
    pub batch_number: String,
    pub drug_name: String,
    pub fabricated_by: Address,
    pub owner: Address,
    pub fabrication_date: u64,
    pub expiration_date: u64,
    pub quantity: u32,
    pub state: BatchState,
    pub analysis_date: Option<u64>,
    pub analysis_result: Option<AnalysisResult>,
}

/// Call option written by the patent owner (short call) and held by the
/// buyer (long call).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallOption {
    pub schema_version: u32,
    pub option_number: String,
    pub patent_number: String,
    pub price: i128,
    pub quantity: u32,
    pub contract_details: String,
    pub expiry_date: u64,
    pub state: OptionState,
    pub short_call: Address,
    pub long_call: Option<Address>,
    pub premium: Option<i128>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub schema_version: u32,
    pub auction_number: String,
    pub patent_number: String,
    pub batch_number: String,
    pub auctioneer: Address,
    pub close_date: u64,
    pub reserve_price: i128,
    pub price: i128,
    pub buyer: Option<Address>,
    pub state: AuctionState,
}

/// Destination of a shipment.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pharmacy {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shipment {
    pub schema_version: u32,
    pub shipping_number: String,
    pub patent_number: String,
    pub batch_number: String,
    pub shipped_by: Address,
    pub ship_date: u64,
    pub quantity: u32,
    pub pharmacy: Pharmacy,
    pub state: ShipmentState,
}

// Query results

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TrialEntry {
    pub key: LedgerKey,
    pub record: ClinicalTrial,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatentEntry {
    pub key: LedgerKey,
    pub record: Patent,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchEntry {
    pub key: LedgerKey,
    pub record: Batch,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionEntry {
    pub key: LedgerKey,
    pub record: CallOption,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEntry {
    pub key: LedgerKey,
    pub record: Auction,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentEntry {
    pub key: LedgerKey,
    pub record: Shipment,
}

/// Current batch joined with the patent and trial it descends from.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchView {
    pub batch: BatchEntry,
    pub patent: PatentEntry,
    pub trial: TrialEntry,
}

/// Full histories of a batch, its patent and the patent's trial.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchLineage {
    pub batch: Vec<Batch>,
    pub patent: Vec<Patent>,
    pub trial: Vec<ClinicalTrial>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentTrail {
    pub shipment: Vec<Shipment>,
    pub batch: Vec<Batch>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionExecution {
    pub exercised_batch: Option<String>,
    pub option: CallOption,
}

/// A value stored under a `LedgerKey`.
pub trait LedgerRecord: Clone + IntoVal<Env, Val> + TryFromVal<Env, Val> {
    fn schema_version(&self) -> u32;
}

impl LedgerRecord for ClinicalTrial {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

impl LedgerRecord for Patent {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

impl LedgerRecord for Batch {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

impl LedgerRecord for CallOption {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

impl LedgerRecord for Auction {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}

impl LedgerRecord for Shipment {
    fn schema_version(&self) -> u32 {
        self.schema_version
    }
}
