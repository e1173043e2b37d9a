use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Record lookup errors
    NotFound = 3,
    AlreadyExists = 4,

    // Caller identity or role rejected
    Unauthorized = 5,

    // Lifecycle errors
    InvalidState = 6,
    InvalidArgument = 7,
    Expired = 8,

    // Stored value does not decode as the expected record
    Corrupted = 9,
}
