#![cfg(test)]

/// Shared fixture and record builders
pub mod utils;
