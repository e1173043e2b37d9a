use soroban_sdk::{Env, String};

use crate::error::ContractError;

const SECONDS_PER_DAY: u64 = 86_400;

pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Record numbers are the components of ledger keys and must not be empty.
pub fn require_identifier(id: &String) -> Result<(), ContractError> {
    if id.len() == 0 {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

/// Gregorian (year, month, day) of a unix timestamp, UTC.
pub fn civil_date(timestamp: u64) -> (u64, u32, u32) {
    let z = timestamp / SECONDS_PER_DAY + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month as u32, day)
}

pub fn day_of_month(timestamp: u64) -> u32 {
    civil_date(timestamp).2
}

/// Expiry rule applied when an option is executed: only the calendar day of
/// the month is compared, never the month or year.
pub fn is_past_expiry_day(now: u64, expiry_date: u64) -> bool {
    day_of_month(now) > day_of_month(expiry_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_01_2024: u64 = 1_704_067_200;
    const FEB_29_2024: u64 = 1_709_164_800;
    const JUL_01_2024: u64 = 1_719_792_000;

    #[test]
    fn test_civil_date() {
        assert_eq!(civil_date(0), (1970, 1, 1));
        assert_eq!(civil_date(JAN_01_2024), (2024, 1, 1));
        assert_eq!(civil_date(FEB_29_2024), (2024, 2, 29));
        assert_eq!(civil_date(JUL_01_2024 + SECONDS_PER_DAY - 1), (2024, 7, 1));
        assert_eq!(civil_date(JAN_01_2024 - 1), (2023, 12, 31));
    }

    #[test]
    fn test_expiry_day_comparison() {
        let jul_15 = JUL_01_2024 + 14 * SECONDS_PER_DAY;
        let aug_10 = JUL_01_2024 + 40 * SECONDS_PER_DAY;

        assert!(!is_past_expiry_day(JUL_01_2024, jul_15));
        assert!(!is_past_expiry_day(jul_15, jul_15));
        assert!(is_past_expiry_day(jul_15 + SECONDS_PER_DAY, jul_15));
        // A later day of an earlier month still counts as expired.
        assert!(is_past_expiry_day(jul_15, aug_10));
    }

    #[test]
    fn test_identifier_validation() {
        let env = Env::default();
        assert_eq!(require_identifier(&String::from_str(&env, "P1")), Ok(()));
        assert_eq!(
            require_identifier(&String::from_str(&env, "")),
            Err(ContractError::InvalidArgument)
        );
    }
}
