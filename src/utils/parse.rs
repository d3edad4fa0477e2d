//! Parsing of numeric CLI input before it reaches the ledger.

use crate::errors::{AppError, AppResult};
use crate::models::Amount;

/// Quantity must be a whole number greater than zero.
pub fn parse_quantity(s: &str) -> AppResult<i64> {
    match s.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::InvalidQuantity(s.to_string())),
    }
}

pub fn parse_optional_amount(s: Option<&String>) -> AppResult<Option<Amount>> {
    s.map(|v| Amount::parse(v)).transpose()
}
