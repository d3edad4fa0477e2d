use crate::models::amount::Amount;
use serde::Serialize;

/// A kind of packaging task and its current unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobType {
    pub name: String,
    pub unit_price: Amount,
}
