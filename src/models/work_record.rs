use crate::errors::AppResult;
use crate::models::amount::Amount;
use chrono::NaiveDate;
use serde::Serialize;

/// One logged unit of piecework.
///
/// `job_type` and `unit_price` are copies taken when the record was entered;
/// re-pricing a job type later does not touch existing records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkRecord {
    pub id: i64,
    pub worker_id: i64,
    pub job_type: String,
    pub quantity: i64,
    pub unit_price: Amount,
    pub date: NaiveDate,
    pub paid: bool,
}

impl WorkRecord {
    pub fn amount(&self) -> AppResult<Amount> {
        self.unit_price.times(self.quantity)
    }
}
