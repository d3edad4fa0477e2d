use crate::errors::AppResult;
use crate::models::amount::Amount;
use serde::Serialize;

/// Unpaid work of one job type at one snapshot price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub job_type: String,
    pub quantity: i64,
    pub unit_price: Amount,
    pub amount: Amount,
}

impl ReportLine {
    pub fn new(job_type: String, quantity: i64, unit_price: Amount) -> AppResult<Self> {
        let amount = unit_price.times(quantity)?;
        Ok(Self {
            job_type,
            quantity,
            unit_price,
            amount,
        })
    }

    /// `(job_type, quantity, unit_price)` view, handy for comparisons.
    pub fn as_tuple(&self) -> (&str, i64, Amount) {
        (&self.job_type, self.quantity, self.unit_price)
    }
}

/// Grand total of a report.
pub fn report_total(lines: &[ReportLine]) -> AppResult<Amount> {
    Amount::total(lines.iter().map(|l| l.amount))
}
