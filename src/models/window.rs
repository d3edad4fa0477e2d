use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

/// Trailing date range of a window report.
///
/// `0` days means "today only"; `n` days covers `today - n ..= today`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    days: u32,
}

impl ReportWindow {
    pub const TODAY: ReportWindow = ReportWindow { days: 0 };

    pub fn days(days: u32) -> Self {
        Self { days }
    }

    pub fn len_days(&self) -> u32 {
        self.days
    }

    /// Inclusive `(from, to)` bounds for the given day.
    pub fn bounds(&self, today: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
        let from = today
            .checked_sub_days(Days::new(u64::from(self.days)))
            .ok_or_else(|| AppError::InvalidWindow(format!("{} days", self.days)))?;
        Ok((from, today))
    }

    pub fn describe(&self) -> String {
        match self.days {
            0 => "today".to_string(),
            1 => "last 1 day".to_string(),
            n => format!("last {n} days"),
        }
    }
}
