use chrono::NaiveDate;

/// Local calendar date; work records are stamped with it.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

