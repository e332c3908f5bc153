use chrono::{Datelike, Duration, Local, NaiveDate};

/// Whole-day difference between two calendar dates.
///
/// `NaiveDate` carries no time-of-day, so the difference is always an exact
/// number of days and callers get stable counts regardless of wall-clock
/// time. This is the same contract as normalizing both dates to midnight and
/// taking the ceiling of the division by one day.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Days left until `expiry`, seen from `today`.
///
/// Zero means due today, negative means expired that many days ago.
pub fn days_remaining(expiry: NaiveDate, today: NaiveDate) -> i64 {
    days_between(today, expiry)
}

/// Short month-day display form, e.g. "3月18日".
pub fn format_short(date: NaiveDate) -> String {
    format!("{}月{}日", date.month(), date.day())
}

/// Current local calendar day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local calendar day as an ISO `YYYY-MM-DD` string.
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// Signed calendar addition, with month and year rollover handled by chrono.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}
