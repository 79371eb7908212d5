use chrono::{Datelike, Days, Months, NaiveDate};

// Missing days spill into the next month: Jan 31 + 1 month is Mar 3.
pub fn add_months_rolling(date: NaiveDate, months: u32) -> NaiveDate {
    let first_of_month = date.with_day(1).unwrap_or(date);
    let shifted = first_of_month
        .checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX);
    shifted
        .checked_add_days(Days::new(u64::from(date.day() - 1)))
        .unwrap_or(NaiveDate::MAX)
}

pub fn add_approx_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(months) * 30))
        .unwrap_or(NaiveDate::MAX)
}

pub fn long_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

pub fn short_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

pub fn short_month_two_digit_year(date: NaiveDate) -> String {
    date.format("%b %y").to_string()
}
