use chrono::naive::NaiveDate;
use chrono::{Datelike, Month};

/// Number of days in `month` of `year`, proleptic Gregorian.
///
/// Computed as the day span between the first of `month` and the first of
/// the following month, so leap years fall out of chrono's date arithmetic.
pub fn days_of_month(month: &Month, year: i32) -> u32 {
    let num = month.number_from_month();
    let next_month_start = if num == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, num + 1, 1)
    }
    .unwrap();

    next_month_start
        .signed_duration_since(NaiveDate::from_ymd_opt(year, num, 1).unwrap())
        .num_days() as u32
}

/// Weekday of day 1 of `month`, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_offset(month: &Month, year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
        .unwrap()
        .weekday()
        .num_days_from_sunday()
}

/// Cells of one month in a Sunday-first 7-column layout: leading `None`
/// padding up to the first weekday, then the days in order. No trailing
/// padding is emitted.
pub fn month_grid(month: &Month, year: i32) -> Vec<Option<u32>> {
    std::iter::repeat(None)
        .take(first_weekday_offset(month, year) as usize)
        .chain((1..=days_of_month(month, year)).map(Some))
        .collect()
}
