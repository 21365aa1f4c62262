//! Month arithmetic against the fixed reference year.
//!
//! Stored events carry no year, so month lengths and weekday offsets are
//! computed against a single non-leap reference year. The reference year
//! only drives display layout and day-limit validation; it has no bearing
//! on event identity.

use chrono::{Datelike, NaiveDate};

/// The fixed year used for month lengths and weekday offsets.
pub const REFERENCE_YEAR: i32 = 2025;

/// Number of days in `month` (1-12) in the reference year.
///
/// Computed as the day before the first of the following month. February
/// is 28 under the non-leap reference year. Callers guarantee the 1-12
/// range; out-of-range input yields 0 rather than panicking.
pub fn days_in_month(month: u32) -> u32 {
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(REFERENCE_YEAR, month + 1, 1)
    };

    next_first
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday of the 1st of `month` in the reference year (0 = Sunday).
///
/// Used purely for grid offset, never for validation.
pub fn first_weekday_of_month(month: u32) -> u32 {
    NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// English name of `month` (1-12) for grid headers.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}
