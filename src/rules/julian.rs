//! Proleptic Julian date equations.
//!
//! The Julian calendar repeats over a 1,461-day four-year cycle, with
//! every fourth proleptic year a leap year and no century exception.

/// Days from Julian 0001-01-01 to the ISO epoch 1970-01-01.
const DAYS_0001_TO_1970: i64 = 719_164;

/// Days in one four-year Julian cycle.
const DAYS_IN_4_YEAR_CYCLE: i64 = 1_461;

/// Cumulative days before each month in a non-leap year.
const MONTH_STARTS: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub(crate) const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0
}

pub(crate) const fn length_of_month(year: i64, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub(crate) const fn length_of_year(year: i64) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

pub(crate) const fn day_of_year(year: i64, month: u8, day: u8) -> i64 {
    let leap_shift = (month > 2 && is_leap_year(year)) as i64;
    MONTH_STARTS[month as usize - 1] + leap_shift + day as i64
}

/// Epoch day for a Julian year-month-day. The fields must already be
/// valid for the calendar.
pub(crate) const fn epoch_day_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    let prior_years = year - 1;
    365 * prior_years + prior_years.div_euclid(4) + day_of_year(year, month, day) - 1
        - DAYS_0001_TO_1970
}

/// Inverse of [`epoch_day_from_ymd`].
pub(crate) const fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let julian_day = epoch_day + DAYS_0001_TO_1970;
    let cycle = julian_day.div_euclid(DAYS_IN_4_YEAR_CYCLE);
    let day_in_cycle = julian_day.rem_euclid(DAYS_IN_4_YEAR_CYCLE);
    // The fourth year of each cycle is the 366-day leap year.
    let (year, day_in_year) = if day_in_cycle >= 3 * 365 {
        (cycle * 4 + 4, day_in_cycle - 3 * 365)
    } else {
        (cycle * 4 + day_in_cycle / 365 + 1, day_in_cycle % 365)
    };
    let mut remaining = day_in_year + 1;
    let mut month = 1u8;
    while month < 12 {
        let len = length_of_month(year, month) as i64;
        if remaining <= len {
            break;
        }
        remaining -= len;
        month += 1;
    }
    (year, month, remaining as u8)
}
