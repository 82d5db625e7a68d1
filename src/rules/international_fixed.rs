//! International Fixed date equations.
//!
//! Thirteen 28-day months per year, plus two intercalary days outside
//! the week cycle: Year Day (month 13, day 29) every year, and Leap Day
//! (month 6, day 29) in Gregorian leap years. Year boundaries coincide
//! with the proleptic Gregorian calendar.

use super::gregorian;

/// Ordinal day of Leap Day within a leap year (after June 28).
const LEAP_DAY_OF_YEAR: i64 = 169;

pub(crate) const fn is_leap_year(year: i64) -> bool {
    gregorian::is_leap_year(year)
}

pub(crate) const fn length_of_month(year: i64, month: u8) -> u8 {
    if month == 13 || (month == 6 && is_leap_year(year)) {
        29
    } else {
        28
    }
}

pub(crate) const fn length_of_year(year: i64) -> u16 {
    gregorian::length_of_year(year)
}

/// Whether the day sits outside the week cycle.
pub(crate) const fn is_intercalary(day: u8) -> bool {
    day == 29
}

/// Day of week, with `0` for the intercalary days.
pub(crate) const fn day_of_week(day: u8) -> u8 {
    if is_intercalary(day) {
        0
    } else {
        (day - 1) % 7 + 1
    }
}

pub(crate) const fn day_of_year(year: i64, month: u8, day: u8) -> i64 {
    let leap_shift = (month > 6 && is_leap_year(year)) as i64;
    28 * (month as i64 - 1) + day as i64 + leap_shift
}

/// Epoch day for an International Fixed year-month-day. The fields must
/// already be valid for the calendar.
pub(crate) const fn epoch_day_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    gregorian::epoch_day_from_ymd(year, 1, 1) + day_of_year(year, month, day) - 1
}

/// Inverse of [`epoch_day_from_ymd`].
pub(crate) const fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let (year, _, _) = gregorian::ymd_from_epoch_day(epoch_day);
    let day_of_year = epoch_day - gregorian::epoch_day_from_ymd(year, 1, 1) + 1;
    let leap = is_leap_year(year);
    if day_of_year == length_of_year(year) as i64 {
        return (year, 13, 29);
    }
    if leap && day_of_year == LEAP_DAY_OF_YEAR {
        return (year, 6, 29);
    }
    let leap_shift = (leap && day_of_year > LEAP_DAY_OF_YEAR) as i64;
    let zero_based = day_of_year - 1 - leap_shift;
    (year, (zero_based / 28 + 1) as u8, (zero_based % 28 + 1) as u8)
}
