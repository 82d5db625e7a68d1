//! Proleptic Gregorian date equations.
//!
//! These serve as the ISO base for epoch-day interchange, the Gregorian
//! arm of the British cutover calendar, and the year structure of the
//! International Fixed calendar. The conversions follow the civil
//! calendar equations over the 146,097-day quadricentennial cycle,
//! rebased so that day zero is 1970-01-01.

/// Days from the computational epoch 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Days in one 400-year Gregorian cycle.
pub(crate) const DAYS_IN_400_YEAR_CYCLE: i64 = 146_097;

pub(crate) const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(4) == 0 && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
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

/// Epoch day for a Gregorian year-month-day. The fields must already be
/// valid for the calendar.
pub(crate) const fn epoch_day_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    let adjusted_year = if month <= 2 { year - 1 } else { year };
    let era = adjusted_year.div_euclid(400);
    let year_of_era = adjusted_year - era * 400;
    // Day of the March-based year, 0 (March 1st) through 365.
    let shifted_month = if month > 2 {
        month as i64 - 3
    } else {
        month as i64 + 9
    };
    let day_of_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_IN_400_YEAR_CYCLE + day_of_era - EPOCH_SHIFT
}

/// Inverse of [`epoch_day_from_ymd`].
pub(crate) const fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let shifted = epoch_day + EPOCH_SHIFT;
    let era = shifted.div_euclid(DAYS_IN_400_YEAR_CYCLE);
    let day_of_era = shifted - era * DAYS_IN_400_YEAR_CYCLE;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * shifted_month + 2) / 5 + 1) as u8;
    let month = if shifted_month < 10 {
        (shifted_month + 3) as u8
    } else {
        (shifted_month - 9) as u8
    };
    if month <= 2 {
        (year + 1, month, day)
    } else {
        (year, month, day)
    }
}
