//! Leap-week date equations shared by the Symmetry454 and Symmetry010
//! calendars.
//!
//! Both calendars share a year line: every year holds a whole number of
//! weeks (52, or 53 in leap years), year 1 begins on Monday 0001-01-01
//! ISO, and leap years are spread over a 293-year cycle by the rule
//! `(52 * year + 146) mod 293 < 52`. They differ only in how each
//! 91-day quarter is divided into months: Symmetry454 uses 4-5-4 weeks,
//! Symmetry010 uses 30-31-30 days.

/// Days from Symmetry 0001-01-01 to the ISO epoch 1970-01-01.
const DAYS_0001_TO_1970: i64 = 719_162;

/// Days in one 293-year leap cycle (52 * 293 + 52 leap weeks).
pub(crate) const DAYS_IN_293_YEAR_CYCLE: i64 = 107_016;

/// How a 91-day quarter is split into three months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MonthPattern {
    /// Months of 4, 5, and 4 whole weeks (Symmetry454).
    FourFiveFour,
    /// Months of 30, 31, and 30 days (Symmetry010).
    ThirtyOneThirty,
}

impl MonthPattern {
    /// Days before each month within its quarter.
    const fn quarter_offsets(self) -> [i64; 3] {
        match self {
            Self::FourFiveFour => [0, 28, 63],
            Self::ThirtyOneThirty => [0, 30, 61],
        }
    }

    pub(crate) const fn length_of_month(self, year: i64, month: u8) -> u8 {
        let leap_december = month == 12 && is_leap_year(year);
        match self {
            Self::FourFiveFour => {
                if leap_december {
                    35
                } else if month % 3 == 2 {
                    35
                } else {
                    28
                }
            }
            Self::ThirtyOneThirty => {
                if leap_december {
                    37
                } else if month % 3 == 2 {
                    31
                } else {
                    30
                }
            }
        }
    }
}

pub(crate) const fn is_leap_year(year: i64) -> bool {
    (52 * year + 146).rem_euclid(293) < 52
}

/// Leap weeks inserted before the start of `year`.
const fn leap_weeks_before(year: i64) -> i64 {
    (52 * (year - 1) + 146).div_euclid(293)
}

/// Days from Symmetry 0001-01-01 to the start of `year`.
const fn days_before_year(year: i64) -> i64 {
    364 * (year - 1) + 7 * leap_weeks_before(year)
}

pub(crate) const fn length_of_year(year: i64) -> u16 {
    if is_leap_year(year) {
        371
    } else {
        364
    }
}

pub(crate) const fn day_of_year(pattern: MonthPattern, month: u8, day: u8) -> i64 {
    let quarter = (month as i64 - 1) / 3;
    let month_in_quarter = (month as usize - 1) % 3;
    91 * quarter + pattern.quarter_offsets()[month_in_quarter] + day as i64
}

/// Epoch day for a Symmetry year-month-day. The fields must already be
/// valid for the calendar.
pub(crate) const fn epoch_day_from_ymd(pattern: MonthPattern, year: i64, month: u8, day: u8) -> i64 {
    days_before_year(year) + day_of_year(pattern, month, day) - 1 - DAYS_0001_TO_1970
}

/// Inverse of [`epoch_day_from_ymd`].
pub(crate) const fn ymd_from_epoch_day(pattern: MonthPattern, epoch_day: i64) -> (i64, u8, u8) {
    let zero_based = epoch_day + DAYS_0001_TO_1970;
    // Estimate from the mean year length, then correct by at most one
    // year in either direction.
    let mut year = 1 + (293 * zero_based).div_euclid(DAYS_IN_293_YEAR_CYCLE);
    let mut year_start = days_before_year(year);
    if zero_based < year_start {
        year -= 1;
        year_start = days_before_year(year);
    } else if zero_based - year_start >= length_of_year(year) as i64 {
        year_start += length_of_year(year) as i64;
        year += 1;
    }
    let day_of_year0 = zero_based - year_start;
    let quarter = {
        let q = day_of_year0 / 91;
        if q > 3 {
            3
        } else {
            q
        }
    };
    let day_in_quarter = day_of_year0 - 91 * quarter;
    let offsets = pattern.quarter_offsets();
    let (month_in_quarter, offset) = if day_in_quarter >= offsets[2] {
        (2, offsets[2])
    } else if day_in_quarter >= offsets[1] {
        (1, offsets[1])
    } else {
        (0, 0)
    };
    let month = (quarter * 3 + month_in_quarter + 1) as u8;
    let day = (day_in_quarter - offset + 1) as u8;
    (year, month, day)
}
