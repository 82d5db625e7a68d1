//! British cutover date equations.
//!
//! Julian reckoning through 1752-09-02, Gregorian reckoning from
//! 1752-09-14, with the eleven days in between elided. September 1752
//! keeps its Julian day labels 1-2 and Gregorian labels 14-30, for a
//! 19-day month inside a 355-day year.

use super::{gregorian, julian};

/// Epoch day of Gregorian 1752-09-14, the first day after the gap.
pub(crate) const CUTOVER_EPOCH_DAY: i64 = -79_366;

/// Days elided by the cutover.
pub(crate) const GAP_DAYS: u8 = 11;

pub(crate) const CUTOVER_YEAR: i64 = 1752;
pub(crate) const CUTOVER_MONTH: u8 = 9;
pub(crate) const CUTOVER_DAY: u8 = 14;

/// Whether a year-month-day label belongs to the Gregorian arm.
const fn is_gregorian_label(year: i64, month: u8, day: u8) -> bool {
    year > CUTOVER_YEAR
        || (year == CUTOVER_YEAR
            && (month > CUTOVER_MONTH || (month == CUTOVER_MONTH && day >= CUTOVER_DAY)))
}

const fn is_gregorian_month(year: i64, month: u8) -> bool {
    year > CUTOVER_YEAR || (year == CUTOVER_YEAR && month > CUTOVER_MONTH)
}

pub(crate) const fn is_leap_year(year: i64) -> bool {
    if year <= CUTOVER_YEAR {
        julian::is_leap_year(year)
    } else {
        gregorian::is_leap_year(year)
    }
}

/// The number of days actually present in the month.
pub(crate) const fn length_of_month(year: i64, month: u8) -> u8 {
    if year == CUTOVER_YEAR && month == CUTOVER_MONTH {
        julian::length_of_month(year, month) - GAP_DAYS
    } else {
        month_day_max(year, month)
    }
}

/// The largest day label accepted for the month. For September 1752
/// this exceeds [`length_of_month`], since the labels 3-13 are absent
/// but 14-30 remain.
pub(crate) const fn month_day_max(year: i64, month: u8) -> u8 {
    if is_gregorian_month(year, month) {
        gregorian::length_of_month(year, month)
    } else {
        julian::length_of_month(year, month)
    }
}

pub(crate) const fn length_of_year(year: i64) -> u16 {
    if year == CUTOVER_YEAR {
        julian::length_of_year(year) - GAP_DAYS as u16
    } else if year < CUTOVER_YEAR {
        julian::length_of_year(year)
    } else {
        gregorian::length_of_year(year)
    }
}

/// Day of month with the cutover gap removed, used when comparing
/// day positions across the gap.
pub(crate) const fn effective_day_of_month(year: i64, month: u8, day: u8) -> u8 {
    if year == CUTOVER_YEAR && month == CUTOVER_MONTH && day >= CUTOVER_DAY {
        day - GAP_DAYS
    } else {
        day
    }
}

/// Epoch day for a cutover year-month-day. Labels inside the gap fall
/// through to the Julian equations and resolve to days on the Gregorian
/// side; callers re-derive the stored label from the returned epoch day.
pub(crate) const fn epoch_day_from_ymd(year: i64, month: u8, day: u8) -> i64 {
    if is_gregorian_label(year, month, day) {
        gregorian::epoch_day_from_ymd(year, month, day)
    } else {
        julian::epoch_day_from_ymd(year, month, day)
    }
}

/// Inverse of [`epoch_day_from_ymd`].
pub(crate) const fn ymd_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    if epoch_day >= CUTOVER_EPOCH_DAY {
        gregorian::ymd_from_epoch_day(epoch_day)
    } else {
        julian::ymd_from_epoch_day(epoch_day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutover_constant() {
        assert_eq!(
            gregorian::epoch_day_from_ymd(CUTOVER_YEAR, CUTOVER_MONTH, CUTOVER_DAY),
            CUTOVER_EPOCH_DAY
        );
        assert_eq!(
            julian::epoch_day_from_ymd(1752, 9, 2),
            CUTOVER_EPOCH_DAY - 1
        );
    }

    #[test]
    fn gap_labels_resolve_forward() {
        // Julian labels 3 through 13 land on Gregorian 14 through 24.
        for day in 3..=13u8 {
            let epoch_day = epoch_day_from_ymd(1752, 9, day);
            assert_eq!(ymd_from_epoch_day(epoch_day), (1752, 9, day + GAP_DAYS));
        }
        assert_eq!(ymd_from_epoch_day(CUTOVER_EPOCH_DAY - 1), (1752, 9, 2));
        assert_eq!(ymd_from_epoch_day(CUTOVER_EPOCH_DAY), (1752, 9, 14));
    }

    #[test]
    fn cutover_month_shape() {
        assert_eq!(length_of_month(1752, 9), 19);
        assert_eq!(month_day_max(1752, 9), 30);
        assert_eq!(length_of_year(1752), 355);
        assert_eq!(length_of_month(1752, 2), 29);
        assert_eq!(length_of_month(1752, 10), 31);
        assert_eq!(effective_day_of_month(1752, 9, 14), 3);
        assert_eq!(effective_day_of_month(1752, 9, 30), 19);
        assert_eq!(effective_day_of_month(1752, 9, 2), 2);
        assert_eq!(effective_day_of_month(1753, 9, 14), 14);
    }

    #[test]
    fn leap_year_arms() {
        // Julian rule up to and including 1752, Gregorian after.
        assert!(is_leap_year(1700));
        assert!(!is_leap_year(1800));
        assert!(is_leap_year(1752));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
    }

    #[test]
    fn epoch_continuity_across_gap() {
        let before = epoch_day_from_ymd(1752, 9, 2);
        let after = epoch_day_from_ymd(1752, 9, 14);
        assert_eq!(after - before, 1);

        // The year is contiguous in epoch days despite the gap.
        let jan1 = epoch_day_from_ymd(1752, 1, 1);
        let next_jan1 = epoch_day_from_ymd(1753, 1, 1);
        assert_eq!(next_jan1 - jan1, length_of_year(1752) as i64);
    }

    #[test]
    fn ymd_inversion() {
        let start = epoch_day_from_ymd(1751, 1, 1);
        let end = epoch_day_from_ymd(1754, 1, 1);
        let mut epoch_day = start;
        while epoch_day < end {
            let (y, m, d) = ymd_from_epoch_day(epoch_day);
            assert_eq!(epoch_day_from_ymd(y, m, d), epoch_day);
            assert!(d >= 1 && d <= month_day_max(y, m));
            epoch_day += 1;
        }
    }
}
