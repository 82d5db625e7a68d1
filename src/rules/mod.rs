//! Per-calendar date equations.
//!
//! Each module maps between a calendar's year-month-day labeling and the
//! shared day count (days since the ISO epoch, 1970-01-01). The modules
//! hold pure arithmetic only; field validation and error handling live
//! on [`CalendarDate`](crate::CalendarDate).

pub(crate) mod cutover;
pub(crate) mod gregorian;
pub(crate) mod international_fixed;
pub(crate) mod julian;
pub(crate) mod symmetry;

/// ISO day of week for an epoch day, `1` (Monday) through `7` (Sunday).
pub(crate) const fn iso_day_of_week(epoch_day: i64) -> u8 {
    ((epoch_day + 3).rem_euclid(7) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_weekday() {
        // 1970-01-01 was a Thursday.
        assert_eq!(iso_day_of_week(0), 4);
        assert_eq!(iso_day_of_week(3), 7);
        assert_eq!(iso_day_of_week(4), 1);
        assert_eq!(iso_day_of_week(-4), 7);
        // 2000-01-01 was a Saturday.
        assert_eq!(iso_day_of_week(10_957), 6);
    }
}
