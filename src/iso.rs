//! The ISO interchange date.
//!
//! [`IsoDate`] is the proleptic Gregorian date used to move between
//! calendar systems. Conversions in both directions preserve the epoch
//! day exactly.

use core::cmp::Ordering;
use core::fmt;

use writeable::{LengthHint, Writeable};

use crate::error::{ChronologyError, ErrorMessage};
use crate::rules::gregorian;
use crate::ChronologyResult;

/// The ISO year range accepted for interchange. Wide enough to cover
/// every supported calendar's epoch day range.
const ISO_YEAR_RANGE: core::ops::RangeInclusive<i32> = -2_000_000..=2_000_000;

/// A proleptic Gregorian (ISO 8601) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IsoDate {
    year: i32,
    month: u8,
    day: u8,
}

impl IsoDate {
    /// Creates an `IsoDate`, validating the fields.
    pub fn try_new(year: i32, month: u8, day: u8) -> ChronologyResult<Self> {
        if !ISO_YEAR_RANGE.contains(&year) {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
            );
        }
        if !(1..=12).contains(&month) {
            return Err(ChronologyError::invalid_date().with_enum(ErrorMessage::MonthOutOfRange));
        }
        if day < 1 || day > gregorian::length_of_month(i64::from(year), month) {
            return Err(ChronologyError::invalid_date().with_enum(ErrorMessage::DayOutOfRange));
        }
        Ok(Self { year, month, day })
    }

    /// Creates an `IsoDate` from a count of days since 1970-01-01.
    pub fn from_epoch_day(epoch_day: i64) -> ChronologyResult<Self> {
        let min = gregorian::epoch_day_from_ymd(i64::from(*ISO_YEAR_RANGE.start()), 1, 1);
        let max = gregorian::epoch_day_from_ymd(i64::from(*ISO_YEAR_RANGE.end()), 12, 31);
        if epoch_day < min || epoch_day > max {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::EpochDayOutOfRange)
            );
        }
        let (year, month, day) = gregorian::ymd_from_epoch_day(epoch_day);
        Ok(Self {
            year: year as i32,
            month,
            day,
        })
    }

    /// The count of days since 1970-01-01.
    #[must_use]
    pub fn to_epoch_day(self) -> i64 {
        gregorian::epoch_day_from_ymd(i64::from(self.year), self.month, self.day)
    }

    /// The proleptic ISO year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year, `1..=12`.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month, `1..=31`.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether the ISO year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        gregorian::is_leap_year(i64::from(self.year))
    }
}

impl PartialOrd for IsoDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IsoDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

/// Writes a year, zero-padded to at least four digits, with a leading
/// `-` for years before zero.
pub(crate) fn write_iso_year<W: fmt::Write + ?Sized>(year: i32, sink: &mut W) -> fmt::Result {
    if year < 0 {
        sink.write_char('-')?;
    }
    let abs = year.unsigned_abs();
    if abs < 10_000 {
        sink.write_char(char::from(b'0' + (abs / 1_000) as u8))?;
        sink.write_char(char::from(b'0' + (abs / 100 % 10) as u8))?;
        sink.write_char(char::from(b'0' + (abs / 10 % 10) as u8))?;
        sink.write_char(char::from(b'0' + (abs % 10) as u8))
    } else {
        abs.write_to(sink)
    }
}

/// Writes a two-digit zero-padded value below 100.
pub(crate) fn write_padded_u8<W: fmt::Write + ?Sized>(value: u8, sink: &mut W) -> fmt::Result {
    sink.write_char(char::from(b'0' + value / 10))?;
    sink.write_char(char::from(b'0' + value % 10))
}

/// The number of decimal digits of `value`.
pub(crate) fn decimal_digits(value: u32) -> usize {
    let mut digits = 1;
    let mut rest = value / 10;
    while rest > 0 {
        digits += 1;
        rest /= 10;
    }
    digits
}

impl Writeable for IsoDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write_iso_year(self.year, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.month, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.day, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let year_len = usize::from(self.year < 0) + decimal_digits(self.year.unsigned_abs()).max(4);
        LengthHint::exact(year_len + 6)
    }
}

writeable::impl_display_with_writeable!(IsoDate);

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn construction() {
        assert!(IsoDate::try_new(2024, 2, 29).is_ok());
        assert!(IsoDate::try_new(2023, 2, 29).is_err());
        assert!(IsoDate::try_new(2023, 0, 1).is_err());
        assert!(IsoDate::try_new(2023, 13, 1).is_err());
        assert!(IsoDate::try_new(2023, 4, 31).is_err());
    }

    #[test]
    fn epoch_day_round_trip() {
        let date = IsoDate::from_epoch_day(0).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (1970, 1, 1));
        assert_eq!(date.to_epoch_day(), 0);

        let date = IsoDate::try_new(1752, 9, 14).unwrap();
        assert_eq!(date.to_epoch_day(), -79_366);
        assert_eq!(IsoDate::from_epoch_day(-79_366).unwrap(), date);
    }

    #[test]
    fn ordering() {
        let a = IsoDate::try_new(2000, 1, 1).unwrap();
        let b = IsoDate::try_new(2000, 1, 2).unwrap();
        let c = IsoDate::try_new(1999, 12, 31).unwrap();
        assert!(a < b);
        assert!(c < a);
    }

    #[test]
    fn display() {
        assert_eq!(IsoDate::try_new(2000, 1, 1).unwrap().to_string(), "2000-01-01");
        assert_eq!(IsoDate::try_new(0, 12, 30).unwrap().to_string(), "0000-12-30");
        assert_eq!(IsoDate::try_new(-1, 3, 7).unwrap().to_string(), "-0001-03-07");
        assert_eq!(
            IsoDate::try_new(123_456, 1, 1).unwrap().to_string(),
            "123456-01-01"
        );
    }
}
