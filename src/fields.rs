//! Date fields and their value ranges.

use core::fmt;

use crate::error::{ChronologyError, ErrorMessage};
use crate::ChronologyResult;

/// A field of a date, addressable through `get`, `range`, and `with` on
/// [`CalendarDate`](crate::CalendarDate).
///
/// The time-of-day fields are part of the closed set so that callers can
/// observe them being rejected; the date types in this crate never
/// support them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemporalField {
    DayOfWeek,
    AlignedDayOfWeekInMonth,
    AlignedDayOfWeekInYear,
    DayOfMonth,
    DayOfYear,
    EpochDay,
    AlignedWeekOfMonth,
    AlignedWeekOfYear,
    MonthOfYear,
    ProlepticMonth,
    YearOfEra,
    Year,
    Era,
    HourOfDay,
    MinuteOfHour,
    SecondOfMinute,
    NanoOfSecond,
}

impl TemporalField {
    /// Returns whether the field is a date field supported by
    /// [`CalendarDate`](crate::CalendarDate).
    #[inline]
    #[must_use]
    pub fn is_date_field(&self) -> bool {
        *self <= Self::Era
    }
}

impl fmt::Display for TemporalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DayOfWeek => "dayOfWeek",
            Self::AlignedDayOfWeekInMonth => "alignedDayOfWeekInMonth",
            Self::AlignedDayOfWeekInYear => "alignedDayOfWeekInYear",
            Self::DayOfMonth => "dayOfMonth",
            Self::DayOfYear => "dayOfYear",
            Self::EpochDay => "epochDay",
            Self::AlignedWeekOfMonth => "alignedWeekOfMonth",
            Self::AlignedWeekOfYear => "alignedWeekOfYear",
            Self::MonthOfYear => "monthOfYear",
            Self::ProlepticMonth => "prolepticMonth",
            Self::YearOfEra => "yearOfEra",
            Self::Year => "year",
            Self::Era => "era",
            Self::HourOfDay => "hourOfDay",
            Self::MinuteOfHour => "minuteOfHour",
            Self::SecondOfMinute => "secondOfMinute",
            Self::NanoOfSecond => "nanoOfSecond",
        }
        .fmt(f)
    }
}

/// The valid range of a field's values.
///
/// Variable-length fields carry both the smallest and the largest
/// maximum, e.g. day-of-month in a Symmetry454 year ranges over
/// `1..=28` in short months and `1..=35` in long ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    min: i64,
    smallest_max: i64,
    largest_max: i64,
}

impl FieldRange {
    /// A fixed range with a single maximum.
    #[must_use]
    pub const fn of(min: i64, max: i64) -> Self {
        Self {
            min,
            smallest_max: max,
            largest_max: max,
        }
    }

    /// A variable range whose maximum depends on the surrounding date.
    #[must_use]
    pub const fn of_variable(min: i64, smallest_max: i64, largest_max: i64) -> Self {
        Self {
            min,
            smallest_max,
            largest_max,
        }
    }

    /// The minimum valid value.
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// The largest maximum valid value.
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.largest_max
    }

    /// The smallest maximum valid value.
    #[must_use]
    pub const fn smallest_max(&self) -> i64 {
        self.smallest_max
    }

    /// Returns whether the range has a single fixed maximum.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.smallest_max == self.largest_max
    }

    /// Returns whether `value` lies within the range.
    #[must_use]
    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.largest_max
    }

    /// Validates `value` against the range.
    pub fn check(&self, value: i64) -> ChronologyResult<i64> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(ChronologyError::field_out_of_range()
                .with_enum(ErrorMessage::FieldValueOutOfRange))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_field_partition() {
        assert!(TemporalField::DayOfWeek.is_date_field());
        assert!(TemporalField::Era.is_date_field());
        assert!(!TemporalField::HourOfDay.is_date_field());
        assert!(!TemporalField::NanoOfSecond.is_date_field());
    }

    #[test]
    fn range_bounds() {
        let dom = FieldRange::of_variable(1, 28, 35);
        assert_eq!(dom.min(), 1);
        assert_eq!(dom.smallest_max(), 28);
        assert_eq!(dom.max(), 35);
        assert!(!dom.is_fixed());
        assert!(dom.contains(35));
        assert!(!dom.contains(36));
        assert!(dom.check(0).is_err());
        assert_eq!(dom.check(29), Ok(29));
    }

    #[test]
    fn degenerate_range() {
        let dow = FieldRange::of(0, 0);
        assert!(dow.is_fixed());
        assert_eq!(dow.check(0), Ok(0));
        assert!(dow.check(1).is_err());
    }
}
