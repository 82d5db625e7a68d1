//! Shared option types used across the calendar API.

use core::{fmt, str::FromStr};

/// The unit of a date-time amount, ordered from smallest to largest.
///
/// The date types in this crate only operate on the units at or above
/// [`TemporalUnit::Day`]; passing a time unit to a date operation fails
/// with an `UnsupportedUnit` error rather than being silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemporalUnit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
    Century,
    Millennium,
    Era,
}

impl TemporalUnit {
    /// Returns whether the unit is usable with the date types.
    #[inline]
    #[must_use]
    pub fn is_date_unit(&self) -> bool {
        *self >= Self::Day
    }

    /// Returns whether the unit measures a sub-day amount of time.
    #[inline]
    #[must_use]
    pub fn is_time_unit(&self) -> bool {
        *self < Self::Day
    }

    /// The number of years spanned by one of this unit, when the unit is
    /// year-based.
    pub(crate) fn years_factor(&self) -> Option<i64> {
        match self {
            Self::Year => Some(1),
            Self::Decade => Some(10),
            Self::Century => Some(100),
            Self::Millennium => Some(1_000),
            _ => None,
        }
    }
}

/// A parsing error for [`TemporalUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTemporalUnitError;

impl fmt::Display for ParseTemporalUnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid TemporalUnit")
    }
}

impl FromStr for TemporalUnit {
    type Err = ParseTemporalUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nanosecond" | "nanoseconds" => Ok(Self::Nanosecond),
            "microsecond" | "microseconds" => Ok(Self::Microsecond),
            "millisecond" | "milliseconds" => Ok(Self::Millisecond),
            "second" | "seconds" => Ok(Self::Second),
            "minute" | "minutes" => Ok(Self::Minute),
            "hour" | "hours" => Ok(Self::Hour),
            "day" | "days" => Ok(Self::Day),
            "week" | "weeks" => Ok(Self::Week),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            "decade" | "decades" => Ok(Self::Decade),
            "century" | "centuries" => Ok(Self::Century),
            "millennium" | "millennia" => Ok(Self::Millennium),
            "era" | "eras" => Ok(Self::Era),
            _ => Err(ParseTemporalUnitError),
        }
    }
}

impl fmt::Display for TemporalUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nanosecond => "nanosecond",
            Self::Microsecond => "microsecond",
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Decade => "decade",
            Self::Century => "century",
            Self::Millennium => "millennium",
            Self::Era => "era",
        }
        .fmt(f)
    }
}
