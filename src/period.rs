//! Calendar-scoped date periods.

use core::fmt;

use crate::error::{ChronologyError, ErrorMessage};
use crate::kind::CalendarKind;
use crate::ChronologyResult;

/// An amount of time in years, months, and days, scoped to a calendar.
///
/// The year and month components are only meaningful relative to the
/// calendar they were measured in, so applying a period to a date of a
/// different [`CalendarKind`] is an error rather than a silent
/// reinterpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DatePeriod {
    kind: CalendarKind,
    years: i64,
    months: i64,
    days: i64,
}

impl DatePeriod {
    /// Creates a period of the provided components.
    #[must_use]
    pub const fn new(kind: CalendarKind, years: i64, months: i64, days: i64) -> Self {
        Self {
            kind,
            years,
            months,
            days,
        }
    }

    /// The zero period of a calendar.
    #[must_use]
    pub const fn zero(kind: CalendarKind) -> Self {
        Self::new(kind, 0, 0, 0)
    }

    /// The calendar this period is scoped to.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// The years component.
    #[inline]
    #[must_use]
    pub const fn years(&self) -> i64 {
        self.years
    }

    /// The months component.
    #[inline]
    #[must_use]
    pub const fn months(&self) -> i64 {
        self.months
    }

    /// The days component.
    #[inline]
    #[must_use]
    pub const fn days(&self) -> i64 {
        self.days
    }

    /// Whether all components are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// The component-wise negation of this period.
    pub fn negated(&self) -> ChronologyResult<Self> {
        let negate = |value: i64| {
            value.checked_neg().ok_or(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::ArithmeticOverflow),
            )
        };
        Ok(Self::new(
            self.kind,
            negate(self.years)?,
            negate(self.months)?,
            negate(self.days)?,
        ))
    }
}

impl fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.kind)?;
        if self.is_zero() {
            return f.write_str("P0D");
        }
        f.write_str("P")?;
        if self.years != 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months != 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.days != 0 {
            write!(f, "{}D", self.days)?;
        }
        Ok(())
    }
}
