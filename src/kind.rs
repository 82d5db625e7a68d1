//! The closed set of supported calendar systems.

use core::fmt;
use core::ops::RangeInclusive;
use core::str::FromStr;

use tinystr::{tinystr, TinyAsciiStr};

use crate::era::Era;
use crate::error::ErrorMessage;
use crate::fields::{FieldRange, TemporalField};
use crate::rules::{
    cutover, international_fixed, julian,
    symmetry::{self, MonthPattern},
};
use crate::{ChronologyError, ChronologyResult};

/// A calendar system supported by [`CalendarDate`](crate::CalendarDate).
///
/// The set is closed: each kind carries its own year-month-day
/// equations and the dispatch happens by matching on the kind, so no
/// registry or runtime lookup is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarKind {
    /// The proleptic Julian calendar.
    Julian,
    /// Julian reckoning through 1752-09-02, Gregorian from 1752-09-14.
    BritishCutover,
    /// The Symmetry454 leap-week calendar (4-5-4 weeks per quarter).
    Symmetry454,
    /// The Symmetry010 leap-week calendar (30-31-30 days per quarter).
    Symmetry010,
    /// The International Fixed calendar (thirteen 28-day months).
    InternationalFixed,
}

impl CalendarKind {
    /// The calendar's identifier.
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Julian => "Julian",
            Self::BritishCutover => "BritishCutover",
            Self::Symmetry454 => "Sym454",
            Self::Symmetry010 => "Sym010",
            Self::InternationalFixed => "Ifc",
        }
    }

    /// The number of months in every year of the calendar.
    #[must_use]
    pub const fn months_in_year(self) -> u8 {
        match self {
            Self::InternationalFixed => 13,
            _ => 12,
        }
    }

    /// The supported proleptic year range.
    #[must_use]
    pub const fn year_range(self) -> RangeInclusive<i32> {
        match self {
            Self::Julian | Self::BritishCutover => -999_998..=999_999,
            Self::Symmetry454 | Self::Symmetry010 => -1_000_000..=1_000_000,
            Self::InternationalFixed => 1..=1_000_000,
        }
    }

    /// The largest year-of-era value in either era.
    pub(crate) const fn year_of_era_max(self) -> i32 {
        match self {
            Self::Julian | Self::BritishCutover => 999_999,
            Self::Symmetry454 | Self::Symmetry010 | Self::InternationalFixed => 1_000_000,
        }
    }

    /// Whether the era belongs to this calendar.
    #[must_use]
    pub const fn has_era(self, era: Era) -> bool {
        match self {
            Self::InternationalFixed => matches!(era, Era::Current),
            _ => true,
        }
    }

    /// The display name of an era in this calendar.
    #[must_use]
    pub const fn era_name(self, era: Era) -> &'static str {
        match (self, era) {
            (Self::Julian | Self::BritishCutover, Era::BeforeCurrent) => "BC",
            (Self::Julian | Self::BritishCutover, Era::Current) => "AD",
            (_, Era::BeforeCurrent) => "BCE",
            (_, Era::Current) => "CE",
        }
    }

    /// The era code of an era in this calendar.
    #[must_use]
    pub const fn era_code(self, era: Era) -> TinyAsciiStr<16> {
        match (self, era) {
            (Self::Julian | Self::BritishCutover, Era::BeforeCurrent) => tinystr!(16, "bc"),
            (Self::Julian | Self::BritishCutover, Era::Current) => tinystr!(16, "ad"),
            (_, Era::BeforeCurrent) => tinystr!(16, "bce"),
            (_, Era::Current) => tinystr!(16, "ce"),
        }
    }

    /// Whether the provided proleptic year is a leap year.
    #[must_use]
    pub fn is_leap_year(self, year: i32) -> bool {
        let year = i64::from(year);
        match self {
            Self::Julian => julian::is_leap_year(year),
            Self::BritishCutover => cutover::is_leap_year(year),
            Self::Symmetry454 | Self::Symmetry010 => symmetry::is_leap_year(year),
            Self::InternationalFixed => international_fixed::is_leap_year(year),
        }
    }

    /// The number of days present in the month. The month must be valid.
    pub(crate) fn length_of_month(self, year: i32, month: u8) -> u8 {
        let year = i64::from(year);
        match self {
            Self::Julian => julian::length_of_month(year, month),
            Self::BritishCutover => cutover::length_of_month(year, month),
            Self::Symmetry454 => MonthPattern::FourFiveFour.length_of_month(year, month),
            Self::Symmetry010 => MonthPattern::ThirtyOneThirty.length_of_month(year, month),
            Self::InternationalFixed => international_fixed::length_of_month(year, month),
        }
    }

    /// The largest day label accepted in the month. Differs from
    /// [`Self::length_of_month`] only for September 1752 in the British
    /// cutover calendar.
    pub(crate) fn month_day_max(self, year: i32, month: u8) -> u8 {
        match self {
            Self::BritishCutover => cutover::month_day_max(i64::from(year), month),
            _ => self.length_of_month(year, month),
        }
    }

    /// The number of days in the year.
    pub(crate) fn length_of_year(self, year: i32) -> u16 {
        let year = i64::from(year);
        match self {
            Self::Julian => julian::length_of_year(year),
            Self::BritishCutover => cutover::length_of_year(year),
            Self::Symmetry454 | Self::Symmetry010 => symmetry::length_of_year(year),
            Self::InternationalFixed => international_fixed::length_of_year(year),
        }
    }

    /// Epoch day for a year-month-day under this calendar. The fields
    /// must already be validated against [`Self::month_day_max`].
    pub(crate) fn epoch_day_for(self, year: i32, month: u8, day: u8) -> i64 {
        let year = i64::from(year);
        match self {
            Self::Julian => julian::epoch_day_from_ymd(year, month, day),
            Self::BritishCutover => cutover::epoch_day_from_ymd(year, month, day),
            Self::Symmetry454 => {
                symmetry::epoch_day_from_ymd(MonthPattern::FourFiveFour, year, month, day)
            }
            Self::Symmetry010 => {
                symmetry::epoch_day_from_ymd(MonthPattern::ThirtyOneThirty, year, month, day)
            }
            Self::InternationalFixed => international_fixed::epoch_day_from_ymd(year, month, day),
        }
    }

    /// Year-month-day under this calendar for an epoch day inside
    /// [`Self::epoch_day_range`].
    pub(crate) fn ymd_from_epoch_day(self, epoch_day: i64) -> (i32, u8, u8) {
        let (year, month, day) = match self {
            Self::Julian => julian::ymd_from_epoch_day(epoch_day),
            Self::BritishCutover => cutover::ymd_from_epoch_day(epoch_day),
            Self::Symmetry454 => {
                symmetry::ymd_from_epoch_day(MonthPattern::FourFiveFour, epoch_day)
            }
            Self::Symmetry010 => {
                symmetry::ymd_from_epoch_day(MonthPattern::ThirtyOneThirty, epoch_day)
            }
            Self::InternationalFixed => international_fixed::ymd_from_epoch_day(epoch_day),
        };
        (year as i32, month, day)
    }

    /// The epoch days reachable within [`Self::year_range`].
    pub(crate) fn epoch_day_range(self) -> RangeInclusive<i64> {
        let min_year = *self.year_range().start();
        let max_year = *self.year_range().end();
        let last_month = self.months_in_year();
        let min = self.epoch_day_for(min_year, 1, 1);
        let max = self.epoch_day_for(max_year, last_month, self.month_day_max(max_year, last_month));
        min..=max
    }

    /// Day of month with the British cutover gap removed; the identity
    /// for every other calendar.
    pub(crate) fn effective_day_of_month(self, year: i32, month: u8, day: u8) -> u8 {
        match self {
            Self::BritishCutover => cutover::effective_day_of_month(i64::from(year), month, day),
            _ => day,
        }
    }

    /// The calendar-wide range of a date field, covering every date of
    /// the calendar. Fields whose maximum depends on the surrounding
    /// date report both the smallest and the largest maximum;
    /// [`CalendarDate::range`](crate::CalendarDate::range) narrows them
    /// to a concrete date.
    pub fn field_range(self, field: TemporalField) -> ChronologyResult<FieldRange> {
        let range = match field {
            TemporalField::DayOfWeek
            | TemporalField::AlignedDayOfWeekInMonth
            | TemporalField::AlignedDayOfWeekInYear => match self {
                // The intercalary days report the degenerate weekday 0.
                Self::InternationalFixed => FieldRange::of(0, 7),
                _ => FieldRange::of(1, 7),
            },
            TemporalField::DayOfMonth => match self {
                Self::Julian | Self::BritishCutover => FieldRange::of_variable(1, 28, 31),
                Self::Symmetry454 => FieldRange::of_variable(1, 28, 35),
                Self::Symmetry010 => FieldRange::of_variable(1, 30, 37),
                Self::InternationalFixed => FieldRange::of_variable(1, 28, 29),
            },
            TemporalField::DayOfYear => match self {
                Self::Julian | Self::InternationalFixed => FieldRange::of_variable(1, 365, 366),
                Self::BritishCutover => FieldRange::of_variable(1, 355, 366),
                Self::Symmetry454 | Self::Symmetry010 => FieldRange::of_variable(1, 364, 371),
            },
            TemporalField::EpochDay => {
                let bounds = self.epoch_day_range();
                FieldRange::of(*bounds.start(), *bounds.end())
            }
            TemporalField::AlignedWeekOfMonth => match self {
                Self::Symmetry010 => FieldRange::of_variable(1, 5, 6),
                Self::InternationalFixed => FieldRange::of(0, 4),
                _ => FieldRange::of_variable(1, 4, 5),
            },
            TemporalField::AlignedWeekOfYear => match self {
                Self::Julian => FieldRange::of(1, 53),
                Self::BritishCutover => FieldRange::of_variable(1, 51, 53),
                Self::Symmetry454 | Self::Symmetry010 => FieldRange::of_variable(1, 52, 53),
                Self::InternationalFixed => FieldRange::of(0, 52),
            },
            TemporalField::MonthOfYear => FieldRange::of(1, i64::from(self.months_in_year())),
            TemporalField::ProlepticMonth => {
                let months = i64::from(self.months_in_year());
                let min = i64::from(*self.year_range().start()) * months;
                let max = i64::from(*self.year_range().end()) * months + months - 1;
                FieldRange::of(min, max)
            }
            TemporalField::YearOfEra => FieldRange::of(1, i64::from(self.year_of_era_max())),
            TemporalField::Year => FieldRange::of(
                i64::from(*self.year_range().start()),
                i64::from(*self.year_range().end()),
            ),
            TemporalField::Era => match self {
                Self::InternationalFixed => FieldRange::of(1, 1),
                _ => FieldRange::of(0, 1),
            },
            _ => {
                return Err(
                    ChronologyError::unsupported_field().with_enum(ErrorMessage::FieldNotDateBased)
                )
            }
        };
        Ok(range)
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.identifier().fmt(f)
    }
}

impl FromStr for CalendarKind {
    type Err = ChronologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Julian" | "julian" => Ok(Self::Julian),
            "BritishCutover" | "british-cutover" => Ok(Self::BritishCutover),
            "Sym454" | "sym454" => Ok(Self::Symmetry454),
            "Sym010" | "sym010" => Ok(Self::Symmetry010),
            "Ifc" | "ifc" => Ok(Self::InternationalFixed),
            _ => Err(ChronologyError::field_out_of_range()
                .with_message("not a known calendar identifier")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    const ALL: [CalendarKind; 5] = [
        CalendarKind::Julian,
        CalendarKind::BritishCutover,
        CalendarKind::Symmetry454,
        CalendarKind::Symmetry010,
        CalendarKind::InternationalFixed,
    ];

    #[test]
    fn identifier_round_trip() {
        for kind in ALL {
            assert_eq!(CalendarKind::from_str(kind.identifier()), Ok(kind));
            assert_eq!(kind.to_string(), kind.identifier());
        }
        assert!(CalendarKind::from_str("Gregorian").is_err());
        assert!(CalendarKind::from_str("").is_err());
    }

    #[test]
    fn months_and_eras() {
        assert_eq!(CalendarKind::Julian.months_in_year(), 12);
        assert_eq!(CalendarKind::InternationalFixed.months_in_year(), 13);
        assert!(CalendarKind::Julian.has_era(Era::BeforeCurrent));
        assert!(!CalendarKind::InternationalFixed.has_era(Era::BeforeCurrent));
        assert_eq!(CalendarKind::Julian.era_name(Era::Current), "AD");
        assert_eq!(CalendarKind::BritishCutover.era_name(Era::BeforeCurrent), "BC");
        assert_eq!(CalendarKind::Symmetry454.era_name(Era::Current), "CE");
        assert_eq!(CalendarKind::InternationalFixed.era_code(Era::Current), tinystr!(16, "ce"));
        assert_eq!(CalendarKind::Julian.era_code(Era::BeforeCurrent), tinystr!(16, "bc"));
    }

    #[test]
    fn epoch_ranges_are_ordered() {
        for kind in ALL {
            let range = kind.epoch_day_range();
            assert!(range.start() < range.end(), "kind {kind}");
            assert!(range.contains(&0), "kind {kind}");
        }
    }

    #[test]
    fn field_range_tables() {
        let dom = CalendarKind::Symmetry454
            .field_range(TemporalField::DayOfMonth)
            .unwrap();
        assert_eq!(dom, FieldRange::of_variable(1, 28, 35));
        assert!(!dom.is_fixed());
        assert_eq!(dom.smallest_max(), 28);
        assert_eq!(dom.max(), 35);

        assert_eq!(
            CalendarKind::BritishCutover.field_range(TemporalField::DayOfYear),
            Ok(FieldRange::of_variable(1, 355, 366))
        );
        assert_eq!(
            CalendarKind::Symmetry010.field_range(TemporalField::DayOfMonth),
            Ok(FieldRange::of_variable(1, 30, 37))
        );
        assert_eq!(
            CalendarKind::BritishCutover.field_range(TemporalField::AlignedWeekOfYear),
            Ok(FieldRange::of_variable(1, 51, 53))
        );
        // The intercalary days widen the week-relative minima to 0.
        assert_eq!(
            CalendarKind::InternationalFixed.field_range(TemporalField::DayOfWeek),
            Ok(FieldRange::of(0, 7))
        );
        assert!(CalendarKind::Julian
            .field_range(TemporalField::DayOfWeek)
            .unwrap()
            .is_fixed());
        assert_eq!(
            CalendarKind::InternationalFixed.field_range(TemporalField::MonthOfYear),
            Ok(FieldRange::of(1, 13))
        );
        assert!(CalendarKind::Julian
            .field_range(TemporalField::HourOfDay)
            .is_err());
    }

    #[test]
    fn year_ranges() {
        assert!(CalendarKind::InternationalFixed.year_range().contains(&1));
        assert!(!CalendarKind::InternationalFixed.year_range().contains(&0));
        assert!(CalendarKind::Julian.year_range().contains(&-999_998));
        assert!(!CalendarKind::Julian.year_range().contains(&1_000_000));
        assert!(CalendarKind::Symmetry010.year_range().contains(&-1_000_000));
    }
}
