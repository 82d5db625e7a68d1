//! The calendar-aware date type.

use core::cmp::Ordering;
use core::fmt;

use tinystr::TinyAsciiStr;
use writeable::{LengthHint, Writeable};

use crate::chronology_assert;
use crate::era::Era;
use crate::error::{ChronologyError, ErrorMessage};
use crate::fields::{FieldRange, TemporalField};
use crate::iso::{decimal_digits, write_padded_u8, IsoDate};
use crate::kind::CalendarKind;
use crate::options::TemporalUnit;
use crate::period::DatePeriod;
use crate::rules::{self, international_fixed};
use crate::{ChronologyResult, ChronologyUnwrap};

/// A date in one of the supported calendar systems.
///
/// A `CalendarDate` pairs a year-month-day labeling with the calendar
/// it belongs to and caches the equivalent epoch day (days since ISO
/// 1970-01-01). Dates of different calendars that fall on the same
/// epoch day compare equal in time but not in value; use
/// [`CalendarDate::to_iso`] and [`CalendarDate::from_iso`] to move a
/// date between calendars.
///
/// ```rust
/// use chronology_rs::{CalendarDate, CalendarKind};
///
/// // Labels inside the 1752 cutover gap resolve to the Gregorian side.
/// let date = CalendarDate::new(CalendarKind::BritishCutover, 1752, 9, 3).unwrap();
/// assert_eq!(date.day(), 14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    kind: CalendarKind,
    year: i32,
    month: u8,
    day: u8,
    epoch_day: i64,
}

impl CalendarDate {
    /// Creates a date from a year, month, and day.
    ///
    /// Month and day labels are validated strictly, with one lenience:
    /// British cutover labels inside the elided 1752-09-03..13 gap are
    /// accepted and resolve to the Gregorian side, eleven days later.
    pub fn new(kind: CalendarKind, year: i32, month: u8, day: u8) -> ChronologyResult<Self> {
        if !kind.year_range().contains(&year) {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
            );
        }
        if month < 1 || month > kind.months_in_year() {
            return Err(ChronologyError::invalid_date().with_enum(ErrorMessage::MonthOutOfRange));
        }
        if day < 1 || day > kind.month_day_max(year, month) {
            return Err(ChronologyError::invalid_date().with_enum(ErrorMessage::DayOutOfRange));
        }
        let epoch_day = kind.epoch_day_for(year, month, day);
        let (year, month, day) = if kind == CalendarKind::BritishCutover {
            kind.ymd_from_epoch_day(epoch_day)
        } else {
            (year, month, day)
        };
        Ok(Self {
            kind,
            year,
            month,
            day,
            epoch_day,
        })
    }

    /// Creates a date from an era, year-of-era, month, and day.
    pub fn of_era(
        kind: CalendarKind,
        era: Era,
        year_of_era: i32,
        month: u8,
        day: u8,
    ) -> ChronologyResult<Self> {
        if !kind.has_era(era) {
            return Err(
                ChronologyError::incompatible_era().with_enum(ErrorMessage::EraNotInCalendar)
            );
        }
        if year_of_era < 1 || year_of_era > kind.year_of_era_max() {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
            );
        }
        let year = match era {
            Era::Current => year_of_era,
            Era::BeforeCurrent => 1 - year_of_era,
        };
        Self::new(kind, year, month, day)
    }

    /// Creates a date from a year and a one-based ordinal day of year.
    pub fn of_year_day(kind: CalendarKind, year: i32, day_of_year: u16) -> ChronologyResult<Self> {
        if !kind.year_range().contains(&year) {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
            );
        }
        if day_of_year < 1 || day_of_year > kind.length_of_year(year) {
            return Err(
                ChronologyError::invalid_date().with_enum(ErrorMessage::DayOfYearOutOfRange)
            );
        }
        let epoch_day = kind.epoch_day_for(year, 1, 1) + i64::from(day_of_year) - 1;
        Ok(Self::from_epoch_day_unchecked(kind, epoch_day))
    }

    /// Creates a date from a count of days since ISO 1970-01-01.
    pub fn of_epoch_day(kind: CalendarKind, epoch_day: i64) -> ChronologyResult<Self> {
        if !kind.epoch_day_range().contains(&epoch_day) {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::EpochDayOutOfRange)
            );
        }
        Ok(Self::from_epoch_day_unchecked(kind, epoch_day))
    }

    fn from_epoch_day_unchecked(kind: CalendarKind, epoch_day: i64) -> Self {
        let (year, month, day) = kind.ymd_from_epoch_day(epoch_day);
        Self {
            kind,
            year,
            month,
            day,
            epoch_day,
        }
    }

    /// Converts an ISO date into this calendar, preserving the epoch day.
    pub fn from_iso(kind: CalendarKind, iso: IsoDate) -> ChronologyResult<Self> {
        Self::of_epoch_day(kind, iso.to_epoch_day())
    }

    /// Converts this date to its ISO equivalent, preserving the epoch day.
    pub fn to_iso(&self) -> ChronologyResult<IsoDate> {
        IsoDate::from_epoch_day(self.epoch_day)
    }

    /// Returns a copy of this date adjusted to the provided ISO date,
    /// staying in this date's calendar.
    pub fn with_iso(&self, iso: IsoDate) -> ChronologyResult<Self> {
        Self::of_epoch_day(self.kind, iso.to_epoch_day())
    }

    /// The calendar this date belongs to.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> CalendarKind {
        self.kind
    }

    /// The proleptic year.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month of the year.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// The day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// The count of days since ISO 1970-01-01.
    #[inline]
    #[must_use]
    pub const fn to_epoch_day(&self) -> i64 {
        self.epoch_day
    }

    /// The era of this date.
    #[must_use]
    pub const fn era(&self) -> Era {
        Era::of_year(self.year)
    }

    /// The era code of this date, e.g. `"ad"` or `"ce"`.
    #[must_use]
    pub const fn era_code(&self) -> TinyAsciiStr<16> {
        self.kind.era_code(self.era())
    }

    /// The year within the era, always positive.
    #[must_use]
    pub const fn year_of_era(&self) -> i32 {
        if self.year >= 1 {
            self.year
        } else {
            1 - self.year
        }
    }

    /// The day of the week, `1` (Monday) through `7` (Sunday). The
    /// intercalary days of the International Fixed calendar sit outside
    /// the week cycle and report `0`.
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        match self.kind {
            CalendarKind::InternationalFixed => international_fixed::day_of_week(self.day),
            _ => rules::iso_day_of_week(self.epoch_day),
        }
    }

    /// The one-based ordinal day of the year.
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        (self.epoch_day - self.kind.epoch_day_for(self.year, 1, 1) + 1) as u16
    }

    /// Whether this date's year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.kind.is_leap_year(self.year)
    }

    /// The number of days present in this date's month.
    #[must_use]
    pub fn length_of_month(&self) -> u8 {
        self.kind.length_of_month(self.year, self.month)
    }

    /// The number of days in this date's year.
    #[must_use]
    pub fn length_of_year(&self) -> u16 {
        self.kind.length_of_year(self.year)
    }

    /// The months elapsed since month 1 of year 0 in this calendar.
    #[must_use]
    pub fn proleptic_month(&self) -> i64 {
        i64::from(self.year) * i64::from(self.kind.months_in_year()) + i64::from(self.month) - 1
    }

    fn is_intercalary(&self) -> bool {
        self.kind == CalendarKind::InternationalFixed && international_fixed::is_intercalary(self.day)
    }

    /// Day of month with the British cutover gap removed.
    fn effective_day(&self) -> u8 {
        self.kind
            .effective_day_of_month(self.year, self.month, self.day)
    }

    /// Ordinal day of year counting only week-cycle days, used by the
    /// aligned fields. Differs from [`Self::day_of_year`] only after
    /// Leap Day in an International Fixed leap year.
    fn aligned_day_of_year(&self) -> i64 {
        let day_of_year = i64::from(self.day_of_year());
        if self.kind == CalendarKind::InternationalFixed
            && self.is_leap_year()
            && day_of_year > 169
        {
            day_of_year - 1
        } else {
            day_of_year
        }
    }

    /// Returns the value of a date field.
    pub fn get(&self, field: TemporalField) -> ChronologyResult<i64> {
        use TemporalField::*;
        let value = match field {
            DayOfWeek => i64::from(self.day_of_week()),
            AlignedDayOfWeekInMonth if self.is_intercalary() => 0,
            AlignedDayOfWeekInMonth => (i64::from(self.effective_day()) - 1) % 7 + 1,
            AlignedDayOfWeekInYear if self.is_intercalary() => 0,
            AlignedDayOfWeekInYear => (self.aligned_day_of_year() - 1) % 7 + 1,
            DayOfMonth => i64::from(self.day),
            DayOfYear => i64::from(self.day_of_year()),
            EpochDay => self.epoch_day,
            AlignedWeekOfMonth if self.is_intercalary() => 0,
            AlignedWeekOfMonth => (i64::from(self.effective_day()) - 1) / 7 + 1,
            AlignedWeekOfYear if self.is_intercalary() => 0,
            AlignedWeekOfYear => (self.aligned_day_of_year() - 1) / 7 + 1,
            MonthOfYear => i64::from(self.month),
            ProlepticMonth => self.proleptic_month(),
            YearOfEra => i64::from(self.year_of_era()),
            Year => i64::from(self.year),
            Era => self.era().value(),
            _ => {
                return Err(
                    ChronologyError::unsupported_field().with_enum(ErrorMessage::FieldNotDateBased)
                )
            }
        };
        Ok(value)
    }

    /// Returns the valid range of a field in the context of this date.
    pub fn range(&self, field: TemporalField) -> ChronologyResult<FieldRange> {
        use TemporalField::*;
        let kind = self.kind;
        let range = match field {
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear => {
                if self.is_intercalary() {
                    FieldRange::of(0, 0)
                } else {
                    FieldRange::of(1, 7)
                }
            }
            DayOfMonth => FieldRange::of(1, i64::from(kind.month_day_max(self.year, self.month))),
            DayOfYear => FieldRange::of(1, i64::from(kind.length_of_year(self.year))),
            EpochDay => return kind.field_range(field),
            AlignedWeekOfMonth if self.is_intercalary() => FieldRange::of(0, 0),
            AlignedWeekOfMonth if kind == CalendarKind::InternationalFixed => FieldRange::of(1, 4),
            AlignedWeekOfMonth => {
                let len = i64::from(kind.length_of_month(self.year, self.month));
                FieldRange::of(1, (len - 1) / 7 + 1)
            }
            AlignedWeekOfYear if self.is_intercalary() => FieldRange::of(0, 0),
            AlignedWeekOfYear if kind == CalendarKind::InternationalFixed => FieldRange::of(1, 52),
            AlignedWeekOfYear => {
                let len = i64::from(kind.length_of_year(self.year));
                FieldRange::of(1, (len - 1) / 7 + 1)
            }
            MonthOfYear | ProlepticMonth | YearOfEra | Year | Era => {
                return kind.field_range(field)
            }
            _ => {
                return Err(
                    ChronologyError::unsupported_field().with_enum(ErrorMessage::FieldNotDateBased)
                )
            }
        };
        Ok(range)
    }

    /// Returns a copy of this date with the field set to `value`.
    ///
    /// Week and weekday fields shift the date by whole days and may
    /// cross month, year, and cutover boundaries. Setting the month or
    /// year clamps the day-of-month to the target month where needed.
    pub fn with(&self, field: TemporalField, value: i64) -> ChronologyResult<Self> {
        use TemporalField::*;
        match field {
            DayOfWeek | AlignedDayOfWeekInMonth | AlignedDayOfWeekInYear => {
                let value = self.range(field)?.check(value)?;
                let current = self.get(field)?;
                self.plus(value - current, TemporalUnit::Day)
            }
            AlignedWeekOfMonth | AlignedWeekOfYear => {
                let value = self.range(field)?.check(value)?;
                let current = self.get(field)?;
                self.plus((value - current) * 7, TemporalUnit::Day)
            }
            DayOfMonth => {
                let day = u8::try_from(value).map_err(|_| {
                    ChronologyError::invalid_date().with_enum(ErrorMessage::DayOutOfRange)
                })?;
                Self::new(self.kind, self.year, self.month, day)
            }
            DayOfYear => {
                let day_of_year = u16::try_from(value).map_err(|_| {
                    ChronologyError::invalid_date().with_enum(ErrorMessage::DayOfYearOutOfRange)
                })?;
                Self::of_year_day(self.kind, self.year, day_of_year)
            }
            EpochDay => Self::of_epoch_day(self.kind, value),
            MonthOfYear => {
                let value = self.range(field)?.check(value)?;
                self.resolve_year_month(self.year, value as u8)
            }
            ProlepticMonth => {
                let value = self.range(field)?.check(value)?;
                self.plus_months(value - self.proleptic_month())
            }
            YearOfEra => {
                let value = self.range(field)?.check(value)? as i32;
                let year = if self.year >= 1 { value } else { 1 - value };
                self.resolve_year_month(year, self.month)
            }
            Year => {
                let value = self.range(field)?.check(value)? as i32;
                self.resolve_year_month(value, self.month)
            }
            Era => {
                let era = crate::era::Era::from_value(value).ok_or_else(|| {
                    ChronologyError::field_out_of_range()
                        .with_enum(ErrorMessage::FieldValueOutOfRange)
                })?;
                if !self.kind.has_era(era) {
                    return Err(ChronologyError::incompatible_era()
                        .with_enum(ErrorMessage::EraNotInCalendar));
                }
                if era == self.era() {
                    Ok(*self)
                } else {
                    self.resolve_year_month(1 - self.year, self.month)
                }
            }
            _ => Err(
                ChronologyError::unsupported_field().with_enum(ErrorMessage::FieldNotDateBased)
            ),
        }
    }

    /// Moves to `(year, month)`, clamping the day-of-month to the
    /// largest label of the target month.
    fn resolve_year_month(&self, year: i32, month: u8) -> ChronologyResult<Self> {
        if !self.kind.year_range().contains(&year) {
            return Err(
                ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
            );
        }
        let day = self.day.min(self.kind.month_day_max(year, month));
        Self::new(self.kind, year, month, day)
    }

    /// Returns a copy of this date with `amount` of `unit` added.
    pub fn plus(&self, amount: i64, unit: TemporalUnit) -> ChronologyResult<Self> {
        let overflow = || {
            ChronologyError::field_out_of_range().with_enum(ErrorMessage::ArithmeticOverflow)
        };
        match unit {
            TemporalUnit::Day => {
                let epoch_day = self.epoch_day.checked_add(amount).ok_or_else(overflow)?;
                Self::of_epoch_day(self.kind, epoch_day)
            }
            TemporalUnit::Week => {
                let days = amount.checked_mul(7).ok_or_else(overflow)?;
                self.plus(days, TemporalUnit::Day)
            }
            TemporalUnit::Month => self.plus_months(amount),
            TemporalUnit::Era => {
                let era = self.era().value().checked_add(amount).ok_or_else(overflow)?;
                self.with(TemporalField::Era, era)
            }
            unit if unit.is_time_unit() => Err(
                ChronologyError::unsupported_unit().with_enum(ErrorMessage::UnitNotDateBased)
            ),
            unit => {
                let factor = unit.years_factor().chronology_unwrap()?;
                let years = amount.checked_mul(factor).ok_or_else(overflow)?;
                self.plus_years(years)
            }
        }
    }

    /// Returns a copy of this date with `amount` of `unit` subtracted.
    pub fn minus(&self, amount: i64, unit: TemporalUnit) -> ChronologyResult<Self> {
        let negated = amount.checked_neg().ok_or_else(|| {
            ChronologyError::field_out_of_range().with_enum(ErrorMessage::ArithmeticOverflow)
        })?;
        self.plus(negated, unit)
    }

    fn plus_months(&self, months: i64) -> ChronologyResult<Self> {
        if months == 0 {
            return Ok(*self);
        }
        let months_in_year = i64::from(self.kind.months_in_year());
        let target = self.proleptic_month().checked_add(months).ok_or_else(|| {
            ChronologyError::field_out_of_range().with_enum(ErrorMessage::ArithmeticOverflow)
        })?;
        let year = i32::try_from(target.div_euclid(months_in_year)).map_err(|_| {
            ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
        })?;
        let month = (target.rem_euclid(months_in_year) + 1) as u8;
        self.resolve_year_month(year, month)
    }

    fn plus_years(&self, years: i64) -> ChronologyResult<Self> {
        if years == 0 {
            return Ok(*self);
        }
        let year = i64::from(self.year).checked_add(years).and_then(|y| i32::try_from(y).ok());
        let year = year.ok_or_else(|| {
            ChronologyError::field_out_of_range().with_enum(ErrorMessage::YearOutOfRange)
        })?;
        self.resolve_year_month(year, self.month)
    }

    /// Converts `other` into this date's calendar, preserving its epoch
    /// day.
    fn align_kind(&self, other: &Self) -> ChronologyResult<Self> {
        if other.kind == self.kind {
            Ok(*other)
        } else {
            Self::of_epoch_day(self.kind, other.epoch_day)
        }
    }

    /// Whole months from this date until `end`, truncated toward zero,
    /// together with this date shifted by that many months.
    ///
    /// A month has elapsed only once the day position within the month
    /// has been reached, comparing day positions with the cutover gap
    /// removed. The month shift clamps raw day labels, so inside the
    /// cutover month the shifted date can still land past `end`; the
    /// count is then stepped back by one.
    fn months_until(&self, end: &Self) -> ChronologyResult<(i64, Self)> {
        let mut total = end.proleptic_month() - self.proleptic_month();
        let day_cmp = i64::from(end.effective_day()) - i64::from(self.effective_day());
        if total > 0 && day_cmp < 0 {
            total -= 1;
        } else if total < 0 && day_cmp > 0 {
            total += 1;
        }
        let mut aligned = self.plus_months(total)?;
        if total > 0 && aligned.epoch_day > end.epoch_day {
            total -= 1;
            aligned = self.plus_months(total)?;
        } else if total < 0 && aligned.epoch_day < end.epoch_day {
            total += 1;
            aligned = self.plus_months(total)?;
        }
        chronology_assert!(
            (total >= 0 && aligned.epoch_day <= end.epoch_day)
                || (total <= 0 && aligned.epoch_day >= end.epoch_day),
            "month alignment overshot the target date: {} vs {}",
            aligned.epoch_day,
            end.epoch_day
        );
        Ok((total, aligned))
    }

    /// The period from this date until `other`, as years, months, and
    /// days in this date's calendar.
    ///
    /// The result round-trips: adding the returned period to this date
    /// always yields `other` (converted into this calendar, if needed).
    pub fn until(&self, other: &Self) -> ChronologyResult<DatePeriod> {
        let end = self.align_kind(other)?;
        let months_in_year = i64::from(self.kind.months_in_year());
        let (total_months, aligned) = self.months_until(&end)?;
        let days = end.epoch_day - aligned.epoch_day;
        Ok(DatePeriod::new(
            self.kind,
            total_months / months_in_year,
            total_months % months_in_year,
            days,
        ))
    }

    /// The amount of time from this date until `other`, measured in a
    /// single unit and truncated toward zero.
    pub fn until_in(&self, other: &Self, unit: TemporalUnit) -> ChronologyResult<i64> {
        let end = self.align_kind(other)?;
        match unit {
            TemporalUnit::Day => Ok(end.epoch_day - self.epoch_day),
            TemporalUnit::Week => Ok((end.epoch_day - self.epoch_day) / 7),
            TemporalUnit::Month => Ok(self.months_until(&end)?.0),
            TemporalUnit::Era => Ok(end.era().value() - self.era().value()),
            unit if unit.is_time_unit() => Err(
                ChronologyError::unsupported_unit().with_enum(ErrorMessage::UnitNotDateBased)
            ),
            unit => {
                let factor = unit.years_factor().chronology_unwrap()?;
                let months_in_year = i64::from(self.kind.months_in_year());
                Ok(self.months_until(&end)?.0 / (months_in_year * factor))
            }
        }
    }

    /// Returns a copy of this date with the period added. The years and
    /// months are applied together as a single month shift when the
    /// months component is nonzero, then the days.
    pub fn plus_period(&self, period: &DatePeriod) -> ChronologyResult<Self> {
        if period.kind() != self.kind {
            return Err(ChronologyError::invalid_date().with_enum(ErrorMessage::CalendarMismatch));
        }
        let shifted = if period.months() == 0 {
            self.plus_years(period.years())?
        } else {
            let months_in_year = i64::from(self.kind.months_in_year());
            let total = period
                .years()
                .checked_mul(months_in_year)
                .and_then(|months| months.checked_add(period.months()))
                .ok_or_else(|| {
                    ChronologyError::field_out_of_range()
                        .with_enum(ErrorMessage::ArithmeticOverflow)
                })?;
            self.plus_months(total)?
        };
        shifted.plus(period.days(), TemporalUnit::Day)
    }

    /// Returns a copy of this date with the period subtracted.
    pub fn minus_period(&self, period: &DatePeriod) -> ChronologyResult<Self> {
        self.plus_period(&period.negated()?)
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.epoch_day, self.kind).cmp(&(other.epoch_day, other.kind))
    }
}

impl Writeable for CalendarDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        let separator = match self.kind {
            CalendarKind::Julian | CalendarKind::BritishCutover => '-',
            _ => '/',
        };
        sink.write_str(self.kind.identifier())?;
        sink.write_char(' ')?;
        sink.write_str(self.kind.era_name(self.era()))?;
        sink.write_char(' ')?;
        (self.year_of_era() as u32).write_to(sink)?;
        sink.write_char(separator)?;
        write_padded_u8(self.month, sink)?;
        sink.write_char(separator)?;
        write_padded_u8(self.day, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let fixed = self.kind.identifier().len()
            + self.kind.era_name(self.era()).len()
            + 2 // spaces
            + 6; // two separators and two padded fields
        LengthHint::exact(fixed + decimal_digits(self.year_of_era() as u32))
    }
}

writeable::impl_display_with_writeable!(CalendarDate);
