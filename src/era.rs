//! Calendar eras.

/// An era of a calendar year line.
///
/// Every calendar in this crate uses a two-era scheme anchored at
/// proleptic year 1, except International Fixed which only admits
/// [`Era::Current`]. The display name of an era depends on the calendar
/// kind; see [`CalendarKind::era_name`](crate::CalendarKind::era_name).
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Era {
    /// The era before year 1, counting years backwards.
    BeforeCurrent = 0,
    /// The era from year 1 onwards.
    Current = 1,
}

impl Era {
    /// The numeric value of the era, as exposed through the `Era` field.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self as i64
    }

    /// The era containing the provided proleptic year.
    #[inline]
    #[must_use]
    pub const fn of_year(year: i32) -> Self {
        if year >= 1 {
            Self::Current
        } else {
            Self::BeforeCurrent
        }
    }

    /// Maps a numeric era value back to an `Era`.
    #[must_use]
    pub const fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::BeforeCurrent),
            1 => Some(Self::Current),
            _ => None,
        }
    }
}
