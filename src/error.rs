//! This module implements `ChronologyError`.

use core::fmt;

/// `ChronologyError`'s error kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A year-month-day combination that is unreachable under the
    /// calendar's rules.
    #[default]
    InvalidDate,
    /// A field value that falls outside its valid range.
    FieldOutOfRange,
    /// A field outside the supported date field set.
    UnsupportedField,
    /// A unit outside the supported date unit set.
    UnsupportedUnit,
    /// An era that does not belong to the calendar in question.
    IncompatibleEra,
    /// Assertion error
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => "InvalidDate",
            Self::FieldOutOfRange => "FieldOutOfRange",
            Self::UnsupportedField => "UnsupportedField",
            Self::UnsupportedUnit => "UnsupportedUnit",
            Self::IncompatibleEra => "IncompatibleEra",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    #[default]
    None,
    YearOutOfRange,
    MonthOutOfRange,
    DayOutOfRange,
    DayOfYearOutOfRange,
    EpochDayOutOfRange,
    FieldValueOutOfRange,
    UnitNotDateBased,
    FieldNotDateBased,
    EraNotInCalendar,
    CalendarMismatch,
    ArithmeticOverflow,
    String(&'static str),
}

impl ErrorMessage {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::YearOutOfRange => "year outside the supported range",
            Self::MonthOutOfRange => "month must be within the valid month range",
            Self::DayOutOfRange => "day must be within the valid day range",
            Self::DayOfYearOutOfRange => "dayOfYear must be within the valid range for the year",
            Self::EpochDayOutOfRange => "epochDay outside the supported range",
            Self::FieldValueOutOfRange => "value outside the valid range for the field",
            Self::UnitNotDateBased => "unit must be a date unit",
            Self::FieldNotDateBased => "field must be a date field",
            Self::EraNotInCalendar => "era does not belong to this calendar",
            Self::CalendarMismatch => "calendars of the operands must match",
            Self::ArithmeticOverflow => "arithmetic amount overflowed the supported range",
            Self::String(s) => s,
        }
    }
}

/// The error type for `chronology_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChronologyError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl fmt::Display for ChronologyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        let message = self.msg.as_str();
        if !message.is_empty() {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChronologyError {}

impl ChronologyError {
    /// Create a new error with the provided [`ErrorKind`].
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create an [`ErrorKind::InvalidDate`] error.
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an [`ErrorKind::FieldOutOfRange`] error.
    #[must_use]
    pub const fn field_out_of_range() -> Self {
        Self::new(ErrorKind::FieldOutOfRange)
    }

    /// Create an [`ErrorKind::UnsupportedField`] error.
    #[must_use]
    pub const fn unsupported_field() -> Self {
        Self::new(ErrorKind::UnsupportedField)
    }

    /// Create an [`ErrorKind::UnsupportedUnit`] error.
    #[must_use]
    pub const fn unsupported_unit() -> Self {
        Self::new(ErrorKind::UnsupportedUnit)
    }

    /// Create an [`ErrorKind::IncompatibleEra`] error.
    #[must_use]
    pub const fn incompatible_era() -> Self {
        Self::new(ErrorKind::IncompatibleEra)
    }

    /// Create an [`ErrorKind::Assert`] error.
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attach a message to this error.
    #[must_use]
    pub const fn with_message(mut self, message: &'static str) -> Self {
        self.msg = ErrorMessage::String(message);
        self
    }

    #[must_use]
    pub(crate) const fn with_enum(mut self, message: ErrorMessage) -> Self {
        self.msg = message;
        self
    }

    /// Returns this error's [`ErrorKind`].
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns this error's message, if any.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.msg.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn error_display() {
        let err = ChronologyError::invalid_date().with_enum(ErrorMessage::DayOutOfRange);
        assert_eq!(
            err.to_string(),
            "InvalidDate: day must be within the valid day range"
        );
        assert_eq!(ChronologyError::assert().to_string(), "ImplementationError");
    }
}
