//! `chronology_rs` implements a family of alternative calendar systems
//! over a shared epoch-day core: the proleptic Julian calendar, the
//! British cutover calendar with its eleven elided days in September
//! 1752, the Symmetry454 and Symmetry010 leap-week calendars, and the
//! International Fixed calendar with its thirteen 28-day months.
//!
//! ```rust
//! use chronology_rs::{CalendarDate, CalendarKind, TemporalUnit};
//!
//! // The day after Wednesday 1752-09-02 is Thursday 1752-09-14.
//! let eve = CalendarDate::new(CalendarKind::BritishCutover, 1752, 9, 2).unwrap();
//! let next = eve.plus(1, TemporalUnit::Day).unwrap();
//! assert_eq!((next.month(), next.day()), (9, 14));
//!
//! // Every date converts losslessly through its ISO equivalent.
//! let iso = next.to_iso().unwrap();
//! assert_eq!((iso.year(), iso.month(), iso.day()), (1752, 9, 14));
//! ```
//!
//! All dates share a single day count (days since ISO 1970-01-01), so
//! conversions between calendars are exact and arithmetic never loses
//! or double-counts the days around a calendar discontinuity.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod fields;
pub mod iso;
pub mod options;

mod date;
mod era;
mod kind;
mod period;
mod rules;

#[doc(inline)]
pub use error::ChronologyError;

pub use crate::date::CalendarDate;
pub use crate::era::Era;
pub use crate::fields::{FieldRange, TemporalField};
pub use crate::iso::IsoDate;
pub use crate::kind::CalendarKind;
pub use crate::options::TemporalUnit;
pub use crate::period::DatePeriod;

/// Re-export of `TinyAsciiStr` from `tinystr`, used for era codes.
pub use tinystr::TinyAsciiStr;

/// The `chronology_rs` result type.
pub type ChronologyResult<T> = Result<T, ChronologyError>;

/// A library specific trait for unwrapping assertions.
pub(crate) trait ChronologyUnwrap {
    type Output;

    /// Assertion-flavored unwrapping: panics in debug builds, returns
    /// an error at runtime.
    fn chronology_unwrap(self) -> ChronologyResult<Self::Output>;
}

impl<T> ChronologyUnwrap for Option<T> {
    type Output = T;

    fn chronology_unwrap(self) -> ChronologyResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(ChronologyError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! chronology_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::ChronologyError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::ChronologyError::assert());
        }
    };
}
