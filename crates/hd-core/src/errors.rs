//! Error types for hdate-rs.
//!
//! Every public operation validates its inputs at the boundary and either
//! succeeds completely or returns one of the variants below. The
//! [`ensure!`](crate::ensure) macro is the shorthand used for those checks.

use thiserror::Error;

/// The top-level error type used throughout hdate-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A Hebrew day/month/year triple that does not exist in the calendar.
    #[error("invalid Hebrew date: {0}")]
    InvalidHebrewDate(String),

    /// A Gregorian year/month/day triple that does not exist in the calendar.
    #[error("invalid Gregorian date: {0}")]
    InvalidGregorianDate(String),

    /// Numeral or Omer-phrase input outside its domain.
    #[error("value {value} out of range [{min}, {max}]")]
    InvalidNumeralRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// The weekly-reading table has no entry for a reachable year type.
    ///
    /// This is a data defect, never a user error.
    #[error("no reading table entry for year type {year_type} (week {week})")]
    InternalTableGap {
        /// Composite year-type key that failed to resolve.
        year_type: u16,
        /// Elapsed weeks since Rosh Hashana at the time of lookup.
        week: usize,
    },

    /// A Julian day number outside the supported window.
    #[error("out of supported range: {0}")]
    OutOfRange(String),
}

/// Shorthand `Result` type used throughout hdate-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err($err)` if `$cond` is false.
///
/// # Example
/// ```
/// use hd_core::{ensure, errors::Error};
/// fn day_of_month(d: u8) -> hd_core::errors::Result<u8> {
///     ensure!(
///         (1..=30).contains(&d),
///         Error::InvalidHebrewDate(format!("day {d} out of range [1, 30]"))
///     );
///     Ok(d)
/// }
/// assert!(day_of_month(12).is_ok());
/// assert!(day_of_month(31).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}
