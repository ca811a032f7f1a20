//! # hd-time
//!
//! Gregorian and Hebrew calendar arithmetic, and the per-day facts derived
//! from a Hebrew date: holidays, weekly readings, and the Omer count.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `CalendarDate`: a day in both calendars.
pub mod date;

/// Full-date descriptions.
pub mod format;

/// Hebrew numerals.
pub mod gematria;

/// Proleptic Gregorian calendar and Julian day numbers.
pub mod gregorian;

/// Hebrew year, month, and day arithmetic.
pub mod hebrew;

/// `HebrewMonth`: month of the Hebrew year.
pub mod hebrew_month;

/// Holiday resolver.
pub mod holiday;

/// Holiday table and descriptions.
pub mod holiday_data;

/// Omer count and phrase.
pub mod omer;

/// Weekly Torah reading resolver.
pub mod parasha;

/// Weekly reading schedules by year type.
pub mod reading_data;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{CalendarDate, HebrewDate};
pub use format::format_hebrew_date;
pub use gematria::format_hebrew_numeral;
pub use hebrew::YearKind;
pub use hebrew_month::HebrewMonth;
pub use holiday::{holiday_for, Holiday, HolidayCategory, Region};
pub use omer::{format_omer_phrase, omer_day};
pub use parasha::{parasha_for, Parasha, YearType};
pub use weekday::Weekday;
