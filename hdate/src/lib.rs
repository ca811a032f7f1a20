//! # hdate
//!
//! Hebrew calendar dates for Rust: Gregorian ↔ Hebrew conversion, holidays,
//! weekly Torah readings, the Omer count, and Hebrew numerals.
//!
//! This crate is a façade over the workspace crates. Application code should
//! depend on it rather than on `hd-core` / `hd-time` directly.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! hdate = "0.1"
//! ```
//!
//! ```rust
//! use hdate::{Language, Settings};
//!
//! let date = hdate::date_from_gregorian(2024, 4, 23).unwrap();
//! assert_eq!(date.hebrew_components(), (15, 7, 5784));
//!
//! let holiday = hdate::holiday_for(&date, false);
//! assert_eq!(holiday.description(Language::English), "Pesach");
//!
//! let shabbat = hdate::date_from_hebrew(24, 1, 5785).unwrap();
//! let reading = hdate::parasha_for(&shabbat, false).unwrap();
//! assert_eq!(reading.name(Language::English), "Bereshit");
//!
//! let lag_bomer = hdate::date_from_hebrew(18, 8, 5784).unwrap();
//! assert_eq!(hdate::omer_day(&lag_bomer), 33);
//! assert_eq!(hdate::format_hebrew_numeral(5784, false).unwrap(), "ה' תשפ\"ד");
//!
//! let settings = Settings::default().with_language(Language::English);
//! assert_eq!(
//!     hdate::format_hebrew_date(&lag_bomer, &settings, true).unwrap(),
//!     "Sun 18 Iyar 5784"
//! );
//! ```
//!
//! ## Feature flags
//! - `serde`: `Serialize` / `Deserialize` for the value types; a
//!   [`CalendarDate`] serializes as its Julian day number.
//! - `chrono`: conversions to and from `chrono::NaiveDate`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and observance settings.
pub use hd_core as core;

/// Calendar arithmetic and per-day resolvers.
pub use hd_time as time;

pub use hd_core::{Error, Jdn, Language, Result, Settings};
pub use hd_time::{
    format_hebrew_date, CalendarDate, HebrewMonth, Holiday, HolidayCategory, Parasha, Weekday,
};

/// Build a date from a Gregorian year, month (1–12), and day.
pub fn date_from_gregorian(year: i32, month: u8, day: u8) -> Result<CalendarDate> {
    CalendarDate::from_gregorian(year, month, day)
}

/// Build a date from a Hebrew day, month number (1–14), and year.
///
/// Month numbers run Tishrei = 1 … Elul = 12; a common year's Adar is 6, a
/// leap year's Adar I and Adar II are 13 and 14.
pub fn date_from_hebrew(day: u8, month: u8, year: i32) -> Result<CalendarDate> {
    CalendarDate::from_hebrew(day, month, year)
}

/// Holiday on `date`, or [`Holiday::NONE`].
pub fn holiday_for(date: &CalendarDate, diaspora: bool) -> Holiday {
    hd_time::holiday_for(date, diaspora)
}

/// Weekly reading for the week containing `date`.
pub fn parasha_for(date: &CalendarDate, diaspora: bool) -> Result<Parasha> {
    hd_time::parasha_for(date, diaspora)
}

/// Day of the Omer count (1–49), or 0 outside it.
pub fn omer_day(date: &CalendarDate) -> i32 {
    hd_time::omer_day(date)
}

/// Hebrew-letter numeral for `n` in 0–9999.
pub fn format_hebrew_numeral(n: i32, short: bool) -> Result<String> {
    hd_time::format_hebrew_numeral(n, short)
}

/// Hebrew phrase counting day `day` (1–49) of the Omer.
pub fn format_omer_phrase(day: i32) -> Result<String> {
    hd_time::format_omer_phrase(day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_round_trip() {
        let g = date_from_gregorian(2024, 10, 3).unwrap();
        let h = date_from_hebrew(1, 1, 5785).unwrap();
        assert_eq!(g, h);
        assert_eq!(g.jdn(), 2_460_587);
        assert_eq!(g.weekday().ordinal(), 5);
    }

    #[test]
    fn contract_errors() {
        assert!(matches!(
            date_from_hebrew(30, 2, 5784),
            Err(Error::InvalidHebrewDate(_))
        ));
        assert!(matches!(
            format_hebrew_numeral(10_000, false),
            Err(Error::InvalidNumeralRange { .. })
        ));
        assert!(format_omer_phrase(0).is_err());
    }

    #[test]
    fn resolvers() {
        let d = date_from_hebrew(16, 7, 5784).unwrap();
        assert_eq!(holiday_for(&d, true).id, 32);
        assert_eq!(holiday_for(&d, false).id, 16);
        assert_eq!(omer_day(&d), 1);
        assert_eq!(format_omer_phrase(1).unwrap(), "היום יום אחד לעומר");
    }
}
