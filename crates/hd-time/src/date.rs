//! `CalendarDate`: a day known in both the Gregorian and Hebrew calendars.
//!
//! A date is keyed by its Julian day number. Construction from either
//! calendar validates the input, then eagerly derives the other
//! representation; the value is immutable afterwards and every "change"
//! (`add_days`, building from a new triple) produces a new value.
//!
//! # Supported range
//! 1 January 1 CE (JDN 1 721 426) through 31 December 9999 CE
//! (JDN 5 373 484), proleptic Gregorian.

use crate::gregorian;
use crate::hebrew::{self, YearKind};
use crate::hebrew_month::HebrewMonth;
use crate::weekday::Weekday;
use hd_core::errors::{Error, Result};
use hd_core::{ensure, Jdn};

/// A Hebrew calendar triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    /// Day of the month (1–30).
    pub day: u8,
    /// Month of the year.
    pub month: HebrewMonth,
    /// Year since creation (anno mundi).
    pub year: i32,
}

/// A calendar day with both Gregorian and Hebrew representations.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "i32", try_from = "i32"))]
pub struct CalendarDate {
    jdn: Jdn,
    gregorian: (i32, u8, u8),
    hebrew: HebrewDate,
}

impl CalendarDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a Julian day number.
    pub fn from_jdn(jdn: Jdn) -> Result<Self> {
        ensure!(
            (gregorian::MIN_JDN..=gregorian::MAX_JDN).contains(&jdn),
            Error::OutOfRange(format!(
                "JDN {jdn} outside [{}, {}]",
                gregorian::MIN_JDN,
                gregorian::MAX_JDN
            ))
        );
        Ok(Self::from_jdn_unchecked(jdn))
    }

    /// Create a date from a Gregorian year, month (1–12), and day (1–31).
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self> {
        gregorian::validate(year, month, day)?;
        Ok(Self::from_jdn_unchecked(gregorian::to_jdn(year, month, day)))
    }

    /// Create a date from a Hebrew day, month number (1–14), and year.
    ///
    /// Fails with [`Error::InvalidHebrewDate`] if the triple does not exist
    /// or falls outside the supported range.
    pub fn from_hebrew(day: u8, month: u8, year: i32) -> Result<Self> {
        let month = hebrew::validate(day, month, year)?;
        let jdn = hebrew::to_jdn(day, month, year);
        ensure!(
            (gregorian::MIN_JDN..=gregorian::MAX_JDN).contains(&jdn),
            Error::InvalidHebrewDate(format!(
                "{day} {month} {year} falls outside 1 January 1 CE to 31 December 9999 CE"
            ))
        );
        Ok(Self::from_jdn_unchecked(jdn))
    }

    fn from_jdn_unchecked(jdn: Jdn) -> Self {
        let gregorian = gregorian::from_jdn(jdn);
        let (day, month, year) = hebrew::from_jdn(jdn);
        CalendarDate {
            jdn,
            gregorian,
            hebrew: HebrewDate { day, month, year },
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the Julian day number.
    pub fn jdn(&self) -> Jdn {
        self.jdn
    }

    /// Return the Gregorian `(year, month, day)` triple.
    pub fn gregorian_components(&self) -> (i32, u8, u8) {
        self.gregorian
    }

    /// Return the Gregorian year.
    pub fn year(&self) -> i32 {
        self.gregorian.0
    }

    /// Return the Gregorian month (1–12).
    pub fn month(&self) -> u8 {
        self.gregorian.1
    }

    /// Return the Gregorian day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.gregorian.2
    }

    /// Return the Hebrew representation.
    pub fn hebrew(&self) -> HebrewDate {
        self.hebrew
    }

    /// Return the Hebrew `(day, month number, year)` triple.
    pub fn hebrew_components(&self) -> (u8, u8, i32) {
        (self.hebrew.day, self.hebrew.month.number(), self.hebrew.year)
    }

    /// Return the Hebrew day of the month (1–30).
    pub fn hebrew_day(&self) -> u8 {
        self.hebrew.day
    }

    /// Return the Hebrew month.
    pub fn hebrew_month(&self) -> HebrewMonth {
        self.hebrew.month
    }

    /// Return the Hebrew year.
    pub fn hebrew_year(&self) -> i32 {
        self.hebrew.year
    }

    /// Return the weekday (Sunday = 1 … Saturday = 7).
    pub fn weekday(&self) -> Weekday {
        Weekday::from_jdn(self.jdn)
    }

    // ── Year facts ────────────────────────────────────────────────────────────

    /// Length in days of this date's Hebrew year.
    pub fn year_length(&self) -> u16 {
        hebrew::year_length(self.hebrew.year)
    }

    /// Length class of this date's Hebrew year.
    pub fn year_kind(&self) -> YearKind {
        hebrew::year_kind(self.hebrew.year)
    }

    /// Whether this date's Hebrew year has thirteen months.
    pub fn is_leap_year(&self) -> bool {
        hebrew::is_leap_year(self.hebrew.year)
    }

    /// Whether Kislev has 29 days this year.
    pub fn short_kislev(&self) -> bool {
        self.year_kind() == YearKind::Deficient
    }

    /// Weekday of Rosh Hashana of this date's Hebrew year.
    pub fn rosh_hashana_weekday(&self) -> Weekday {
        hebrew::rosh_hashana_weekday(self.hebrew.year)
    }

    /// Weekday of the first day of Pesach of this date's Hebrew year.
    pub fn pesach_weekday(&self) -> Weekday {
        hebrew::pesach_weekday(self.hebrew.year)
    }

    /// Days elapsed since 1 Tishrei of this date's Hebrew year.
    pub fn days_since_rosh_hashana(&self) -> i32 {
        self.jdn - hebrew::to_jdn(1, HebrewMonth::Tishrei, self.hebrew.year)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Return the date `n` days later (or earlier for negative `n`).
    ///
    /// Fails with [`Error::OutOfRange`] when the result leaves the supported
    /// range, including when `jdn + n` overflows.
    pub fn add_days(&self, n: i32) -> Result<Self> {
        let jdn = self.jdn.checked_add(n).ok_or_else(|| {
            Error::OutOfRange(format!("JDN {} + {n} overflows", self.jdn))
        })?;
        Self::from_jdn(jdn)
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.jdn.cmp(&other.jdn)
    }
}

impl std::ops::Sub<CalendarDate> for CalendarDate {
    type Output = i32;
    fn sub(self, rhs: CalendarDate) -> i32 {
        self.jdn - rhs.jdn
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl From<CalendarDate> for i32 {
    fn from(date: CalendarDate) -> i32 {
        date.jdn
    }
}

impl TryFrom<i32> for CalendarDate {
    type Error = Error;
    fn try_from(jdn: i32) -> Result<Self> {
        CalendarDate::from_jdn(jdn)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for CalendarDate {
    type Error = Error;
    fn try_from(date: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        CalendarDate::from_gregorian(date.year(), date.month() as u8, date.day() as u8)
    }
}

#[cfg(feature = "chrono")]
impl CalendarDate {
    /// Today's date in the local time zone.
    pub fn today() -> Result<Self> {
        Self::try_from(chrono::Local::now().date_naive())
    }

    /// Return the Gregorian date as a `chrono::NaiveDate`.
    pub fn to_naive_date(&self) -> chrono::NaiveDate {
        let (y, m, d) = self.gregorian;
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32)
            .expect("supported range is inside chrono's range")
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.gregorian;
        let h = self.hebrew;
        write!(
            f,
            "{} {y:04}-{m:02}-{d:02} ({} {} {})",
            self.weekday(),
            h.day,
            h.month,
            h.year
        )
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.gregorian;
        let h = self.hebrew;
        write!(
            f,
            "CalendarDate({y:04}-{m:02}-{d:02} / {}-{}-{})",
            h.year,
            h.month.number(),
            h.day
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
