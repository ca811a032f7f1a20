//! Holiday resolution.
//!
//! A holiday is found by matching a date against a static table of
//! [`HolidayRule`]s in three stages: candidate `(day, month)` pairs, region
//! scope, then every predicate of the rule. Several holidays share literal
//! dates across regions, and some only apply from a given year or move off
//! Shabbat, which is what the predicates express.

use crate::date::CalendarDate;
use crate::hebrew_month::HebrewMonth;
use crate::holiday_data::{DESCRIPTIONS, HOLIDAY_RULES};
use hd_core::Language;
use tracing::trace;

/// Holiday classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HolidayCategory {
    /// Regular day (0).
    Ordinary = 0,
    /// Festival with work restrictions (1).
    YomTov = 1,
    /// Erev Yom Kippur (2).
    ErevYomKippur = 2,
    /// Intermediate festival days (3).
    CholHamoed = 3,
    /// Chanuka and Purim (4).
    HanukkahPurim = 4,
    /// Fast day (5).
    Fast = 5,
    /// Yom Ha'atzmaut and Yom Yerushalayim (6).
    IndependenceDay = 6,
    /// Lag BaOmer, Tu b'Shvat, Tu b'Av (7).
    Minor = 7,
    /// Yom HaShoah and Yom HaZikaron (8).
    Memorial = 8,
    /// Civil commemorations without religious status (9).
    IsraelNationalDay = 9,
}

impl HolidayCategory {
    /// Return the numeric category code.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Where a holiday rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Region {
    /// Both Israel and the Diaspora.
    Any,
    /// Israel only.
    Israel,
    /// Diaspora only.
    Diaspora,
}

impl Region {
    /// Whether a rule with this scope is kept for the given observance.
    pub fn applies(&self, diaspora: bool) -> bool {
        match self {
            Region::Any => true,
            Region::Israel => !diaspora,
            Region::Diaspora => diaspora,
        }
    }
}

/// A resolved holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Holiday {
    /// Stable numeric id; 0 means no holiday.
    pub id: u8,
    /// Classification.
    pub category: HolidayCategory,
    /// Key into the localized description table.
    pub description_key: &'static str,
}

impl Holiday {
    /// The "no holiday" sentinel.
    pub const NONE: Holiday = Holiday::new(0, "", HolidayCategory::Ordinary);

    /// Create a holiday entry.
    pub const fn new(id: u8, description_key: &'static str, category: HolidayCategory) -> Self {
        Holiday {
            id,
            category,
            description_key,
        }
    }

    /// Return `true` for the [`Holiday::NONE`] sentinel.
    pub fn is_none(&self) -> bool {
        self.id == 0
    }

    /// Localized long description; empty for [`Holiday::NONE`].
    pub fn description(&self, language: Language) -> &'static str {
        DESCRIPTIONS
            .iter()
            .find(|d| d.key == self.description_key)
            .map_or("", |d| match language {
                Language::Hebrew => d.hebrew,
                Language::English => d.english,
            })
    }
}

/// Localized description of a holiday.
#[derive(Debug, Clone, Copy)]
pub struct HolidayDescription {
    /// Matches [`Holiday::description_key`].
    pub key: &'static str,
    /// English text.
    pub english: &'static str,
    /// Hebrew text.
    pub hebrew: &'static str,
}

/// A pure test over the resolved date.
pub type Predicate = fn(&CalendarDate) -> bool;

/// Candidate dates of a rule: every combination of `days` × `months`.
#[derive(Debug, Clone, Copy)]
pub struct DateSet {
    /// Candidate days of the month.
    pub days: &'static [u8],
    /// Candidate months.
    pub months: &'static [HebrewMonth],
}

impl DateSet {
    /// Whether `(day, month)` is one of the candidates.
    pub fn contains(&self, day: u8, month: HebrewMonth) -> bool {
        self.days.contains(&day) && self.months.contains(&month)
    }
}

/// One row of the holiday table.
#[derive(Debug, Clone, Copy)]
pub struct HolidayRule {
    /// Holiday produced when the rule matches.
    pub holiday: Holiday,
    /// Candidate dates.
    pub dates: DateSet,
    /// Region scope.
    pub region: Region,
    /// Every predicate must hold.
    pub predicates: &'static [Predicate],
}

impl HolidayRule {
    /// Create a rule.
    pub const fn new(
        holiday: Holiday,
        days: &'static [u8],
        months: &'static [HebrewMonth],
        region: Region,
        predicates: &'static [Predicate],
    ) -> Self {
        HolidayRule {
            holiday,
            dates: DateSet { days, months },
            region,
            predicates,
        }
    }

    /// Whether this rule selects `date` under the given observance: the date
    /// is a candidate, the region applies, and every predicate holds.
    pub fn matches(&self, date: &CalendarDate, diaspora: bool) -> bool {
        self.dates.contains(date.hebrew_day(), date.hebrew_month())
            && self.region.applies(diaspora)
            && self.predicates.iter().all(|p| p(date))
    }
}

/// Every rule in the table that selects `date`.
///
/// The table guarantees at most one; this is exposed so that guarantee can
/// be checked.
pub fn matching_rules(date: &CalendarDate, diaspora: bool) -> Vec<&'static HolidayRule> {
    HOLIDAY_RULES
        .iter()
        .filter(|r| r.matches(date, diaspora))
        .collect()
}

/// Resolve the holiday falling on `date`, or [`Holiday::NONE`].
pub fn holiday_for(date: &CalendarDate, diaspora: bool) -> Holiday {
    let matches = matching_rules(date, diaspora);
    debug_assert!(
        matches.len() <= 1,
        "{} holiday rules matched {date:?}",
        matches.len()
    );
    let holiday = matches.first().map_or(Holiday::NONE, |r| r.holiday);
    if !holiday.is_none() {
        trace!(jdn = date.jdn(), diaspora, key = holiday.description_key, "holiday matched");
    }
    holiday
}
