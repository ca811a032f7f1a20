//! Hebrew calendar arithmetic.
//!
//! Year lengths come from the molad (mean conjunction) cycle counted from
//! the molad of Tishrei 3744, corrected by the four postponement rules
//! (molad zaken, GaTaRaD, BeTUTaKPaT, and lo ADU Rosh). Month boundaries then
//! follow from the year length alone: Cheshvan and Kislev absorb the
//! deficient / regular / complete variation and leap years insert a
//! thirty-day Adar I.

use crate::hebrew_month::{HebrewMonth, COMMON_YEAR_MONTHS, LEAP_YEAR_MONTHS};
use crate::weekday::Weekday;
use hd_core::errors::{Error, Result};
use hd_core::{ensure, Jdn};

/// First supported Hebrew year (contains 1 January 1 CE).
pub const MIN_YEAR: i32 = 3761;

/// Last supported Hebrew year (contains 31 December 9999 CE).
pub const MAX_YEAR: i32 = 13_760;

const PARTS_PER_HOUR: i64 = 1080;
const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
const PARTS_PER_WEEK: i64 = 7 * PARTS_PER_DAY;

/// Lunar month beyond its first 28 days: 1 day 12 hours 793 parts.
const PARTS_PER_MONTH: i64 = PARTS_PER_DAY + parts(12, 793);

const EPOCH_YEAR: i64 = 3744;

/// Molad of Tishrei 3744, shifted by six hours so days start at 18:00.
const EPOCH_MOLAD: i64 = parts(1 + 6, 779);

/// JDN of the day before the epoch's day zero.
const EPOCH_JDN: i64 = 1_715_118;

/// The last eight months (Nisan … Elul) always span 236 days.
const TAIL_MONTH_DAYS: i64 = 236;

const fn parts(hours: i64, parts: i64) -> i64 {
    hours * PARTS_PER_HOUR + parts
}

/// Length class of a Hebrew year, driven by Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// Cheshvan 29, Kislev 29 (353 / 383 days).
    Deficient,
    /// Cheshvan 29, Kislev 30 (354 / 384 days).
    Regular,
    /// Cheshvan 30, Kislev 30 (355 / 385 days).
    Complete,
}

impl YearKind {
    /// Classify a year length.
    pub fn from_length(length: u16) -> Self {
        match length % 10 {
            3 => YearKind::Deficient,
            4 => YearKind::Regular,
            _ => YearKind::Complete,
        }
    }

    /// 0 for deficient, 1 for regular, 2 for complete.
    pub fn index(&self) -> u8 {
        match self {
            YearKind::Deficient => 0,
            YearKind::Regular => 1,
            YearKind::Complete => 2,
        }
    }
}

/// Days from the epoch to 1 Tishrei of `year`.
fn days_to_new_year(year: i64) -> i64 {
    let years = year - EPOCH_YEAR;

    let leap_months = (years * 7 + 1).div_euclid(19);
    let cycle_position = (years * 7 + 1).rem_euclid(19);
    let months = years * 12 + leap_months;

    let molad = months * PARTS_PER_MONTH + EPOCH_MOLAD;
    let mut days = months * 28 + molad.div_euclid(PARTS_PER_DAY) - 2;

    let parts_in_week = molad.rem_euclid(PARTS_PER_WEEK);
    let parts_in_day = molad.rem_euclid(PARTS_PER_DAY);
    let mut weekday = parts_in_week / PARTS_PER_DAY;

    // GaTaRaD: Tuesday molad at or after 9h 204p in a common year.
    let gatarad = cycle_position < 12 && weekday == 3 && parts_in_day >= parts(9 + 6, 204);
    // BeTUTaKPaT: Monday molad at or after 15h 589p following a leap year.
    let betutakpat = cycle_position < 7 && weekday == 2 && parts_in_day >= parts(15 + 6, 589);
    if gatarad || betutakpat {
        days += 1;
        weekday += 1;
    }

    // Lo ADU Rosh: never Sunday, Wednesday, or Friday.
    if matches!(weekday, 1 | 4 | 6) {
        days += 1;
    }

    days
}

/// Number of days in a Hebrew year: 353–355 or 383–385.
///
/// Defined for every `i32`, not only the supported range.
pub fn year_length(year: i32) -> u16 {
    let year = i64::from(year);
    (days_to_new_year(year + 1) - days_to_new_year(year)) as u16
}

/// Whether `year` has thirteen months.
///
/// True exactly when `year mod 19` is one of 0, 3, 6, 8, 11, 14, 17.
pub fn is_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

/// Length class of `year`.
pub fn year_kind(year: i32) -> YearKind {
    YearKind::from_length(year_length(year))
}

/// Months of `year` in calendar order.
pub fn months_of_year(year: i32) -> &'static [HebrewMonth] {
    if is_leap_year(year) {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    }
}

/// Number of days in `month` of `year`, or 0 if the month does not occur
/// that year (Adar in a leap year, Adar I/II in a common year).
pub fn month_length(month: HebrewMonth, year: i32) -> u8 {
    let leap = is_leap_year(year);
    match month {
        HebrewMonth::Tishrei
        | HebrewMonth::Shvat
        | HebrewMonth::Nisan
        | HebrewMonth::Sivan
        | HebrewMonth::Av => 30,
        HebrewMonth::Tevet
        | HebrewMonth::Iyar
        | HebrewMonth::Tamuz
        | HebrewMonth::Elul => 29,
        HebrewMonth::Cheshvan => match year_kind(year) {
            YearKind::Complete => 30,
            _ => 29,
        },
        HebrewMonth::Kislev => match year_kind(year) {
            YearKind::Deficient => 29,
            _ => 30,
        },
        HebrewMonth::Adar if !leap => 29,
        HebrewMonth::AdarI if leap => 30,
        HebrewMonth::AdarII if leap => 29,
        HebrewMonth::Adar | HebrewMonth::AdarI | HebrewMonth::AdarII => 0,
    }
}

/// Validate a Hebrew triple and return the typed month.
///
/// Fails with [`Error::InvalidHebrewDate`] when the month is outside 1..=14,
/// the day outside 1..=30, the year outside the supported range, or the day
/// exceeds the month's actual length in that year.
pub fn validate(day: u8, month: u8, year: i32) -> Result<HebrewMonth> {
    let m = HebrewMonth::from_number(month).ok_or_else(|| {
        Error::InvalidHebrewDate(format!("month {month} out of range [1, 14]"))
    })?;
    ensure!(
        (1..=30).contains(&day),
        Error::InvalidHebrewDate(format!("day {day} out of range [1, 30]"))
    );
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        Error::InvalidHebrewDate(format!(
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        ))
    );
    let length = month_length(m, year);
    ensure!(
        length > 0,
        Error::InvalidHebrewDate(format!("{m} does not occur in year {year}"))
    );
    ensure!(
        day <= length,
        Error::InvalidHebrewDate(format!("{m} {year} has {length} days, got day {day}"))
    );
    Ok(m)
}

/// Convert a Hebrew date to its Julian day number.
///
/// The input is assumed valid; see [`validate`]. Only years in
/// [`MIN_YEAR`]`..=`[`MAX_YEAR`] are guaranteed a result that fits in a
/// [`Jdn`]; beyond them the day count is truncated.
pub fn to_jdn(day: u8, month: HebrewMonth, year: i32) -> Jdn {
    let mut day = day as i64;
    // Adar I sits in Adar's slot; Adar II follows it thirty days later.
    let slot = match month {
        HebrewMonth::AdarI => 6,
        HebrewMonth::AdarII => {
            day += 30;
            6
        }
        m => m.number() as i64,
    };

    let mut days = days_to_new_year(i64::from(year)) + (59 * (slot - 1) + 1) / 2 + day;

    match year_kind(year) {
        YearKind::Complete if slot > 2 => days += 1,
        YearKind::Deficient if slot > 3 => days -= 1,
        _ => {}
    }
    if is_leap_year(year) && slot > 6 {
        days += 30;
    }

    (days + EPOCH_JDN) as Jdn
}

/// Convert a Julian day number to a Hebrew `(day, month, year)` triple.
pub fn from_jdn(jdn: Jdn) -> (u8, HebrewMonth, i32) {
    let (gregorian_year, _, _) = crate::gregorian::from_jdn(jdn);

    // The Hebrew year is the Gregorian year + 3760 until Rosh Hashana,
    // + 3761 afterwards.
    let mut year = gregorian_year + 3760;
    let mut new_year = to_jdn(1, HebrewMonth::Tishrei, year);
    let next_new_year = to_jdn(1, HebrewMonth::Tishrei, year + 1);
    if next_new_year <= jdn {
        year += 1;
        new_year = next_new_year;
    }

    let length = year_length(year) as i64;
    let kind = YearKind::from_length(length as u16);
    let mut days = (jdn - new_year) as i64;

    let (day, month) = if days >= length - TAIL_MONTH_DAYS {
        days -= length - TAIL_MONTH_DAYS;
        let m = days * 2 / 59;
        let d = days - (m * 59 + 1) / 2 + 1;
        let mut m = m + 5;
        if length > 355 && m <= 6 {
            m += 8;
        }
        (d, m)
    } else {
        let (d, m) = match kind {
            YearKind::Complete if days == 59 => (30, 1),
            YearKind::Complete if days > 59 => {
                let m = (days - 1) * 2 / 59;
                (days - (m * 59 + 1) / 2, m)
            }
            YearKind::Deficient if days > 87 => {
                let m = (days + 1) * 2 / 59;
                (days - (m * 59 + 1) / 2 + 2, m)
            }
            _ => {
                let m = days * 2 / 59;
                (days - (m * 59 + 1) / 2 + 1, m)
            }
        };
        (d, m + 1)
    };

    let month = HebrewMonth::from_number(month as u8).expect("month index always in 1..=14");
    (day as u8, month, year)
}

/// Weekday of 1 Tishrei of `year`.
pub fn rosh_hashana_weekday(year: i32) -> Weekday {
    Weekday::from_jdn(to_jdn(1, HebrewMonth::Tishrei, year))
}

/// Weekday of 15 Nisan of `year`.
pub fn pesach_weekday(year: i32) -> Weekday {
    Weekday::from_jdn(to_jdn(15, HebrewMonth::Nisan, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_years() {
        // year, Rosh Hashana weekday, length, Pesach weekday
        let cases = [
            (5753, 2, 353, 3),
            (5780, 2, 355, 5),
            (5782, 3, 384, 7),
            (5784, 7, 383, 3),
            (5785, 5, 355, 1),
        ];
        for (year, rh, len, pesach) in cases {
            assert_eq!(rosh_hashana_weekday(year).ordinal(), rh, "{year}");
            assert_eq!(year_length(year), len, "{year}");
            assert_eq!(pesach_weekday(year).ordinal(), pesach, "{year}");
        }
    }

    #[test]
    fn leap_rule_matches_length() {
        for year in 5000..6000 {
            let by_cycle = matches!(year % 19, 0 | 3 | 6 | 8 | 11 | 14 | 17);
            assert_eq!(is_leap_year(year), by_cycle, "{year}");
            assert_eq!(year_length(year) > 355, by_cycle, "{year}");
        }
    }

    #[test]
    fn month_lengths_sum_to_year() {
        for year in 5770..5800 {
            let total: u16 = months_of_year(year)
                .iter()
                .map(|&m| month_length(m, year) as u16)
                .sum();
            assert_eq!(total, year_length(year), "{year}");
        }
    }

    #[test]
    fn rosh_hashana_5785() {
        // 1 Tishrei 5785 = 2024-10-03
        assert_eq!(
            to_jdn(1, HebrewMonth::Tishrei, 5785),
            crate::gregorian::to_jdn(2024, 10, 3)
        );
        assert_eq!(
            from_jdn(crate::gregorian::to_jdn(2024, 10, 3)),
            (1, HebrewMonth::Tishrei, 5785)
        );
    }

    #[test]
    fn adar_months() {
        // 5784 is a leap year: 14 Adar II = Purim = 2024-03-24.
        assert_eq!(
            to_jdn(14, HebrewMonth::AdarII, 5784),
            crate::gregorian::to_jdn(2024, 3, 24)
        );
        assert_eq!(month_length(HebrewMonth::Adar, 5784), 0);
        assert_eq!(month_length(HebrewMonth::AdarI, 5785), 0);
        assert_eq!(month_length(HebrewMonth::Adar, 5785), 29);
    }

    #[test]
    fn validation() {
        assert!(validate(30, 1, 5785).is_ok());
        assert!(validate(1, 0, 5785).is_err());
        assert!(validate(1, 15, 5785).is_err());
        assert!(validate(0, 1, 5785).is_err());
        assert!(validate(31, 1, 5785).is_err());
        // Cheshvan 5784 has 29 days.
        assert_eq!(year_kind(5784), YearKind::Deficient);
        assert!(validate(30, 2, 5784).is_err());
        // Adar I only exists in leap years.
        assert!(validate(1, 13, 5785).is_err());
        assert!(validate(1, 6, 5784).is_err());
        assert!(validate(1, 1, MIN_YEAR - 1).is_err());
    }

    #[test]
    fn year_length_at_integer_limits() {
        const LENGTHS: [u16; 6] = [353, 354, 355, 383, 384, 385];
        for year in [i32::MIN, i32::MIN + 1, -1, 0, i32::MAX - 1, i32::MAX] {
            assert!(LENGTHS.contains(&year_length(year)), "{year}");
        }
    }
}
