//! Proleptic Gregorian calendar ↔ Julian day number.
//!
//! Integer-only civil-calendar algorithm; exact inverses of each other for
//! every date from 1 January 1 CE through 31 December 9999 CE.

use hd_core::errors::{Error, Result};
use hd_core::{ensure, Jdn};

/// First supported Gregorian year.
pub const MIN_YEAR: i32 = 1;

/// Last supported Gregorian year.
pub const MAX_YEAR: i32 = 9999;

/// JDN of 1 January 1 CE.
pub const MIN_JDN: Jdn = 1_721_426;

/// JDN of 31 December 9999 CE.
pub const MAX_JDN: Jdn = 5_373_484;

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

/// Validate a Gregorian triple against the supported range and month lengths.
pub fn validate(year: i32, month: u8, day: u8) -> Result<()> {
    ensure!(
        (MIN_YEAR..=MAX_YEAR).contains(&year),
        Error::InvalidGregorianDate(format!(
            "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
        ))
    );
    ensure!(
        (1..=12).contains(&month),
        Error::InvalidGregorianDate(format!("month {month} out of range [1, 12]"))
    );
    let days_in = days_in_month(year, month);
    ensure!(
        (1..=days_in).contains(&day),
        Error::InvalidGregorianDate(format!(
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        ))
    );
    Ok(())
}

/// Convert a Gregorian date to its Julian day number.
///
/// The input is assumed valid; see [`validate`].
///
/// # Panics
/// The intermediate products overflow `i32` for years beyond roughly
/// ±1 400 000, which panics in debug builds. Validated input never gets
/// near that.
pub fn to_jdn(year: i32, month: u8, day: u8) -> Jdn {
    let (y, m, d) = (year, month as i32, day as i32);
    // Truncating division: -1 for January/February, 0 otherwise.
    let a = (m - 14) / 12;
    (1461 * (y + 4800 + a)) / 4 + (367 * (m - 2 - 12 * a)) / 12
        - (3 * ((y + 4900 + a) / 100)) / 4
        + d
        - 32075
}

/// Convert a Julian day number to a Gregorian `(year, month, day)` triple.
pub fn from_jdn(jdn: Jdn) -> (i32, u8, u8) {
    let mut l = jdn + 68569;
    let n = (4 * l) / 146_097;
    l -= (146_097 * n + 3) / 4;
    let i = (4000 * (l + 1)) / 1_461_001;
    l = l - (1461 * i) / 4 + 31;
    let j = (80 * l) / 2447;
    let day = l - (2447 * j) / 80;
    l = j / 11;
    let month = j + 2 - 12 * l;
    let year = 100 * (n - 49) + i + l;
    (year, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_anchors() {
        assert_eq!(to_jdn(2000, 1, 1), 2_451_545);
        assert_eq!(to_jdn(1, 1, 1), MIN_JDN);
        assert_eq!(to_jdn(9999, 12, 31), MAX_JDN);
        assert_eq!(from_jdn(2_451_545), (2000, 1, 1));
    }

    #[test]
    fn roundtrip_edges() {
        let dates = [
            (1, 1, 1),
            (1582, 10, 15),
            (1900, 2, 28),
            (2000, 2, 29),
            (2100, 3, 1),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            assert_eq!(from_jdn(to_jdn(y, m, d)), (y, m, d), "{y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn validation() {
        assert!(validate(2024, 2, 29).is_ok());
        assert!(validate(2023, 2, 29).is_err());
        assert!(validate(2023, 13, 1).is_err());
        assert!(validate(2023, 4, 31).is_err());
        assert!(validate(0, 1, 1).is_err());
        assert!(validate(10_000, 1, 1).is_err());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert_eq!(days_in_month(2100, 2), 28);
    }
}
