//! `Weekday`: day-of-week enum.

use hd_core::Language;

/// Day of the week.
///
/// Variants are numbered 1–7 (Sunday = 1, Saturday = 7) to match the Hebrew
/// calendar convention, where the week ends on Shabbat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (1).
    Sunday = 1,
    /// Monday (2).
    Monday = 2,
    /// Tuesday (3).
    Tuesday = 3,
    /// Wednesday (4).
    Wednesday = 4,
    /// Thursday (5).
    Thursday = 5,
    /// Friday (6).
    Friday = 6,
    /// Saturday / Shabbat (7).
    Saturday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Sunday … 7 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Weekday of a Julian day number.
    ///
    /// JDN 0 fell on a Monday, so `(jdn + 1) mod 7 + 1` maps onto the
    /// Sunday = 1 ordinal.
    pub fn from_jdn(jdn: i32) -> Self {
        match (jdn + 1).rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Return the ordinal (1 = Sunday … 7 = Saturday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return `true` on Shabbat.
    pub fn is_shabbat(&self) -> bool {
        matches!(self, Weekday::Saturday)
    }

    /// Localized name; `short` selects the abbreviated form.
    pub fn name(&self, language: Language, short: bool) -> &'static str {
        let i = self.ordinal() as usize - 1;
        match (language, short) {
            (Language::Hebrew, false) => HEBREW_LONG[i],
            (Language::Hebrew, true) => HEBREW_SHORT[i],
            (Language::English, false) => ENGLISH_LONG[i],
            (Language::English, true) => ENGLISH_SHORT[i],
        }
    }
}

const HEBREW_LONG: [&str; 7] = ["ראשון", "שני", "שלישי", "רביעי", "חמישי", "שישי", "שבת"];
const HEBREW_SHORT: [&str; 7] = ["א'", "ב'", "ג'", "ד'", "ה'", "ו'", "ש'"];
const ENGLISH_LONG: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const ENGLISH_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name(Language::English, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn jdn_anchor() {
        // 2000-01-01 (JDN 2451545) was a Saturday.
        assert_eq!(Weekday::from_jdn(2_451_545), Weekday::Saturday);
        assert_eq!(Weekday::from_jdn(2_451_546), Weekday::Sunday);
        assert_eq!(Weekday::from_jdn(0), Weekday::Monday);
    }

    #[test]
    fn names() {
        assert_eq!(Weekday::Saturday.name(Language::Hebrew, false), "שבת");
        assert_eq!(Weekday::Sunday.name(Language::Hebrew, true), "א'");
        assert_eq!(Weekday::Friday.to_string(), "Friday");
    }
}
