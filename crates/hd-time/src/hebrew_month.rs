//! `HebrewMonth`: month-of-year enum for the Hebrew calendar.

use hd_core::Language;

/// Month of the Hebrew year.
///
/// Numbered from Tishrei (1) so that the civil year starts at month 1.
/// Leap years replace Adar (6) with Adar I (13) and Adar II (14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HebrewMonth {
    /// Tishrei (1).
    Tishrei = 1,
    /// Cheshvan (2).
    Cheshvan = 2,
    /// Kislev (3).
    Kislev = 3,
    /// Tevet (4).
    Tevet = 4,
    /// Shvat (5).
    Shvat = 5,
    /// Adar (6), common years only.
    Adar = 6,
    /// Nisan (7).
    Nisan = 7,
    /// Iyar (8).
    Iyar = 8,
    /// Sivan (9).
    Sivan = 9,
    /// Tamuz (10).
    Tamuz = 10,
    /// Av (11).
    Av = 11,
    /// Elul (12).
    Elul = 12,
    /// Adar I (13), leap years only.
    AdarI = 13,
    /// Adar II (14), leap years only.
    AdarII = 14,
}

/// Months of a common year in calendar order.
pub const COMMON_YEAR_MONTHS: [HebrewMonth; 12] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shvat,
    HebrewMonth::Adar,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tamuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

/// Months of a leap year in calendar order.
pub const LEAP_YEAR_MONTHS: [HebrewMonth; 13] = [
    HebrewMonth::Tishrei,
    HebrewMonth::Cheshvan,
    HebrewMonth::Kislev,
    HebrewMonth::Tevet,
    HebrewMonth::Shvat,
    HebrewMonth::AdarI,
    HebrewMonth::AdarII,
    HebrewMonth::Nisan,
    HebrewMonth::Iyar,
    HebrewMonth::Sivan,
    HebrewMonth::Tamuz,
    HebrewMonth::Av,
    HebrewMonth::Elul,
];

impl HebrewMonth {
    /// Construct from a number (1 = Tishrei … 14 = Adar II).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HebrewMonth::Tishrei),
            2 => Some(HebrewMonth::Cheshvan),
            3 => Some(HebrewMonth::Kislev),
            4 => Some(HebrewMonth::Tevet),
            5 => Some(HebrewMonth::Shvat),
            6 => Some(HebrewMonth::Adar),
            7 => Some(HebrewMonth::Nisan),
            8 => Some(HebrewMonth::Iyar),
            9 => Some(HebrewMonth::Sivan),
            10 => Some(HebrewMonth::Tamuz),
            11 => Some(HebrewMonth::Av),
            12 => Some(HebrewMonth::Elul),
            13 => Some(HebrewMonth::AdarI),
            14 => Some(HebrewMonth::AdarII),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Localized name.
    pub fn name(&self, language: Language) -> &'static str {
        let i = self.number() as usize - 1;
        match language {
            Language::Hebrew => HEBREW_NAMES[i],
            Language::English => ENGLISH_NAMES[i],
        }
    }
}

const ENGLISH_NAMES: [&str; 14] = [
    "Tishrei", "Cheshvan", "Kislev", "Tevet", "Shvat", "Adar", "Nisan", "Iyar", "Sivan", "Tamuz",
    "Av", "Elul", "Adar I", "Adar II",
];

const HEBREW_NAMES: [&str; 14] = [
    "תשרי", "חשון", "כסלו", "טבת", "שבט", "אדר", "ניסן", "אייר", "סיון", "תמוז", "אב", "אלול",
    "אדר א'", "אדר ב'",
];

impl std::fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name(Language::English))
    }
}

impl From<HebrewMonth> for u8 {
    fn from(m: HebrewMonth) -> u8 {
        m as u8
    }
}
