//! Hebrew numerals (gematria).

use hd_core::errors::{Error, Result};
use hd_core::ensure;

const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const HUNDREDS: [&str; 5] = ["", "ק", "ר", "ש", "ת"];

/// Render `n` (0–9999) in Hebrew letters.
///
/// Thousands are written as a single letter followed by a geresh, then a
/// space when lower digits follow. 15 and 16 are spelled ט״ו / ט״ז. Unless `short` is set, a geresh
/// is appended to a single letter and a gershayim is inserted before the
/// last letter otherwise.
///
/// ```
/// use hd_time::gematria::format_hebrew_numeral;
/// assert_eq!(format_hebrew_numeral(5785, false).unwrap(), "ה' תשפ\"ה");
/// assert_eq!(format_hebrew_numeral(15, true).unwrap(), "טו");
/// ```
pub fn format_hebrew_numeral(n: i32, short: bool) -> Result<String> {
    ensure!(
        (0..=9999).contains(&n),
        Error::InvalidNumeralRange {
            value: i64::from(n),
            min: 0,
            max: 9999,
        }
    );

    let thousands = n as usize / 1000;
    let mut rest = n as usize % 1000;
    let mut body = String::new();
    while rest >= 400 {
        body.push_str(HUNDREDS[4]);
        rest -= 400;
    }
    if rest >= 100 {
        body.push_str(HUNDREDS[rest / 100]);
        rest %= 100;
    }
    if matches!(rest, 15 | 16) {
        body.push_str(ONES[9]);
        body.push_str(ONES[rest - 9]);
    } else {
        body.push_str(TENS[rest / 10]);
        body.push_str(ONES[rest % 10]);
    }

    if !short && (thousands == 0 || !body.is_empty()) {
        punctuate(&mut body);
    }
    if thousands == 0 {
        return Ok(body);
    }
    let mut out = format!("{}'", ONES[thousands]);
    if !body.is_empty() {
        out.push(' ');
        out.push_str(&body);
    }
    Ok(out)
}

fn punctuate(s: &mut String) {
    match s.char_indices().last() {
        Some((idx, _)) if s.chars().count() >= 2 => s.insert(idx, '"'),
        _ => s.push('\''),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(n: i32) -> String {
        format_hebrew_numeral(n, false).unwrap()
    }

    #[test]
    fn single_letters() {
        assert_eq!(fmt(1), "א'");
        assert_eq!(fmt(10), "י'");
        assert_eq!(fmt(400), "ת'");
    }

    #[test]
    fn divine_name_avoided() {
        assert_eq!(fmt(15), "ט\"ו");
        assert_eq!(fmt(16), "ט\"ז");
        assert_eq!(fmt(115), "קט\"ו");
        assert_eq!(fmt(17), "י\"ז");
    }

    #[test]
    fn years() {
        assert_eq!(fmt(5780), "ה' תש\"פ");
        assert_eq!(fmt(5785), "ה' תשפ\"ה");
        assert_eq!(fmt(5000), "ה'");
        assert_eq!(format_hebrew_numeral(5784, true).unwrap(), "ה' תשפד");
    }

    #[test]
    fn repeated_tav() {
        assert_eq!(fmt(900), "תת\"ק");
        assert_eq!(format_hebrew_numeral(800, true).unwrap(), "תת");
    }

    #[test]
    fn zero() {
        assert_eq!(fmt(0), "'");
        assert_eq!(format_hebrew_numeral(0, true).unwrap(), "");
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            format_hebrew_numeral(10_000, false),
            Err(Error::InvalidNumeralRange { value: 10_000, .. })
        ));
        assert!(format_hebrew_numeral(-1, true).is_err());
    }
}
