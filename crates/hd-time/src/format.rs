//! Human-readable description of a date.

use crate::date::CalendarDate;
use crate::gematria::format_hebrew_numeral;
use crate::holiday::holiday_for;
use crate::omer::omer_day;
use hd_core::errors::Result;
use hd_core::{Language, Settings};

fn numeral(n: i32, language: Language, short: bool) -> Result<String> {
    match language {
        Language::Hebrew => format_hebrew_numeral(n, short),
        Language::English => Ok(n.to_string()),
    }
}

/// Describe `date` in the configured language.
///
/// The result holds the weekday, day of month, month, and year. Unless
/// `short` is set it continues with the Omer count and the holiday of the
/// day under the configured observance.
///
/// Fails only for Hebrew output of years above 9999, which have no letter
/// numeral.
///
/// ```
/// use hd_core::{Language, Settings};
/// use hd_time::{format::format_hebrew_date, CalendarDate};
///
/// let rh = CalendarDate::from_gregorian(2024, 10, 3).unwrap();
/// let english = Settings::default().with_language(Language::English);
/// assert_eq!(
///     format_hebrew_date(&rh, &english, false).unwrap(),
///     "Thursday 1 Tishrei 5785 Rosh Hashana I"
/// );
/// ```
pub fn format_hebrew_date(date: &CalendarDate, settings: &Settings, short: bool) -> Result<String> {
    let language = settings.language;
    let hebrew = language.is_hebrew();
    let day = numeral(i32::from(date.hebrew_day()), language, short)?;
    let year = numeral(date.hebrew_year(), language, short)?;

    let mut out = String::new();
    if hebrew {
        out.push_str("יום ");
    }
    out.push_str(date.weekday().name(language, short));
    out.push(' ');
    out.push_str(&day);
    out.push(' ');
    if hebrew {
        out.push('ב');
    }
    out.push_str(date.hebrew_month().name(language));
    out.push(' ');
    out.push_str(&year);
    if short {
        return Ok(out);
    }

    let omer = omer_day(date);
    if omer > 0 {
        out.push(' ');
        out.push_str(&numeral(omer, language, false)?);
        out.push_str(if hebrew { " בעומר" } else { " in the Omer" });
    }

    let holiday = holiday_for(date, settings.diaspora);
    if !holiday.is_none() {
        out.push(' ');
        out.push_str(holiday.description(language));
    }
    Ok(out)
}
