//! Counting of the Omer.
//!
//! The Omer is counted for 49 days from 16 Nisan through 5 Sivan, the eve of
//! Shavuot.

use crate::date::CalendarDate;
use crate::hebrew;
use crate::hebrew_month::HebrewMonth;
use hd_core::errors::{Error, Result};
use hd_core::ensure;

/// Last day of the count.
pub const OMER_DAYS: i32 = 49;

const ONES: [&str; 10] = [
    "", "אחד", "שנים", "שלושה", "ארבעה", "חמשה", "ששה", "שבעה", "שמונה", "תשעה",
];
const TENS: [&str; 5] = ["", "עשרה", "עשרים", "שלושים", "ארבעים"];

/// Day of the Omer count (1–49) falling on `date`, or 0 outside the count.
pub fn omer_day(date: &CalendarDate) -> i32 {
    let start = hebrew::to_jdn(16, HebrewMonth::Nisan, date.hebrew_year());
    let day = date.jdn() - start + 1;
    if (1..=OMER_DAYS).contains(&day) {
        day
    } else {
        0
    }
}

/// Hebrew phrase used to count day `day` of the Omer.
///
/// ```
/// use hd_time::omer::format_omer_phrase;
/// assert_eq!(format_omer_phrase(1).unwrap(), "היום יום אחד לעומר");
/// ```
pub fn format_omer_phrase(day: i32) -> Result<String> {
    ensure!(
        (1..=OMER_DAYS).contains(&day),
        Error::InvalidNumeralRange {
            value: i64::from(day),
            min: 1,
            max: i64::from(OMER_DAYS),
        }
    );
    let day = day as usize;
    let (ten, one) = (day / 10, day % 10);

    let mut s = String::from("היום ");
    match day {
        1 => s.push_str("יום אחד "),
        2 => s.push_str("שני ימים "),
        3..=9 => {
            s.push_str(ONES[one]);
            s.push_str(" ימים ");
        }
        10 => s.push_str("עשרה ימים "),
        11..=19 => {
            s.push_str(ONES[one]);
            s.push_str(" עשר יום ");
        }
        _ => {
            if one > 0 {
                s.push_str(ONES[one]);
                s.push_str(" ו");
            }
            s.push_str(TENS[ten]);
            s.push_str(" יום ");
        }
    }

    if day >= 7 {
        let (weeks, days) = (day / 7, day % 7);
        s.push_str("שהם ");
        match weeks {
            1 => s.push_str("שבוע אחד "),
            2 => s.push_str("שני שבועות "),
            _ => {
                s.push_str(ONES[weeks]);
                s.push_str(" שבועות ");
            }
        }
        match days {
            0 => {}
            1 => s.push_str("ויום אחד "),
            2 => s.push_str("ושני ימים "),
            _ => {
                s.push('ו');
                s.push_str(ONES[days]);
                s.push_str(" ימים ");
            }
        }
    }
    s.push_str("לעומר");
    Ok(s)
}
