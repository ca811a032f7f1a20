//! Property-based tests for calendar conversion.

use hd_time::hebrew::{is_leap_year, month_length, year_length};
use hd_time::{gematria, CalendarDate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn gregorian_round_trip(days in 0i32..3_652_058) {
        let d = CalendarDate::from_jdn(1_721_426 + days).unwrap();
        let (y, m, day) = d.gregorian_components();
        prop_assert_eq!(CalendarDate::from_gregorian(y, m, day).unwrap(), d);
    }

    #[test]
    fn hebrew_round_trip(days in 0i32..3_652_058) {
        let d = CalendarDate::from_jdn(1_721_426 + days).unwrap();
        let (day, month, year) = d.hebrew_components();
        let back = CalendarDate::from_hebrew(day, month, year).unwrap();
        prop_assert_eq!(back.jdn(), d.jdn());
        prop_assert_eq!(back.hebrew_components(), (day, month, year));
    }

    #[test]
    fn year_lengths_are_canonical(year in 3761i32..=13_760) {
        let length = year_length(year);
        prop_assert!([353, 354, 355, 383, 384, 385].contains(&length));
        prop_assert_eq!(length > 355, is_leap_year(year));
    }

    #[test]
    fn leap_years_follow_the_metonic_cycle(year in 3761i32..=13_760) {
        prop_assert_eq!(
            is_leap_year(year),
            [0, 3, 6, 8, 11, 14, 17].contains(&year.rem_euclid(19))
        );
    }

    #[test]
    fn months_sum_to_year_length(year in 3762i32..=13_760) {
        let total: u16 = (1..=14u8)
            .filter_map(hd_time::HebrewMonth::from_number)
            .map(|m| u16::from(month_length(m, year)))
            .sum();
        prop_assert_eq!(total, year_length(year));
    }

    #[test]
    fn weekday_advances_daily(days in 0i32..3_652_000) {
        let d = CalendarDate::from_jdn(1_721_426 + days).unwrap();
        let next = d.add_days(1).unwrap();
        prop_assert_eq!(next.weekday().ordinal() % 7, (d.weekday().ordinal() + 1) % 7);
    }

    #[test]
    fn numerals_never_spell_the_divine_name(n in 0i32..10_000) {
        let s = gematria::format_hebrew_numeral(n, true).unwrap();
        prop_assert!(!s.contains("יה") && !s.contains("יו"));
    }
}
