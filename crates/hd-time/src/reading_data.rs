//! Weekly reading schedules, one per year type.
//!
//! Each schedule is indexed by the number of weeks elapsed since the week of
//! Rosh Hashana. Entries are [`Parasha`](crate::parasha::Parasha) ids; 0 marks
//! a Shabbat that falls on a festival, and merged portions occupy a single
//! entry. Year-type keys are documented on
//! [`YearType::key`](crate::parasha::YearType::key).

/// Readings shared by one or more year types.
#[derive(Debug, Clone, Copy)]
pub struct ReadingRule {
    /// Year-type keys this schedule serves.
    pub year_types: &'static [u16],
    /// Parasha id per elapsed week.
    pub readings: &'static [u8],
}

/// Every reachable year type, in Israel (`< 1000`) and the Diaspora (`>= 1000`).
#[rustfmt::skip]
pub static READING_RULES: &[ReadingRule] = &[
    ReadingRule {
        year_types: &[203, 1203],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25, 0,
            26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60,
            44, 45, 46, 47, 48, 49, 50, 61, 53,
        ],
    },
    ReadingRule {
        year_types: &[205],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
            39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61, 0,
        ],
    },
    ReadingRule {
        year_types: &[225, 315],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25, 0,
            26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41, 60,
            44, 45, 46, 47, 48, 49, 50, 61, 0,
        ],
    },
    ReadingRule {
        year_types: &[227, 317],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38,
            39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[501, 1501],
        readings: &[
            53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            26, 27, 28, 29, 0, 30, 31, 32, 33, 34, 35, 36, 37, 38,
            39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[517],
        readings: &[
            53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25, 0,
            26, 56, 57, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41,
            60, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[521, 1521],
        readings: &[
            53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41,
            60, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[523, 1523],
        readings: &[
            53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            26, 27, 28, 29, 0, 30, 31, 32, 33, 34, 35, 36, 37, 38,
            39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 61, 53,
        ],
    },
    ReadingRule {
        year_types: &[701, 1701],
        readings: &[
            0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
            11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25,
            0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41,
            60, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[703, 1703],
        readings: &[
            0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
            11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
            25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37,
            38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61, 53,
        ],
    },
    ReadingRule {
        year_types: &[723, 1723],
        readings: &[
            0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
            11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25,
            0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41,
            60, 44, 45, 46, 47, 48, 49, 50, 61, 53,
        ],
    },
    ReadingRule {
        year_types: &[725],
        readings: &[
            0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
            11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
            25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37,
            38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61, 0,
        ],
    },
    ReadingRule {
        year_types: &[1205],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 0, 35, 36, 37,
            38, 59, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61, 0,
        ],
    },
    ReadingRule {
        year_types: &[1225, 1315],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25, 0,
            26, 56, 57, 31, 58, 34, 0, 35, 36, 37, 38, 59, 41, 60,
            44, 45, 46, 47, 48, 49, 50, 61, 0,
        ],
    },
    ReadingRule {
        year_types: &[1227, 1317],
        readings: &[
            52, 53, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
            26, 27, 28, 0, 0, 29, 30, 31, 32, 33, 34, 35, 36, 37,
            38, 39, 40, 41, 60, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[1517],
        readings: &[
            53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11,
            12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 55, 24, 25, 0,
            0, 26, 56, 57, 31, 58, 34, 35, 36, 37, 38, 39, 40, 41,
            60, 44, 45, 46, 47, 48, 49, 50, 51, 52,
        ],
    },
    ReadingRule {
        year_types: &[1725],
        readings: &[
            0, 53, 0, 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
            11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
            25, 26, 27, 28, 0, 29, 30, 31, 32, 33, 34, 0, 35, 36,
            37, 38, 59, 41, 60, 44, 45, 46, 47, 48, 49, 50, 61, 0,
        ],
    },
];

/// Look up the schedule for a year-type key.
pub fn readings_for(key: u16) -> Option<&'static [u8]> {
    READING_RULES
        .iter()
        .find(|r| r.year_types.contains(&key))
        .map(|r| r.readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<u16> = READING_RULES
            .iter()
            .flat_map(|r| r.year_types.iter().copied())
            .collect();
        let n = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), n);
        assert_eq!(n, 28);
    }

    #[test]
    fn both_regions_covered() {
        let israel = READING_RULES
            .iter()
            .flat_map(|r| r.year_types.iter())
            .filter(|k| **k < 1000)
            .count();
        assert_eq!(israel, 14);
    }

    #[test]
    fn ids_in_range() {
        for rule in READING_RULES {
            assert!(rule.readings.iter().all(|id| *id <= 61));
        }
    }

    #[test]
    fn unknown_key() {
        assert!(readings_for(999).is_none());
        assert!(readings_for(1203).is_some());
    }
}
