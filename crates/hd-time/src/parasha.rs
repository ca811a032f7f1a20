//! Weekly Torah reading (parasha) resolution.
//!
//! The schedule of a year depends only on its [`YearType`]: the weekday of
//! Rosh Hashana, the length class, the weekday of Pesach, and whether the
//! Diaspora's second festival days apply. A date maps to the reading of the
//! Shabbat that ends its week.

use crate::date::CalendarDate;
use crate::hebrew::YearKind;
use crate::reading_data::readings_for;
use crate::weekday::Weekday;
use hd_core::errors::{Error, Result};
use hd_core::Language;
use tracing::debug;

/// Weekly Torah portion, by stable id.
///
/// Ids 1–54 are the single portions in order; 55–61 are the pairs read
/// together in years without enough free Shabbatot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Parasha {
    /// No regular reading (festival Shabbat).
    None = 0,
    /// Bereshit.
    Bereshit = 1,
    /// Noach.
    Noach = 2,
    /// Lech-Lecha.
    LechLecha = 3,
    /// Vayera.
    Vayera = 4,
    /// Chayei Sara.
    ChayeiSara = 5,
    /// Toldot.
    Toldot = 6,
    /// Vayetzei.
    Vayetzei = 7,
    /// Vayishlach.
    Vayishlach = 8,
    /// Vayeshev.
    Vayeshev = 9,
    /// Miketz.
    Miketz = 10,
    /// Vayigash.
    Vayigash = 11,
    /// Vayechi.
    Vayechi = 12,
    /// Shemot.
    Shemot = 13,
    /// Vaera.
    Vaera = 14,
    /// Bo.
    Bo = 15,
    /// Beshalach.
    Beshalach = 16,
    /// Yitro.
    Yitro = 17,
    /// Mishpatim.
    Mishpatim = 18,
    /// Terumah.
    Terumah = 19,
    /// Tetzaveh.
    Tetzaveh = 20,
    /// Ki Tisa.
    KiTisa = 21,
    /// Vayakhel.
    Vayakhel = 22,
    /// Pekudei.
    Pekudei = 23,
    /// Vayikra.
    Vayikra = 24,
    /// Tzav.
    Tzav = 25,
    /// Shmini.
    Shmini = 26,
    /// Tazria.
    Tazria = 27,
    /// Metzora.
    Metzora = 28,
    /// Achrei Mot.
    AchreiMot = 29,
    /// Kedoshim.
    Kedoshim = 30,
    /// Emor.
    Emor = 31,
    /// Behar.
    Behar = 32,
    /// Bechukotai.
    Bechukotai = 33,
    /// Bamidbar.
    Bamidbar = 34,
    /// Nasso.
    Nasso = 35,
    /// Beha'alotcha.
    Behaalotcha = 36,
    /// Sh'lach.
    Shlach = 37,
    /// Korach.
    Korach = 38,
    /// Chukat.
    Chukat = 39,
    /// Balak.
    Balak = 40,
    /// Pinchas.
    Pinchas = 41,
    /// Matot.
    Matot = 42,
    /// Masei.
    Masei = 43,
    /// Devarim.
    Devarim = 44,
    /// Vaetchanan.
    Vaetchanan = 45,
    /// Eikev.
    Eikev = 46,
    /// Re'eh.
    Reeh = 47,
    /// Shoftim.
    Shoftim = 48,
    /// Ki Teitzei.
    KiTeitzei = 49,
    /// Ki Tavo.
    KiTavo = 50,
    /// Nitzavim.
    Nitzavim = 51,
    /// Vayeilech.
    Vayeilech = 52,
    /// Ha'Azinu.
    HaAzinu = 53,
    /// V'Zot HaBracha.
    VezotHaberakhah = 54,
    /// Vayakhel-Pekudei.
    VayakhelPekudei = 55,
    /// Tazria-Metzora.
    TazriaMetzora = 56,
    /// Achrei Mot-Kedoshim.
    AchreiMotKedoshim = 57,
    /// Behar-Bechukotai.
    BeharBechukotai = 58,
    /// Chukat-Balak.
    ChukatBalak = 59,
    /// Matot-Masei.
    MatotMasei = 60,
    /// Nitzavim-Vayeilech.
    NitzavimVayeilech = 61,
}

const ALL: [Parasha; 62] = [
    Parasha::None,
    Parasha::Bereshit,
    Parasha::Noach,
    Parasha::LechLecha,
    Parasha::Vayera,
    Parasha::ChayeiSara,
    Parasha::Toldot,
    Parasha::Vayetzei,
    Parasha::Vayishlach,
    Parasha::Vayeshev,
    Parasha::Miketz,
    Parasha::Vayigash,
    Parasha::Vayechi,
    Parasha::Shemot,
    Parasha::Vaera,
    Parasha::Bo,
    Parasha::Beshalach,
    Parasha::Yitro,
    Parasha::Mishpatim,
    Parasha::Terumah,
    Parasha::Tetzaveh,
    Parasha::KiTisa,
    Parasha::Vayakhel,
    Parasha::Pekudei,
    Parasha::Vayikra,
    Parasha::Tzav,
    Parasha::Shmini,
    Parasha::Tazria,
    Parasha::Metzora,
    Parasha::AchreiMot,
    Parasha::Kedoshim,
    Parasha::Emor,
    Parasha::Behar,
    Parasha::Bechukotai,
    Parasha::Bamidbar,
    Parasha::Nasso,
    Parasha::Behaalotcha,
    Parasha::Shlach,
    Parasha::Korach,
    Parasha::Chukat,
    Parasha::Balak,
    Parasha::Pinchas,
    Parasha::Matot,
    Parasha::Masei,
    Parasha::Devarim,
    Parasha::Vaetchanan,
    Parasha::Eikev,
    Parasha::Reeh,
    Parasha::Shoftim,
    Parasha::KiTeitzei,
    Parasha::KiTavo,
    Parasha::Nitzavim,
    Parasha::Vayeilech,
    Parasha::HaAzinu,
    Parasha::VezotHaberakhah,
    Parasha::VayakhelPekudei,
    Parasha::TazriaMetzora,
    Parasha::AchreiMotKedoshim,
    Parasha::BeharBechukotai,
    Parasha::ChukatBalak,
    Parasha::MatotMasei,
    Parasha::NitzavimVayeilech,
];

static ENGLISH_NAMES: [&str; 62] = [
    "",
    "Bereshit",
    "Noach",
    "Lech-Lecha",
    "Vayera",
    "Chayei Sara",
    "Toldot",
    "Vayetzei",
    "Vayishlach",
    "Vayeshev",
    "Miketz",
    "Vayigash",
    "Vayechi",
    "Shemot",
    "Vaera",
    "Bo",
    "Beshalach",
    "Yitro",
    "Mishpatim",
    "Terumah",
    "Tetzaveh",
    "Ki Tisa",
    "Vayakhel",
    "Pekudei",
    "Vayikra",
    "Tzav",
    "Shmini",
    "Tazria",
    "Metzora",
    "Achrei Mot",
    "Kedoshim",
    "Emor",
    "Behar",
    "Bechukotai",
    "Bamidbar",
    "Nasso",
    "Beha'alotcha",
    "Sh'lach",
    "Korach",
    "Chukat",
    "Balak",
    "Pinchas",
    "Matot",
    "Masei",
    "Devarim",
    "Vaetchanan",
    "Eikev",
    "Re'eh",
    "Shoftim",
    "Ki Teitzei",
    "Ki Tavo",
    "Nitzavim",
    "Vayeilech",
    "Ha'Azinu",
    "V'Zot HaBracha",
    "Vayakhel-Pekudei",
    "Tazria-Metzora",
    "Achrei Mot-Kedoshim",
    "Behar-Bechukotai",
    "Chukat-Balak",
    "Matot-Masei",
    "Nitzavim-Vayeilech",
];

static HEBREW_NAMES: [&str; 62] = [
    "",
    "בראשית",
    "נח",
    "לך לך",
    "וירא",
    "חיי שרה",
    "תולדות",
    "ויצא",
    "וישלח",
    "וישב",
    "מקץ",
    "ויגש",
    "ויחי",
    "שמות",
    "וארא",
    "בא",
    "בשלח",
    "יתרו",
    "משפטים",
    "תרומה",
    "תצוה",
    "כי תשא",
    "ויקהל",
    "פקודי",
    "ויקרא",
    "צו",
    "שמיני",
    "תזריע",
    "מצורע",
    "אחרי מות",
    "קדושים",
    "אמור",
    "בהר",
    "בחוקתי",
    "במדבר",
    "נשא",
    "בהעלותך",
    "שלח",
    "קרח",
    "חוקת",
    "בלק",
    "פינחס",
    "מטות",
    "מסעי",
    "דברים",
    "ואתחנן",
    "עקב",
    "ראה",
    "שופטים",
    "כי תצא",
    "כי תבוא",
    "נצבים",
    "וילך",
    "האזינו",
    "וזאת הברכה",
    "ויקהל-פקודי",
    "תזריע-מצורע",
    "אחרי מות-קדושים",
    "בהר-בחוקתי",
    "חוקת-בלק",
    "מטות-מסעי",
    "נצבים-וילך",
];

impl Parasha {
    /// Construct from the numeric id (0–61).
    pub fn from_id(id: u8) -> Option<Self> {
        ALL.get(id as usize).copied()
    }

    /// Numeric id.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    /// Return `true` when two portions are read together.
    pub fn is_combined(&self) -> bool {
        self.id() >= Parasha::VayakhelPekudei.id()
    }

    /// Return `true` for [`Parasha::None`].
    pub fn is_none(&self) -> bool {
        *self == Parasha::None
    }

    /// Localized name; empty for [`Parasha::None`].
    pub fn name(&self, language: Language) -> &'static str {
        match language {
            Language::Hebrew => HEBREW_NAMES[self.id() as usize],
            Language::English => ENGLISH_NAMES[self.id() as usize],
        }
    }
}

impl std::fmt::Display for Parasha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Language::English))
    }
}

/// The features of a Hebrew year that determine its reading schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearType {
    /// Diaspora observance (second festival days).
    pub diaspora: bool,
    /// Weekday of 1 Tishrei.
    pub rosh_hashana: Weekday,
    /// Length class.
    pub kind: YearKind,
    /// Weekday of 15 Nisan.
    pub pesach: Weekday,
}

impl YearType {
    /// Year type of the Hebrew year containing `date`.
    pub fn of(date: &CalendarDate, diaspora: bool) -> Self {
        YearType {
            diaspora,
            rosh_hashana: date.rosh_hashana_weekday(),
            kind: date.year_kind(),
            pesach: date.pesach_weekday(),
        }
    }

    /// Composite key `D·1000 + R·100 + K·10 + P`: Diaspora flag, Rosh
    /// Hashana weekday, length class (0–2), Pesach weekday.
    pub fn key(&self) -> u16 {
        u16::from(self.diaspora) * 1000
            + u16::from(self.rosh_hashana.ordinal()) * 100
            + u16::from(self.kind.index()) * 10
            + u16::from(self.pesach.ordinal())
    }
}

/// Resolve the weekly reading for the week containing `date`.
///
/// Returns [`Parasha::None`] when that Shabbat is a festival. Fails with
/// [`Error::InternalTableGap`] only if the schedule table is incomplete.
pub fn parasha_for(date: &CalendarDate, diaspora: bool) -> Result<Parasha> {
    let year_type = YearType::of(date, diaspora);
    let key = year_type.key();
    let days = date.days_since_rosh_hashana();
    let weeks = ((days + i32::from(year_type.rosh_hashana.ordinal()) - 1) / 7) as usize;
    debug!(jdn = date.jdn(), key, days, weeks, "resolving parasha");

    // V'Zot HaBracha is read on Simchat Torah: 22 Tishrei in Israel,
    // 23 Tishrei in the Diaspora.
    let simchat_torah = match weeks {
        3 if diaspora => days <= 22 && date.weekday() != Weekday::Saturday,
        3 => days <= 21,
        4 => diaspora && days == 22,
        _ => false,
    };
    if simchat_torah {
        return Ok(Parasha::VezotHaberakhah);
    }

    let gap = Error::InternalTableGap {
        year_type: key,
        week: weeks,
    };
    let readings = readings_for(key).ok_or_else(|| gap.clone())?;
    let id = *readings.get(weeks).ok_or(gap)?;
    Ok(Parasha::from_id(id).expect("reading table ids are valid parasha ids"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn ids_round_trip() {
        for id in 0..=61u8 {
            assert_eq!(Parasha::from_id(id).unwrap().id(), id);
        }
        assert!(Parasha::from_id(62).is_none());
    }

    #[test]
    fn combined_portions() {
        assert!(!Parasha::VezotHaberakhah.is_combined());
        assert!(Parasha::VayakhelPekudei.is_combined());
        assert!(Parasha::NitzavimVayeilech.is_combined());
    }

    #[test]
    fn names() {
        assert_eq!(Parasha::Bereshit.name(Language::Hebrew), "בראשית");
        assert_eq!(Parasha::MatotMasei.name(Language::English), "Matot-Masei");
        assert_eq!(Parasha::None.name(Language::English), "");
        assert_eq!(Parasha::Noach.to_string(), "Noach");
    }

    #[test]
    fn year_type_key() {
        // 5785: Rosh Hashana Thursday, 355 days, Pesach Sunday.
        let yt = YearType::of(&date(2024, 10, 26), true);
        assert_eq!(yt.rosh_hashana, Weekday::Thursday);
        assert_eq!(yt.kind, YearKind::Complete);
        assert_eq!(yt.pesach, Weekday::Sunday);
        assert_eq!(yt.key(), 1521);
        assert_eq!(YearType { diaspora: false, ..yt }.key(), 521);
    }

    #[test]
    fn bereshit_after_simchat_torah() {
        assert_eq!(parasha_for(&date(2024, 10, 26), false).unwrap(), Parasha::Bereshit);
        assert_eq!(parasha_for(&date(2024, 10, 26), true).unwrap(), Parasha::Bereshit);
    }

    #[test]
    fn simchat_torah_differs_by_region() {
        // Friday 23 Tishrei 5785.
        let d = date(2024, 10, 25);
        assert_eq!(parasha_for(&d, true).unwrap(), Parasha::VezotHaberakhah);
        assert_eq!(parasha_for(&d, false).unwrap(), Parasha::Bereshit);
    }
}
