//! Observance and output settings.
//!
//! [`Settings`] bundles the two switches every resolver and formatter
//! depends on: whether Diaspora or Israel observance applies, and which
//! language names are rendered in. It is a plain value; callers that need
//! different settings build a new one.

/// Output language for names and descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Hebrew script, Hebrew numerals.
    #[default]
    Hebrew,
    /// English transliteration, decimal digits.
    English,
}

impl Language {
    /// Return `true` for [`Language::Hebrew`].
    pub fn is_hebrew(&self) -> bool {
        matches!(self, Language::Hebrew)
    }
}

/// Observance settings applied to holiday, reading, and formatting queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// `true` for Diaspora observance (extra festival days), `false` for Israel.
    pub diaspora: bool,
    /// Language used for names and numerals.
    pub language: Language,
}

impl Settings {
    /// Israel observance, Hebrew output.
    pub const ISRAEL: Settings = Settings {
        diaspora: false,
        language: Language::Hebrew,
    };

    /// Diaspora observance, English output.
    pub const DIASPORA: Settings = Settings {
        diaspora: true,
        language: Language::English,
    };

    /// Return a copy with the observance switched.
    pub fn with_diaspora(self, diaspora: bool) -> Self {
        Settings { diaspora, ..self }
    }

    /// Return a copy with the output language switched.
    pub fn with_language(self, language: Language) -> Self {
        Settings { language, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_israel_hebrew() {
        let s = Settings::default();
        assert_eq!(s, Settings::ISRAEL);
        assert!(!s.diaspora);
        assert!(s.language.is_hebrew());
    }

    #[test]
    fn builders_return_new_values() {
        let base = Settings::default();
        let d = base.with_diaspora(true).with_language(Language::English);
        assert_eq!(d, Settings::DIASPORA);
        assert_eq!(base, Settings::ISRAEL);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&Settings::DIASPORA).unwrap();
        assert_eq!(json, r#"{"diaspora":true,"language":"english"}"#);
        let back: Settings = serde_json::from_str(r#"{"diaspora":true}"#).unwrap();
        assert_eq!(back, Settings::ISRAEL.with_diaspora(true));
    }
}
