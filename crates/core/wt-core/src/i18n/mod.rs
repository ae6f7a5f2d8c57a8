//! Static translation table: language code -> text key -> localized text.
//!
//! Lookups never fail. An unknown language or key yields the key itself.

pub mod en;
pub mod ru;
pub mod uz;

use std::collections::HashMap;
use std::sync::LazyLock;

pub const CITY: &str = "City";
pub const LOCAL_TIME: &str = "Local Time";
pub const TIME_ZONE: &str = "Time Zone";
pub const LOCAL: &str = "Local";
pub const ADDED_CITY: &str = "Added city";
pub const ALREADY_ADDED: &str = "is already added";
pub const REMOVED_CITY: &str = "Removed city";
pub const NOT_FOUND: &str = "not found";
pub const LANGUAGE_SET_TO: &str = "Language set to";

type Table = HashMap<&'static str, HashMap<&'static str, &'static str>>;

static TRANSLATIONS: LazyLock<Table> = LazyLock::new(|| {
    let languages: [(&str, &[(&str, &str)]); 3] =
        [("en", en::ENTRIES), ("ru", ru::ENTRIES), ("uz", uz::ENTRIES)];

    languages
        .into_iter()
        .map(|(code, entries)| (code, entries.iter().copied().collect()))
        .collect()
});

/// Language codes with a translation table, sorted.
pub fn supported_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = TRANSLATIONS.keys().copied().collect();
    codes.sort_unstable();
    codes
}

pub fn is_supported(code: &str) -> bool {
    TRANSLATIONS.contains_key(code)
}

pub fn translate<'a>(language: &str, key: &'a str) -> &'a str {
    TRANSLATIONS
        .get(language)
        .and_then(|table| table.get(key))
        .copied()
        .unwrap_or(key)
}

/// Translator bound to one language code.
#[derive(Debug, Clone)]
pub struct Translator {
    language: String,
}

impl Translator {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(&self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        CITY,
        LOCAL_TIME,
        TIME_ZONE,
        LOCAL,
        ADDED_CITY,
        ALREADY_ADDED,
        REMOVED_CITY,
        NOT_FOUND,
        LANGUAGE_SET_TO,
    ];

    #[test]
    fn translates_known_key() {
        assert_eq!(translate("ru", "City"), "Город");
        assert_eq!(translate("uz", "not found"), "topilmadi");
        assert_eq!(translate("en", "Time Zone"), "Time Zone");
    }

    #[test]
    fn unknown_language_falls_back_to_key() {
        assert_eq!(translate("xx", "City"), "City");
        assert_eq!(translate("", "Local Time"), "Local Time");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(translate("en", "NoSuchKey"), "NoSuchKey");
        assert_eq!(translate("ru", "NoSuchKey"), "NoSuchKey");
    }

    #[test]
    fn language_codes_are_case_sensitive() {
        assert_eq!(translate("RU", "City"), "City");
    }

    #[test]
    fn every_language_covers_every_key() {
        for code in supported_languages() {
            let table = &TRANSLATIONS[code];
            for key in KEYS {
                assert!(table.contains_key(key), "{} is missing '{}'", code, key);
            }
        }
    }

    #[test]
    fn supported_set() {
        assert_eq!(supported_languages(), vec!["en", "ru", "uz"]);
        assert!(is_supported("uz"));
        assert!(!is_supported("xx"));
    }

    #[test]
    fn translator_binds_language() {
        let tr = Translator::new("uz");
        assert_eq!(tr.language(), "uz");
        assert_eq!(tr.t(CITY), "Shahar");
        assert_eq!(Translator::new("xx").t(CITY), "City");
    }
}
