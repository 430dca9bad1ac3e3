//! Language identifiers and display names.
//!
//! Every language the classifier can report lives here, including the
//! reserved undetermined code returned for empty or unrecognizable input.
//! Name lookups are total: they cannot fail, and `und` maps to
//! "Unknown language" with an empty self name.

use serde::{Serialize, Serializer};
use std::fmt;

/// A detectable language, identified by its BCP 47 code.
///
/// Alphabetic languages (Latin and Cyrillic) are scored against trigram
/// profiles; the rest are scored by Unicode script membership. `Und` is
/// the reserved undetermined code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    /// Arabic
    Ar,
    /// Bengali
    Bn,
    /// German
    De,
    /// Greek
    El,
    /// English
    En,
    /// Spanish
    Es,
    /// French
    Fr,
    /// Gujarati
    Gu,
    /// Hebrew
    He,
    /// Hindi
    Hi,
    /// Hungarian
    Hu,
    /// Italian
    It,
    /// Japanese
    Ja,
    /// Korean
    Ko,
    /// Punjabi
    Pa,
    /// Polish
    Pl,
    /// Portuguese
    Pt,
    /// Russian
    Ru,
    /// Serbian written in Latin script
    SrLatn,
    /// Tamil
    Ta,
    /// Telugu
    Te,
    /// Thai
    Th,
    /// Ukrainian
    Uk,
    /// Vietnamese
    Vi,
    /// Chinese
    Zh,
    /// Undetermined
    Und,
}

impl Lang {
    /// Every supported language, undetermined last.
    pub const ALL: [Lang; 26] = [
        Lang::Ar,
        Lang::Bn,
        Lang::De,
        Lang::El,
        Lang::En,
        Lang::Es,
        Lang::Fr,
        Lang::Gu,
        Lang::He,
        Lang::Hi,
        Lang::Hu,
        Lang::It,
        Lang::Ja,
        Lang::Ko,
        Lang::Pa,
        Lang::Pl,
        Lang::Pt,
        Lang::Ru,
        Lang::SrLatn,
        Lang::Ta,
        Lang::Te,
        Lang::Th,
        Lang::Uk,
        Lang::Vi,
        Lang::Zh,
        Lang::Und,
    ];

    /// BCP 47 code, e.g. `"en"` or `"sr-Latn"`.
    pub const fn code(&self) -> &'static str {
        match self {
            Lang::Ar => "ar",
            Lang::Bn => "bn",
            Lang::De => "de",
            Lang::El => "el",
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Fr => "fr",
            Lang::Gu => "gu",
            Lang::He => "he",
            Lang::Hi => "hi",
            Lang::Hu => "hu",
            Lang::It => "it",
            Lang::Ja => "ja",
            Lang::Ko => "ko",
            Lang::Pa => "pa",
            Lang::Pl => "pl",
            Lang::Pt => "pt",
            Lang::Ru => "ru",
            Lang::SrLatn => "sr-Latn",
            Lang::Ta => "ta",
            Lang::Te => "te",
            Lang::Th => "th",
            Lang::Uk => "uk",
            Lang::Vi => "vi",
            Lang::Zh => "zh",
            Lang::Und => "und",
        }
    }

    /// Look up a language by its code, ignoring ASCII case.
    pub fn from_code(code: &str) -> Option<Lang> {
        Lang::ALL
            .iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
            .copied()
    }

    /// English display name. Undetermined reads "Unknown language".
    pub const fn english_name(&self) -> &'static str {
        match self {
            Lang::Ar => "Arabic",
            Lang::Bn => "Bengali",
            Lang::De => "German",
            Lang::El => "Greek",
            Lang::En => "English",
            Lang::Es => "Spanish",
            Lang::Fr => "French",
            Lang::Gu => "Gujarati",
            Lang::He => "Hebrew",
            Lang::Hi => "Hindi",
            Lang::Hu => "Hungarian",
            Lang::It => "Italian",
            Lang::Ja => "Japanese",
            Lang::Ko => "Korean",
            Lang::Pa => "Punjabi",
            Lang::Pl => "Polish",
            Lang::Pt => "Portuguese",
            Lang::Ru => "Russian",
            Lang::SrLatn => "Serbian (Latin)",
            Lang::Ta => "Tamil",
            Lang::Te => "Telugu",
            Lang::Th => "Thai",
            Lang::Uk => "Ukrainian",
            Lang::Vi => "Vietnamese",
            Lang::Zh => "Chinese",
            Lang::Und => "Unknown language",
        }
    }

    /// Name of the language in the language itself. Empty for undetermined.
    pub const fn self_name(&self) -> &'static str {
        match self {
            Lang::Ar => "العربية",
            Lang::Bn => "বাংলা",
            Lang::De => "Deutsch",
            Lang::El => "Ελληνικά",
            Lang::En => "English",
            Lang::Es => "español",
            Lang::Fr => "français",
            Lang::Gu => "ગુજરાતી",
            Lang::He => "עברית",
            Lang::Hi => "हिन्दी",
            Lang::Hu => "magyar",
            Lang::It => "italiano",
            Lang::Ja => "日本語",
            Lang::Ko => "한국어",
            Lang::Pa => "ਪੰਜਾਬੀ",
            Lang::Pl => "polski",
            Lang::Pt => "português",
            Lang::Ru => "русский",
            Lang::SrLatn => "srpski",
            Lang::Ta => "தமிழ்",
            Lang::Te => "తెలుగు",
            Lang::Th => "ไทย",
            Lang::Uk => "українська",
            Lang::Vi => "Tiếng Việt",
            Lang::Zh => "中文",
            Lang::Und => "",
        }
    }

    /// True for the reserved undetermined code.
    pub const fn is_und(&self) -> bool {
        matches!(self, Lang::Und)
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Lang {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for lang in Lang::ALL {
            assert_eq!(Lang::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in Lang::ALL.iter().enumerate() {
            for b in &Lang::ALL[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_from_code_ignores_case() {
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("sr-latn"), Some(Lang::SrLatn));
        assert_eq!(Lang::from_code("klingon"), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(Lang::De.english_name(), "German");
        assert_eq!(Lang::De.self_name(), "Deutsch");
        assert_eq!(Lang::Ja.english_name(), "Japanese");
        assert_eq!(Lang::Ja.self_name(), "日本語");
    }

    #[test]
    fn test_undetermined_names() {
        assert!(Lang::Und.is_und());
        assert_eq!(Lang::Und.code(), "und");
        assert_eq!(Lang::Und.english_name(), "Unknown language");
        assert_eq!(Lang::Und.self_name(), "");
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Lang::SrLatn.to_string(), "sr-Latn");
    }

    #[test]
    fn test_serializes_as_code() {
        let json = serde_json::to_string(&Lang::SrLatn).unwrap();
        assert_eq!(json, "\"sr-Latn\"");
    }
}
