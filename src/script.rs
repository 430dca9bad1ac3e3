//! Script-based language evidence.
//!
//! Languages written in a script no other supported language uses are
//! scored by counting characters of that script instead of trigrams.

use unicode_script::{Script, UnicodeScript};

use crate::lang::Lang;

/// A language recognized by the script its characters belong to.
pub(crate) struct ScriptRule {
    pub lang: Lang,
    pub scripts: &'static [Script],
}

/// Languages detected by script. Japanese claims both kana scripts;
/// kanji count toward Chinese, which is how mixed Japanese text still
/// wins on its kana share.
pub(crate) static SCRIPT_RULES: &[ScriptRule] = &[
    ScriptRule { lang: Lang::Ar, scripts: &[Script::Arabic] },
    ScriptRule { lang: Lang::Bn, scripts: &[Script::Bengali] },
    ScriptRule { lang: Lang::El, scripts: &[Script::Greek] },
    ScriptRule { lang: Lang::Gu, scripts: &[Script::Gujarati] },
    ScriptRule { lang: Lang::He, scripts: &[Script::Hebrew] },
    ScriptRule { lang: Lang::Hi, scripts: &[Script::Devanagari] },
    ScriptRule { lang: Lang::Ja, scripts: &[Script::Hiragana, Script::Katakana] },
    ScriptRule { lang: Lang::Ko, scripts: &[Script::Hangul] },
    ScriptRule { lang: Lang::Pa, scripts: &[Script::Gurmukhi] },
    ScriptRule { lang: Lang::Ta, scripts: &[Script::Tamil] },
    ScriptRule { lang: Lang::Te, scripts: &[Script::Telugu] },
    ScriptRule { lang: Lang::Th, scripts: &[Script::Thai] },
    ScriptRule { lang: Lang::Zh, scripts: &[Script::Han] },
];

/// Count the characters of `text` belonging to any of `scripts`.
pub(crate) fn script_hits(scripts: &[Script], text: &str) -> u32 {
    text.chars()
        .filter(|ch| scripts.contains(&ch.script()))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(lang: Lang) -> &'static ScriptRule {
        SCRIPT_RULES
            .iter()
            .find(|r| r.lang == lang)
            .unwrap_or_else(|| panic!("no script rule for {lang}"))
    }

    #[test]
    fn test_hangul_hits() {
        assert_eq!(script_hits(rule(Lang::Ko).scripts, "안녕하세요"), 5);
    }

    #[test]
    fn test_kana_both_count_for_japanese() {
        // Hiragana and katakana both hit; the han character does not.
        assert_eq!(script_hits(rule(Lang::Ja).scripts, "すしサシ何"), 4);
        assert_eq!(script_hits(rule(Lang::Zh).scripts, "すしサシ何"), 1);
    }

    #[test]
    fn test_latin_never_hits() {
        for r in SCRIPT_RULES {
            assert_eq!(script_hits(r.scripts, "plain ascii text"), 0);
        }
    }

    #[test]
    fn test_rules_cover_distinct_languages() {
        let mut langs: Vec<Lang> = SCRIPT_RULES.iter().map(|r| r.lang).collect();
        langs.dedup();
        assert_eq!(langs.len(), SCRIPT_RULES.len());
    }
}
