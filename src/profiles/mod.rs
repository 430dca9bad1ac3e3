//! Reference trigram profiles for the languages detected by trigram
//! frequency. Each submodule holds one language's 300 most frequent
//! trigrams, most frequent first, generated from a sample corpus.

use std::sync::OnceLock;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::lang::Lang;

mod de;
mod en;
mod es;
mod fr;
mod hu;
mod it;
mod pl;
mod pt;
mod ru;
mod sr_latn;
mod uk;
mod vi;

/// Every trigram-profiled language paired with its reference trigrams.
pub(crate) static PROFILES: &[(Lang, &[&str])] = &[
    (Lang::De, de::TRIGRAMS),
    (Lang::En, en::TRIGRAMS),
    (Lang::Es, es::TRIGRAMS),
    (Lang::Fr, fr::TRIGRAMS),
    (Lang::Hu, hu::TRIGRAMS),
    (Lang::It, it::TRIGRAMS),
    (Lang::Pl, pl::TRIGRAMS),
    (Lang::Pt, pt::TRIGRAMS),
    (Lang::Ru, ru::TRIGRAMS),
    (Lang::SrLatn, sr_latn::TRIGRAMS),
    (Lang::Uk, uk::TRIGRAMS),
    (Lang::Vi, vi::TRIGRAMS),
];

/// Profile trigrams as hash sets for O(1) membership tests during scoring.
pub(crate) fn profile_sets() -> &'static FxHashMap<Lang, FxHashSet<&'static str>> {
    static SETS: OnceLock<FxHashMap<Lang, FxHashSet<&'static str>>> = OnceLock::new();
    SETS.get_or_init(|| {
        PROFILES
            .iter()
            .map(|&(lang, trigrams)| (lang, trigrams.iter().copied().collect()))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_cover_twelve_languages() {
        assert_eq!(PROFILES.len(), 12);
        assert_eq!(profile_sets().len(), 12);
    }

    #[test]
    fn test_profiles_have_no_duplicate_trigrams() {
        for &(lang, trigrams) in PROFILES {
            let set = &profile_sets()[&lang];
            assert_eq!(
                set.len(),
                trigrams.len(),
                "{lang} profile has duplicate trigrams"
            );
        }
    }

    #[test]
    fn test_trigrams_are_normalized() {
        // Profiles must already be lowercase 3-char windows, or lookups
        // against normalized input would never match.
        for &(lang, trigrams) in PROFILES {
            for tri in trigrams {
                assert_eq!(tri.chars().count(), 3, "{lang}: {tri:?}");
                assert!(
                    !tri.chars().any(|c| c.is_uppercase()),
                    "{lang}: {tri:?} is not lowercase"
                );
            }
        }
    }

    #[test]
    fn test_english_profile_looks_english() {
        assert!(profile_sets()[&Lang::En].contains(" th"));
        assert!(profile_sets()[&Lang::En].contains("the"));
    }
}
