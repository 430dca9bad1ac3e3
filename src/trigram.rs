//! Text normalization and trigram extraction.
//!
//! Input text is folded into a stream of lowercase characters where every
//! punctuation or whitespace character becomes a single boundary space.
//! Trigrams are the 3-character windows over that stream, padded with one
//! leading and one trailing space so word edges produce windows too.

use rustc_hash::FxHashMap;

/// The boundary character punctuation and whitespace collapse into.
pub(crate) const BOUNDARY: char = ' ';

/// A trigram and the number of times it occurred in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrigramCount {
    pub trigram: String,
    pub count: u32,
}

/// Punctuation outside ASCII, as explicit ranges rather than a full
/// property table. Covers general punctuation plus the marks used by the
/// supported scripts; symbols and digits intentionally pass through.
fn is_wide_punct(ch: char) -> bool {
    matches!(ch as u32,
        0x00A1 | 0x00A7 | 0x00AB | 0x00B6..=0x00B7 | 0x00BB | 0x00BF // Latin-1
        | 0x037E | 0x0387                                            // Greek
        | 0x055A..=0x055F | 0x0589..=0x058A                          // Armenian
        | 0x05BE | 0x05C0 | 0x05C3 | 0x05C6 | 0x05F3..=0x05F4        // Hebrew
        | 0x0609..=0x060A | 0x060C..=0x060D | 0x061B | 0x061E..=0x061F
        | 0x066A..=0x066D | 0x06D4                                   // Arabic
        | 0x0964..=0x0965 | 0x0970                                   // Devanagari danda
        | 0x0E4F | 0x0E5A..=0x0E5B                                   // Thai
        | 0x10FB                                                     // Georgian
        | 0x2010..=0x2027 | 0x2030..=0x2043                          // General punctuation
        | 0x2045..=0x2051 | 0x2053..=0x205E
        | 0x3001..=0x3003 | 0x3008..=0x3011 | 0x3014..=0x301F        // CJK
        | 0x3030 | 0x303D | 0x30FB
        | 0xFF01..=0xFF03 | 0xFF05..=0xFF0A | 0xFF0C..=0xFF0F        // Fullwidth forms
        | 0xFF1A..=0xFF1B | 0xFF1F..=0xFF20 | 0xFF3B..=0xFF3D
        | 0xFF3F | 0xFF5B | 0xFF5D | 0xFF5F..=0xFF65
    )
}

/// Whether a character separates words for trigram purposes.
fn is_boundary(ch: char) -> bool {
    ch.is_whitespace() || ch.is_ascii_punctuation() || is_wide_punct(ch)
}

/// Lowercase the text and collapse every boundary character to a space.
pub(crate) fn normalize(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if is_boundary(ch) {
            out.push(BOUNDARY);
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Count the padded 3-character windows of the normalized text.
///
/// Windows whose middle character is the boundary next to another
/// boundary are skipped, so runs of separators produce nothing, while a
/// single space between words still yields its straddling window.
pub(crate) fn counted_trigrams(text: &str) -> FxHashMap<String, u32> {
    let mut txt = normalize(text);
    txt.push(BOUNDARY);

    let mut counts = FxHashMap::default();
    let mut r1 = BOUNDARY;
    let mut r2 = txt[0];
    for &r3 in &txt[1..] {
        if !(r2 == BOUNDARY && (r1 == BOUNDARY || r3 == BOUNDARY)) {
            let trigram: String = [r1, r2, r3].into_iter().collect();
            *counts.entry(trigram).or_insert(0) += 1;
        }
        r1 = r2;
        r2 = r3;
    }
    counts
}

/// Trigrams of the text ranked by count descending, ties broken by the
/// trigram itself ascending. The ranking is total, so identical input
/// always produces an identical list.
pub(crate) fn ranked_trigrams(text: &str) -> Vec<TrigramCount> {
    let mut trigrams: Vec<TrigramCount> = counted_trigrams(text)
        .into_iter()
        .map(|(trigram, count)| TrigramCount { trigram, count })
        .collect();
    trigrams.sort_unstable_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.trigram.cmp(&b.trigram))
    });
    trigrams
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(text: &str) -> Vec<(String, u32)> {
        ranked_trigrams(text)
            .into_iter()
            .map(|tc| (tc.trigram, tc.count))
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_trigrams() {
        assert!(ranked("").is_empty());
        assert!(ranked("   ").is_empty());
        assert!(ranked("?!.,;").is_empty());
    }

    #[test]
    fn test_short_word_is_padded() {
        assert_eq!(ranked("a"), vec![(" a ".to_string(), 1)]);
        assert_eq!(
            ranked("ab"),
            vec![(" ab".to_string(), 1), ("ab ".to_string(), 1)]
        );
    }

    #[test]
    fn test_single_space_window_survives() {
        // The window straddling one separator is kept; pure boundary
        // runs are dropped.
        assert_eq!(
            ranked("a b"),
            vec![
                (" a ".to_string(), 1),
                (" b ".to_string(), 1),
                ("a b".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(ranked("a  b"), ranked("a . b"));
        assert_eq!(
            ranked("a  b"),
            vec![(" a ".to_string(), 1), (" b ".to_string(), 1)]
        );
    }

    #[test]
    fn test_case_folds() {
        assert_eq!(ranked("Hello"), ranked("hello"));
        assert_eq!(ranked("ЩУКА"), ranked("щука"));
    }

    #[test]
    fn test_punctuation_becomes_boundary() {
        assert_eq!(ranked("don't"), ranked("don t"));
        assert_eq!(ranked("何ですか？"), ranked("何ですか"));
        assert_eq!(ranked("слово。"), ranked("слово"));
    }

    #[test]
    fn test_digits_pass_through() {
        let trigs = counted_trigrams("aa1z");
        assert!(trigs.contains_key("a1z"));
    }

    #[test]
    fn test_counts_accumulate() {
        let trigs = counted_trigrams("the then");
        assert_eq!(trigs.get(" th"), Some(&2));
        assert_eq!(trigs.get("the"), Some(&2));
        assert_eq!(trigs.get("hen"), Some(&1));
    }

    #[test]
    fn test_ranking_is_count_then_lexical() {
        let list = ranked("the then");
        // Counts descend; equal counts come out in trigram order.
        for pair in list.windows(2) {
            assert!(
                pair[0].1 > pair[1].1 || (pair[0].1 == pair[1].1 && pair[0].0 < pair[1].0),
                "bad order: {:?} before {:?}",
                pair[0],
                pair[1]
            );
        }
        assert_eq!(list[0], (" th".to_string(), 2));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        // Re-extracting from the normalized text yields the same list.
        let text = "The QUICK, brown fox; jumps!";
        let normalized: String = normalize(text).into_iter().collect();
        assert_eq!(ranked(text), ranked(&normalized));
    }
}
