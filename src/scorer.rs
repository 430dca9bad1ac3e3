//! Evidence accumulation and the confidence distribution.
//!
//! A scoreboard collects integer evidence per language: trigram-profiled
//! languages earn the counts of matched trigrams, script languages earn a
//! fixed weight per character of their script, and the undetermined bucket
//! grows on sustained profile misses. The final confidence is a softmax
//! over the rescaled scores.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::lang::Lang;
use crate::profiles::{profile_sets, PROFILES};
use crate::script::{script_hits, SCRIPT_RULES};
use crate::trigram::TrigramCount;

/// Profile misses per point of undetermined evidence. Within one
/// profile pass, every run of this many misses bumps the undetermined
/// score by one.
const UNDETERMINED_RATE: u32 = 31;

/// Starting score of the undetermined bucket, so empty or unmatchable
/// input resolves to undetermined instead of an arbitrary language.
const UNDETERMINED_SEED: u32 = 2;

/// Weight added per character matching a script rule. Trigram counts
/// grow faster than character counts, so script evidence is scaled up
/// to keep the two kinds of language competitive in mixed text.
const SCRIPT_CHAR_WEIGHT: u32 = 3;

/// Softmax temperature applied to raw scores.
const RESCALE: f64 = 0.5;

/// Largest exponent `f64::exp` handles without overflowing to infinity.
/// Any rescaled score beyond it saturates the whole distribution.
const EXP_OVERFLOW: f64 = 709.0;

/// Accumulated per-language evidence for one piece of text.
pub(crate) struct Scoreboard {
    scores: FxHashMap<Lang, u32>,
}

impl Scoreboard {
    /// A fresh board with every supported language at zero and the
    /// undetermined bucket at its seed value.
    pub(crate) fn new() -> Self {
        let mut scores = FxHashMap::default();
        scores.insert(Lang::Und, UNDETERMINED_SEED);
        for &(lang, _) in PROFILES {
            scores.insert(lang, 0);
        }
        for rule in SCRIPT_RULES {
            scores.insert(rule.lang, 0);
        }
        Scoreboard { scores }
    }

    /// Match the ranked trigrams against every reference profile.
    ///
    /// A trigram found in a profile adds its occurrence count to that
    /// language. Misses feed the undetermined bucket at a fixed rate per
    /// profile pass, so text matching no profile drifts to undetermined.
    pub(crate) fn tally_profiles(&mut self, ranked: &[TrigramCount]) {
        for (&lang, profile) in profile_sets() {
            let mut misses = 0;
            for tc in ranked {
                if profile.contains(tc.trigram.as_str()) {
                    *self.scores.entry(lang).or_insert(0) += tc.count;
                } else {
                    misses += 1;
                    if misses == UNDETERMINED_RATE {
                        *self.scores.entry(Lang::Und).or_insert(0) += 1;
                        misses = 0;
                    }
                }
            }
        }
    }

    /// Add script evidence for every character of the original text.
    pub(crate) fn tally_scripts(&mut self, text: &str) {
        for rule in SCRIPT_RULES {
            let hits = script_hits(rule.scripts, text);
            if hits > 0 {
                *self.scores.entry(rule.lang).or_insert(0) += SCRIPT_CHAR_WEIGHT * hits;
            }
        }
    }

    /// The language with the highest score. Equal scores resolve to the
    /// lexically smaller language code so results stay deterministic.
    pub(crate) fn winner(&self) -> Lang {
        let mut best: Option<(Lang, u32)> = None;
        for (&lang, &score) in &self.scores {
            let better = match best {
                None => true,
                Some((lead, top)) => {
                    score > top || (score == top && lang.code() < lead.code())
                }
            };
            if better {
                best = Some((lang, score));
            }
        }
        best.map(|(lang, _)| lang).unwrap_or(Lang::Und)
    }

    /// Softmax of the rescaled scores.
    ///
    /// If any rescaled score would overflow `exp`, every language
    /// saturates to 1.0 rather than dividing infinities.
    pub(crate) fn distribution(&self) -> FxHashMap<Lang, f64> {
        let saturated = self
            .scores
            .values()
            .any(|&v| f64::from(v) * RESCALE > EXP_OVERFLOW);
        if saturated {
            debug!("score overflow, reporting uncalibrated unit confidence");
            return self.scores.keys().map(|&lang| (lang, 1.0)).collect();
        }
        let denom: f64 = self
            .scores
            .values()
            .map(|&v| (f64::from(v) * RESCALE).exp())
            .sum();
        self.scores
            .iter()
            .map(|(&lang, &v)| (lang, (f64::from(v) * RESCALE).exp() / denom))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Trigrams containing a digit never occur in any profile, which
    /// makes them guaranteed misses.
    fn garbage(n: u32) -> Vec<TrigramCount> {
        (0..n)
            .map(|i| TrigramCount {
                trigram: format!("x{}x", i % 10),
                count: 1,
            })
            .collect()
    }

    #[test]
    fn test_fresh_board_is_undetermined() {
        let board = Scoreboard::new();
        assert_eq!(board.winner(), Lang::Und);
        assert_eq!(board.scores[&Lang::Und], UNDETERMINED_SEED);
        assert_eq!(board.scores.len(), 26);
    }

    #[test]
    fn test_hit_adds_occurrence_count() {
        let mut board = Scoreboard::new();
        board.tally_profiles(&[TrigramCount {
            trigram: " th".to_string(),
            count: 7,
        }]);
        assert_eq!(board.scores[&Lang::En], 7);
        assert_eq!(board.scores[&Lang::Und], UNDETERMINED_SEED);
    }

    #[test]
    fn test_misses_below_rate_leave_undetermined_seeded() {
        let mut board = Scoreboard::new();
        board.tally_profiles(&garbage(UNDETERMINED_RATE - 1));
        assert_eq!(board.scores[&Lang::Und], UNDETERMINED_SEED);
    }

    #[test]
    fn test_misses_at_rate_feed_undetermined_per_profile() {
        let mut board = Scoreboard::new();
        board.tally_profiles(&garbage(UNDETERMINED_RATE));
        // Each of the 12 profile passes contributes one point.
        assert_eq!(
            board.scores[&Lang::Und],
            UNDETERMINED_SEED + PROFILES.len() as u32
        );
    }

    #[test]
    fn test_script_hits_are_weighted() {
        let mut board = Scoreboard::new();
        board.tally_scripts("안녕");
        assert_eq!(board.scores[&Lang::Ko], 2 * SCRIPT_CHAR_WEIGHT);
        assert_eq!(board.scores[&Lang::Zh], 0);
    }

    #[test]
    fn test_tie_goes_to_smaller_code() {
        let mut board = Scoreboard::new();
        board.scores.insert(Lang::En, 10);
        board.scores.insert(Lang::De, 10);
        assert_eq!(board.winner(), Lang::De);
    }

    #[test]
    fn test_distribution_sums_to_one() {
        let mut board = Scoreboard::new();
        board.tally_profiles(&[TrigramCount {
            trigram: "the".to_string(),
            count: 3,
        }]);
        let dist = board.distribution();
        let total: f64 = dist.values().sum();
        assert!((total - 1.0).abs() < 1e-9, "sum was {total}");
        assert!(dist.values().all(|&p| p > 0.0 && p <= 1.0));
    }

    #[test]
    fn test_distribution_below_overflow_is_normal() {
        let mut board = Scoreboard::new();
        board.scores.insert(Lang::En, 1418);
        let dist = board.distribution();
        // Still a softmax: the losers hold a vanishing share and the
        // total stays 1, unlike the saturated all-ones fallback.
        assert!(dist[&Lang::Und] < 1e-9);
        let total: f64 = dist.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_saturates_on_overflow() {
        let mut board = Scoreboard::new();
        board.scores.insert(Lang::En, 1419);
        let dist = board.distribution();
        assert!(dist.values().all(|&p| p == 1.0));
        assert_eq!(dist.len(), 26);
    }
}
