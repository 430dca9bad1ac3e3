//! Fast natural-language detection with no runtime data files.
//!
//! Twelve languages written in Latin or Cyrillic script are detected by
//! matching text against compiled-in trigram frequency profiles; thirteen
//! more are detected by the Unicode script their characters belong to.
//! Detection always succeeds: text that matches nothing resolves to the
//! undetermined language `und` instead of an error.
//!
//! ```
//! let detection = parlance::classify("We hold these truths to be self-evident.");
//! assert_eq!(detection.language_code(), "en");
//! assert!(detection.confidence() > 0.5);
//! ```

use std::io::Read;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

mod lang;
mod profiles;
mod scorer;
mod script;
mod trigram;

pub use lang::Lang;

use scorer::Scoreboard;
use trigram::ranked_trigrams;

/// Errors surfaced by the reader-based entry point.
#[derive(Error, Debug)]
pub enum DetectError {
    /// The underlying reader failed before any detection could run.
    #[error("failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

/// Convenience alias for fallible detection entry points.
pub type DetectResult<T> = Result<T, DetectError>;

/// The winning language for a piece of text and the probability mass
/// the detector assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    #[serde(rename = "language")]
    lang: Lang,
    confidence: f64,
}

impl Detection {
    /// The detected language.
    pub fn lang(&self) -> Lang {
        self.lang
    }

    /// BCP 47 code of the detected language, `"und"` when undetermined.
    pub fn language_code(&self) -> &'static str {
        self.lang.code()
    }

    /// Share of the confidence distribution held by the winner, in
    /// `(0.0, 1.0]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// English name of the detected language, `"Unknown language"` when
    /// undetermined.
    pub fn language_name(&self) -> &'static str {
        self.lang.english_name()
    }

    /// Name of the detected language in that language itself, empty when
    /// undetermined.
    pub fn self_name(&self) -> &'static str {
        self.lang.self_name()
    }
}

/// Detect the language of `text`.
///
/// Always returns a detection; input with no usable evidence, including
/// the empty string, comes back as [`Lang::Und`] with low confidence.
pub fn classify(text: &str) -> Detection {
    let ranked = ranked_trigrams(text);
    debug!("extracted {} distinct trigrams", ranked.len());

    let mut board = Scoreboard::new();
    board.tally_profiles(&ranked);
    board.tally_scripts(text);

    let lang = board.winner();
    let confidence = board.distribution().get(&lang).copied().unwrap_or(0.0);
    debug!("detected {} with confidence {:.4}", lang, confidence);
    Detection { lang, confidence }
}

/// Detect the language of everything `reader` yields.
///
/// Byte sequences that are not valid UTF-8 are replaced with the
/// replacement character rather than rejected, so detection still works
/// on mildly corrupt input. Only reader failures are errors.
pub fn classify_from_reader<R: Read>(mut reader: R) -> DetectResult<Detection> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    Ok(classify(&String::from_utf8_lossy(&buf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_undetermined() {
        let detection = classify("");
        assert_eq!(detection.lang(), Lang::Und);
        assert_eq!(detection.language_code(), "und");
        assert_eq!(detection.language_name(), "Unknown language");
        assert_eq!(detection.self_name(), "");
        assert!(detection.confidence() < 0.2);
    }

    #[test]
    fn test_detection_serializes_code_and_confidence() {
        let detection = classify("We hold these truths to be self-evident.");
        let json = serde_json::to_value(&detection).unwrap();
        assert_eq!(json["language"], "en");
        assert!(json["confidence"].as_f64().unwrap() > 0.5);
    }

    #[test]
    fn test_reader_entry_point_matches_string_entry_point() {
        let text = "Ceci n'est pas une pipe";
        let from_reader = classify_from_reader(text.as_bytes()).unwrap();
        assert_eq!(from_reader, classify(text));
    }
}
