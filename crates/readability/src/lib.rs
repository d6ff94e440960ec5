//! textcmp readability layer.
//!
//! Flesch-Kincaid grade level of a text:
//!
//! ```text
//! 0.39 * (words / sentences) + 11.8 * (syllables / words) - 15.59
//! ```
//!
//! Roughly the U.S. school grade needed to follow the text. Lower is easier;
//! very simple text goes below zero.
//!
//! - Words are whitespace-separated tokens with at least one letter or digit.
//! - Sentences follow Unicode sentence boundaries (UAX #29). Fragments
//!   shorter than [`ReadabilityConfig::min_sentence_words`] are not counted
//!   as sentences, but a text with words always has at least one.
//! - Syllables are estimated per word, see [`count_syllables`].
//!
//! A text with no words scores the sentinel `0.0`.
//!
//! ```
//! let grade = readability::readability("The cat sat on the mat. The dog ran fast.");
//! assert!((grade - -1.84).abs() < 1e-9);
//! assert_eq!(readability::readability(""), 0.0);
//! ```

mod config;
mod syllables;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

pub use crate::config::ReadabilityConfig;
pub use crate::syllables::count_syllables;

/// Grade plus the counts it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Flesch-Kincaid grade level, unrounded. `0.0` when there are no words.
    pub grade: f64,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// Flesch-Kincaid grade under the default configuration.
pub fn readability(text: &str) -> f64 {
    analyze(text, &ReadabilityConfig::default()).grade
}

/// Full readability report for `text`.
#[tracing::instrument(level = "debug", skip(text, cfg), fields(text_len = text.len()))]
pub fn analyze(text: &str, cfg: &ReadabilityConfig) -> ReadabilityReport {
    let mut words = 0usize;
    let mut syllables = 0usize;
    let mut counted_sentences = 0usize;

    for sentence in text.unicode_sentences() {
        let mut sentence_words = 0usize;
        for word in sentence.split_whitespace().filter(|w| is_word(w)) {
            sentence_words += 1;
            syllables += count_syllables(word);
        }
        words += sentence_words;
        if sentence_words > 0 && sentence_words >= cfg.min_sentence_words {
            counted_sentences += 1;
        }
    }

    if words == 0 {
        return ReadabilityReport::default();
    }
    let sentences = counted_sentences.max(1);

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    ReadabilityReport {
        grade,
        sentences,
        words,
        syllables,
    }
}

fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}
