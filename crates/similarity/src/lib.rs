//! # textcmp similarity
//!
//! Character-level similarity between two texts.
//!
//! ## Metric
//!
//! Both texts are lowercased, then compared code point by code point with a
//! greedy longest-matching-block search ([`SequenceMatcher`]): find the
//! longest contiguous block shared by both, then repeat on the unmatched
//! pieces to its left and right. With `M` the total size of all blocks and
//! `T` the combined length of both texts, the score is `100 * 2*M / T`.
//!
//! Because blocks must be contiguous and in order, the score rewards verbatim
//! shared passages: the same words in a different order score lower than a
//! copied sentence.
//!
//! ## Contract
//!
//! - Total over all inputs, no errors.
//! - `similarity("", "") == 100.0`; one empty side scores `0.0`.
//! - Symmetric: the pair is put in a fixed order before matching, so
//!   swapping arguments never changes the score.
//!
//! ## Example
//!
//! ```
//! use similarity::{similarity, SimilarityBand};
//!
//! assert_eq!(similarity("The quick brown fox", "the QUICK brown fox"), 100.0);
//! assert_eq!(similarity("abcd", "bcde"), 75.0);
//! assert_eq!(SimilarityBand::from_percent(75.0), SimilarityBand::High);
//! ```

mod band;
pub mod config;
pub mod matcher;

pub use crate::band::SimilarityBand;
pub use crate::config::SimilarityConfig;
pub use crate::matcher::{Match, OpTag, Opcode, SequenceMatcher};

/// Similarity percentage in `[0, 100]` under the default configuration.
pub fn similarity(text1: &str, text2: &str) -> f64 {
    similarity_with(text1, text2, &SimilarityConfig::default())
}

/// Similarity percentage in `[0, 100]` under an explicit configuration.
pub fn similarity_with(text1: &str, text2: &str, cfg: &SimilarityConfig) -> f64 {
    let (a, b) = ordered_chars(text1, text2, cfg);
    SequenceMatcher::new(&a, &b, cfg.autojunk).ratio() * 100.0
}

/// Edit script over characters, turning `text1` into `text2`.
///
/// Unlike [`similarity_with`] this keeps the caller's argument order, since
/// an edit script has a direction.
pub fn char_opcodes(text1: &str, text2: &str, cfg: &SimilarityConfig) -> Vec<Opcode> {
    let a = prepare(text1, cfg);
    let b = prepare(text2, cfg);
    SequenceMatcher::new(&a, &b, cfg.autojunk).opcodes()
}

/// A non-equal step of [`char_diff`] with the characters it touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffSegment {
    pub op: Opcode,
    /// `text1[op.a_start..op.a_end]` after preparation.
    pub removed: String,
    /// `text2[op.b_start..op.b_end]` after preparation.
    pub inserted: String,
}

/// Edits turning `text1` into `text2`, equal runs omitted.
///
/// Offsets and text are in characters of the prepared (possibly
/// lowercased) input, matching [`char_opcodes`].
pub fn char_diff(text1: &str, text2: &str, cfg: &SimilarityConfig) -> Vec<DiffSegment> {
    let a = prepare(text1, cfg);
    let b = prepare(text2, cfg);
    SequenceMatcher::new(&a, &b, cfg.autojunk)
        .opcodes()
        .into_iter()
        .filter(|op| op.tag != OpTag::Equal)
        .map(|op| DiffSegment {
            removed: a[op.a_start..op.a_end].iter().collect(),
            inserted: b[op.b_start..op.b_end].iter().collect(),
            op,
        })
        .collect()
}

fn prepare(text: &str, cfg: &SimilarityConfig) -> Vec<char> {
    if cfg.lowercase {
        text.to_lowercase().chars().collect()
    } else {
        text.chars().collect()
    }
}

// Shorter text first, ties broken lexicographically.
fn ordered_chars(text1: &str, text2: &str, cfg: &SimilarityConfig) -> (Vec<char>, Vec<char>) {
    let a = prepare(text1, cfg);
    let b = prepare(text2, cfg);
    if (a.len(), &a) <= (b.len(), &b) {
        (a, b)
    } else {
        (b, a)
    }
}
