//! Configuration for the similarity scorer.
//!
//! The scorer is a pure function of `(text1, text2, config)`.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`similarity_with`](crate::similarity_with).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Lowercase both texts before matching.
    pub lowercase: bool,
    /// Leave very frequent characters out of the block search index on long
    /// texts. Can miss obvious overlap and break `similarity(s, s) == 100`
    /// for some strings. Off by default.
    pub autojunk: bool,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            autojunk: false,
        }
    }
}
