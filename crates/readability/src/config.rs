use serde::{Deserialize, Serialize};

/// Options for [`analyze`](crate::analyze).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReadabilityConfig {
    /// Sentences with fewer words than this are left out of the sentence
    /// count (default 3). Their words and syllables still count.
    pub min_sentence_words: usize,
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self {
            min_sentence_words: 3,
        }
    }
}
