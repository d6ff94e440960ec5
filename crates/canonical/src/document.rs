//! Document type produced by the normalization stage.
//!
//! A [`Document`] holds one side of a comparison:
//! - the raw decoded text as received from the extraction layer
//! - the normalized form used for character-level similarity
//! - the token stream used for word-level synonym matching
//!
//! Documents are built fresh for every comparison and never mutated
//! afterwards.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//!
//! let config = CanonicalizeConfig::default();
//! let doc = canonicalize("text-1", "The Quick  fox", &config).unwrap();
//!
//! assert_eq!(doc.normalized, "the quick  fox");
//! assert_eq!(doc.tokens.len(), 3);
//! assert_eq!(doc.tokens[1].text, "Quick");
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;
use crate::token::Token;

/// One side of a comparison after normalization.
///
/// ```text
/// Document
/// ├── label: String              # caller-facing name ("text-1", a file name, ...)
/// ├── raw: String                # decoded input, untouched
/// ├── normalized: String         # lowercased (optionally NFKC) form
/// ├── tokens: Vec<Token>         # whitespace tokens of the raw text
/// └── config: CanonicalizeConfig # config snapshot
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Caller-facing name for this document.
    pub label: String,

    /// Decoded text exactly as it was handed in.
    pub raw: String,

    /// Normalized form used by the similarity scorer.
    ///
    /// Whitespace is not collapsed: similarity is measured over every
    /// character of the input.
    pub normalized: String,

    /// Whitespace-delimited tokens of the raw text, case preserved.
    ///
    /// Offsets are byte positions in [`Document::raw`]. When
    /// [`CanonicalizeConfig::strip_punctuation`] is set, the offsets cover
    /// the trimmed word only.
    pub tokens: Vec<Token>,

    /// Snapshot of the configuration used to build this document.
    pub config: CanonicalizeConfig,
}

impl Document {
    /// Unique token texts in lexicographic order.
    pub fn token_set(&self) -> BTreeSet<String> {
        self.tokens.iter().map(|t| t.text.clone()).collect()
    }

    /// Number of tokens, duplicates included.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}
