//! Configuration types for the normalization stage.
//!
//! [`CanonicalizeConfig`] controls how a raw document is turned into its
//! normalized form and token stream before comparison.
//!
//! # Versioning
//!
//! The `version` field tracks behavior changes. Any change that affects the
//! normalized text or the token stream must bump it so that results produced
//! under different versions are never mixed up.
//!
//! # Examples
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(!config.normalize_unicode);
//! assert!(!config.strip_punctuation);
//! ```
//!
//! ## Stripping Punctuation From Tokens
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig {
//!     strip_punctuation: true,
//!     ..Default::default()
//! };
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for the normalization stage.
///
/// The defaults reproduce the plain comparison behavior: the normalized form
/// is the lowercased input and tokens are whitespace-delimited words with
/// punctuation left attached.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "normalize_unicode": false,
///   "strip_punctuation": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Version of the normalization behavior.
    ///
    /// Must be >= 1. Version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, the normalized form is lowercased.
    ///
    /// Lowercasing uses Unicode case mapping, so it may change the byte
    /// length of the text (for example `İ` lowercases to two code points).
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,

    /// If true, apply Unicode NFKC normalization before lowercasing.
    ///
    /// With normalization enabled, composed and decomposed spellings of the
    /// same character compare equal:
    ///
    /// ```text
    /// "Café" (U+00E9)        → "café"
    /// "Cafe" + U+0301         → "café"
    /// ```
    ///
    /// Disabled by default because character-level similarity is measured
    /// over the text as the extraction layer decoded it.
    ///
    /// # Default
    ///
    /// `false`
    pub normalize_unicode: bool,

    /// If true, leading and trailing punctuation is trimmed from each token.
    ///
    /// This only affects the token stream used for word matching; the
    /// normalized form used for similarity keeps its punctuation.
    ///
    /// ```text
    /// "fox."    → "fox"
    /// "(happy)" → "happy"
    /// "it's"    → "it's"
    /// ```
    ///
    /// Tokens made only of punctuation are dropped.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_punctuation: bool,
}

impl CanonicalizeConfig {
    /// Reject configurations that cannot be applied.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            normalize_unicode: false,
            strip_punctuation: false,
        }
    }
}
