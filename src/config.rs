//! YAML configuration file support for textcmp.
//!
//! One file configures every stage of a comparison plus the lexicon the
//! synonym matcher reads from.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # textcmp configuration
//! version: "1.0"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: false
//!   lowercase: true
//!   strip_punctuation: false
//!
//! similarity:
//!   lowercase: true
//!   autojunk: false
//!
//! synonyms:
//!   use_parallel: false
//!
//! readability:
//!   min_sentence_words: 3
//!
//! lexicon:
//!   source: wordnet
//!   wordnet_dir: /usr/share/wordnet/dict
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::CompareConfig;
use canonical::CanonicalizeConfig;
use lexical::{LexicalError, Lexicon, SynonymConfig};
use readability::ReadabilityConfig;
use similarity::SimilarityConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TextcmpConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalizeConfig,

    #[serde(default)]
    pub similarity: SimilarityConfig,

    #[serde(default)]
    pub synonyms: SynonymConfig,

    #[serde(default)]
    pub readability: ReadabilityConfig,

    #[serde(default)]
    pub lexicon: LexiconYamlConfig,
}

impl TextcmpConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TextcmpConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        if self.canonical.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        self.lexicon.validate()?;

        Ok(())
    }

    /// Stage configuration for a [`Comparator`](crate::Comparator).
    pub fn into_compare_config(self) -> CompareConfig {
        CompareConfig {
            canonical: self.canonical,
            similarity: self.similarity,
            synonyms: self.synonyms,
            readability: self.readability,
        }
    }
}

impl Default for TextcmpConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalizeConfig::default(),
            similarity: SimilarityConfig::default(),
            synonyms: SynonymConfig::default(),
            readability: ReadabilityConfig::default(),
            lexicon: LexiconYamlConfig::default(),
        }
    }
}

/// Where synonym senses come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconSource {
    /// Embedded seed lexicon.
    #[default]
    Builtin,
    /// Princeton WordNet database directory at `wordnet_dir`.
    Wordnet,
}

/// Lexicon YAML configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconYamlConfig {
    #[serde(default)]
    pub source: LexiconSource,

    #[serde(default)]
    pub wordnet_dir: Option<PathBuf>,
}

impl LexiconYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.source == LexiconSource::Wordnet && self.wordnet_dir.is_none() {
            return Err(ConfigLoadError::Validation(
                "lexicon.wordnet_dir is required when source is 'wordnet'".to_string(),
            ));
        }
        Ok(())
    }

    /// Load the configured lexicon.
    pub fn load(&self) -> Result<Lexicon, LexicalError> {
        match (self.source, &self.wordnet_dir) {
            (LexiconSource::Wordnet, Some(dir)) => Lexicon::from_wordnet_dir(dir),
            _ => Ok(Lexicon::builtin()),
        }
    }
}
