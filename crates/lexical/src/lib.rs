//! textcmp lexical layer.
//!
//! Finds words in one document that share a sense with a different word in
//! the other document. Senses come from a WordNet-shaped [`Lexicon`]: groups
//! of lemmas (synsets) indexed by part of speech, with morphological lookup
//! so inflected forms like `dogs` or `children` reach their base lemma.
//!
//! ```
//! let pairs = lexical::find_synonyms("a happy child", "a glad kid");
//! assert!(pairs.iter().any(|p| p.first == "happy" && p.second == "glad"));
//! ```
//!
//! Lexicon sources:
//!
//! - [`Lexicon::builtin`]: embedded seed data, used by default
//! - [`Lexicon::from_wordnet_dir`]: a Princeton WordNet 3.x `dict/` directory
//! - [`LexiconBuilder`]: anything else, including test fixtures
//!
//! The process-wide lexicon behind [`find_synonyms`] is set up once through
//! [`shared`] / [`install_shared`] and is read-only afterwards.

mod builtin;
mod database;
mod error;
mod lexicon;
mod matcher;
pub mod morphy;
mod shared;
mod synset;
mod wordnet;

pub use crate::database::LexicalDatabase;
pub use crate::error::LexicalError;
pub use crate::lexicon::{Lexicon, LexiconBuilder};
pub use crate::matcher::{SynonymConfig, SynonymMatcher, SynonymPair};
pub use crate::shared::{install_shared, shared};
pub use crate::synset::{PartOfSpeech, Synset, SynsetId};

/// Synonym pairs between two texts using the process-wide lexicon.
pub fn find_synonyms(text1: &str, text2: &str) -> Vec<SynonymPair> {
    SynonymMatcher::new(shared()).find(text1, text2)
}
