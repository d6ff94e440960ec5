use std::collections::BTreeSet;
use std::time::Instant;

use canonical::token_set;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::database::LexicalDatabase;
use crate::synset::Synset;

/// Two words, one from each document, that share at least one sense.
///
/// `first` comes from the first document and `second` from the second; the
/// pair is directional. The two never compare equal ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SynonymPair {
    pub first: String,
    pub second: String,
    /// Lowercased lemma found in a synset of each word.
    pub shared_lemma: String,
}

/// Runtime options for synonym matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynonymConfig {
    /// Scan first-document tokens on the rayon pool (default false).
    /// Output is identical to the sequential scan.
    pub use_parallel: bool,
}

// A second-document token that has at least one synset.
struct Candidate<'a> {
    word: &'a str,
    folded: String,
    synsets: Vec<&'a Synset>,
}

/// Finds cross-document synonym pairs over an injected [`LexicalDatabase`].
pub struct SynonymMatcher<D> {
    db: D,
    config: SynonymConfig,
}

impl<D: LexicalDatabase> SynonymMatcher<D> {
    pub fn new(db: D) -> Self {
        Self::with_config(db, SynonymConfig::default())
    }

    pub fn with_config(db: D, config: SynonymConfig) -> Self {
        Self { db, config }
    }

    pub fn database(&self) -> &D {
        &self.db
    }

    pub fn config(&self) -> &SynonymConfig {
        &self.config
    }

    /// Synonym pairs between the whitespace tokens of two texts.
    ///
    /// Tokens keep their case and punctuation. Pairs come out ordered by the
    /// first word, then the second, both lexicographically.
    pub fn find(&self, text1: &str, text2: &str) -> Vec<SynonymPair> {
        self.find_in_sets(&token_set(text1), &token_set(text2))
    }

    /// Same as [`SynonymMatcher::find`] over pre-built token sets.
    pub fn find_in_sets(
        &self,
        first: &BTreeSet<String>,
        second: &BTreeSet<String>,
    ) -> Vec<SynonymPair> {
        let start = Instant::now();

        let candidates: Vec<Candidate<'_>> = second
            .iter()
            .filter_map(|word| {
                let synsets = self.db.synsets(word);
                (!synsets.is_empty()).then(|| Candidate {
                    word,
                    folded: word.to_lowercase(),
                    synsets,
                })
            })
            .collect();

        let pairs: Vec<SynonymPair> = if candidates.is_empty() {
            Vec::new()
        } else if self.config.use_parallel {
            let words: Vec<&String> = first.iter().collect();
            words
                .par_iter()
                .flat_map_iter(|word| self.pairs_for(word, &candidates))
                .collect()
        } else {
            first
                .iter()
                .flat_map(|word| self.pairs_for(word, &candidates))
                .collect()
        };

        debug!(
            first_tokens = first.len(),
            second_tokens = second.len(),
            candidates = candidates.len(),
            pairs = pairs.len(),
            parallel = self.config.use_parallel,
            elapsed_micros = start.elapsed().as_micros(),
            "synonym_scan"
        );
        pairs
    }

    fn pairs_for(&self, word: &str, candidates: &[Candidate<'_>]) -> Vec<SynonymPair> {
        let synsets = self.db.synsets(word);
        if synsets.is_empty() {
            return Vec::new();
        }
        let folded = word.to_lowercase();

        candidates
            .iter()
            .filter(|candidate| candidate.folded != folded)
            .filter_map(|candidate| {
                let lemma = synsets.iter().find_map(|mine| {
                    candidate
                        .synsets
                        .iter()
                        .find_map(|theirs| mine.shared_lemma(theirs))
                })?;
                Some(SynonymPair {
                    first: word.to_string(),
                    second: candidate.word.to_string(),
                    shared_lemma: lemma.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests;
