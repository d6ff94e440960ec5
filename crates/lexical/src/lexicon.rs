//! In-memory lexicon.
//!
//! A [`Lexicon`] owns every synset plus two lookup tables per part of
//! speech: lemma → synsets in sense order, and irregular form → base forms.
//! It is built once (from the embedded seed data or a WordNet install) and
//! read-only afterwards.

use std::collections::{HashMap, HashSet};

use crate::database::LexicalDatabase;
use crate::morphy;
use crate::synset::{PartOfSpeech, Synset, SynsetId};

type PosTable<V> = [HashMap<String, V>; 4];

/// Immutable synset store with WordNet-style lookup.
///
/// Lookup of a surface word:
/// 1. lowercase it and join multi-word input with `_`
/// 2. for each part of speech in [`PartOfSpeech::ALL`] order, collect the
///    base forms the lexicon knows: the word itself plus its irregular bases
///    when it is a listed exception, otherwise the word itself plus its
///    suffix-detached forms
/// 3. return the synsets of those base forms in sense order, each once
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    synsets: Vec<Synset>,
    senses: PosTable<Vec<usize>>,
    exceptions: PosTable<Vec<String>>,
}

impl Lexicon {
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// Number of synsets.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    /// Number of distinct (part of speech, lemma) entries.
    pub fn lemma_count(&self) -> usize {
        self.senses.iter().map(HashMap::len).sum()
    }

    /// Base forms of a lowercased key that have senses under `pos`.
    pub fn base_forms(&self, key: &str, pos: PartOfSpeech) -> Vec<String> {
        let senses = &self.senses[pos.index()];
        let candidates: Vec<String> = match self.exceptions[pos.index()].get(key) {
            Some(bases) => std::iter::once(key.to_string())
                .chain(bases.iter().cloned())
                .collect(),
            None => std::iter::once(key.to_string())
                .chain(morphy::detach(key, pos))
                .collect(),
        };

        let mut seen = HashSet::new();
        candidates
            .into_iter()
            .filter(|form| senses.contains_key(form) && seen.insert(form.clone()))
            .collect()
    }

    /// Synsets for a surface word. See the type docs for the lookup order.
    pub fn lookup(&self, word: &str) -> Vec<&Synset> {
        let key = lookup_key(word);
        if key.is_empty() {
            return Vec::new();
        }

        let mut seen = HashSet::new();
        let mut found = Vec::new();
        for pos in PartOfSpeech::ALL {
            for form in self.base_forms(&key, pos) {
                let Some(indices) = self.senses[pos.index()].get(&form) else {
                    continue;
                };
                for &idx in indices {
                    if seen.insert(idx) {
                        found.push(&self.synsets[idx]);
                    }
                }
            }
        }
        found
    }
}

impl LexicalDatabase for Lexicon {
    fn synsets(&self, word: &str) -> Vec<&Synset> {
        self.lookup(word)
    }
}

fn lookup_key(word: &str) -> String {
    word.trim()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Incremental construction of a [`Lexicon`].
#[derive(Debug, Default)]
pub struct LexiconBuilder {
    synsets: Vec<Synset>,
    senses: PosTable<Vec<usize>>,
    exceptions: PosTable<Vec<String>>,
    next_offset: [u32; 4],
}

impl LexiconBuilder {
    /// Add a synset and index every one of its lemmas under it, in order.
    ///
    /// Offsets are assigned sequentially per part of speech.
    pub fn add_synset<I, S>(&mut self, pos: PartOfSpeech, lemmas: I) -> SynsetId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.next_offset[pos.index()] += 1;
        let id = SynsetId {
            pos,
            offset: self.next_offset[pos.index()],
        };
        let synset = Synset::new(id, lemmas);
        let idx = self.synsets.len();
        for key in synset.lemma_keys() {
            self.add_sense_index(pos, key, idx);
        }
        self.synsets.push(synset);
        id
    }

    /// Store a synset without indexing it. Returns its position, to be used
    /// with [`LexiconBuilder::add_sense_index`].
    pub fn push_synset(&mut self, synset: Synset) -> usize {
        let pos = synset.id.pos.index();
        self.next_offset[pos] = self.next_offset[pos].max(synset.id.offset);
        self.synsets.push(synset);
        self.synsets.len() - 1
    }

    /// Record that `lemma` has the synset at `idx` as its next sense.
    pub fn add_sense_index(&mut self, pos: PartOfSpeech, lemma: &str, idx: usize) {
        let entry = self.senses[pos.index()]
            .entry(lemma.to_lowercase())
            .or_default();
        if !entry.contains(&idx) {
            entry.push(idx);
        }
    }

    /// Register an irregular inflection, e.g. `mice` → `mouse`.
    pub fn add_exception<I, S>(&mut self, pos: PartOfSpeech, inflected: &str, bases: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.exceptions[pos.index()]
            .entry(inflected.to_lowercase())
            .or_default();
        for base in bases {
            let base: String = base.into();
            let base = base.to_lowercase();
            if !entry.contains(&base) {
                entry.push(base);
            }
        }
    }

    pub fn build(self) -> Lexicon {
        Lexicon {
            synsets: self.synsets,
            senses: self.senses,
            exceptions: self.exceptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Lexicon {
        let mut b = Lexicon::builder();
        b.add_synset(PartOfSpeech::Noun, ["dog", "domestic_dog", "Canis_familiaris"]);
        b.add_synset(PartOfSpeech::Noun, ["mouse"]);
        b.add_synset(PartOfSpeech::Verb, ["run"]);
        b.add_synset(PartOfSpeech::Verb, ["chase", "dog", "track"]);
        b.add_synset(PartOfSpeech::Adjective, ["large", "big"]);
        b.add_synset(PartOfSpeech::Noun, ["hot_dog", "frank"]);
        b.add_exception(PartOfSpeech::Noun, "mice", ["mouse"]);
        b.add_exception(PartOfSpeech::Verb, "ran", ["run"]);
        b.build()
    }

    #[test]
    fn lookup_orders_by_part_of_speech() {
        let lex = sample();
        let found: Vec<PartOfSpeech> = lex.lookup("dog").iter().map(|s| s.id.pos).collect();
        assert_eq!(found, vec![PartOfSpeech::Noun, PartOfSpeech::Verb]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let lex = sample();
        assert_eq!(lex.lookup("DOG").len(), 2);
        assert_eq!(lex.lookup("canis_familiaris").len(), 1);
    }

    #[test]
    fn regular_and_irregular_inflections() {
        let lex = sample();
        assert_eq!(lex.lookup("dogs").len(), 2);
        assert_eq!(lex.lookup("mice")[0].lemmas, vec!["mouse".to_string()]);
        assert_eq!(lex.lookup("ran")[0].lemmas, vec!["run".to_string()]);
        assert_eq!(lex.lookup("larger")[0].lemmas, vec!["large", "big"]);
    }

    #[test]
    fn multi_word_input_joins_with_underscore() {
        let lex = sample();
        assert_eq!(lex.lookup("Hot  Dog").len(), 1);
    }

    #[test]
    fn unknown_and_blank_words_have_no_synsets() {
        let lex = sample();
        assert!(lex.lookup("the").is_empty());
        assert!(lex.lookup("").is_empty());
        assert!(lex.lookup("   ").is_empty());
        assert!(lex.lookup("fox.").is_empty());
    }

    #[test]
    fn base_forms_filters_unknown_candidates() {
        let lex = sample();
        assert_eq!(lex.base_forms("dogs", PartOfSpeech::Noun), vec!["dog".to_string()]);
        assert!(lex.base_forms("dogs", PartOfSpeech::Adverb).is_empty());
    }

    #[test]
    fn counts() {
        let lex = sample();
        assert_eq!(lex.len(), 6);
        assert!(!lex.is_empty());
        assert!(lex.lemma_count() >= 9);
    }
}
