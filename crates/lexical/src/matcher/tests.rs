use super::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::lexicon::Lexicon;
use crate::synset::{PartOfSpeech, SynsetId};

/// Exact-match database: no morphology, lookups counted.
#[derive(Default)]
struct FakeDb {
    words: HashMap<String, Vec<Synset>>,
    lookups: AtomicUsize,
}

impl FakeDb {
    fn with(mut self, word: &str, senses: &[&[&str]]) -> Self {
        let synsets = senses
            .iter()
            .enumerate()
            .map(|(i, lemmas)| {
                let id = SynsetId {
                    pos: PartOfSpeech::Noun,
                    offset: i as u32 + 1,
                };
                Synset::new(id, lemmas.iter().copied())
            })
            .collect();
        self.words.insert(word.to_lowercase(), synsets);
        self
    }

    fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl LexicalDatabase for FakeDb {
    fn synsets(&self, word: &str) -> Vec<&Synset> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.words
            .get(&word.to_lowercase())
            .map(|senses| senses.iter().collect())
            .unwrap_or_default()
    }
}

fn feelings() -> FakeDb {
    FakeDb::default()
        .with("happy", &[&["happy"], &["glad", "happy"]])
        .with("glad", &[&["glad", "happy"], &["beaming", "glad"]])
        .with("joyful", &[&["joyful", "glad"]])
        .with("sad", &[&["sad"]])
}

fn pair(first: &str, second: &str, lemma: &str) -> SynonymPair {
    SynonymPair {
        first: first.into(),
        second: second.into(),
        shared_lemma: lemma.into(),
    }
}

#[test]
fn finds_cross_document_pairs() {
    let matcher = SynonymMatcher::new(feelings());
    let pairs = matcher.find("happy", "glad");
    assert_eq!(pairs, vec![pair("happy", "glad", "happy")]);
}

#[test]
fn pairs_are_directional() {
    let matcher = SynonymMatcher::new(feelings());
    let pairs = matcher.find("glad", "happy");
    assert_eq!(pairs, vec![pair("glad", "happy", "happy")]);
}

#[test]
fn same_word_ignoring_case_is_never_paired() {
    let matcher = SynonymMatcher::new(feelings());
    let pairs = matcher.find("Happy", "happy glad");
    assert_eq!(pairs, vec![pair("Happy", "glad", "happy")]);
    for p in &pairs {
        assert_ne!(p.first.to_lowercase(), p.second.to_lowercase());
    }
}

#[test]
fn unrelated_and_unknown_words_produce_nothing() {
    let matcher = SynonymMatcher::new(feelings());
    assert!(matcher.find("sad", "glad").is_empty());
    assert!(matcher.find("the quick fox", "a lazy dog").is_empty());
    assert!(matcher.find("", "glad").is_empty());
    assert!(matcher.find("happy", "").is_empty());
}

#[test]
fn punctuation_stays_attached_to_tokens() {
    let matcher = SynonymMatcher::new(feelings());
    assert!(matcher.find("happy.", "glad").is_empty());
}

#[test]
fn one_pair_per_word_combination() {
    // happy and glad share lemmas through several synset combinations.
    let matcher = SynonymMatcher::new(feelings());
    let pairs = matcher.find("happy happy", "glad glad");
    assert_eq!(pairs.len(), 1);
}

#[test]
fn output_is_ordered_by_first_then_second() {
    let matcher = SynonymMatcher::new(feelings());
    let pairs = matcher.find("joyful happy", "joyful glad happy");
    assert_eq!(
        pairs,
        vec![
            pair("happy", "glad", "happy"),
            pair("happy", "joyful", "glad"),
            pair("joyful", "glad", "glad"),
            pair("joyful", "happy", "glad"),
        ]
    );
}

#[test]
fn each_token_is_looked_up_once() {
    let matcher = SynonymMatcher::new(feelings());
    let _ = matcher.find("happy joyful sad", "glad happy sad");
    assert_eq!(matcher.database().lookups(), 6);
}

#[test]
fn parallel_scan_matches_sequential() {
    let text1 = "joyful happy sad glad unknown";
    let text2 = "glad happy joyful sad other";
    let sequential = SynonymMatcher::new(feelings()).find(text1, text2);
    let parallel = SynonymMatcher::with_config(feelings(), SynonymConfig { use_parallel: true })
        .find(text1, text2);
    assert!(!sequential.is_empty());
    assert_eq!(sequential, parallel);
}

#[test]
fn works_over_shared_builtin_lexicon() {
    let matcher = SynonymMatcher::new(Arc::new(Lexicon::builtin()));
    let pairs = matcher.find("happy", "glad");
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].first, "happy");
    assert_eq!(pairs[0].second, "glad");

    assert!(matcher.find("cat", "dog").is_empty());
    assert!(matcher.find("The quick brown fox", "The quick brown fox").is_empty());
}

#[test]
fn builtin_morphology_reaches_inflected_forms() {
    let matcher = SynonymMatcher::new(Lexicon::builtin());
    let pairs = matcher.find("children", "kids");
    assert_eq!(pairs, vec![pair("children", "kids", "child")]);
}

#[test]
fn pair_serializes_with_named_fields() {
    let json = serde_json::to_value(pair("happy", "glad", "happy")).unwrap();
    assert_eq!(json["first"], "happy");
    assert_eq!(json["second"], "glad");
    assert_eq!(json["shared_lemma"], "happy");
}
