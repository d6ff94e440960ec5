use std::fmt;

use serde::{Deserialize, Serialize};

/// Part of speech of a synset.
///
/// Adjective satellites are folded into [`PartOfSpeech::Adjective`], which is
/// how they are indexed for lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// Lookup order: nouns, verbs, adjectives, adverbs.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Single-letter code used in WordNet files (`s` maps to adjective).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" | "s" => Some(PartOfSpeech::Adjective),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            PartOfSpeech::Noun => 'n',
            PartOfSpeech::Verb => 'v',
            PartOfSpeech::Adjective => 'a',
            PartOfSpeech::Adverb => 'r',
        }
    }

    /// Suffix of the WordNet database files for this part of speech.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PartOfSpeech::Noun => 0,
            PartOfSpeech::Verb => 1,
            PartOfSpeech::Adjective => 2,
            PartOfSpeech::Adverb => 3,
        }
    }
}

/// Identity of a synset: part of speech plus its offset in that part's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SynsetId {
    pub pos: PartOfSpeech,
    pub offset: u32,
}

impl fmt::Display for SynsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}-{}", self.offset, self.pos.code())
    }
}

/// A group of lemmas sharing one sense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    pub id: SynsetId,
    /// Lemma names as stored, multi-word lemmas joined with `_`.
    pub lemmas: Vec<String>,
    // Lowercased lemma names, sorted and deduplicated.
    keys: Vec<String>,
}

impl Synset {
    pub fn new<I, S>(id: SynsetId, lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lemmas: Vec<String> = lemmas.into_iter().map(Into::into).collect();
        let mut keys: Vec<String> = lemmas.iter().map(|l| l.to_lowercase()).collect();
        keys.sort_unstable();
        keys.dedup();
        Self { id, lemmas, keys }
    }

    /// Lowercased lemma names in ascending order.
    pub fn lemma_keys(&self) -> &[String] {
        &self.keys
    }

    /// Smallest lemma (ignoring case) present in both synsets, if any.
    pub fn shared_lemma<'s>(&'s self, other: &Synset) -> Option<&'s str> {
        let (mut i, mut j) = (0, 0);
        while i < self.keys.len() && j < other.keys.len() {
            match self.keys[i].cmp(&other.keys[j]) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => return Some(self.keys[i].as_str()),
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(offset: u32) -> SynsetId {
        SynsetId {
            pos: PartOfSpeech::Adjective,
            offset,
        }
    }

    #[test]
    fn shared_lemma_ignores_case() {
        let a = Synset::new(id(1), ["Glad", "happy"]);
        let b = Synset::new(id(2), ["felicitous", "HAPPY"]);
        assert_eq!(a.shared_lemma(&b), Some("happy"));
        assert_eq!(b.shared_lemma(&a), Some("happy"));
    }

    #[test]
    fn disjoint_synsets_share_nothing() {
        let a = Synset::new(id(1), ["cat", "true_cat"]);
        let b = Synset::new(id(2), ["dog", "domestic_dog", "Canis_familiaris"]);
        assert_eq!(a.shared_lemma(&b), None);
    }

    #[test]
    fn keys_are_sorted_and_deduped() {
        let s = Synset::new(id(3), ["b", "A", "a"]);
        assert_eq!(s.lemma_keys(), &["a".to_string(), "b".to_string()]);
        assert_eq!(s.lemmas.len(), 3);
    }

    #[test]
    fn pos_codes_round_trip() {
        for pos in PartOfSpeech::ALL {
            assert_eq!(PartOfSpeech::from_code(&pos.code().to_string()), Some(pos));
        }
        assert_eq!(PartOfSpeech::from_code("s"), Some(PartOfSpeech::Adjective));
        assert_eq!(PartOfSpeech::from_code("x"), None);
    }

    #[test]
    fn synset_id_display() {
        let id = SynsetId {
            pos: PartOfSpeech::Noun,
            offset: 2084071,
        };
        assert_eq!(id.to_string(), "02084071-n");
    }
}
