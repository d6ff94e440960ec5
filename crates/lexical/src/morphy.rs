//! Morphological base forms by suffix detachment.
//!
//! Inflected words are reduced to candidate lemmas by swapping one known
//! suffix. Candidates are not checked here; the lexicon keeps only those it
//! actually indexes. Irregular forms (`mice`, `ran`, `better`) come from the
//! lexicon's exception lists instead.

use crate::synset::PartOfSpeech;

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

fn rules(pos: PartOfSpeech) -> &'static [(&'static str, &'static str)] {
    match pos {
        PartOfSpeech::Noun => NOUN_RULES,
        PartOfSpeech::Verb => VERB_RULES,
        PartOfSpeech::Adjective => ADJECTIVE_RULES,
        PartOfSpeech::Adverb => &[],
    }
}

/// Candidate base forms of `word` for `pos`, in rule order.
///
/// `word` is expected lowercased. Only one suffix is detached; the word
/// itself is not included.
pub fn detach(word: &str, pos: PartOfSpeech) -> Vec<String> {
    rules(pos)
        .iter()
        .filter_map(|(suffix, replacement)| {
            word.strip_suffix(suffix)
                .filter(|stem| !stem.is_empty())
                .map(|stem| format!("{stem}{replacement}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noun_plurals() {
        assert!(detach("dogs", PartOfSpeech::Noun).contains(&"dog".to_string()));
        assert!(detach("boxes", PartOfSpeech::Noun).contains(&"box".to_string()));
        assert!(detach("wolves", PartOfSpeech::Noun).contains(&"wolf".to_string()));
        assert!(detach("ponies", PartOfSpeech::Noun).contains(&"pony".to_string()));
        assert!(detach("women", PartOfSpeech::Noun).contains(&"woman".to_string()));
    }

    #[test]
    fn verb_inflections() {
        let running = detach("running", PartOfSpeech::Verb);
        assert_eq!(running, vec!["runne".to_string(), "runn".to_string()]);
        assert!(detach("started", PartOfSpeech::Verb).contains(&"start".to_string()));
        assert!(detach("hoped", PartOfSpeech::Verb).contains(&"hope".to_string()));
        assert!(detach("tries", PartOfSpeech::Verb).contains(&"try".to_string()));
    }

    #[test]
    fn adjective_comparatives() {
        assert!(detach("larger", PartOfSpeech::Adjective).contains(&"large".to_string()));
        assert!(detach("smallest", PartOfSpeech::Adjective).contains(&"small".to_string()));
    }

    #[test]
    fn adverbs_have_no_rules() {
        assert!(detach("quickly", PartOfSpeech::Adverb).is_empty());
    }

    #[test]
    fn suffix_alone_is_not_a_stem() {
        assert!(detach("s", PartOfSpeech::Noun).is_empty());
        assert!(detach("ing", PartOfSpeech::Verb).is_empty());
    }
}
