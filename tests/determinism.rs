use textcmp::{compare, find_synonyms, readability, similarity};

const SAMPLES: &[&str] = &[
    "",
    "a",
    "The quick brown fox",
    "the QUICK brown fox jumps over the lazy dog",
    "happy glad joyful",
    "Café au lait, s'il vous plaît.",
    "Children begin to learn quickly. Kids start to study fast.",
];

#[test]
fn similarity_is_reflexive() {
    for s in SAMPLES {
        assert_eq!(similarity(s, s), 100.0, "{s:?}");
    }
}

#[test]
fn similarity_is_symmetric() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
        }
    }
}

#[test]
fn similarity_stays_in_range() {
    for a in SAMPLES {
        for b in SAMPLES {
            let score = similarity(a, b);
            assert!((0.0..=100.0).contains(&score), "{a:?} vs {b:?}: {score}");
        }
    }
}

#[test]
fn similarity_edge_values() {
    assert_eq!(similarity("", ""), 100.0);
    assert_eq!(similarity("abc", ""), 0.0);
    assert_eq!(similarity("", "abc"), 0.0);
}

#[test]
fn synonym_pairs_are_stable_and_never_identical() {
    for a in SAMPLES {
        for b in SAMPLES {
            let first = find_synonyms(a, b);
            assert_eq!(first, find_synonyms(a, b));
            for pair in &first {
                assert_ne!(pair.first.to_lowercase(), pair.second.to_lowercase());
            }
        }
    }
}

#[test]
fn readability_of_empty_text_is_zero() {
    assert_eq!(readability(""), 0.0);
}

#[test]
fn repeated_comparisons_agree() {
    let a = SAMPLES[6];
    let b = SAMPLES[3];
    let first = compare(a, b).unwrap();
    for _ in 0..5 {
        assert_eq!(compare(a, b).unwrap(), first);
    }
}
