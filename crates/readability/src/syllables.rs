//! Heuristic English syllable counting.

const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Estimated syllables in one word.
///
/// Counts runs of vowels (`y` included), drops a trailing silent `e` when
/// that leaves at least one syllable, and gives every word with a letter at
/// least one syllable. Non-alphabetic characters are ignored; a word without
/// letters has zero syllables.
pub fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for c in &letters {
        let vowel = VOWELS.contains(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if count > 1 && ends_with_silent_e(&letters) {
        count -= 1;
    }
    count.max(1)
}

// "-e" after a consonant is silent, except the "-le" of "table" or "little".
fn ends_with_silent_e(letters: &[char]) -> bool {
    match letters {
        [.., before, 'l', 'e'] => VOWELS.contains(before),
        [.., before, 'e'] => !VOWELS.contains(before),
        _ => false,
    }
}
