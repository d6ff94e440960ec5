use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;

/// A whitespace-delimited word with its UTF-8 byte offsets in the source text.
///
/// Offsets always index the raw input. With NFKC enabled `text` holds the
/// normalized form, so it can differ from `raw[start..end]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content, case preserved.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits text on Unicode whitespace and produces byte offsets.
///
/// No punctuation stripping and no stemming: `"fox."` stays `"fox."`.
/// Empty or whitespace-only input yields no tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        tokens.push(Token {
            text: text[token_start..].to_string(),
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}

/// Unique whitespace-delimited tokens of `text`, case preserved.
///
/// The set iterates in lexicographic order, which is the order the synonym
/// scan pairs tokens in.
pub fn token_set(text: &str) -> BTreeSet<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Trims leading and trailing punctuation from a token.
///
/// Returns `None` when nothing but punctuation remains.
pub(crate) fn trim_punctuation(token: &Token) -> Option<Token> {
    let text = token.text.as_str();
    let trimmed_start = text.trim_start_matches(|c: char| c.is_punctuation());
    let trimmed = trimmed_start.trim_end_matches(|c: char| c.is_punctuation());
    if trimmed.is_empty() {
        return None;
    }
    let offset = text.len() - trimmed_start.len();
    Some(Token {
        text: trimmed.to_string(),
        start: token.start + offset,
        end: token.start + offset + trimmed.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_keeps_punctuation_and_case() {
        let tokens = tokenize("The quick, brown fox.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "quick,", "brown", "fox."]);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 10);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn token_set_dedupes_but_preserves_case() {
        let set = token_set("happy Happy happy glad");
        let items: Vec<&str> = set.iter().map(String::as_str).collect();
        assert_eq!(items, vec!["Happy", "glad", "happy"]);
    }

    #[test]
    fn trim_punctuation_adjusts_offsets() {
        let token = Token {
            text: "(happy).".into(),
            start: 10,
            end: 18,
        };
        let trimmed = trim_punctuation(&token).expect("word remains");
        assert_eq!(trimmed.text, "happy");
        assert_eq!(trimmed.start, 11);
        assert_eq!(trimmed.end, 16);

        let only_punct = Token {
            text: "--".into(),
            start: 0,
            end: 2,
        };
        assert!(trim_punctuation(&only_punct).is_none());
    }
}
