//! textcmp normalization layer.
//!
//! Turns a decoded input string into a [`Document`]: the lowercased form the
//! similarity scorer works on, and the whitespace token stream the synonym
//! matcher works on.
//!
//! ## What we do
//!
//! - Lowercasing (Unicode case mapping, locale-free)
//! - Optional NFKC normalization
//! - Whitespace tokenization with byte offsets, case preserved
//! - Optional punctuation trimming at token edges
//!
//! ## What we don't do
//!
//! - No stemming. Morphological base forms are the lexicon's business.
//! - No whitespace collapsing in the normalized form. Similarity is measured
//!   character by character over what the extraction layer decoded.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same document on any machine.

mod config;
mod document;
mod error;
mod pipeline;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::document::Document;
pub use crate::error::CanonicalError;
pub use crate::pipeline::{canonicalize, normalize};
pub use crate::token::{token_set, tokenize, Token};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_everything() {
        assert_eq!(normalize("The QUICK Brown fox!"), "the quick brown fox!");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn basic_canonicalize_default() {
        let input = "  Hello\nWORLD!  This is   textcmp. ";
        let cfg = CanonicalizeConfig::default();
        let doc = canonicalize("doc-basic", input, &cfg).expect("canonicalization succeeds");

        assert_eq!(doc.label, "doc-basic");
        assert_eq!(doc.raw, input);
        assert_eq!(doc.normalized, "  hello\nworld!  this is   textcmp. ");
        assert_eq!(doc.config, cfg);

        let expected_tokens = vec![
            ("Hello", 2usize, 7usize),
            ("WORLD!", 8, 14),
            ("This", 16, 20),
            ("is", 21, 23),
            ("textcmp.", 26, 34),
        ];
        assert_eq!(doc.tokens.len(), expected_tokens.len());
        for (token, (text, start, end)) in doc.tokens.iter().zip(expected_tokens) {
            assert_eq!(token.text, text);
            assert_eq!(token.start, start);
            assert_eq!(token.end, end);
            assert_eq!(&input[token.start..token.end], text);
        }
    }

    #[test]
    fn strip_punctuation_only_touches_tokens() {
        let input = "Hello, world! (It's) -- fun.";
        let cfg = CanonicalizeConfig {
            strip_punctuation: true,
            ..Default::default()
        };
        let doc = canonicalize("doc-strip", input, &cfg).expect("canonicalization succeeds");
        assert_eq!(doc.normalized, "hello, world! (it's) -- fun.");
        let token_texts: Vec<&str> = doc.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(token_texts, vec!["Hello", "world", "It's", "fun"]);
    }

    #[test]
    fn unicode_equivalence_nfkc() {
        let composed = "Caf\u{00E9}";
        let decomposed = "Cafe\u{0301}";
        let cfg = CanonicalizeConfig {
            normalize_unicode: true,
            ..Default::default()
        };

        let doc_a = canonicalize("doc-a", composed, &cfg).expect("canonical composed");
        let doc_b = canonicalize("doc-b", decomposed, &cfg).expect("canonical decomposed");

        assert_eq!(doc_a.normalized, doc_b.normalized);
        assert_eq!(doc_a.token_set(), doc_b.token_set());
    }

    #[test]
    fn nfkc_tokens_keep_raw_offsets() {
        let input = "\u{FB01}. \u{FF21}\u{FF22}!";
        let cfg = CanonicalizeConfig {
            normalize_unicode: true,
            strip_punctuation: true,
            ..Default::default()
        };
        let doc = canonicalize("doc-ligature", input, &cfg).expect("canonicalization succeeds");
        let texts: Vec<&str> = doc.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["fi", "AB"]);
        assert_eq!((doc.tokens[0].start, doc.tokens[0].end), (0, 3));
        assert_eq!(&input[doc.tokens[0].start..doc.tokens[0].end], "\u{FB01}");
        assert_eq!(&input[doc.tokens[1].start..doc.tokens[1].end], "\u{FF21}\u{FF22}");
    }

    #[test]
    fn raw_unicode_kept_by_default() {
        let cfg = CanonicalizeConfig::default();
        let doc = canonicalize("doc-raw", "Cafe\u{0301}", &cfg).expect("canonicalization succeeds");
        assert_eq!(doc.normalized, "cafe\u{0301}");
    }

    #[test]
    fn lowercase_can_be_disabled() {
        let cfg = CanonicalizeConfig {
            lowercase: false,
            ..Default::default()
        };
        let doc = canonicalize("doc-case", "Keep Case", &cfg).expect("canonicalization succeeds");
        assert_eq!(doc.normalized, "Keep Case");
    }

    #[test]
    fn empty_input_rejected() {
        let cfg = CanonicalizeConfig::default();
        assert!(matches!(
            canonicalize("empty-doc", "", &cfg),
            Err(CanonicalError::EmptyInput)
        ));
    }

    #[test]
    fn whitespace_only_input_has_no_tokens() {
        let cfg = CanonicalizeConfig::default();
        let doc = canonicalize("blank-doc", " \n\t ", &cfg).expect("whitespace is content");
        assert_eq!(doc.raw, " \n\t ");
        assert_eq!(doc.normalized, " \n\t ");
        assert!(doc.tokens.is_empty());
        assert!(doc.token_set().is_empty());
    }

    #[test]
    fn missing_label_rejected() {
        let cfg = CanonicalizeConfig::default();
        let res = canonicalize("  ", "content", &cfg);
        assert!(matches!(res, Err(CanonicalError::MissingLabel)));
    }

    #[test]
    fn label_is_trimmed() {
        let cfg = CanonicalizeConfig::default();
        let doc = canonicalize(" text-1 ", "content", &cfg).expect("canonicalization succeeds");
        assert_eq!(doc.label, "text-1");
    }

    #[test]
    fn invalid_config_version_rejected() {
        let cfg = CanonicalizeConfig {
            version: 0,
            ..Default::default()
        };
        let res = canonicalize("doc-invalid", "content", &cfg);
        assert!(matches!(res, Err(CanonicalError::InvalidConfig(_))));
    }

    #[test]
    fn document_token_set_matches_free_function() {
        let text = "the cat and the hat";
        let doc = canonicalize("doc", text, &CanonicalizeConfig::default()).expect("doc");
        assert_eq!(doc.token_set(), token_set(text));
        assert_eq!(doc.word_count(), 5);
    }
}
