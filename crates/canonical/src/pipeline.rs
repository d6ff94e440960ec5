use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;
use crate::document::Document;
use crate::error::CanonicalError;
use crate::token::{tokenize, trim_punctuation, Token};

/// Lowercases the full string.
///
/// Pure and total: the empty string maps to the empty string.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Main entry point. Builds a [`Document`] from decoded input text.
///
/// Only the empty string is rejected. Whitespace-only input is a real
/// document with no tokens.
pub fn canonicalize(
    label: impl Into<String>,
    input: &str,
    cfg: &CanonicalizeConfig,
) -> Result<Document, CanonicalError> {
    cfg.validate()?;

    let label: String = label.into();
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return Err(CanonicalError::MissingLabel);
    }
    let label = if label.len() == trimmed.len() {
        label
    } else {
        trimmed.to_string()
    };

    if input.is_empty() {
        return Err(CanonicalError::EmptyInput);
    }

    // NFKC runs before lowercasing, as it can change character boundaries.
    let unicode_text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let normalized = if cfg.lowercase {
        normalize(unicode_text.as_ref())
    } else {
        unicode_text.into_owned()
    };

    // Offsets index `input`, so trimming happens before NFKC rewrites the text.
    let mut tokens: Vec<Token> = tokenize(input);
    if cfg.strip_punctuation {
        tokens = tokens.iter().filter_map(trim_punctuation).collect();
    }
    if cfg.normalize_unicode {
        for token in &mut tokens {
            token.text = token.text.nfkc().collect();
        }
    }

    Ok(Document {
        label,
        raw: input.to_string(),
        normalized,
        tokens,
        config: cfg.clone(),
    })
}
