use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or installing a lexicon.
///
/// Lookups never fail; a word the lexicon doesn't know simply has no synsets.
#[derive(Debug, Error)]
pub enum LexicalError {
    #[error("failed to read lexicon file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed line {line} in {}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },
    #[error("shared lexicon already initialized")]
    AlreadyInstalled,
}
