// Process-wide lexicon.
//
// The first call to [`shared`] loads the embedded seed lexicon unless a
// caller installed another one beforehand with [`install_shared`]. After
// that the lexicon is fixed for the life of the process and read
// concurrently without locking.
use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use crate::error::LexicalError;
use crate::lexicon::Lexicon;

static SHARED: OnceCell<Arc<Lexicon>> = OnceCell::new();

/// The process-wide lexicon, initialized with [`Lexicon::builtin`] on first use.
pub fn shared() -> Arc<Lexicon> {
    SHARED
        .get_or_init(|| {
            let lexicon = Lexicon::builtin();
            info!(synsets = lexicon.len(), "builtin_lexicon_loaded");
            Arc::new(lexicon)
        })
        .clone()
}

/// Install `lexicon` as the process-wide lexicon.
///
/// Must happen before the first [`shared`] call; afterwards the slot is taken
/// and [`LexicalError::AlreadyInstalled`] is returned.
pub fn install_shared(lexicon: Lexicon) -> Result<(), LexicalError> {
    let synsets = lexicon.len();
    SHARED
        .set(Arc::new(lexicon))
        .map_err(|_| LexicalError::AlreadyInstalled)?;
    info!(synsets, "shared_lexicon_installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_is_initialized_once() {
        let a = shared();
        let b = shared();
        assert!(Arc::ptr_eq(&a, &b));
        assert!(!a.is_empty());
    }

    #[test]
    fn install_after_first_use_fails() {
        let _ = shared();
        let err = install_shared(Lexicon::default()).unwrap_err();
        assert!(matches!(err, LexicalError::AlreadyInstalled));
    }
}
