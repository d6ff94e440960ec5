use std::sync::Arc;

use crate::synset::Synset;

/// Read-only source of sense groupings.
///
/// The synonym matcher only ever talks to this trait, so the builtin
/// [`Lexicon`](crate::Lexicon), a full WordNet install, or a test double can
/// stand behind it. Implementations are shared across threads and never
/// mutated after construction.
pub trait LexicalDatabase: Send + Sync {
    /// Synsets the surface word belongs to, in sense order, without
    /// duplicates. Unknown words yield an empty vector.
    fn synsets(&self, word: &str) -> Vec<&Synset>;
}

impl<T: LexicalDatabase + ?Sized> LexicalDatabase for Arc<T> {
    fn synsets(&self, word: &str) -> Vec<&Synset> {
        (**self).synsets(word)
    }
}

impl<T: LexicalDatabase + ?Sized> LexicalDatabase for &T {
    fn synsets(&self, word: &str) -> Vec<&Synset> {
        (**self).synsets(word)
    }
}
