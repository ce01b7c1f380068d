use std::fmt;

/// Backing store for the context a word was seen in.
///
/// Different consumers want different representations (one rolling string,
/// a list of snippets, something keyed by document), so the word entry only
/// talks to this capability and the constructing collaborator picks the
/// concrete store.
pub trait ContextStore: fmt::Debug + Send + Sync {
    /// String rendering of whatever is stored; representation is the
    /// variant's choice.
    fn render(&self) -> String;

    /// Store new context text; whether that replaces or merges is the
    /// variant's policy.
    fn store(&mut self, context: &str);
}

/// Backing store for a word's occurrence count.
pub trait CountStore: fmt::Debug + Send + Sync {
    /// Current count.
    fn get(&self) -> u64;

    /// Absolute set.
    fn set(&mut self, value: u64);

    /// Increment by one and return the new value.
    fn increment(&mut self) -> u64;
}
