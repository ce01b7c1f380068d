use std::fmt;

use glossa_config::{ContextKind, CountKind, StoreConfig};
use serde_json::{Map, Value};

use crate::context::{LatestContext, SnippetContext};
use crate::count::{AtomicCount, BasicCount};
use crate::store::{ContextStore, CountStore};

/// A single vocabulary unit pulled out of a source text: its lowercase
/// surface form, the learner's translation and known flag, plus context and
/// occurrence count held behind pluggable stores.
#[derive(Debug)]
pub struct WordEntry {
    word: String,
    translate: String,
    known: bool,
    context: Box<dyn ContextStore>,
    count: Box<dyn CountStore>,
}

impl Default for WordEntry {
    fn default() -> Self {
        WordEntry {
            word: String::new(),
            translate: String::new(),
            known: false,
            context: Box::new(LatestContext::new()),
            count: Box::new(BasicCount::new()),
        }
    }
}

impl WordEntry {
    /// Creates an entry for the given surface form, lowercased.
    pub fn new(word: &str) -> Self {
        let mut entry = Self::default();
        entry.set_word(word);
        entry
    }

    /// Creates an entry for the given surface form and stores its first
    /// context snippet.
    pub fn with_context(word: &str, context: &str) -> Self {
        let mut entry = Self::new(word);
        entry.set_context(context);
        entry
    }

    /// Creates an entry backed by caller-chosen stores.
    pub fn with_stores(
        word: &str,
        context: Box<dyn ContextStore>,
        count: Box<dyn CountStore>,
    ) -> Self {
        let mut entry = WordEntry {
            context,
            count,
            ..Self::default()
        };
        entry.set_word(word);
        entry
    }

    /// Creates an entry with stores selected by configuration.
    pub fn from_config(config: &StoreConfig, word: &str) -> Self {
        tracing::debug!(context = ?config.context, count = ?config.count, %word, "building word entry");

        let context: Box<dyn ContextStore> = match config.context {
            ContextKind::Latest => Box::new(LatestContext::new()),
            ContextKind::Snippets => Box::new(SnippetContext::new()),
        };
        let count: Box<dyn CountStore> = match config.count {
            CountKind::Basic => Box::new(BasicCount::new()),
            CountKind::Atomic => Box::new(AtomicCount::new()),
        };

        Self::with_stores(word, context, count)
    }

    /// The canonical lowercase form of the word.
    pub fn word(&self) -> &str {
        &self.word
    }

    // The surface form is fixed at construction as far as external callers
    // are concerned; only crate-internal code may rename an entry.
    pub(crate) fn set_word(&mut self, word: &str) -> &mut Self {
        self.word = word.to_lowercase();
        self
    }

    pub fn translate(&self) -> &str {
        &self.translate
    }

    pub fn set_translate(&mut self, translate: &str) -> &mut Self {
        self.translate = translate.to_string();
        self
    }

    pub fn is_known(&self) -> bool {
        self.known
    }

    pub fn set_known(&mut self, known: bool) -> &mut Self {
        self.known = known;
        self
    }

    /// String rendering of the stored context; representation depends on the
    /// backing store.
    pub fn context(&self) -> String {
        self.context.render()
    }

    pub fn set_context(&mut self, context: &str) -> &mut Self {
        self.context.store(context);
        self
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }

    pub fn set_count(&mut self, count: u64) -> &mut Self {
        self.count.set(count);
        self
    }

    /// Increments the occurrence count by one and returns the new value.
    pub fn increment_count(&mut self) -> u64 {
        self.count.increment()
    }

    /// JSON projection with the fixed keys `word`, `translate`, `context`,
    /// `known`, `count`, in that order.
    pub fn to_json(&self) -> Value {
        self.to_json_with(&[])
    }

    /// Same projection as [`WordEntry::to_json`], with each attribute pair
    /// appended after the five fixed keys in slice order. The caller is
    /// responsible for avoiding key collisions.
    pub fn to_json_with(&self, attributes: &[(String, String)]) -> Value {
        let mut object = Map::new();
        object.insert("word".to_string(), Value::from(self.word()));
        object.insert("translate".to_string(), Value::from(self.translate()));
        object.insert("context".to_string(), Value::from(self.context()));
        object.insert("known".to_string(), Value::from(self.is_known()));
        object.insert("count".to_string(), Value::from(self.count()));

        for (key, value) in attributes {
            object.insert(key.clone(), Value::from(value.as_str()));
        }

        Value::Object(object)
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :: {}", self.word, self.count())
    }
}

// Snapshot equality: the count participates alongside the surface form, so
// the same logical word at two pipeline stages compares unequal. Downstream
// tooling relies on this, so it stays even though it looks entity-unlike.
impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.count() == other.count()
    }
}

impl Eq for WordEntry {}
