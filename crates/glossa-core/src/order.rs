use std::cmp::Ordering;

use crate::word::WordEntry;

/// Three-way comparison of surface forms; the natural, alphabetical order.
pub fn lexical(a: &WordEntry, b: &WordEntry) -> Ordering {
    a.word().cmp(b.word())
}

/// Ascending occurrence count; the word itself is not consulted, so ties
/// between equally frequent words break arbitrarily.
pub fn by_count(a: &WordEntry, b: &WordEntry) -> Ordering {
    a.count().cmp(&b.count())
}
