use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::CountStore;

/// Plain counter for single-owner ingestion.
#[derive(Debug, Default)]
pub struct BasicCount {
    value: u64,
}

impl BasicCount {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CountStore for BasicCount {
    fn get(&self) -> u64 {
        self.value
    }

    fn set(&mut self, value: u64) {
        self.value = value;
    }

    fn increment(&mut self) -> u64 {
        self.value += 1;
        self.value
    }
}

/// Atomic counter. Through the `CountStore` trait it behaves like
/// `BasicCount`; ingestion workers that share one counter use
/// [`AtomicCount::fetch_increment`] on a shared reference instead.
#[derive(Debug, Default)]
pub struct AtomicCount {
    value: AtomicU64,
}

impl AtomicCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment through a shared reference and return the new value.
    pub fn fetch_increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn load(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}

impl CountStore for AtomicCount {
    fn get(&self) -> u64 {
        self.load()
    }

    fn set(&mut self, value: u64) {
        *self.value.get_mut() = value;
    }

    fn increment(&mut self) -> u64 {
        let v = self.value.get_mut();
        *v += 1;
        *v
    }
}
