pub mod context;
pub mod count;
pub mod order;
pub mod store;
pub mod word;

pub use word::WordEntry;
