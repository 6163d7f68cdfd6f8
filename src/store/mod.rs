pub mod file_store;
pub mod kv;
pub mod stats_store;

pub use kv::{KeyValueStore, MemoryStore};
pub use stats_store::StatsStore;
