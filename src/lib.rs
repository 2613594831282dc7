//! Resizable separate-chaining hash table from `i64` keys to `i64` values,
//! indexed with golden-ratio multiplicative hashing.

pub mod chain;
pub mod config;
pub mod error;
pub mod hash_table;

pub use chain::Chain;
pub use config::{DuplicatePolicy, TableConfig};
pub use error::TableError;
pub use hash_table::{hash, HashTable};
