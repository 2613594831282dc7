use std::collections::TryReserveError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("initial capacity must be greater than zero")]
    ZeroCapacity,
    #[error("load factor threshold must be greater than zero")]
    ZeroLoadFactor,
    #[error("capacity overflow while growing a table of {capacity} buckets")]
    CapacityOverflow { capacity: usize },
    #[error("failed to allocate {capacity} buckets: {source}")]
    Allocation {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
