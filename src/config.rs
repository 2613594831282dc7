use crate::error::TableError;

pub const DEFAULT_INITIAL_CAPACITY: usize = 8;
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: usize = 4;

/// What `add` does with a key that is already stored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Replace the stored value and hand back the old one.
    #[default]
    Overwrite,
    /// Append another entry for the key. Lookups and deletes see the oldest
    /// entry first.
    Append,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets allocated up front and restored by `clear`.
    pub initial_capacity: usize,
    /// The table grows once `size >= capacity * load_factor_threshold`.
    pub load_factor_threshold: usize,
    pub duplicates: DuplicatePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            duplicates: DuplicatePolicy::default(),
        }
    }
}

impl TableConfig {
    pub fn new(initial_capacity: usize, load_factor_threshold: usize) -> Self {
        Self {
            initial_capacity,
            load_factor_threshold,
            ..Self::default()
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_load_factor_threshold(mut self, load_factor_threshold: usize) -> Self {
        self.load_factor_threshold = load_factor_threshold;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        if self.load_factor_threshold == 0 {
            return Err(TableError::ZeroLoadFactor);
        }
        Ok(())
    }
}
