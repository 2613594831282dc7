use std::fmt;

use log::{debug, trace};

use crate::chain::Chain;
use crate::config::{DuplicatePolicy, TableConfig};
use crate::error::TableError;

/// Fractional part of the golden ratio, `(sqrt(5) - 1) / 2`.
///
/// ```text
/// golden_ratio = (1 + sqrt(5)) / 2 = 1.618033988749894848204586834
/// golden_ratio - 1                 = 0.618033988749894848204586834
/// ```
pub const GOLDEN_RATIO_FRACTION: f64 = 0.6180339887;

pub const MIN_CAPACITY: usize = 1;

/// Maps `key` to a bucket index in `[0, capacity)` by multiplicative hashing.
///
/// The key is scaled by [`GOLDEN_RATIO_FRACTION`], the fractional part of the
/// product is taken as `scaled - floor(scaled)` and then stretched over the
/// bucket range. Using `floor` keeps the fraction in `[0, 1)` for negative keys
/// too, so `-1` lands in the same bucket on every platform. A tiny negative
/// product can round the fraction up to exactly `1.0`, hence the final clamp.
///
/// Keys beyond 2^53 in magnitude lose precision when converted to `f64`; the
/// mapping stays deterministic but neighbouring keys may share a bucket.
pub fn hash(key: i64, capacity: usize) -> usize {
    debug_assert!(capacity >= MIN_CAPACITY, "hash into an empty bucket array");
    let scaled: f64 = key as f64 * GOLDEN_RATIO_FRACTION;
    let fraction: f64 = scaled - scaled.floor();
    let index: usize = (capacity as f64 * fraction) as usize;
    index.min(capacity - 1)
}

/// Separate-chaining hash table from `i64` keys to `i64` values.
///
/// Each bucket is a [`Chain`]. The bucket array doubles before an insert once
/// `size >= capacity * load_factor_threshold` and halves after a delete leaves
/// `size < capacity / 4`.
#[derive(Debug, Clone)]
pub struct HashTable {
    size: usize,
    initial_capacity: usize,
    load_factor_threshold: usize,
    duplicates: DuplicatePolicy,
    buckets: Vec<Chain>,
}

impl HashTable {
    pub fn new(initial_capacity: usize, load_factor_threshold: usize) -> Result<HashTable, TableError> {
        Self::with_config(TableConfig::new(initial_capacity, load_factor_threshold))
    }

    pub fn with_config(config: TableConfig) -> Result<HashTable, TableError> {
        config.validate()?;
        Ok(HashTable {
            size: 0,
            initial_capacity: config.initial_capacity,
            load_factor_threshold: config.load_factor_threshold,
            duplicates: config.duplicates,
            buckets: Self::allocate(config.initial_capacity)?,
        })
    }

    fn allocate(capacity: usize) -> Result<Vec<Chain>, TableError> {
        let mut buckets: Vec<Chain> = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|source| TableError::Allocation { capacity, source })?;
        buckets.resize_with(capacity, Chain::new);
        Ok(buckets)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    pub fn load_factor_threshold(&self) -> usize {
        self.load_factor_threshold
    }

    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    /// Bucket that `key` belongs to under the current capacity.
    pub fn bucket_of(&self, key: i64) -> usize {
        hash(key, self.capacity())
    }

    fn should_grow(&self) -> bool {
        self.size >= self.capacity().saturating_mul(self.load_factor_threshold)
    }

    fn should_shrink(&self) -> bool {
        self.size < self.capacity() / 4
    }

    /// Stores `value` under `key`.
    ///
    /// With [`DuplicatePolicy::Overwrite`] an existing entry is updated in
    /// place and its old value returned; nothing is resized in that case.
    /// Otherwise the table grows first if it is at its threshold, so the new
    /// entry is placed in the post-resize layout.
    pub fn add(&mut self, key: i64, value: i64) -> Result<Option<i64>, TableError> {
        if self.duplicates == DuplicatePolicy::Overwrite {
            let index: usize = self.bucket_of(key);
            if let Some(old) = self.buckets[index].replace_value(key, value) {
                trace!("add: updated key {} in bucket {}", key, index);
                return Ok(Some(old));
            }
        }

        if self.should_grow() {
            let new_capacity: usize = self
                .capacity()
                .checked_mul(2)
                .ok_or(TableError::CapacityOverflow { capacity: self.capacity() })?;
            self.resize(new_capacity)?;
        }

        let index: usize = self.bucket_of(key);
        self.buckets[index].append(key, value);
        self.size += 1;
        trace!("add: key {} into bucket {}, size {}", key, index, self.size);
        Ok(None)
    }

    /// Removes the first entry stored under `key` and returns its value.
    ///
    /// Deleting an absent key changes nothing, including the size and the
    /// bucket count.
    pub fn delete(&mut self, key: i64) -> Result<Option<i64>, TableError> {
        let index: usize = self.bucket_of(key);
        let removed: Option<i64> = self.buckets[index].remove_by_key(key);
        if removed.is_none() {
            trace!("delete: key {} not present", key);
            return Ok(None);
        }

        self.size -= 1;
        trace!("delete: key {} from bucket {}, size {}", key, index, self.size);
        if self.should_shrink() {
            self.resize((self.capacity() / 2).max(MIN_CAPACITY))?;
        }
        Ok(removed)
    }

    pub fn retrieve(&self, key: i64) -> Option<i64> {
        let index: usize = self.bucket_of(key);
        let value: Option<i64> = self.buckets[index].find_by_key(key);
        trace!("retrieve: key {} in bucket {} -> {:?}", key, index, value);
        value
    }

    pub fn contains_key(&self, key: i64) -> bool {
        self.retrieve(key).is_some()
    }

    /// Rehashes every entry into `new_capacity` fresh buckets, clamped to at
    /// least one bucket.
    ///
    /// Chains are walked head to tail, so entries that share a bucket after
    /// the resize keep their relative order. The bucket array is swapped only
    /// once the new one is fully populated; on error the table is unchanged.
    pub fn resize(&mut self, new_capacity: usize) -> Result<(), TableError> {
        let new_capacity: usize = new_capacity.max(MIN_CAPACITY);
        if new_capacity == self.capacity() {
            return Ok(());
        }

        let mut buckets: Vec<Chain> = Self::allocate(new_capacity)?;
        for chain in &self.buckets {
            for (key, value) in chain {
                buckets[hash(key, new_capacity)].append(key, value);
            }
        }

        debug!(
            "resize: {} -> {} buckets, {} entries",
            self.capacity(),
            new_capacity,
            self.size
        );
        self.buckets = buckets;
        Ok(())
    }

    /// Drops every entry and goes back to the initial bucket count.
    pub fn clear(&mut self) -> Result<(), TableError> {
        self.buckets = Self::allocate(self.initial_capacity)?;
        self.size = 0;
        debug!("clear: reset to {} buckets", self.initial_capacity);
        Ok(())
    }

    /// Every `(key, value)` pair, bucket by bucket, in chain order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.buckets.iter().flat_map(Chain::iter)
    }

    /// Contents of each bucket, indexed by bucket.
    pub fn dump(&self) -> Vec<Vec<(i64, i64)>> {
        self.buckets
            .iter()
            .map(|chain| chain.iter().collect())
            .collect()
    }
}

impl Default for HashTable {
    fn default() -> Self {
        let config: TableConfig = TableConfig::default();
        HashTable {
            size: 0,
            initial_capacity: config.initial_capacity,
            load_factor_threshold: config.load_factor_threshold,
            duplicates: config.duplicates,
            buckets: vec![Chain::new(); config.initial_capacity],
        }
    }
}

impl fmt::Display for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chain) in self.buckets.iter().enumerate() {
            write!(f, "Bucket {}: ", i)?;
            for (key, value) in chain {
                write!(f, "({}, {}) ", key, value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
