//! Saved calculator sessions keyed by the block they belong to.
//!
//! Reopening a crucible's calculator restores the sliders the player left it
//! with. Entries are dropped explicitly when the block entity goes away, and
//! the oldest entry is dropped when the cache is full.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::allocation::AllocationState;
use crate::config::CalculatorConfig;

/// Position of a block in the world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Everything needed to bring a calculator back to where it was left.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CachedSession {
    pub recipe_code: String,
    pub allocation: AllocationState,
    pub target_units: u32,
}

#[derive(Clone, Debug)]
pub struct SessionCache<K = BlockPos> {
    entries: HashMap<K, CachedSession>,
    order: VecDeque<K>,
    max_entries: usize,
}

impl<K> SessionCache<K>
where
    K: Hash + Eq + Clone + core::fmt::Debug,
{
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn from_config(config: &CalculatorConfig) -> Self {
        Self::new(config.max_cached_sessions)
    }

    /// Saves `session` under `key`, returning the key evicted to make room.
    pub fn store(&mut self, key: K, session: CachedSession) -> Option<K> {
        if self.entries.insert(key.clone(), session).is_some() {
            self.order.retain(|existing| existing != &key);
            self.order.push_back(key);
            return None;
        }
        self.order.push_back(key);

        if self.entries.len() <= self.max_entries {
            return None;
        }
        let oldest = self.order.pop_front()?;
        self.entries.remove(&oldest);
        tracing::debug!(key = ?oldest, "session cache full, evicted oldest entry");
        Some(oldest)
    }

    pub fn get(&self, key: &K) -> Option<&CachedSession> {
        self.entries.get(key)
    }

    /// Drops the entry for `key`, e.g. when its block entity is removed.
    pub fn evict(&mut self, key: &K) -> Option<CachedSession> {
        let removed = self.entries.remove(key)?;
        self.order.retain(|existing| existing != key);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K> Default for SessionCache<K>
where
    K: Hash + Eq + Clone + core::fmt::Debug,
{
    fn default() -> Self {
        Self::from_config(&CalculatorConfig::default())
    }
}
