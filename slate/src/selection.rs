//! Selection state shared by selectable widgets.

use std::collections::HashSet;
use std::hash::Hash;

/// Tracks selected records by their keys.
///
/// Keys are independent of the live row set: replacing the rows does
/// not prune keys that no longer match a record. A stale key simply
/// stops matching anything until it is toggled off.
#[derive(Debug, Clone)]
pub struct Selection<K: Clone + Eq + Hash> {
    selected: HashSet<K>,
}

impl<K: Clone + Eq + Hash> Default for Selection<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> Selection<K> {
    pub fn new() -> Self {
        Self {
            selected: HashSet::new(),
        }
    }

    /// Presence toggle. Returns true if the key is selected afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.selected.contains(&key) {
            self.selected.remove(&key);
            false
        } else {
            self.selected.insert(key);
            true
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected.contains(key)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.selected.iter()
    }
}
