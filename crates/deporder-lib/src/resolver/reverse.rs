//! Reverse-dependency index
//!
//! Inverse adjacency: for each key that something depends on, the items that
//! list it directly. Built straight from the raw items, so it also covers
//! unrecognized keys and works on cyclic input.

use super::{Entry, collect_entries};
use serde::ser::{Serialize, Serializer};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Insertion-ordered mapping from a key to its direct dependents
///
/// Keys appear in the order they were first referenced; dependents in item
/// order. Keys nothing depends on are absent.
#[derive(Debug, Clone)]
pub struct ReverseIndex<K> {
    entries: Vec<(K, Vec<K>)>,
    positions: HashMap<K, usize>,
}

impl<K> ReverseIndex<K>
where
    K: Eq + Hash + Clone,
{
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn push(&mut self, dependency: &K, dependent: &K) {
        let position = match self.positions.get(dependency) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.entries.push((dependency.clone(), Vec::new()));
                self.positions.insert(dependency.clone(), position);
                position
            }
        };
        self.entries[position].1.push(dependent.clone());
    }

    /// Direct dependents of `key`, `None` when nothing depends on it
    pub fn get(&self, key: &K) -> Option<&[K]> {
        self.positions
            .get(key)
            .map(|&position| self.entries[position].1.as_slice())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys and their dependents in first-referenced order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[K])> {
        self.entries
            .iter()
            .map(|(key, dependents)| (key, dependents.as_slice()))
    }
}

impl<K> PartialEq for ReverseIndex<K>
where
    K: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K> Eq for ReverseIndex<K> where K: Eq + Hash {}

impl<K> Serialize for ReverseIndex<K>
where
    K: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.entries
                .iter()
                .map(|(key, dependents)| (key, dependents)),
        )
    }
}

/// Map every referenced key to the items that depend on it directly
pub fn reverse_lookup<'a, T, K, KF, DF, I>(items: &'a [T], key_of: KF, deps_of: DF) -> ReverseIndex<K>
where
    K: Eq + Hash + Clone,
    KF: Fn(&'a T) -> K,
    DF: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
{
    reverse_entries(&collect_entries(items, key_of, deps_of))
}

pub(crate) fn reverse_entries<K>(entries: &[Entry<K>]) -> ReverseIndex<K>
where
    K: Eq + Hash + Clone,
{
    let mut index = ReverseIndex::new();
    for entry in entries {
        // an item naming the same dependency twice is still one dependent
        let mut listed: HashSet<&K> = HashSet::with_capacity(entry.dependencies.len());
        for dependency in &entry.dependencies {
            if listed.insert(dependency) {
                index.push(dependency, &entry.key);
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    include!("reverse.test.rs");
}
