//! Recognized / unrecognized key partitioning
//!
//! A dependency graph can reference keys that no item defines. Those keys are
//! reported as unrecognized and excluded from cycle checks and ordering; they
//! are never an error on their own.

use super::{Entry, collect_entries};
use std::collections::HashSet;
use std::hash::Hash;

/// Outcome of [`validate`]
///
/// Both lists are deduplicated and keep first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation<K> {
    /// Keys backed by an item
    pub recognized: Vec<K>,
    /// Keys referenced as dependencies without a backing item
    pub unrecognized: Vec<K>,
}

impl<K: Eq> Validation<K> {
    pub fn is_recognized(&self, key: &K) -> bool {
        self.recognized.contains(key)
    }

    pub fn is_unrecognized(&self, key: &K) -> bool {
        self.unrecognized.contains(key)
    }
}

/// Partition every key mentioned by `items` into recognized and unrecognized
pub fn validate<'a, T, K, KF, DF, I>(items: &'a [T], key_of: KF, deps_of: DF) -> Validation<K>
where
    K: Eq + Hash + Clone,
    KF: Fn(&'a T) -> K,
    DF: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
{
    validate_entries(&collect_entries(items, key_of, deps_of))
}

pub(crate) fn validate_entries<K>(entries: &[Entry<K>]) -> Validation<K>
where
    K: Eq + Hash + Clone,
{
    let mut seen: HashSet<&K> = HashSet::with_capacity(entries.len());
    let recognized: Vec<K> = entries
        .iter()
        .filter(|entry| seen.insert(&entry.key))
        .map(|entry| entry.key.clone())
        .collect();

    let mut reported: HashSet<&K> = HashSet::new();
    let unrecognized: Vec<K> = entries
        .iter()
        .flat_map(|entry| entry.dependencies.iter())
        .filter(|dependency| !seen.contains(dependency) && reported.insert(*dependency))
        .cloned()
        .collect();

    Validation {
        recognized,
        unrecognized,
    }
}

#[cfg(test)]
mod tests {
    include!("validate.test.rs");
}
