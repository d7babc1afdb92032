//! Topological ordering
//!
//! Worklist ordering in repeated passes. Roots (items without dependencies)
//! are placed first, in input order. Each following pass walks the remaining
//! items in input order and places every item whose recognized dependencies
//! are already placed. Passes repeat until every recognized key is placed.
//!
//! Input order is the tie-break between items that become eligible in the same
//! pass, which keeps the output stable for a given input.

use super::cycles::ensure_acyclic;
use super::validate::validate_entries;
use super::{Entry, ResolveError, collect_entries, index_entries};
use serde::Serialize;
use std::collections::HashSet;
use std::hash::Hash;

/// Build order plus the references that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyOrder<K> {
    /// Recognized keys, each after all of its dependencies
    pub valid: Vec<K>,
    /// Unrecognized keys in first-seen order
    pub invalid: Vec<K>,
}

impl<K> DependencyOrder<K> {
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty() && self.invalid.is_empty()
    }
}

/// Order recognized keys so every item follows its dependencies
///
/// Fails on duplicate keys or a circular dependency; no partial order is
/// returned in either case. References to undefined keys do not block an
/// item, they are reported in [`DependencyOrder::invalid`].
pub fn order<'a, T, K, KF, DF, I>(
    items: &'a [T],
    key_of: KF,
    deps_of: DF,
) -> Result<DependencyOrder<K>, ResolveError<K>>
where
    K: Eq + Hash + Clone,
    KF: Fn(&'a T) -> K,
    DF: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
{
    let entries = collect_entries(items, key_of, deps_of);
    order_entries(&entries)
}

/// [`order`] without the unrecognized keys
pub fn valid_order<'a, T, K, KF, DF, I>(
    items: &'a [T],
    key_of: KF,
    deps_of: DF,
) -> Result<Vec<K>, ResolveError<K>>
where
    K: Eq + Hash + Clone,
    KF: Fn(&'a T) -> K,
    DF: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
{
    order(items, key_of, deps_of).map(|result| result.valid)
}

pub(crate) fn order_entries<K>(entries: &[Entry<K>]) -> Result<DependencyOrder<K>, ResolveError<K>>
where
    K: Eq + Hash + Clone,
{
    let index = index_entries(entries)?;
    ensure_acyclic(entries, &index)?;

    let validation = validate_entries(entries);
    let unrecognized: HashSet<&K> = validation.unrecognized.iter().collect();
    let target = validation.recognized.len();

    let (roots, pending): (Vec<&Entry<K>>, Vec<&Entry<K>>) =
        entries.iter().partition(|entry| entry.is_root());

    let mut placed: HashSet<&K> = HashSet::with_capacity(target);
    let mut valid: Vec<K> = Vec::with_capacity(target);

    for root in roots {
        if placed.insert(&root.key) {
            valid.push(root.key.clone());
        }
    }

    while valid.len() < target {
        let before = valid.len();

        for entry in &pending {
            if placed.contains(&entry.key) {
                continue;
            }

            let ready = entry
                .dependencies
                .iter()
                .filter(|dependency| !unrecognized.contains(dependency))
                .all(|dependency| placed.contains(dependency));

            if ready {
                placed.insert(&entry.key);
                valid.push(entry.key.clone());
                if valid.len() == target {
                    break;
                }
            }
        }

        if valid.len() == before {
            let pending = pending
                .iter()
                .filter(|entry| !placed.contains(&entry.key))
                .map(|entry| entry.key.clone())
                .collect();
            return Err(ResolveError::Unresolvable { pending });
        }
    }

    Ok(DependencyOrder {
        valid,
        invalid: validation.unrecognized,
    })
}

#[cfg(test)]
mod tests {
    include!("order.test.rs");
}
