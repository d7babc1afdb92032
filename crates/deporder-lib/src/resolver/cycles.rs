//! Circular dependency detection
//!
//! Every item is treated as an origin in turn, and its dependencies are walked
//! depth-first looking for a path back to the origin. All items are checked,
//! not just roots: a cycle does not have to be reachable from any root.
//!
//! Each walk keeps its own visited set, so a cycle that does not pass through
//! the current origin is entered at most once and cannot stall the search.
//! Unrecognized keys end a branch; they have no dependencies of their own.

use super::{Entry, ResolveError, collect_entries, index_entries};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Fail with [`ResolveError::CircularDependency`] for the first item, in input
/// order, that can reach itself
///
/// Duplicate item keys are rejected with [`ResolveError::DuplicateKey`] first.
pub fn detect_cycle<'a, T, K, KF, DF, I>(
    items: &'a [T],
    key_of: KF,
    deps_of: DF,
) -> Result<(), ResolveError<K>>
where
    K: Eq + Hash + Clone,
    KF: Fn(&'a T) -> K,
    DF: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
{
    let entries = collect_entries(items, key_of, deps_of);
    let index = index_entries(&entries)?;
    ensure_acyclic(&entries, &index)
}

pub(crate) fn ensure_acyclic<K>(
    entries: &[Entry<K>],
    index: &HashMap<&K, usize>,
) -> Result<(), ResolveError<K>>
where
    K: Eq + Hash + Clone,
{
    for origin in 0..entries.len() {
        if let Some(path) = find_cycle_from(origin, entries, index) {
            return Err(ResolveError::CircularDependency {
                origin: entries[origin].key.clone(),
                path,
            });
        }
    }
    Ok(())
}

/// Depth-first search for `entries[origin].key` below `entries[origin]`
///
/// Returns the path `[origin, .., origin]` on success.
fn find_cycle_from<K>(
    origin: usize,
    entries: &[Entry<K>],
    index: &HashMap<&K, usize>,
) -> Option<Vec<K>>
where
    K: Eq + Hash + Clone,
{
    let target = &entries[origin].key;
    let mut visited: HashSet<usize> = HashSet::new();
    // (entry position, next dependency to inspect)
    let mut stack: Vec<(usize, usize)> = vec![(origin, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        let dependencies = &entries[node].dependencies;
        if next == dependencies.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let dependency = &dependencies[next];
        if dependency == target {
            let mut path: Vec<K> = stack
                .iter()
                .map(|&(position, _)| entries[position].key.clone())
                .collect();
            path.push(target.clone());
            return Some(path);
        }

        if let Some(&child) = index.get(dependency) {
            if visited.insert(child) {
                stack.push((child, 0));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    include!("cycles.test.rs");
}
