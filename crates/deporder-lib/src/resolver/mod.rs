//! # Resolver
//!
//! Dependency ordering over arbitrary items. Callers hand in a slice of items
//! plus two selectors: one returning the item's key, one returning the keys it
//! depends on. Nothing here touches the filesystem, and the ordering
//! operations are pure functions of their input.
//!
//! ## Modules
//!
//! - [`validate`] - Split referenced keys into recognized and unrecognized
//! - [`cycles`] - Reject circular dependency chains before ordering
//! - [`order`] - Worklist topological ordering (dependencies first)
//! - [`reverse`] - Inverse adjacency (who depends on a key)
//! - [`graph`] - petgraph-backed view for per-key dependency queries
//!
//! ## Example
//!
//! ```
//! use deporder_lib::resolver::order;
//!
//! let items = [("App", vec!["Core", "Missing"]), ("Core", vec![])];
//! let result = order(&items, |item| item.0, |item| item.1.iter().copied()).unwrap();
//!
//! assert_eq!(result.valid, vec!["Core", "App"]);
//! assert_eq!(result.invalid, vec!["Missing"]);
//! ```

use crate::project::Project;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

pub mod cycles;
pub mod graph;
pub mod order;
pub mod reverse;
pub mod validate;

pub use cycles::detect_cycle;
pub use graph::DependencyGraph;
pub use order::{DependencyOrder, order, valid_order};
pub use reverse::{ReverseIndex, reverse_lookup};
pub use validate::{Validation, validate};

/// Errors raised while resolving a dependency order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError<K> {
    /// `origin` can reach itself through its dependencies. `path` starts and
    /// ends with `origin`.
    #[error("Circular reference found: {origin}")]
    CircularDependency { origin: K, path: Vec<K> },

    #[error("Duplicate item key: {key}")]
    DuplicateKey { key: K },

    /// Worklist made no progress. Only reachable if the input changed between
    /// validation and ordering.
    #[error("Unable to order {} remaining items", .pending.len())]
    Unresolvable { pending: Vec<K> },
}

impl<K> ResolveError<K> {
    /// Cycle path for [`ResolveError::CircularDependency`], empty otherwise
    pub fn cycle_path(&self) -> &[K] {
        match self {
            ResolveError::CircularDependency { path, .. } => path,
            _ => &[],
        }
    }
}

/// An item reduced to its key and dependency keys
///
/// Selectors are evaluated once, up front, so the passes below never call back
/// into user code.
#[derive(Debug, Clone)]
pub(crate) struct Entry<K> {
    pub key: K,
    pub dependencies: Vec<K>,
}

impl<K> Entry<K> {
    pub fn is_root(&self) -> bool {
        self.dependencies.is_empty()
    }
}

pub(crate) fn collect_entries<'a, T, K, KF, DF, I>(
    items: &'a [T],
    key_of: KF,
    deps_of: DF,
) -> Vec<Entry<K>>
where
    KF: Fn(&'a T) -> K,
    DF: Fn(&'a T) -> I,
    I: IntoIterator<Item = K>,
{
    items
        .iter()
        .map(|item| Entry {
            key: key_of(item),
            dependencies: deps_of(item).into_iter().collect(),
        })
        .collect()
}

/// Map every key to its entry position, rejecting duplicates
pub(crate) fn index_entries<K>(entries: &[Entry<K>]) -> Result<HashMap<&K, usize>, ResolveError<K>>
where
    K: Eq + Hash + Clone,
{
    let mut index = HashMap::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        if index.insert(&entry.key, position).is_some() {
            return Err(ResolveError::DuplicateKey {
                key: entry.key.clone(),
            });
        }
    }
    Ok(index)
}

/// [`order`] keyed by project name over project references
pub fn order_projects(
    projects: &[Project],
) -> Result<DependencyOrder<String>, ResolveError<String>> {
    order(projects, Project::key, Project::dependencies)
}

/// [`reverse_lookup`] keyed by project name over project references
pub fn reverse_lookup_projects(projects: &[Project]) -> ReverseIndex<String> {
    reverse_lookup(projects, Project::key, Project::dependencies)
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
