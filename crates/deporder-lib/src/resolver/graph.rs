//! Dependency graph queries
//!
//! petgraph-backed view over the recognized items, for questions about a
//! single key: what does it need, and what needs it. Edges run from a
//! dependency to its dependent, so walking outgoing edges answers "what is
//! affected" and walking incoming edges answers "what is required".
//!
//! References to keys without an item are kept aside in
//! [`DependencyGraph::unrecognized`] instead of becoming nodes.

use super::{ResolveError, collect_entries, index_entries};
use petgraph::Direction;
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use tracing::{debug, trace};

/// Directed graph of recognized keys
#[derive(Debug, Clone)]
pub struct DependencyGraph<K> {
    /// Directed graph: nodes = keys, edges = dependency -> dependent
    graph: DiGraph<K, ()>,
    /// Map from key to node index for fast lookup
    node_map: HashMap<K, NodeIndex>,
    /// Referenced keys with no backing item, first-seen order
    unrecognized: Vec<K>,
}

impl<K> DependencyGraph<K>
where
    K: Eq + Hash + Clone,
{
    /// Build the graph from items, rejecting duplicate keys
    ///
    /// Cycles are accepted here; check them with [`DependencyGraph::has_cycles`].
    pub fn from_items<'a, T, KF, DF, I>(
        items: &'a [T],
        key_of: KF,
        deps_of: DF,
    ) -> Result<Self, ResolveError<K>>
    where
        KF: Fn(&'a T) -> K,
        DF: Fn(&'a T) -> I,
        I: IntoIterator<Item = K>,
    {
        let entries = collect_entries(items, key_of, deps_of);
        index_entries(&entries)?;

        let mut graph = DiGraph::with_capacity(entries.len(), entries.len());
        let mut node_map = HashMap::with_capacity(entries.len());
        for entry in &entries {
            let idx = graph.add_node(entry.key.clone());
            node_map.insert(entry.key.clone(), idx);
        }

        let mut unrecognized = Vec::new();
        let mut reported = HashSet::new();
        for entry in &entries {
            let dependent = node_map[&entry.key];
            for dependency in &entry.dependencies {
                match node_map.get(dependency) {
                    // update_edge keeps a repeated dependency to one edge
                    Some(&source) => {
                        graph.update_edge(source, dependent, ());
                    }
                    None => {
                        if reported.insert(dependency.clone()) {
                            trace!("Skipping unrecognized dependency edge");
                            unrecognized.push(dependency.clone());
                        }
                    }
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            unrecognized = unrecognized.len(),
            "Built dependency graph"
        );

        Ok(Self {
            graph,
            node_map,
            unrecognized,
        })
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Direct dependencies of `key` in declaration order
    pub fn dependencies(&self, key: &K) -> Option<Vec<K>> {
        let idx = self.node_map.get(key)?;
        Some(self.neighbors(*idx, Direction::Incoming))
    }

    /// Direct dependents of `key` in item order
    pub fn dependents(&self, key: &K) -> Option<Vec<K>> {
        let idx = self.node_map.get(key)?;
        Some(self.neighbors(*idx, Direction::Outgoing))
    }

    /// Everything `key` needs, directly or indirectly, nearest first
    pub fn transitive_dependencies(&self, key: &K) -> Option<Vec<K>> {
        let idx = self.node_map.get(key)?;
        Some(self.reachable(*idx, Direction::Incoming))
    }

    /// Everything that needs `key`, directly or indirectly, nearest first
    pub fn transitive_dependents(&self, key: &K) -> Option<Vec<K>> {
        let idx = self.node_map.get(key)?;
        Some(self.reachable(*idx, Direction::Outgoing))
    }

    /// Referenced keys with no backing item
    pub fn unrecognized(&self) -> &[K] {
        &self.unrecognized
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if a key has a node in the graph
    pub fn contains(&self, key: &K) -> bool {
        self.node_map.contains_key(key)
    }

    /// Get an iterator over all keys in input order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.graph.node_weights()
    }

    fn neighbor_indices(&self, node: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        // petgraph yields the most recently added edge first
        let mut neighbors: Vec<NodeIndex> = self.graph.neighbors_directed(node, direction).collect();
        neighbors.reverse();
        neighbors
    }

    fn neighbors(&self, node: NodeIndex, direction: Direction) -> Vec<K> {
        self.neighbor_indices(node, direction)
            .into_iter()
            .map(|idx| self.graph[idx].clone())
            .collect()
    }

    /// Breadth-first walk from `start`, excluding `start`
    fn reachable(&self, start: NodeIndex, direction: Direction) -> Vec<K> {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        let mut result = Vec::new();

        while let Some(node) = queue.pop_front() {
            for neighbor in self.neighbor_indices(node, direction) {
                if visited.insert(neighbor) {
                    result.push(self.graph[neighbor].clone());
                    queue.push_back(neighbor);
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    include!("graph.test.rs");
}
