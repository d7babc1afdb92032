// Tests for dependency graph queries

use super::*;
use crate::resolver::detect_cycle;
use proptest::prelude::*;

// ============================================================================
// Test Utilities
// ============================================================================

type Items = [(&'static str, Vec<&'static str>)];

fn build(items: &Items) -> DependencyGraph<&'static str> {
    DependencyGraph::from_items(items, |item| item.0, |item| item.1.iter().copied()).unwrap()
}

fn solution() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("WebApp", vec!["Logger", "Services", "Squiggly"]),
        ("Services", vec!["Logger", "DomainModels"]),
        ("DomainModels", vec!["VariousAbstractions"]),
        ("PublicApi", vec!["Services"]),
        ("Logger", vec![]),
        ("VariousAbstractions", vec![]),
    ]
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_empty_graph() {
    let graph = build(&[]);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_cycles());
}

#[test]
fn test_nodes_are_recognized_keys_only() {
    let graph = build(&solution());

    assert_eq!(graph.node_count(), 6);
    assert_eq!(graph.edge_count(), 6);
    assert!(graph.contains(&"WebApp"));
    assert!(!graph.contains(&"Squiggly"));
    assert_eq!(graph.unrecognized(), &["Squiggly"]);
    assert_eq!(graph.keys().count(), 6);
}

#[test]
fn test_repeated_dependency_is_one_edge() {
    let graph = build(&[("app", vec!["core", "core"]), ("core", vec![])]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_keys_are_rejected() {
    let items = [("a", vec![]), ("a", vec![])];
    let result = DependencyGraph::from_items(&items, |item| item.0, |item| item.1.iter().copied());
    assert!(matches!(result, Err(ResolveError::DuplicateKey { key: "a" })));
}

// ============================================================================
// Direct and Transitive Queries
// ============================================================================

#[test]
fn test_direct_dependencies_in_declaration_order() {
    let graph = build(&solution());

    assert_eq!(
        graph.dependencies(&"Services"),
        Some(vec!["Logger", "DomainModels"])
    );
    // the unrecognized reference is not an edge
    assert_eq!(
        graph.dependencies(&"WebApp"),
        Some(vec!["Logger", "Services"])
    );
    assert_eq!(graph.dependencies(&"Logger"), Some(vec![]));
}

#[test]
fn test_direct_dependents_in_item_order() {
    let graph = build(&solution());

    assert_eq!(
        graph.dependents(&"Logger"),
        Some(vec!["WebApp", "Services"])
    );
    assert_eq!(
        graph.dependents(&"Services"),
        Some(vec!["WebApp", "PublicApi"])
    );
    assert_eq!(graph.dependents(&"WebApp"), Some(vec![]));
}

#[test]
fn test_transitive_dependencies_nearest_first() {
    let graph = build(&solution());

    assert_eq!(
        graph.transitive_dependencies(&"PublicApi"),
        Some(vec![
            "Services",
            "Logger",
            "DomainModels",
            "VariousAbstractions"
        ])
    );
}

#[test]
fn test_transitive_dependents() {
    let graph = build(&solution());

    assert_eq!(
        graph.transitive_dependents(&"VariousAbstractions"),
        Some(vec!["DomainModels", "Services", "WebApp", "PublicApi"])
    );
}

#[test]
fn test_unknown_key_queries_return_none() {
    let graph = build(&solution());

    assert_eq!(graph.dependencies(&"Squiggly"), None);
    assert_eq!(graph.dependents(&"Nope"), None);
    assert_eq!(graph.transitive_dependencies(&"Nope"), None);
    assert_eq!(graph.transitive_dependents(&"Nope"), None);
}

#[test]
fn test_transitive_walk_terminates_on_cycles() {
    let graph = build(&[("a", vec!["b"]), ("b", vec!["c"]), ("c", vec!["a"])]);

    assert!(graph.has_cycles());
    assert_eq!(graph.transitive_dependencies(&"a"), Some(vec!["b", "c"]));
}

#[test]
fn test_self_reference_is_a_cycle() {
    let graph = build(&[("solo", vec!["solo"])]);
    assert!(graph.has_cycles());
}

// ============================================================================
// Cycle Detection Agreement
// ============================================================================

/// Arbitrary graph over `k0..k7` plus a few unrecognized keys
fn arbitrary_items() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    (0usize..8).prop_flat_map(|count| {
        prop::collection::vec(prop::collection::vec(0usize..10, 0..3), count).prop_map(
            move |raw| {
                raw.into_iter()
                    .enumerate()
                    .map(|(i, targets)| {
                        let dependencies = targets
                            .into_iter()
                            .map(|j| {
                                if j < count {
                                    format!("k{j}")
                                } else {
                                    format!("ext{j}")
                                }
                            })
                            .collect();
                        (format!("k{i}"), dependencies)
                    })
                    .collect::<Vec<_>>()
            },
        )
    })
}

proptest! {
    #[test]
    fn prop_cycle_detector_agrees_with_petgraph(items in arbitrary_items()) {
        let graph = DependencyGraph::from_items(&items, |item| item.0.clone(), |item| item.1.clone())
            .unwrap();
        let detected = detect_cycle(&items, |item| item.0.clone(), |item| item.1.clone());

        prop_assert_eq!(graph.has_cycles(), detected.is_err());
    }
}
