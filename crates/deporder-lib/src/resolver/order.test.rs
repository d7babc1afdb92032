// Tests for topological ordering

use super::*;
use proptest::prelude::*;
use std::collections::HashMap;

type Items = [(&'static str, Vec<&'static str>)];

fn resolve(items: &Items) -> Result<DependencyOrder<&'static str>, ResolveError<&'static str>> {
    order(items, |item| item.0, |item| item.1.iter().copied())
}

fn solution() -> Vec<(&'static str, Vec<&'static str>)> {
    vec![
        ("WebApp", vec!["Logger", "Services", "DomainModels"]),
        ("Services", vec!["Logger", "DomainModels"]),
        ("DomainModels", vec!["VariousAbstractions"]),
        ("PublicApi", vec!["Services"]),
        ("Logger", vec![]),
        ("VariousAbstractions", vec![]),
    ]
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_linear_and_diamond() {
    let result = resolve(&solution()).unwrap();

    assert_eq!(
        result.valid,
        vec![
            "Logger",
            "VariousAbstractions",
            "DomainModels",
            "Services",
            "PublicApi",
            "WebApp",
        ]
    );
    assert!(result.invalid.is_empty());
}

#[test]
fn test_dangling_reference_is_reported_not_fatal() {
    let mut items = solution();
    items[0].1 = vec!["Logger", "Services", "Squiggly"];

    let result = resolve(&items).unwrap();

    assert_eq!(
        result.valid,
        vec![
            "Logger",
            "VariousAbstractions",
            "DomainModels",
            "Services",
            "PublicApi",
            "WebApp",
        ]
    );
    assert_eq!(result.invalid, vec!["Squiggly"]);
}

#[test]
fn test_cycle_aborts_without_partial_order() {
    let items = [("A", vec!["B", "C", "D"]), ("D", vec!["E", "F", "A"])];

    let err = resolve(&items).unwrap_err();
    assert!(matches!(
        err,
        ResolveError::CircularDependency { origin: "A", .. }
    ));
    assert_eq!(err.to_string(), "Circular reference found: A");
}

#[test]
fn test_empty_input() {
    let result = resolve(&[]).unwrap();
    assert!(result.valid.is_empty());
    assert!(result.invalid.is_empty());
    assert!(result.is_empty());
}

#[test]
fn test_single_root_item() {
    let result = resolve(&[("only", vec![])]).unwrap();
    assert_eq!(result.valid, vec!["only"]);
    assert!(result.invalid.is_empty());
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn test_item_with_only_unrecognized_dependencies_is_placed() {
    let items = [("app", vec!["Newtonsoft.Json", "Serilog"]), ("lib", vec![])];

    let result = resolve(&items).unwrap();
    assert_eq!(result.valid, vec!["lib", "app"]);
    assert_eq!(result.invalid, vec!["Newtonsoft.Json", "Serilog"]);
}

#[test]
fn test_same_pass_ties_follow_input_order() {
    let items = [
        ("zeta", vec!["base"]),
        ("alpha", vec!["base"]),
        ("mid", vec!["base"]),
        ("base", vec![]),
    ];

    let result = resolve(&items).unwrap();
    assert_eq!(result.valid, vec!["base", "zeta", "alpha", "mid"]);
}

#[test]
fn test_dependent_listed_before_dependency_needs_extra_pass() {
    let items = [
        ("c", vec!["b"]),
        ("b", vec!["a"]),
        ("a", vec!["root"]),
        ("root", vec![]),
    ];

    let result = resolve(&items).unwrap();
    assert_eq!(result.valid, vec!["root", "a", "b", "c"]);
}

#[test]
fn test_duplicate_keys_are_rejected() {
    let items = [("a", vec![]), ("b", vec!["a"]), ("a", vec![])];
    assert_eq!(
        resolve(&items).unwrap_err(),
        ResolveError::DuplicateKey { key: "a" }
    );
}

#[test]
fn test_valid_order_drops_invalid() {
    let mut items = solution();
    items[3].1 = vec!["Services", "Swagger"];

    let valid = valid_order(&items, |item| item.0, |item| item.1.iter().copied()).unwrap();
    assert_eq!(valid.len(), 6);
    assert!(!valid.contains(&"Swagger"));
}

#[test]
fn test_owned_keys() {
    let items: Vec<(String, Vec<String>)> = vec![
        ("b".to_string(), vec!["a".to_string()]),
        ("a".to_string(), Vec::new()),
    ];

    let result = order(&items, |item| item.0.clone(), |item| item.1.clone()).unwrap();
    assert_eq!(result.valid, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_serializes_as_valid_and_invalid() {
    let result = resolve(&[("app", vec!["lib", "ghost"]), ("lib", vec![])]).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({ "valid": ["lib", "app"], "invalid": ["ghost"] })
    );
}

// ============================================================================
// Properties
// ============================================================================

/// Random DAG: item `k{i}` may only depend on `k{j}` with `j > i`, and any
/// `j` past the last item becomes an unrecognized `ext{j}` key
fn acyclic_items() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(prop::collection::vec(0usize..16, 0..4), 0..12)
        .prop_map(|raw| {
            let count = raw.len();
            raw.into_iter()
                .enumerate()
                .map(|(i, targets)| {
                    let dependencies = targets
                        .into_iter()
                        .filter(|&j| j > i)
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
        })
        .prop_shuffle()
}

fn resolve_owned(items: &[(String, Vec<String>)]) -> DependencyOrder<String> {
    order(items, |item| item.0.clone(), |item| item.1.clone())
        .expect("generated graphs are acyclic")
}

proptest! {
    #[test]
    fn prop_dependencies_precede_dependents(items in acyclic_items()) {
        let result = resolve_owned(&items);
        let position: HashMap<&String, usize> =
            result.valid.iter().enumerate().map(|(i, key)| (key, i)).collect();

        for (key, dependencies) in &items {
            for dependency in dependencies {
                if let Some(&before) = position.get(dependency) {
                    prop_assert!(before < position[key], "{dependency} must precede {key}");
                }
            }
        }
    }

    #[test]
    fn prop_valid_and_invalid_partition_all_keys(items in acyclic_items()) {
        let result = resolve_owned(&items);

        let mut valid = result.valid.clone();
        valid.sort();
        let mut expected: Vec<String> = items.iter().map(|item| item.0.clone()).collect();
        expected.sort();
        prop_assert_eq!(valid, expected);

        let unique: HashSet<&String> = result.invalid.iter().collect();
        prop_assert_eq!(unique.len(), result.invalid.len());
        for key in &result.invalid {
            prop_assert!(key.starts_with("ext"));
            prop_assert!(items.iter().all(|item| &item.0 != key));
        }
    }

    #[test]
    fn prop_input_order_does_not_change_partition(items in acyclic_items()) {
        let forward = resolve_owned(&items);
        let reversed: Vec<_> = items.iter().rev().cloned().collect();
        let backward = resolve_owned(&reversed);

        let as_set = |keys: &[String]| keys.iter().cloned().collect::<HashSet<_>>();
        prop_assert_eq!(as_set(&forward.valid), as_set(&backward.valid));
        prop_assert_eq!(as_set(&forward.invalid), as_set(&backward.invalid));
    }
}
