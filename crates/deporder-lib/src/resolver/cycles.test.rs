// Tests for circular dependency detection

use super::*;

type Items = [(&'static str, Vec<&'static str>)];

fn check(items: &Items) -> Result<(), ResolveError<&'static str>> {
    detect_cycle(items, |item| item.0, |item| item.1.iter().copied())
}

// ============================================================================
// Acyclic inputs
// ============================================================================

#[test]
fn test_empty_input_is_acyclic() {
    assert!(check(&[]).is_ok());
}

#[test]
fn test_diamond_is_acyclic() {
    let items = [
        ("WebApp", vec!["Logger", "Services", "DomainModels"]),
        ("Services", vec!["Logger", "DomainModels"]),
        ("DomainModels", vec!["VariousAbstractions"]),
        ("PublicApi", vec!["Services"]),
        ("Logger", vec![]),
        ("VariousAbstractions", vec![]),
    ];
    assert!(check(&items).is_ok());
}

#[test]
fn test_unrecognized_keys_cannot_close_a_cycle() {
    // "ghost" has no item, so the walk stops there
    let items = [("a", vec!["ghost"]), ("b", vec!["a", "ghost"])];
    assert!(check(&items).is_ok());
}

// ============================================================================
// Cyclic inputs
// ============================================================================

#[test]
fn test_back_reference_reports_origin() {
    let items = [("A", vec!["B", "C", "D"]), ("D", vec!["E", "F", "A"])];

    let err = check(&items).unwrap_err();
    assert_eq!(
        err,
        ResolveError::CircularDependency {
            origin: "A",
            path: vec!["A", "D", "A"],
        }
    );
    assert_eq!(err.to_string(), "Circular reference found: A");
}

#[test]
fn test_self_reference() {
    let items = [("solo", vec!["solo"])];

    let err = check(&items).unwrap_err();
    assert_eq!(err.cycle_path(), &["solo", "solo"]);
}

#[test]
fn test_first_origin_in_input_order_is_reported() {
    // x -> y -> z -> y: the cycle does not include x, so y is the first origin
    let items = [("x", vec!["y"]), ("y", vec!["z"]), ("z", vec!["y"])];

    match check(&items).unwrap_err() {
        ResolveError::CircularDependency { origin, path } => {
            assert_eq!(origin, "y");
            assert_eq!(path, vec!["y", "z", "y"]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_cycle_below_origin_does_not_hang() {
    // Walking from "top" enters the b <-> c loop, which never returns to "top"
    let items = [
        ("top", vec!["b"]),
        ("b", vec!["c"]),
        ("c", vec!["b", "leaf"]),
        ("leaf", vec![]),
    ];

    let err = check(&items).unwrap_err();
    assert!(matches!(err, ResolveError::CircularDependency { origin: "b", .. }));
}

#[test]
fn test_long_cycle_path_is_complete() {
    let items = [
        ("a", vec!["b"]),
        ("b", vec!["c"]),
        ("c", vec!["d"]),
        ("d", vec!["a"]),
    ];

    let err = check(&items).unwrap_err();
    assert_eq!(err.cycle_path(), &["a", "b", "c", "d", "a"]);
}

#[test]
fn test_path_skips_dead_end_branches() {
    let items = [
        ("a", vec!["dead", "b"]),
        ("dead", vec!["leaf"]),
        ("leaf", vec![]),
        ("b", vec!["a"]),
    ];

    let err = check(&items).unwrap_err();
    assert_eq!(err.cycle_path(), &["a", "b", "a"]);
}

#[test]
fn test_duplicate_keys_rejected_before_walk() {
    let items = [("a", vec!["a"]), ("a", vec![])];
    assert_eq!(
        check(&items).unwrap_err(),
        ResolveError::DuplicateKey { key: "a" }
    );
}

#[test]
fn test_deep_chain_does_not_overflow() {
    let names: Vec<String> = (0..5_000).map(|i| format!("n{i}")).collect();
    let items: Vec<(String, Vec<String>)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let deps = names.get(i + 1).cloned().into_iter().collect();
            (name.clone(), deps)
        })
        .collect();

    let result = detect_cycle(&items, |item| item.0.as_str(), |item| {
        item.1.iter().map(String::as_str)
    });
    assert!(result.is_ok());
}
