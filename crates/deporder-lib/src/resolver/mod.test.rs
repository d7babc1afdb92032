use super::*;

fn project(name: &str, references: &[&str]) -> Project {
    Project::new(name).with_references(references.iter().copied())
}

#[test]
fn test_collect_entries_calls_selectors_once_per_item() {
    use std::cell::Cell;

    let items = [("a", vec!["b"]), ("b", vec![])];
    let key_calls = Cell::new(0);
    let dep_calls = Cell::new(0);

    let entries = collect_entries(
        &items,
        |item| {
            key_calls.set(key_calls.get() + 1);
            item.0
        },
        |item| {
            dep_calls.set(dep_calls.get() + 1);
            item.1.iter().copied()
        },
    );

    assert_eq!(entries.len(), 2);
    assert_eq!(key_calls.get(), 2);
    assert_eq!(dep_calls.get(), 2);
    assert_eq!(entries[0].dependencies, vec!["b"]);
    assert!(entries[1].is_root());
}

#[test]
fn test_index_entries_rejects_duplicate_keys() {
    let items = [("a", vec![]), ("b", vec!["a"]), ("a", vec!["b"])];
    let entries = collect_entries(&items, |item| item.0, |item| item.1.iter().copied());

    let err = index_entries(&entries).unwrap_err();
    assert_eq!(err, ResolveError::DuplicateKey { key: "a" });
    assert_eq!(err.to_string(), "Duplicate item key: a");
}

#[test]
fn test_circular_dependency_message_names_origin() {
    let err = ResolveError::CircularDependency {
        origin: "A".to_string(),
        path: vec!["A".to_string(), "D".to_string(), "A".to_string()],
    };
    assert_eq!(err.to_string(), "Circular reference found: A");
    assert_eq!(err.cycle_path().len(), 3);
}

#[test]
fn test_unresolvable_message_counts_pending() {
    let err: ResolveError<&str> = ResolveError::Unresolvable {
        pending: vec!["x", "y"],
    };
    assert_eq!(err.to_string(), "Unable to order 2 remaining items");
    assert!(err.cycle_path().is_empty());
}

#[test]
fn test_order_projects_uses_project_references() {
    let projects = vec![
        project("Api", &["Core", "Serilog"]),
        project("Core", &[]),
    ];

    let result = order_projects(&projects).unwrap();
    assert_eq!(result.valid, vec!["Core", "Api"]);
    assert_eq!(result.invalid, vec!["Serilog"]);
}

#[test]
fn test_reverse_lookup_projects() {
    let projects = vec![
        project("Api", &["Core"]),
        project("Worker", &["Core"]),
        project("Core", &[]),
    ];

    let index = reverse_lookup_projects(&projects);
    assert_eq!(
        index.get(&"Core".to_string()),
        Some(&["Api".to_string(), "Worker".to_string()][..])
    );
    assert!(!index.contains_key(&"Api".to_string()));
}
