use super::*;

type Items = [(&'static str, Vec<&'static str>)];

fn lookup(items: &Items) -> ReverseIndex<&'static str> {
    reverse_lookup(items, |item| item.0, |item| item.1.iter().copied())
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

#[test]
fn test_dependents_follow_item_order() {
    let index = lookup(&solution());

    assert_eq!(index.get(&"Logger"), Some(&["WebApp", "Services"][..]));
    assert_eq!(index.get(&"Services"), Some(&["WebApp", "PublicApi"][..]));
    assert_eq!(index.get(&"VariousAbstractions"), Some(&["DomainModels"][..]));
    assert_eq!(index.get(&"DomainModels"), Some(&["WebApp", "Services"][..]));
}

#[test]
fn test_keys_nothing_depends_on_are_absent() {
    let index = lookup(&solution());

    assert!(!index.contains_key(&"WebApp"));
    assert!(!index.contains_key(&"PublicApi"));
    assert_eq!(index.get(&"WebApp"), None);
    assert_eq!(index.len(), 4);
}

#[test]
fn test_keys_iterate_in_first_referenced_order() {
    let index = lookup(&solution());
    let keys: Vec<&str> = index.iter().map(|(key, _)| *key).collect();

    assert_eq!(
        keys,
        vec!["Logger", "Services", "DomainModels", "VariousAbstractions"]
    );
}

#[test]
fn test_unrecognized_keys_are_indexed() {
    let index = lookup(&[("WebApp", vec!["Squiggly"]), ("Api", vec!["Squiggly"])]);
    assert_eq!(index.get(&"Squiggly"), Some(&["WebApp", "Api"][..]));
}

#[test]
fn test_repeated_dependency_counts_once() {
    let index = lookup(&[("app", vec!["core", "core"])]);
    assert_eq!(index.get(&"core"), Some(&["app"][..]));
}

#[test]
fn test_cyclic_input_is_indexed() {
    let index = lookup(&[("A", vec!["B", "C", "D"]), ("D", vec!["E", "F", "A"])]);
    assert_eq!(index.get(&"A"), Some(&["D"][..]));
    assert_eq!(index.get(&"D"), Some(&["A"][..]));
}

#[test]
fn test_empty_input_gives_empty_index() {
    let index = lookup(&[]);
    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
}

#[test]
fn test_serializes_as_ordered_object() {
    let index = lookup(&[("b", vec!["z", "a"]), ("c", vec!["a"])]);
    let json = serde_json::to_string(&index).unwrap();
    assert_eq!(json, r#"{"z":["b"],"a":["b","c"]}"#);
}
