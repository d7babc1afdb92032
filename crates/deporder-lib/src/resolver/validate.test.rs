use super::*;

fn keyed(items: &[(&'static str, Vec<&'static str>)]) -> Validation<&'static str> {
    validate(items, |item| item.0, |item| item.1.iter().copied())
}

#[test]
fn test_empty_input_has_no_keys() {
    let validation = keyed(&[]);
    assert!(validation.recognized.is_empty());
    assert!(validation.unrecognized.is_empty());
}

#[test]
fn test_item_without_dependencies_only_contributes_its_key() {
    let validation = keyed(&[("Logger", vec![])]);
    assert_eq!(validation.recognized, vec!["Logger"]);
    assert!(validation.unrecognized.is_empty());
}

#[test]
fn test_dangling_reference_is_unrecognized() {
    let validation = keyed(&[
        ("WebApp", vec!["Logger", "Services", "Squiggly"]),
        ("Services", vec!["Logger"]),
        ("Logger", vec![]),
    ]);

    assert_eq!(validation.recognized, vec!["WebApp", "Services", "Logger"]);
    assert_eq!(validation.unrecognized, vec!["Squiggly"]);
    assert!(validation.is_recognized(&"Services"));
    assert!(validation.is_unrecognized(&"Squiggly"));
    assert!(!validation.is_recognized(&"Squiggly"));
}

#[test]
fn test_unrecognized_keys_are_deduplicated_in_first_seen_order() {
    let validation = keyed(&[
        ("a", vec!["zeta", "alpha", "zeta"]),
        ("b", vec!["alpha", "beta"]),
    ]);

    assert_eq!(validation.unrecognized, vec!["zeta", "alpha", "beta"]);
}

#[test]
fn test_forward_reference_is_recognized() {
    // "b" is referenced before it is defined
    let validation = keyed(&[("a", vec!["b"]), ("b", vec![])]);
    assert_eq!(validation.recognized, vec!["a", "b"]);
    assert!(validation.unrecognized.is_empty());
}

#[test]
fn test_duplicate_item_keys_are_collapsed() {
    let validation = keyed(&[("a", vec![]), ("a", vec!["x"])]);
    assert_eq!(validation.recognized, vec!["a"]);
    assert_eq!(validation.unrecognized, vec!["x"]);
}
