//! Wildcard broadcast scenarios beyond the unit tests colocated with
//! `wildcard.rs`: nested wildcards, creation against missing/non-array
//! slots, and interaction with deletion.

use super::*;

#[test]
fn nested_wildcard_reaches_every_leaf() {
    let doc = r#"[{"env":[{"v":1},{"v":2}]},{"env":[{"v":3}]}]"#;
    let out = set(doc, "#.env.#.v", 0i64).unwrap();
    assert_eq!(out, r#"[{"env":[{"v":0},{"v":0}]},{"env":[{"v":0}]}]"#);
}

#[test]
fn wildcard_set_against_missing_key_materializes_array() {
    let out = set("{}", "items.#.name", "x").unwrap();
    assert_eq!(out, r#"{"items":[{"name":"x"}]}"#);
}

#[test]
fn wildcard_set_against_non_array_overwrites_with_array() {
    let out = set(r#"{"a":5}"#, "a.#", 1i64).unwrap();
    assert_eq!(out, r#"{"a":[1]}"#);
}

#[test]
fn wildcard_delete_against_non_array_is_noop() {
    let out = delete(r#"{"a":5}"#, "a.#").unwrap();
    assert_eq!(out, r#"{"a":5}"#);
}

#[test]
fn wildcard_delete_against_missing_key_is_noop() {
    let out = delete("{}", "a.#").unwrap();
    assert_eq!(out, "{}");
}

#[test]
fn wildcard_leaves_non_object_elements_of_mixed_array_unchanged() {
    let doc = r#"[{"v":1},2,{"v":3}]"#;
    let out = set(doc, "#.v", 0i64).unwrap();
    // Elements 0 and 2 gain the member; element 1 has no container to
    // navigate into, so it is left as-is (implementation-defined per
    // the wildcard-coverage property, but must not corrupt siblings).
    assert_eq!(out, r#"[{"v":0},2,{"v":0}]"#);
}

#[test]
fn top_level_wildcard_set_replaces_every_element() {
    assert_eq!(set("[1,2,3]", "#", 0i64).unwrap(), "[0,0,0]");
}

#[test]
fn top_level_wildcard_delete_empties_array() {
    assert_eq!(delete("[1,2,3]", "#").unwrap(), "[]");
}

#[test]
fn wildcard_over_empty_array_is_unchanged_for_set_and_delete() {
    assert_eq!(set("[]", "#.v", 1i64).unwrap(), "[]");
    assert_eq!(delete("[]", "#.v").unwrap(), "[]");
}
