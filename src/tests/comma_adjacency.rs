//! `AdjacencyPolicy::PreferPreceding`: on deletion the comma immediately
//! before the removed element is dropped when one exists, else the one
//! after, else none — including when extra whitespace sits around it.

use super::*;

#[test]
fn prefers_preceding_comma_with_surrounding_whitespace() {
    let out = delete("[1 , 2 , 3]", "1").unwrap();
    assert_eq!(out, "[1 , 3]");
}

#[test]
fn falls_back_to_following_comma_for_first_element() {
    let out = delete("[1 , 2 , 3]", "0").unwrap();
    assert_eq!(out, "[2 , 3]");
}

#[test]
fn sole_element_leaves_no_dangling_comma() {
    assert_eq!(delete("[1]", "0").unwrap(), "[]");
    assert_eq!(delete(r#"{"a":1}"#, "a").unwrap(), "{}");
}

#[test]
fn object_member_deletion_mirrors_array_policy() {
    let doc = r#"{"a" : 1 , "b" : 2 , "c" : 3}"#;
    let out = delete(doc, "b").unwrap();
    assert_eq!(out, r#"{"a" : 1 , "c" : 3}"#);
}
