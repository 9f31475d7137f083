//! The worked input/output scenarios from the design doc, exercised
//! end-to-end through the public entry points.

use super::*;

#[test]
fn set_raw_nested_key_via_index() {
    let out = set_raw(r#"[{"hi":"world"}]"#, "0.hiw", "\"planet\"").unwrap();
    assert_eq!(out, r#"[{"hi":"world","hiw":"planet"}]"#);
}

#[test]
fn set_raw_into_empty_document_pads_array() {
    let out = set_raw("", "1", "true").unwrap();
    assert_eq!(out, "[null,true]");
}

#[test]
fn set_raw_nested_array_element() {
    let doc = r#"[1,{"hello":"when","this":[0,1,2]},false]"#;
    let out = set_raw(doc, "1.this.1", "null").unwrap();
    assert_eq!(out, r#"[1,{"hello":"when","this":[0,null,2]},false]"#);
}

#[test]
fn set_key_with_escaped_dot() {
    let out = set(r#"{"app.token":"abc"}"#, r"app\.token", "cde").unwrap();
    assert_eq!(out, r#"{"app.token":"cde"}"#);
}

#[test]
fn delete_member_among_others() {
    let out = delete(r#"{"this":"that","and":"another"}"#, "this").unwrap();
    assert_eq!(out, r#"{"and":"another"}"#);
}

#[test]
fn wildcard_set_reaches_every_element() {
    let doc = r#"[{"env":[{"name":"K","value":"t"}]}]"#;
    let out = set(doc, "#.env.#.value", "new").unwrap();
    assert_eq!(out, r#"[{"env":[{"name":"K","value":"new"}]}]"#);
}

#[test]
fn wildcard_delete_reaches_every_element() {
    let doc = r#"[{"env":[{"name":"K","value":"t"}]}]"#;
    let out = delete(doc, "#.env.#.value").unwrap();
    assert_eq!(out, r#"[{"env":[{"name":"K"}]}]"#);
}

#[test]
fn append_via_last_index_preserves_surrounding_whitespace() {
    let out = set_raw("[ 1,2  ] ", "-1", "3").unwrap();
    assert_eq!(out, "[ 1,2  ,3] ");
}

#[test]
fn deep_synthesis_from_empty_document() {
    let out = set("", "b.this.4", 4i64).unwrap();
    assert_eq!(out, r#"{"b":{"this":[null,null,null,null,4]}}"#);
}

#[test]
fn delete_middle_array_element() {
    let out = delete("[123,456,789]", "1").unwrap();
    assert_eq!(out, "[123,789]");
}
