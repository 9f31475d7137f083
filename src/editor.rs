//! The recursive splicer: given a document, a path and an operation,
//! produces the replacement text for that document.
//!
//! `edit` always returns the full replacement for the `doc` it was given,
//! never a diff. At the top level that replacement *is* the output; when
//! called recursively on a member or element's value slice, the caller
//! splices the return value back into its own copy. This is what lets
//! synthesis fall out of the same function: `edit("", path, ...)` just
//! treats an empty document as "nothing to recurse into yet".

use crate::classify::is_ws;
use crate::container::{self, ArrayScan, ObjectScan};
use crate::error::{EditError, EditErrorKind};
use crate::log::EditLog;
use crate::options::{AdjacencyPolicy, EditOptions};
use crate::path::{self, ArrayTarget, Segment};
use crate::scan;
use crate::wildcard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpKind {
    /// Splice already-encoded JSON text in place of the target value. Both
    /// `set` (after encoding a [`crate::Value`]) and `setRaw` (already JSON
    /// text) reach the editor through this single variant; by the time a
    /// value arrives here it has already been turned into JSON text, so the
    /// editor itself never needs to tell the two apart.
    Assign,
    Delete,
}

fn doc_is_blank(doc: &str) -> bool {
    doc.as_bytes().iter().all(|&b| is_ws(b))
}

fn wants_array(seg: &Segment) -> bool {
    seg.is_wildcard() || seg.as_array_target().is_some()
}

pub(crate) fn edit(
    doc: &str,
    path: &str,
    op: OpKind,
    value: &str,
    opts: &EditOptions,
    log: &mut EditLog,
) -> Result<String, EditError> {
    if path.is_empty() {
        return Ok(match op {
            OpKind::Assign => value.to_string(),
            OpKind::Delete => String::new(),
        });
    }

    let (seg, rest) = path::next_segment(path);

    if seg.is_wildcard() {
        let trimmed_start = scan::skip_ws(doc, 0);
        if doc.as_bytes().get(trimmed_start) == Some(&b'[') {
            return wildcard::broadcast(doc, trimmed_start, rest, op, value, opts, log);
        }
        return match op {
            OpKind::Delete => Ok(doc.to_string()),
            OpKind::Assign => {
                let inner = edit("", rest, op, value, opts, log)?;
                log.record(trimmed_start, "materialized array for wildcard set");
                Ok(format!("[{inner}]"))
            }
        };
    }

    if doc_is_blank(doc) {
        return match op {
            OpKind::Delete => Ok(String::new()),
            OpKind::Assign => {
                let synthetic = if wants_array(&seg) { "[]" } else { "{}" };
                edit(synthetic, path, op, value, opts, log)
            }
        };
    }

    let start = scan::skip_ws(doc, 0);
    match doc.as_bytes().get(start) {
        Some(b'{') => edit_object(doc, start, &seg, rest, op, value, opts, log),
        Some(b'[') => edit_array(doc, start, &seg, rest, op, value, opts, log),
        _ => match op {
            OpKind::Delete => Ok(doc.to_string()),
            OpKind::Assign => Err(EditError::new(EditErrorKind::TypeMismatch, start)),
        },
    }
}

fn edit_object(
    doc: &str,
    obj_start: usize,
    seg: &Segment,
    rest: &str,
    op: OpKind,
    value: &str,
    opts: &EditOptions,
    log: &mut EditLog,
) -> Result<String, EditError> {
    let key = seg.as_key();
    let scan = container::scan_object(doc, obj_start, key);

    if let Some(member) = &scan.found {
        if rest.is_empty() {
            return match op {
                OpKind::Assign => {
                    log.record(member.val_start, "replaced object member value");
                    Ok(splice(doc, member.val_start, member.val_end, value))
                }
                OpKind::Delete => {
                    log.record(member.key_start, "deleted object member");
                    Ok(delete_span(
                        doc,
                        member.key_start,
                        member.val_end,
                        member.has_before,
                        member.has_after,
                        opts.adjacency_policy,
                    ))
                }
            };
        }
        let sub = edit(&doc[member.val_start..member.val_end], rest, op, value, opts, log)?;
        return Ok(splice(doc, member.val_start, member.val_end, &sub));
    }

    match op {
        OpKind::Delete => Ok(doc.to_string()),
        OpKind::Assign => {
            let inner = edit("", rest, op, value, opts, log)?;
            log.record(scan.close, "inserted object member");
            Ok(insert_object_member(doc, &scan, key, &inner, opts))
        }
    }
}

fn edit_array(
    doc: &str,
    arr_start: usize,
    seg: &Segment,
    rest: &str,
    op: OpKind,
    value: &str,
    opts: &EditOptions,
    log: &mut EditLog,
) -> Result<String, EditError> {
    match seg.as_array_target() {
        Some(ArrayTarget::Index(idx)) => edit_array_at(doc, arr_start, idx, rest, op, value, opts, log),
        Some(ArrayTarget::Last) => match op {
            OpKind::Assign => append_array_element(doc, arr_start, rest, op, value, opts, log),
            OpKind::Delete => {
                let scan = container::scan_array(doc, arr_start, None);
                if scan.count == 0 {
                    return Ok(doc.to_string());
                }
                edit_array_at(doc, arr_start, scan.count - 1, rest, op, value, opts, log)
            }
        },
        None => match op {
            OpKind::Delete => Ok(doc.to_string()),
            OpKind::Assign => Err(EditError::new(EditErrorKind::TypeMismatch, arr_start)),
        },
    }
}

fn edit_array_at(
    doc: &str,
    arr_start: usize,
    idx: usize,
    rest: &str,
    op: OpKind,
    value: &str,
    opts: &EditOptions,
    log: &mut EditLog,
) -> Result<String, EditError> {
    let scan = container::scan_array(doc, arr_start, Some(idx));

    if let Some(elem) = &scan.found {
        if rest.is_empty() {
            return match op {
                OpKind::Assign => {
                    log.record(elem.val_start, "replaced array element");
                    Ok(splice(doc, elem.val_start, elem.val_end, value))
                }
                OpKind::Delete => {
                    log.record(elem.val_start, "deleted array element");
                    Ok(delete_span(
                        doc,
                        elem.val_start,
                        elem.val_end,
                        elem.has_before,
                        elem.has_after,
                        opts.adjacency_policy,
                    ))
                }
            };
        }
        let sub = edit(&doc[elem.val_start..elem.val_end], rest, op, value, opts, log)?;
        return Ok(splice(doc, elem.val_start, elem.val_end, &sub));
    }

    match op {
        OpKind::Delete => Ok(doc.to_string()),
        OpKind::Assign => {
            let pad_count = idx - scan.count;
            let inner = edit("", rest, op, value, opts, log)?;
            log.record(scan.close, "appended array element with null padding");
            Ok(insert_array_padded(doc, &scan, pad_count, &inner))
        }
    }
}

fn append_array_element(
    doc: &str,
    arr_start: usize,
    rest: &str,
    op: OpKind,
    value: &str,
    opts: &EditOptions,
    log: &mut EditLog,
) -> Result<String, EditError> {
    let scan = container::scan_array(doc, arr_start, None);
    let inner = edit("", rest, op, value, opts, log)?;
    log.record(scan.close, "appended array element");
    Ok(insert_array_padded(doc, &scan, 0, &inner))
}

fn splice(doc: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(doc.len() - (end - start) + replacement.len());
    out.push_str(&doc[..start]);
    out.push_str(replacement);
    out.push_str(&doc[end..]);
    out
}

/// Removes `doc[excise_start..excise_end)` along with whichever adjacent
/// comma `policy` selects to keep the remaining members/elements
/// well-formed.
fn delete_span(
    doc: &str,
    excise_start: usize,
    excise_end: usize,
    has_before: bool,
    has_after: bool,
    policy: AdjacencyPolicy,
) -> String {
    match policy {
        AdjacencyPolicy::PreferPreceding => {
            if has_before {
                let comma = find_comma_before(doc, excise_start);
                splice(doc, comma, excise_end, "")
            } else if has_after {
                let after_comma = find_comma_after(doc, excise_end);
                splice(doc, excise_start, after_comma, "")
            } else {
                splice(doc, excise_start, excise_end, "")
            }
        }
    }
}

fn find_comma_before(doc: &str, pos: usize) -> usize {
    let bytes = doc.as_bytes();
    let mut i = pos;
    while i > 0 && is_ws(bytes[i - 1]) {
        i -= 1;
    }
    if i > 0 && bytes[i - 1] == b',' {
        let mut comma = i - 1;
        while comma > 0 && is_ws(bytes[comma - 1]) {
            comma -= 1;
        }
        comma
    } else {
        pos
    }
}

fn find_comma_after(doc: &str, pos: usize) -> usize {
    let bytes = doc.as_bytes();
    let mut i = scan::skip_ws(doc, pos);
    if bytes.get(i) == Some(&b',') {
        i += 1;
        scan::skip_ws(doc, i)
    } else {
        pos
    }
}

fn insert_object_member(doc: &str, scan: &ObjectScan, key: &str, inner: &str, opts: &EditOptions) -> String {
    let mut encoded_key = String::new();
    {
        use crate::emit::StringEmitter;
        let mut em = StringEmitter::new(&mut encoded_key);
        crate::value::emit_json_string(&mut em, key, opts.ensure_ascii).expect("StringEmitter never fails");
    }
    let mut member = String::with_capacity(encoded_key.len() + inner.len() + 2);
    if !scan.is_empty {
        member.push(',');
    }
    member.push_str(&encoded_key);
    member.push(':');
    member.push_str(inner);
    splice(doc, scan.close, scan.close, &member)
}

fn insert_array_padded(doc: &str, scan: &ArrayScan, pad_count: usize, inner: &str) -> String {
    let mut frag = String::with_capacity(inner.len() + pad_count * 5 + 1);
    if !scan.is_empty {
        frag.push(',');
    }
    for _ in 0..pad_count {
        frag.push_str("null,");
    }
    frag.push_str(inner);
    splice(doc, scan.close, scan.close, &frag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(doc: &str, path: &str, op: OpKind, value: &str) -> String {
        let opts = EditOptions::default();
        let mut log = EditLog::new(false);
        edit(doc, path, op, value, &opts, &mut log).unwrap()
    }

    #[test]
    fn sets_existing_key() {
        assert_eq!(run(r#"{"a":1}"#, "a", OpKind::Assign, "2"), r#"{"a":2}"#);
    }

    #[test]
    fn sets_nested_missing_path() {
        assert_eq!(run("{}", "a.b.c", OpKind::Assign, "1"), r#"{"a":{"b":{"c":1}}}"#);
    }

    #[test]
    fn appends_via_last_index() {
        assert_eq!(run("[1,2]", "-1", OpKind::Assign, "3"), "[1,2,3]");
    }

    #[test]
    fn pads_array_to_reach_index() {
        assert_eq!(run("[1]", "3", OpKind::Assign, "9"), "[1,null,null,9]");
    }

    #[test]
    fn deletes_middle_member_prefers_preceding_comma() {
        assert_eq!(run(r#"{"a":1,"b":2,"c":3}"#, "b", OpKind::Delete, ""), r#"{"a":1,"c":3}"#);
    }

    #[test]
    fn deletes_first_member_uses_following_comma() {
        assert_eq!(run(r#"{"a":1,"b":2}"#, "a", OpKind::Delete, ""), r#"{"b":2}"#);
    }

    #[test]
    fn deletes_only_member_leaves_empty_object() {
        assert_eq!(run(r#"{"a":1}"#, "a", OpKind::Delete, ""), "{}");
    }

    #[test]
    fn delete_absent_key_is_a_noop() {
        assert_eq!(run(r#"{"a":1}"#, "missing", OpKind::Delete, ""), r#"{"a":1}"#);
    }

    #[test]
    fn set_on_array_with_key_segment_is_type_mismatch() {
        let opts = EditOptions::default();
        let mut log = EditLog::new(false);
        let err = edit("[1,2]", "foo", OpKind::Assign, "1", &opts, &mut log).unwrap_err();
        assert_eq!(err.kind, EditErrorKind::TypeMismatch);
    }

    #[test]
    fn delete_on_scalar_with_path_is_a_noop() {
        assert_eq!(run("5", "a", OpKind::Delete, ""), "5");
    }
}
