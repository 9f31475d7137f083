//! Walks one level of an object or array body, reporting just enough about
//! what it found for the editor to splice without re-scanning.
//!
//! Every function here takes `doc` and an absolute offset into it where the
//! container's opening brace/bracket sits, and returns offsets that are
//! likewise absolute into `doc`.

use crate::scan;

pub(crate) struct Member {
    pub key_start: usize,
    pub val_start: usize,
    pub val_end: usize,
    pub has_before: bool,
    pub has_after: bool,
}

pub(crate) struct ObjectScan {
    pub is_empty: bool,
    /// Offset of the closing `}`.
    pub close: usize,
    pub found: Option<Member>,
}

/// Scans an object body starting at `doc[obj_start..]` (`doc[obj_start]`
/// must be `{`), looking for a member whose key decodes to `key`.
pub(crate) fn scan_object(doc: &str, obj_start: usize, key: &str) -> ObjectScan {
    let bytes = doc.as_bytes();
    debug_assert_eq!(bytes.get(obj_start), Some(&b'{'));
    let mut i = scan::skip_ws(doc, obj_start + 1);
    if bytes.get(i) == Some(&b'}') {
        return ObjectScan { is_empty: true, close: i, found: None };
    }

    let mut found: Option<Member> = None;
    let mut prev_seen = false;
    loop {
        i = scan::skip_ws(doc, i);
        if bytes.get(i) != Some(&b'"') {
            // Malformed input: stop here rather than loop or panic.
            return ObjectScan { is_empty: false, close: i.min(doc.len()), found };
        }
        let key_start = i;
        let (decoded_key, after_key) = scan::scan_string_decoded(doc, i);
        i = scan::skip_ws(doc, after_key);
        if bytes.get(i) == Some(&b':') {
            i += 1;
        }
        i = scan::skip_ws(doc, i);
        let val_start = i;
        let val_end = scan::skip_value(doc, i);
        i = scan::skip_ws(doc, val_end);
        let has_after = bytes.get(i) == Some(&b',');

        if found.is_none() && decoded_key == key {
            found = Some(Member { key_start, val_start, val_end, has_before: prev_seen, has_after });
        }
        prev_seen = true;

        if has_after {
            i += 1;
            continue;
        }
        return ObjectScan { is_empty: false, close: i, found };
    }
}

pub(crate) struct Element {
    pub val_start: usize,
    pub val_end: usize,
    pub has_before: bool,
    pub has_after: bool,
}

pub(crate) struct ArrayScan {
    pub is_empty: bool,
    /// Offset of the closing `]`.
    pub close: usize,
    /// Total number of elements observed while scanning.
    pub count: usize,
    pub found: Option<Element>,
}

/// Scans an array body starting at `doc[arr_start..]` (`doc[arr_start]`
/// must be `[`), looking for the element at `want_index` if given.
pub(crate) fn scan_array(doc: &str, arr_start: usize, want_index: Option<usize>) -> ArrayScan {
    let bytes = doc.as_bytes();
    debug_assert_eq!(bytes.get(arr_start), Some(&b'['));
    let mut i = scan::skip_ws(doc, arr_start + 1);
    if bytes.get(i) == Some(&b']') {
        return ArrayScan { is_empty: true, close: i, count: 0, found: None };
    }

    let mut idx = 0usize;
    let mut found: Option<Element> = None;
    let mut prev_seen = false;
    loop {
        i = scan::skip_ws(doc, i);
        let val_start = i;
        let val_end = scan::skip_value(doc, i);
        i = scan::skip_ws(doc, val_end);
        let has_after = bytes.get(i) == Some(&b',');

        if found.is_none() && want_index == Some(idx) {
            found = Some(Element { val_start, val_end, has_before: prev_seen, has_after });
        }
        prev_seen = true;
        idx += 1;

        if has_after {
            i += 1;
            continue;
        }
        return ArrayScan { is_empty: false, close: i, count: idx, found };
    }
}

/// Collects every element's `[start, end)` byte range plus the closing `]`
/// offset, for the wildcard broadcaster.
pub(crate) struct AllElements {
    pub elements: Vec<(usize, usize)>,
    pub close: usize,
}

pub(crate) fn scan_all_elements(doc: &str, arr_start: usize) -> AllElements {
    let bytes = doc.as_bytes();
    debug_assert_eq!(bytes.get(arr_start), Some(&b'['));
    let mut i = scan::skip_ws(doc, arr_start + 1);
    if bytes.get(i) == Some(&b']') {
        return AllElements { elements: Vec::new(), close: i };
    }

    let mut elements = Vec::new();
    loop {
        i = scan::skip_ws(doc, i);
        let val_start = i;
        let val_end = scan::skip_value(doc, i);
        elements.push((val_start, val_end));
        i = scan::skip_ws(doc, val_end);
        if bytes.get(i) == Some(&b',') {
            i += 1;
            continue;
        }
        return AllElements { elements, close: i };
    }
}
