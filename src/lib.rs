//! Byte-level, path-addressed JSON mutation.
//!
//! Given a JSON document and a dotted path, [`set`]/[`set_raw`]/[`delete`]
//! locate the smallest affected byte range, splice in the new value, and
//! return a new document. The document is never parsed into a tree: bytes
//! outside the edited range are preserved exactly, including whitespace.
//!
//! ```
//! use jsonedit::set;
//!
//! let doc = r#"{"name":"old"}"#;
//! let out = set(doc, "name", "new").unwrap();
//! assert_eq!(out, r#"{"name":"new"}"#);
//! ```

mod classify;
pub mod cli;
mod container;
mod editor;
mod emit;
use emit::Emitter as _;
pub mod error;
mod log;
pub mod options;
mod path;
mod scan;
mod value;
mod wildcard;

pub use error::{EditError, EditErrorKind};
pub use log::EditLogEntry;
pub use options::{AdjacencyPolicy, EditOptions};
pub use value::Value;

use editor::OpKind;
use log::EditLog;

// ============================================================================
// Core API — text in, text out
// ============================================================================

/// Sets `path` in `doc` to `value`, using default [`EditOptions`].
///
/// # Examples
///
/// ```
/// use jsonedit::set;
///
/// let out = set(r#"{"a":1}"#, "a", 2i64).unwrap();
/// assert_eq!(out, r#"{"a":2}"#);
/// ```
pub fn set<'v>(doc: &str, path: &str, value: impl Into<Value<'v>>) -> Result<String, EditError> {
    set_opts(doc, path, value, &EditOptions::default())
}

/// Like [`set`], with explicit [`EditOptions`].
///
/// # Examples
///
/// ```
/// use jsonedit::{set_opts, EditOptions};
///
/// let mut opts = EditOptions::default();
/// opts.ensure_ascii = true;
/// let out = set_opts("{}", "name", "café", &opts).unwrap();
/// assert_eq!(out, "{\"name\":\"caf\\u00E9\"}");
/// ```
pub fn set_opts<'v>(
    doc: &str,
    path: &str,
    value: impl Into<Value<'v>>,
    opts: &EditOptions,
) -> Result<String, EditError> {
    let value = value.into();
    let encoded = value::encode(&value, opts);
    let mut log = EditLog::new(false);
    editor::edit(doc, path, OpKind::Assign, &encoded, opts, &mut log)
}

/// Sets `path` in `doc` to `raw_json`, a pre-encoded JSON fragment spliced
/// in verbatim without validation.
///
/// # Examples
///
/// ```
/// use jsonedit::set_raw;
///
/// let out = set_raw("{}", "a", "[1,2,3]").unwrap();
/// assert_eq!(out, r#"{"a":[1,2,3]}"#);
/// ```
pub fn set_raw(doc: &str, path: &str, raw_json: &str) -> Result<String, EditError> {
    set_raw_opts(doc, path, raw_json, &EditOptions::default())
}

/// Like [`set_raw`], with explicit [`EditOptions`].
pub fn set_raw_opts(doc: &str, path: &str, raw_json: &str, opts: &EditOptions) -> Result<String, EditError> {
    let mut log = EditLog::new(false);
    editor::edit(doc, path, OpKind::Assign, raw_json, opts, &mut log)
}

/// Removes the member or element at `path`. Absent keys are not an error:
/// `doc` is returned unchanged.
///
/// # Examples
///
/// ```
/// use jsonedit::delete;
///
/// let out = delete(r#"{"a":1,"b":2}"#, "a").unwrap();
/// assert_eq!(out, r#"{"b":2}"#);
/// ```
pub fn delete(doc: &str, path: &str) -> Result<String, EditError> {
    delete_opts(doc, path, &EditOptions::default())
}

/// Like [`delete`], with explicit [`EditOptions`].
pub fn delete_opts(doc: &str, path: &str, opts: &EditOptions) -> Result<String, EditError> {
    let mut log = EditLog::new(false);
    editor::edit(doc, path, OpKind::Delete, "", opts, &mut log)
}

// ============================================================================
// Typed convenience wrappers
// ============================================================================

/// Forwards to [`set`] with an `i64`.
pub fn set_int(doc: &str, path: &str, value: i64) -> Result<String, EditError> {
    set(doc, path, value)
}

/// Forwards to [`set`] with an `f64`. Non-finite values encode as `null`.
pub fn set_float(doc: &str, path: &str, value: f64) -> Result<String, EditError> {
    set(doc, path, value)
}

/// Forwards to [`set`] with a `bool`.
pub fn set_bool(doc: &str, path: &str, value: bool) -> Result<String, EditError> {
    set(doc, path, value)
}

/// Forwards to [`set`] with a string, JSON-escaping its contents.
pub fn set_string(doc: &str, path: &str, value: &str) -> Result<String, EditError> {
    set(doc, path, value)
}

// ============================================================================
// Writer flavor — for callers assembling output straight into a file or
// socket instead of collecting a `String` first. The editor itself still
// computes the whole replacement in memory (it is not a streaming
// component, unlike the teacher's repair engine); this flavor only avoids a
// second buffer on the way out.
// ============================================================================

fn write_all<W: std::io::Write>(w: &mut W, s: &str) -> Result<(), EditError> {
    let mut em = emit::WriterEmitter::with_capacity(w, s.len());
    em.emit_str(s)?;
    em.flush_all()
}

/// Writer flavor of [`set`].
pub fn set_to_writer<'v, W: std::io::Write>(
    doc: &str,
    path: &str,
    value: impl Into<Value<'v>>,
    opts: &EditOptions,
    w: &mut W,
) -> Result<(), EditError> {
    let out = set_opts(doc, path, value, opts)?;
    write_all(w, &out)
}

/// Writer flavor of [`set_raw`].
pub fn set_raw_to_writer<W: std::io::Write>(
    doc: &str,
    path: &str,
    raw_json: &str,
    opts: &EditOptions,
    w: &mut W,
) -> Result<(), EditError> {
    let out = set_raw_opts(doc, path, raw_json, opts)?;
    write_all(w, &out)
}

/// Writer flavor of [`delete`].
pub fn delete_to_writer<W: std::io::Write>(doc: &str, path: &str, opts: &EditOptions, w: &mut W) -> Result<(), EditError> {
    let out = delete_opts(doc, path, opts)?;
    write_all(w, &out)
}

// ============================================================================
// Byte-buffer flavor
// ============================================================================

fn utf8(bytes: &[u8]) -> Result<&str, EditError> {
    std::str::from_utf8(bytes).map_err(|e| EditError::io(format!("document is not valid UTF-8: {e}")))
}

/// Byte-buffer flavor of [`set`].
pub fn set_bytes<'v>(doc: &[u8], path: &str, value: impl Into<Value<'v>>) -> Result<Vec<u8>, EditError> {
    Ok(set(utf8(doc)?, path, value)?.into_bytes())
}

/// Byte-buffer flavor of [`set_raw`].
pub fn set_raw_bytes(doc: &[u8], path: &str, raw_json: &[u8]) -> Result<Vec<u8>, EditError> {
    Ok(set_raw(utf8(doc)?, path, utf8(raw_json)?)?.into_bytes())
}

/// Byte-buffer flavor of [`delete`].
pub fn delete_bytes(doc: &[u8], path: &str) -> Result<Vec<u8>, EditError> {
    Ok(delete(utf8(doc)?, path)?.into_bytes())
}

// ============================================================================
// Logging API
// ============================================================================

/// Like [`set`], also returning the edit log when built with the `logging`
/// feature. Without that feature the log is always empty.
pub fn set_with_log<'v>(
    doc: &str,
    path: &str,
    value: impl Into<Value<'v>>,
    opts: &EditOptions,
) -> Result<(String, Vec<EditLogEntry>), EditError> {
    let value = value.into();
    let encoded = value::encode(&value, opts);
    set_raw_with_log(doc, path, &encoded, opts)
}

/// Like [`set_raw`], also returning the edit log.
#[cfg(feature = "logging")]
pub fn set_raw_with_log(
    doc: &str,
    path: &str,
    raw_json: &str,
    opts: &EditOptions,
) -> Result<(String, Vec<EditLogEntry>), EditError> {
    let mut log = EditLog::new(opts.logging);
    let out = editor::edit(doc, path, OpKind::Assign, raw_json, opts, &mut log)?;
    Ok((out, log.into_entries()))
}

#[cfg(not(feature = "logging"))]
pub fn set_raw_with_log(
    doc: &str,
    path: &str,
    raw_json: &str,
    opts: &EditOptions,
) -> Result<(String, Vec<EditLogEntry>), EditError> {
    let out = set_raw_opts(doc, path, raw_json, opts)?;
    Ok((out, Vec::new()))
}

/// Like [`delete`], also returning the edit log.
#[cfg(feature = "logging")]
pub fn delete_with_log(doc: &str, path: &str, opts: &EditOptions) -> Result<(String, Vec<EditLogEntry>), EditError> {
    let mut log = EditLog::new(opts.logging);
    let out = editor::edit(doc, path, OpKind::Delete, "", opts, &mut log)?;
    Ok((out, log.into_entries()))
}

#[cfg(not(feature = "logging"))]
pub fn delete_with_log(doc: &str, path: &str, opts: &EditOptions) -> Result<(String, Vec<EditLogEntry>), EditError> {
    let out = delete_opts(doc, path, opts)?;
    Ok((out, Vec::new()))
}

// ============================================================================
// serde convenience (requires the `serde` feature)
// ============================================================================

#[cfg(feature = "serde")]
/// Reads the value at `path` out of `doc` by parsing the whole document with
/// `serde_json` and indexing into it. This crate's core never builds a
/// parse tree; this helper exists only because callers inevitably want to
/// read back what they just wrote, and `serde_json::Value` is the obvious
/// place to do that rather than teaching the splicer how to return values.
pub fn get(doc: &str, path: &str) -> Result<Option<serde_json::Value>, EditError> {
    let root: serde_json::Value =
        serde_json::from_str(doc).map_err(|e| EditError::io(format!("document is not valid JSON: {e}")))?;
    let mut current = &root;
    let mut remaining = path;
    while !remaining.is_empty() {
        let (seg, rest) = path::next_segment(remaining);
        if seg.is_wildcard() {
            return Ok(None); // `get` has no broadcast semantics; reserved for `set`/`delete`.
        }
        let found = match current {
            serde_json::Value::Object(map) => map.get(seg.as_key()),
            serde_json::Value::Array(arr) => match seg.as_array_target() {
                Some(path::ArrayTarget::Index(i)) => arr.get(i),
                Some(path::ArrayTarget::Last) => arr.last(),
                None => None,
            },
            _ => None,
        };
        current = match found {
            Some(v) => v,
            None => return Ok(None),
        };
        remaining = rest;
    }
    Ok(Some(current.clone()))
}

#[cfg(test)]
mod tests;
