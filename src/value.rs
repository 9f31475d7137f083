//! Encodes typed values into JSON text. The encoder never looks at an
//! existing document; it only turns a caller-supplied [`Value`] into the
//! bytes that get spliced in by the editor.

use crate::emit::{Emitter, EditResult, StringEmitter};
use crate::options::EditOptions;

/// A value to assign with [`crate::set`]. `Raw` bypasses encoding entirely
/// and is what [`crate::set_raw`] uses internally to splice caller-supplied
/// JSON text verbatim.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'a str),
    Raw(&'a str),
}

impl<'a> From<bool> for Value<'a> {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl<'a> From<i32> for Value<'a> {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl<'a> From<u32> for Value<'a> {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(v: &'a str) -> Self {
        Value::Str(v)
    }
}

impl<'a> From<()> for Value<'a> {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

#[cfg(feature = "serde")]
impl<'a> Value<'a> {
    /// Best-effort conversion from a `serde_json::Value`. Arrays and objects
    /// have no direct `Value` representation here; callers that need to set
    /// a structured value should use [`crate::set_raw`] with
    /// `serde_json::to_string`.
    pub fn from_json_scalar(v: &'a serde_json::Value) -> Option<Self> {
        use serde_json::Value as J;
        Some(match v {
            J::Null => Value::Null,
            J::Bool(b) => Value::Bool(*b),
            J::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float(n.as_f64()?)
                }
            }
            J::String(s) => Value::Str(s),
            J::Array(_) | J::Object(_) => return None,
        })
    }
}

pub(crate) fn encode(value: &Value, opts: &EditOptions) -> String {
    let mut out = String::new();
    let mut em = StringEmitter::new(&mut out);
    encode_into(value, opts, &mut em).expect("StringEmitter never fails");
    out
}

pub(crate) fn encode_into<E: Emitter>(value: &Value, opts: &EditOptions, out: &mut E) -> EditResult<()> {
    match value {
        Value::Null => out.emit_str("null"),
        Value::Bool(true) => out.emit_str("true"),
        Value::Bool(false) => out.emit_str("false"),
        Value::Int(n) => out.emit_str(&n.to_string()),
        Value::Float(f) => {
            if f.is_finite() {
                out.emit_str(&f.to_string())
            } else {
                out.emit_str("null")
            }
        }
        Value::Str(s) => emit_json_string(out, s, opts.ensure_ascii),
        Value::Raw(s) => out.emit_str(s),
    }
}

/// Encodes `s` as a JSON string literal, escaping `"`, `\`, control bytes
/// below `0x20`, and (when `ensure_ascii`) anything outside ASCII.
pub(crate) fn emit_json_string<E: Emitter>(out: &mut E, s: &str, ensure_ascii: bool) -> EditResult<()> {
    if s.is_ascii() {
        let needs_escape = s.bytes().any(|b| b == b'"' || b == b'\\' || b <= 0x1F);
        if !needs_escape {
            out.emit_char('"')?;
            out.emit_str(s)?;
            return out.emit_char('"');
        }
    }

    out.emit_char('"')?;
    let mut start = 0usize;
    for (i, ch) in s.char_indices() {
        let code = ch as u32;
        let needs_escape = ch == '"' || ch == '\\' || code <= 0x1F || (ensure_ascii && code > 0x7F);
        if !needs_escape {
            continue;
        }
        if i > start {
            out.emit_str(&s[start..i])?;
        }
        match ch {
            '"' => out.emit_str("\\\"")?,
            '\\' => out.emit_str("\\\\")?,
            '\u{08}' => out.emit_str("\\b")?,
            '\u{0C}' => out.emit_str("\\f")?,
            '\n' => out.emit_str("\\n")?,
            '\r' => out.emit_str("\\r")?,
            '\t' => out.emit_str("\\t")?,
            _ if code <= 0x1F => out.emit_str(&format!("\\u{code:04X}"))?,
            _ => {
                debug_assert!(ensure_ascii && code > 0x7F);
                if code <= 0xFFFF {
                    out.emit_str(&format!("\\u{code:04X}"))?;
                } else {
                    let u = code - 0x1_0000;
                    let hi = 0xD800 + ((u >> 10) & 0x3FF);
                    let lo = 0xDC00 + (u & 0x3FF);
                    out.emit_str(&format!("\\u{hi:04X}\\u{lo:04X}"))?;
                }
            }
        }
        start = i + ch.len_utf8();
    }
    if start < s.len() {
        out.emit_str(&s[start..])?;
    }
    out.emit_char('"')
}
