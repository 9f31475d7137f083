//! Broadcasts the remainder of a path across every element of an array.

use crate::container;
use crate::editor::{edit, OpKind};
use crate::error::{EditError, EditErrorKind};
use crate::log::EditLog;
use crate::options::EditOptions;

/// `doc[arr_start]` must be `[`. `rest` is whatever follows the wildcard
/// segment that triggered this broadcast (possibly itself starting with
/// another `#`, which `edit` will recurse into per element).
pub(crate) fn broadcast(
    doc: &str,
    arr_start: usize,
    rest: &str,
    op: OpKind,
    value: &str,
    opts: &EditOptions,
    log: &mut EditLog,
) -> Result<String, EditError> {
    let scan = container::scan_all_elements(doc, arr_start);
    if scan.elements.is_empty() {
        return Ok(doc.to_string());
    }

    if rest.is_empty() && matches!(op, OpKind::Delete) {
        log.record(arr_start, "wildcard delete collapsed array");
        let mut out = String::with_capacity(arr_start + doc.len() - scan.close + 2);
        out.push_str(&doc[..arr_start + 1]);
        out.push_str(&doc[scan.close..]);
        return Ok(out);
    }

    // Each element's replacement is computed independently against its own
    // local byte range, so the running `cursor` is the only offset
    // bookkeeping needed to rebase every element's edit back into `doc`.
    let mut out = String::with_capacity(doc.len());
    let mut cursor = 0usize;
    for &(val_start, val_end) in &scan.elements {
        out.push_str(&doc[cursor..val_start]);
        if rest.is_empty() {
            out.push_str(value);
        } else {
            let elem = &doc[val_start..val_end];
            match edit(elem, rest, op, value, opts, log) {
                Ok(sub) => out.push_str(&sub),
                // An element that is neither an object nor an array for a
                // key/index segment in `rest` cannot host the remaining
                // path; per the wildcard-coverage property this leaves the
                // element unchanged rather than failing the whole broadcast.
                Err(EditError { kind: EditErrorKind::TypeMismatch, .. }) => out.push_str(elem),
                Err(e) => return Err(e),
            }
        }
        cursor = val_end;
    }
    out.push_str(&doc[cursor..]);
    Ok(out)
}
