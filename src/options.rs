/// How a deletion resolves which comma to drop when it removes a member or
/// element that sits between two others.
///
/// The crate currently implements only `PreferPreceding` end to end; the
/// other variants are kept as an explicit enum (rather than inlining the
/// choice) so the policy can be made a real [`EditOptions`] knob without
/// changing the deletion code's shape.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum AdjacencyPolicy {
    /// Drop the comma before the removed element when one exists, otherwise
    /// the comma after it, otherwise nothing.
    PreferPreceding,
}

#[derive(Clone, Debug)]
pub struct EditOptions {
    /// When true, escape non-ASCII characters written by `set`/`setRaw`
    /// values as `\uXXXX`. Bytes already present in the document are never
    /// touched, so this only affects newly encoded values.
    pub ensure_ascii: bool,
    /// Enable edit logging. Use the `*_with_log` entry points to retrieve
    /// the log; ignored by the plain entry points.
    pub logging: bool,
    /// Context window size used when building log context snippets (number
    /// of bytes captured on each side of the edit position).
    pub log_context_window: usize,
    /// Which comma a deletion drops when it removes a member/element
    /// between two others.
    pub adjacency_policy: AdjacencyPolicy,
}

impl Default for EditOptions {
    fn default() -> Self {
        Self {
            ensure_ascii: false,
            logging: false,
            log_context_window: 10,
            adjacency_policy: AdjacencyPolicy::PreferPreceding,
        }
    }
}
