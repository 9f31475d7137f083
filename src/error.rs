use thiserror::Error;

/// What went wrong while applying a path edit, and where in the input it
/// was noticed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditErrorKind {
    /// The path string could not be decomposed into segments. Reserved for
    /// forward compatibility; the current escape grammar (`\.` `\\` `\*`
    /// `\?`) never actually produces this, since every backslash is either a
    /// recognized escape or a literal character.
    #[error("malformed path")]
    PathSyntax,
    /// A path segment names a key against an array, or an index against
    /// something that is neither an object nor an array.
    #[error("path segment does not match the container at this position")]
    TypeMismatch,
    /// A caller-supplied raw value was not itself well-formed enough to
    /// splice in (currently unused by the in-process API, reserved for
    /// callers that validate `setRaw` input before calling this crate).
    #[error("value is not valid JSON")]
    InvalidValue,
    /// Wraps an I/O failure from a `*_to_writer` / file-based entry point.
    #[error("io error: {0}")]
    Io(String),
}

/// An error produced while locating or splicing a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct EditError {
    pub kind: EditErrorKind,
    pub position: usize,
}

impl EditError {
    pub fn new(kind: EditErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    pub(crate) fn io(message: impl Into<String>) -> Self {
        Self::new(EditErrorKind::Io(message.into()), 0)
    }
}
