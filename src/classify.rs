/// Byte-level classification shared by the scanner, the navigator and the
/// path parser. The document is assumed to be valid UTF-8 JSON, so ASCII
/// structural bytes can never collide with a UTF-8 continuation byte and
/// nothing here needs to decode a `char` just to tell whitespace from a
/// quote.
#[inline]
pub(crate) fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}
