//! Normalisation for text typed or pasted by the operator.

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strip surrounding whitespace, counting a byte-order mark as whitespace.
///
/// Pasted codes and prices often carry a leading BOM, which [`str::trim`]
/// keeps.
pub(crate) fn trim_input(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}
