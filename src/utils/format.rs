//! Formatting utilities for display values.

use crate::config::address_display::{ELLIPSIS, PREFIX_CHARS, SUFFIX_CHARS};

/// Shorten an address for display (`0x1111...aaaa` becomes `0x11...aaaa`).
///
/// Keeps the first and last few characters of the string as given,
/// whatever its length. Counts characters, not bytes. An empty address
/// formats as an empty string.
pub fn truncate_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = address.chars().collect();
    let start: String = chars[..PREFIX_CHARS.min(chars.len())].iter().collect();
    let end: String = chars[chars.len().saturating_sub(SUFFIX_CHARS)..]
        .iter()
        .collect();

    format!("{}{}{}", start, ELLIPSIS, end)
}
