//! Irreversible masking of identifier values.
//!
//! A masked value is a constant placeholder followed by the last
//! [`VISIBLE_SUFFIX_LEN`] characters of the original. Values shorter than
//! the suffix keep all of their characters after the placeholder.

use crate::IdentifierKind;

use std::str::FromStr;

/// Placeholder for identifier A (`XXXX-XXXX-1234`)
pub const IDENTIFIER_A_MASK_PREFIX: &str = "XXXX-XXXX-";

/// Placeholder for identifier B (`XXXXXX234F`)
pub const IDENTIFIER_B_MASK_PREFIX: &str = "XXXXXX";

/// Number of trailing characters left visible
pub const VISIBLE_SUFFIX_LEN: usize = 4;

/// Mask a value of the given kind. `None` stays `None`.
pub fn mask(value: Option<&str>, kind: IdentifierKind) -> Option<String> {
    let value = value?;
    let mut masked = String::from(kind.mask_prefix());
    masked.push_str(visible_suffix(value));
    Some(masked)
}

/// Mask by kind name. Unknown kinds pass the value through unchanged.
pub fn mask_by_kind_name(value: Option<&str>, kind_name: &str) -> Option<String> {
    match IdentifierKind::from_str(kind_name) {
        Ok(kind) => mask(value, kind),
        Err(_) => value.map(str::to_string),
    }
}

/// Last `VISIBLE_SUFFIX_LEN` chars, counted as chars so multi-byte input never splits.
fn visible_suffix(value: &str) -> &str {
    let char_count = value.chars().count();
    if char_count <= VISIBLE_SUFFIX_LEN {
        return value;
    }

    let skip = char_count - VISIBLE_SUFFIX_LEN;
    match value.char_indices().nth(skip) {
        Some((byte_index, _)) => &value[byte_index..],
        None => value,
    }
}
