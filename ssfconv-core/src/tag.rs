//! Tag reclassification rules

use crate::membership::MembershipSets;

/// Tag assigned to tokens found in the symbol list
pub const SYMBOL_TAG: &str = "RD_SYM";

/// Tag assigned to tokens found in the punctuation list
pub const PUNCTUATION_TAG: &str = "RD_PUNC";

/// Tag assigned to tokens whose supplied tag is the unknown marker
pub const UNKNOWN_TAG: &str = "RD_UNK";

/// Marker a tagger emits for tokens it could not tag
pub const UNKNOWN_MARKER: &str = "unk";

/// Compute the final tag of a token
///
/// Checks run in a fixed order and the first match wins:
/// symbol membership, punctuation membership, then the `unk` marker.
/// Any other tag passes through unchanged.
pub fn reclassify<'a>(token: &str, original_tag: &'a str, sets: &MembershipSets) -> &'a str {
    if sets.is_symbol(token) {
        SYMBOL_TAG
    } else if sets.is_punctuation(token) {
        PUNCTUATION_TAG
    } else if original_tag == UNKNOWN_MARKER {
        UNKNOWN_TAG
    } else {
        original_tag
    }
}
