//! Orthographic normalization for win detection and puzzle display.

use std::ops::RangeInclusive;

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks stripped after decomposition.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Decompose, strip combining diacritics, and lowercase.
///
/// `"México"` becomes `"mexico"`. Characters whose decomposition falls
/// outside the combining-mark block survive unchanged, so non-Latin names
/// pass through in lowercase.
#[must_use]
pub fn to_simple_case(text: &str) -> String {
    text.nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Whether the on-screen keyboard exposes this character as a strikable
/// letter. Everything else (spaces, punctuation, non-Latin letters) is
/// treated as already revealed.
#[must_use]
pub const fn is_alphabet_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}
