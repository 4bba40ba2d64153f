//! Text normalization for Spanish game words
//!
//! All comparisons in the game happen on a normalized form: combining
//! diacritical marks stripped and letters upper-cased, so that "avión" and
//! "AVION" are the same word. The one letter that must survive untouched is
//! Ñ, which is a letter of the alphabet rather than an accented N, even
//! though Unicode canonically decomposes it to N plus a combining tilde.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Normalize text for word comparison.
///
/// Strips combining diacritical marks and upper-cases the result. The input
/// is canonically composed first so that a decomposed `n` + combining tilde
/// arrives as `ñ` and is preserved along with the precomposed form.
///
/// Total and pure: never fails, and normalizing twice gives the same result
/// as normalizing once.
///
/// # Examples
/// ```
/// use palabra::core::normalize;
///
/// assert_eq!(normalize("café"), "CAFE");
/// assert_eq!(normalize("NIÑO"), "NIÑO");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.nfc() {
        if ch == 'ñ' || ch == 'Ñ' {
            out.push('Ñ');
            continue;
        }
        decompose_canonical(ch, |piece| {
            if !is_combining_mark(piece) {
                out.extend(piece.to_uppercase());
            }
        });
    }
    out
}

/// Whether `c` is a letter of the normalized game alphabet (A–Z or Ñ).
#[must_use]
pub const fn is_game_letter(c: char) -> bool {
    c.is_ascii_uppercase() || c == 'Ñ'
}
