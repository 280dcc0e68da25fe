//! Alphabet codec: space and `a`-`z` mapped to 0..=26.
//!
//! The alphabet is ordered with space first, so a letter's value is its
//! offset from `a` plus one and no table search is needed.

use crate::error::CipherError;

/// Number of symbols in the alphabet, and the cipher modulus.
pub const MODULUS: i64 = 27;

/// The alphabet in value order.
pub const ALPHABET: [char; 27] = [
    ' ', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Padding symbol appended to odd-length plaintext.
pub const PAD_SYMBOL: char = ' ';

/// Map a symbol to its numeric value.
///
/// # Errors
///
/// - `InvalidSymbol`: `symbol` is not space or a lowercase ASCII letter
pub fn symbol_to_value(symbol: char) -> Result<u8, CipherError> {
    match symbol {
        ' ' => Ok(0),
        'a'..='z' => Ok(symbol as u8 - b'a' + 1),
        _ => Err(CipherError::InvalidSymbol { symbol }),
    }
}

/// Map a numeric value back to its symbol.
///
/// # Errors
///
/// - `InvalidValue`: `value` is outside [0, 26]
pub fn value_to_symbol(value: i64) -> Result<char, CipherError> {
    usize::try_from(value)
        .ok()
        .and_then(|index| ALPHABET.get(index).copied())
        .ok_or(CipherError::InvalidValue { value })
}

/// Returns true if `symbol` belongs to the alphabet.
pub fn is_symbol(symbol: char) -> bool {
    symbol == ' ' || symbol.is_ascii_lowercase()
}
