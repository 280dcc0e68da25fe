//! Block transform for encryption and decryption.
//!
//! Text is processed in consecutive pairs of symbols. Each pair is mapped to a
//! vector, multiplied by the key (or its inverse) modulo 27, and mapped back.
//!
//! All functions are pure and stateless. The same key may be shared across
//! threads and used concurrently.

use zeroize::Zeroize;

use crate::{
    alphabet::{self, MODULUS, PAD_SYMBOL},
    error::CipherError,
    key::KeyMatrix,
    modular::{self, Matrix2},
};

/// Number of symbols transformed together.
pub const BLOCK_SIZE: usize = 2;

/// Encrypt `plaintext` under `key`.
///
/// The text is lowercased first. Odd-length input gets one trailing space, so
/// the ciphertext length is always even.
///
/// # Errors
///
/// - `InvalidSymbol`: the lowercased text contains a character outside the
///   alphabet
pub fn encrypt(plaintext: &str, key: &KeyMatrix) -> Result<String, CipherError> {
    let mut symbols: Vec<char> = plaintext.to_lowercase().chars().collect();

    let padded = symbols.len() % BLOCK_SIZE != 0;
    if padded {
        symbols.push(PAD_SYMBOL);
    }

    let ciphertext = transform(&symbols, &key.to_matrix(), |block| block)?;

    tracing::debug!(len = symbols.len(), padded, "encrypted message");

    Ok(ciphertext)
}

/// Decrypt `ciphertext` under `key`.
///
/// The inverse key is computed once per call. Padding added by [`encrypt`] is
/// not removed.
///
/// # Errors
///
/// - `InvalidInputLength`: the ciphertext has an odd number of symbols
/// - `InvalidSymbol`: the ciphertext contains a character outside the alphabet
/// - `NoModularInverse`: the key is not invertible (unreachable for a
///   validated [`KeyMatrix`])
pub fn decrypt(ciphertext: &str, key: &KeyMatrix) -> Result<String, CipherError> {
    let symbols: Vec<char> = ciphertext.chars().collect();
    if symbols.len() % BLOCK_SIZE != 0 {
        return Err(CipherError::InvalidInputLength { length: symbols.len() });
    }

    let mut inverse = key.inverse()?;

    // Force both components into [0, 26]; `%` keeps the dividend's sign.
    let result = transform(&symbols, &inverse, |block| {
        block.map(|value| modular::reduce(value, MODULUS))
    });
    inverse.zeroize();

    let plaintext = result?;

    tracing::debug!(len = symbols.len(), "decrypted message");

    Ok(plaintext)
}

/// Apply `matrix` to every block of `symbols`.
///
/// `symbols.len()` must be a multiple of [`BLOCK_SIZE`].
fn transform(
    symbols: &[char],
    matrix: &Matrix2,
    normalize: impl Fn([i64; 2]) -> [i64; 2],
) -> Result<String, CipherError> {
    let mut output = String::with_capacity(symbols.len());

    for pair in symbols.chunks_exact(BLOCK_SIZE) {
        let vector = [
            i64::from(alphabet::symbol_to_value(pair[0])?),
            i64::from(alphabet::symbol_to_value(pair[1])?),
        ];

        let block = normalize(modular::apply(matrix, vector, MODULUS));

        output.push(alphabet::value_to_symbol(block[0])?);
        output.push(alphabet::value_to_symbol(block[1])?);
    }

    Ok(output)
}
