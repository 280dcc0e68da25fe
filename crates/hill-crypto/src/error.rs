//! Error types for Hill cipher operations

use thiserror::Error;

/// Errors from codec, key and cipher operations.
///
/// Every error is terminal for the call that produced it. There is no
/// partial output and nothing transient to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Character outside the 27-symbol alphabet reached the codec
    ///
    /// Callers are expected to sanitize and lowercase text first, so this is
    /// a contract violation on their side.
    #[error("invalid symbol: {symbol:?}")]
    InvalidSymbol {
        /// The rejected character
        symbol: char,
    },

    /// Numeric code outside [0, 26] reached the decoder
    #[error("invalid value: {value} is outside [0, 26]")]
    InvalidValue {
        /// The rejected value
        value: i64,
    },

    /// Value has no multiplicative inverse modulo `modulus`
    #[error("no modular inverse for {value} modulo {modulus}")]
    NoModularInverse {
        /// The value that was inverted (already reduced)
        value: i64,
        /// The modulus
        modulus: i64,
    },

    /// Ciphertext with an odd number of symbols
    #[error("invalid input length: {length} is not a multiple of the block size")]
    InvalidInputLength {
        /// Number of symbols in the rejected input
        length: usize,
    },

    /// Key matrix entry outside [0, 26]
    #[error("key entry ({row}, {col}) = {value} is outside [0, 26]")]
    KeyEntryOutOfRange {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
        /// The rejected value
        value: i64,
    },
}

impl CipherError {
    /// Returns true if the key was rejected at acceptance time.
    pub fn is_key_error(&self) -> bool {
        match self {
            Self::NoModularInverse { .. } | Self::KeyEntryOutOfRange { .. } => true,

            Self::InvalidSymbol { .. }
            | Self::InvalidValue { .. }
            | Self::InvalidInputLength { .. } => false,
        }
    }

    /// Returns true if this error indicates a broken engine invariant.
    ///
    /// The engine only ever decodes values it reduced itself, so an
    /// out-of-range value is a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}
