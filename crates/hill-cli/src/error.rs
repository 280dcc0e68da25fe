//! Shell error types.

use std::io;

use hill_crypto::CipherError;
use thiserror::Error;

/// Errors that abort a shell session.
///
/// Rejected keys and rejected messages are not errors: the shell reports
/// them to the user and returns an [`Outcome`](crate::Outcome).
#[derive(Debug, Error)]
pub enum ShellError {
    /// I/O error reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Key token that is not an integer.
    #[error("invalid key entry: {token:?} is not an integer")]
    InvalidKeyEntry {
        /// The offending token
        token: String,
    },

    /// Wrong number of key entries.
    #[error("expected 4 key entries, found {found}")]
    KeyEntryCount {
        /// Number of entries available
        found: usize,
    },

    /// Input ended before a message line was read.
    #[error("input ended before a message was entered")]
    MissingMessage,

    /// Cipher error the shell could not attribute to user input.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ShellError::InvalidKeyEntry { token: "five".to_string() };
        assert_eq!(err.to_string(), "invalid key entry: \"five\" is not an integer");

        let err = ShellError::KeyEntryCount { found: 3 };
        assert_eq!(err.to_string(), "expected 4 key entries, found 3");
    }

    #[test]
    fn wraps_cipher_error() {
        let err = ShellError::from(CipherError::InvalidValue { value: 30 });
        assert_eq!(err.to_string(), "cipher error: invalid value: 30 is outside [0, 26]");
    }
}
