//! Shell configuration.

use clap::ValueEnum;

use crate::error::ShellError;

/// Which direction(s) the shell runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Encrypt the message, then decrypt the result
    #[default]
    Roundtrip,
    /// Encrypt only
    Encrypt,
    /// Decrypt only
    Decrypt,
}

/// Session configuration.
///
/// Anything left as `None` is prompted for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Key entries in row-major order (k00, k01, k10, k11), not yet
    /// range-checked
    pub key: Option<[i64; 4]>,
    /// Message text, not yet sanitized
    pub message: Option<String>,
    /// Direction
    pub mode: Mode,
}

impl ShellConfig {
    /// Set the key from a list of entries, which must have exactly four.
    pub fn with_key_entries(mut self, entries: &[i64]) -> Result<Self, ShellError> {
        let key: [i64; 4] = entries
            .try_into()
            .map_err(|_| ShellError::KeyEntryCount { found: entries.len() })?;
        self.key = Some(key);
        Ok(self)
    }
}
