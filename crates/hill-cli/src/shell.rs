//! Interactive session over the cipher core.
//!
//! The shell reads a key and a message, runs the configured direction(s),
//! and writes a transcript. It is generic over its reader and writer so the
//! same code serves the terminal and in-memory tests.

use std::io::{BufRead, Write};

use hill_crypto::{KeyMatrix, decrypt, encrypt};

use crate::{
    config::{Mode, ShellConfig},
    error::ShellError,
    input,
};

const KEY_PROMPT: &str = "Enter 4 numbers for the key matrix (0-26) [00,01,10,11]:";
const PLAINTEXT_PROMPT: &str = "Enter plaintext message (letters and spaces only):";
const CIPHERTEXT_PROMPT: &str = "Enter ciphertext message (letters and spaces only):";

const ENTRY_RANGE_MESSAGE: &str = "Invalid key matrix element. Must be between 0 and 26.";
const DETERMINANT_MESSAGE: &str =
    "Invalid key matrix. Determinant is not relatively prime to 27.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// All requested operations ran
    Completed,
    /// The key was rejected before any text was processed
    KeyRejected,
    /// The message was rejected by the cipher
    MessageRejected,
}

/// Key as read from input, before acceptance.
enum KeyInput {
    Entries([u8; 4]),
    OutOfRange(i64),
}

/// A shell session bound to a reader and a writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the session and return the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run one session.
    ///
    /// Key and message rejections are reported on the output and returned as
    /// an [`Outcome`]. Only I/O failures and malformed key tokens are errors.
    pub fn run(&mut self, config: &ShellConfig) -> Result<Outcome, ShellError> {
        let key_input = match config.key {
            Some(values) => check_entries(values),
            None => {
                writeln!(self.output, "{KEY_PROMPT}")?;
                self.read_key()?
            },
        };

        let entries = match key_input {
            KeyInput::Entries(entries) => entries,
            KeyInput::OutOfRange(value) => {
                tracing::warn!(value, "key entry out of range");
                writeln!(self.output, "{ENTRY_RANGE_MESSAGE}")?;
                return Ok(Outcome::KeyRejected);
            },
        };

        let key = match KeyMatrix::from_row_major(entries) {
            Ok(key) => key,
            Err(err) if err.is_key_error() => {
                tracing::warn!(%err, "key rejected");
                writeln!(self.output, "{DETERMINANT_MESSAGE}")?;
                return Ok(Outcome::KeyRejected);
            },
            Err(err) => return Err(err.into()),
        };

        tracing::info!(mode = ?config.mode, "key accepted");

        let message = match &config.message {
            Some(message) => input::sanitize(message),
            None => {
                let prompt = match config.mode {
                    Mode::Roundtrip | Mode::Encrypt => PLAINTEXT_PROMPT,
                    Mode::Decrypt => CIPHERTEXT_PROMPT,
                };
                writeln!(self.output, "{prompt}")?;
                self.read_message()?
            },
        };

        match self.transform(&message, &key, config.mode) {
            Ok(()) => Ok(Outcome::Completed),
            Err(ShellError::Cipher(err)) if !err.is_internal() => {
                tracing::warn!(%err, "message rejected");
                writeln!(self.output, "Invalid message: {err}")?;
                Ok(Outcome::MessageRejected)
            },
            Err(err) => Err(err),
        }
    }

    fn transform(&mut self, message: &str, key: &KeyMatrix, mode: Mode) -> Result<(), ShellError> {
        match mode {
            Mode::Roundtrip => {
                let ciphertext = encrypt(message, key)?;
                writeln!(self.output, "Encrypted message: {ciphertext}")?;

                let plaintext = decrypt(&ciphertext, key)?;
                writeln!(self.output, "Decrypted message: {plaintext}")?;
            },
            Mode::Encrypt => {
                let ciphertext = encrypt(message, key)?;
                writeln!(self.output, "Encrypted message: {ciphertext}")?;
            },
            Mode::Decrypt => {
                let plaintext = decrypt(message, key)?;
                writeln!(self.output, "Decrypted message: {plaintext}")?;
            },
        }

        Ok(())
    }

    /// Read key entries one token at a time, across as many lines as needed.
    ///
    /// An out-of-range entry stops reading immediately. Tokens after the
    /// fourth entry on the same line are discarded.
    fn read_key(&mut self) -> Result<KeyInput, ShellError> {
        let mut entries = [0u8; 4];
        let mut found = 0;
        let mut line = String::new();

        while found < entries.len() {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(ShellError::KeyEntryCount { found });
            }

            for token in line.split_whitespace() {
                let value = input::parse_key_token(token)?;
                let Some(entry) = input::key_entry(value) else {
                    return Ok(KeyInput::OutOfRange(value));
                };

                entries[found] = entry;
                found += 1;
                if found == entries.len() {
                    break;
                }
            }
        }

        Ok(KeyInput::Entries(entries))
    }

    fn read_message(&mut self) -> Result<String, ShellError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::MissingMessage);
        }

        Ok(input::sanitize(&line))
    }
}

fn check_entries(values: [i64; 4]) -> KeyInput {
    let mut entries = [0u8; 4];
    for (slot, &value) in entries.iter_mut().zip(values.iter()) {
        let Some(entry) = input::key_entry(value) else {
            return KeyInput::OutOfRange(value);
        };
        *slot = entry;
    }

    KeyInput::Entries(entries)
}
