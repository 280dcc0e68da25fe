//! Hill cipher shell
//!
//! A thin shell over [`hill_crypto`] that owns all terminal I/O: it reads a
//! key and a line of text, sanitizes the text, and prints the encrypted and
//! decrypted results. All cipher logic lives in the core crate.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
mod error;
pub mod input;
mod shell;

pub use config::{Mode, ShellConfig};
pub use error::ShellError;
pub use shell::{Outcome, Shell};
