//! Hill Cipher Primitives
//!
//! A 2x2 Hill cipher over a 27-symbol alphabet (space and `a`-`z`). Pure
//! functions with deterministic outputs and no I/O.
//!
//! # Pipeline
//!
//! ```text
//! Key entries ──► KeyMatrix::new (range + determinant check)
//!                        │
//! Plaintext ──► lowercase, pad to even ──► pairs ──► K · v mod 27 ──► Ciphertext
//! Ciphertext ──► pairs ──► K⁻¹ · v mod 27 ──► Plaintext (padding kept)
//! ```
//!
//! A key is accepted only if its determinant is coprime with 27, so any key
//! that can encrypt can also decrypt. Rejection happens once, at
//! construction, before any text is processed.
//!
//! # Example
//!
//! ```
//! use hill_crypto::{KeyMatrix, decrypt, encrypt};
//!
//! let key = KeyMatrix::new([[5, 8], [17, 3]]).unwrap();
//!
//! let ciphertext = encrypt("hello", &key).unwrap();
//! assert_eq!(ciphertext.len(), 6);
//!
//! let plaintext = decrypt(&ciphertext, &key).unwrap();
//! assert_eq!(plaintext, "hello ");
//! ```
//!
//! # Security
//!
//! None. The Hill cipher is linear and falls to a handful of known
//! plaintext pairs. This crate exists for teaching.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod alphabet;
pub mod cipher;
pub mod error;
pub mod key;
pub mod modular;

pub use alphabet::{ALPHABET, MODULUS, symbol_to_value, value_to_symbol};
pub use cipher::{BLOCK_SIZE, decrypt, encrypt};
pub use error::CipherError;
pub use key::{KeyMatrix, validate_key};
pub use modular::Matrix2;
