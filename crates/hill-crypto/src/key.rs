//! Validated 2x2 key matrix.
//!
//! A [`KeyMatrix`] can only be constructed from entries in [0, 26] whose
//! determinant is invertible modulo 27, so every key that reaches the cipher
//! engine is decryptable.

use std::fmt;

use zeroize::Zeroize;

use crate::{
    alphabet::MODULUS,
    error::CipherError,
    modular::{self, Matrix2},
};

/// Returns true if `matrix` is usable as a key modulo 27.
///
/// Only the determinant is examined: `gcd(det mod 27, 27) == 1`. Entries are
/// reduced first, which leaves the determinant's residue unchanged.
pub fn validate_key(matrix: &Matrix2) -> bool {
    let reduced = matrix.map(|row| row.map(|entry| modular::reduce(entry, MODULUS)));
    let det = modular::reduce(modular::determinant(&reduced), MODULUS);
    modular::gcd(det, MODULUS) == 1
}

/// A key matrix accepted for encryption and decryption.
///
/// Immutable once constructed. Entries are zeroized on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMatrix {
    entries: [[u8; 2]; 2],
}

impl KeyMatrix {
    /// Validate and wrap a key matrix.
    ///
    /// # Errors
    ///
    /// - `KeyEntryOutOfRange`: an entry is greater than 26
    /// - `NoModularInverse`: the determinant is not coprime with 27
    pub fn new(entries: [[u8; 2]; 2]) -> Result<Self, CipherError> {
        for (row, values) in entries.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if i64::from(value) >= MODULUS {
                    return Err(CipherError::KeyEntryOutOfRange {
                        row,
                        col,
                        value: i64::from(value),
                    });
                }
            }
        }

        let key = Self { entries };
        let det = modular::reduce(key.determinant(), MODULUS);
        if modular::gcd(det, MODULUS) != 1 {
            return Err(CipherError::NoModularInverse { value: det, modulus: MODULUS });
        }

        Ok(key)
    }

    /// Build a key from entries in row-major order: k00, k01, k10, k11.
    ///
    /// # Errors
    ///
    /// Same as [`KeyMatrix::new`].
    pub fn from_row_major(values: [u8; 4]) -> Result<Self, CipherError> {
        Self::new([[values[0], values[1]], [values[2], values[3]]])
    }

    /// Raw entries.
    pub fn entries(&self) -> &[[u8; 2]; 2] {
        &self.entries
    }

    /// Entries widened for arithmetic.
    pub fn to_matrix(&self) -> Matrix2 {
        self.entries.map(|row| row.map(i64::from))
    }

    /// Determinant, not reduced.
    pub fn determinant(&self) -> i64 {
        modular::determinant(&self.to_matrix())
    }

    /// Inverse of the key modulo 27.
    ///
    /// # Errors
    ///
    /// - `NoModularInverse`: unreachable for a constructed key
    pub fn inverse(&self) -> Result<Matrix2, CipherError> {
        modular::invert_matrix(&self.to_matrix(), MODULUS)
    }
}

impl TryFrom<[u8; 4]> for KeyMatrix {
    type Error = CipherError;

    fn try_from(values: [u8; 4]) -> Result<Self, Self::Error> {
        Self::from_row_major(values)
    }
}

impl fmt::Debug for KeyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMatrix").finish_non_exhaustive()
    }
}

impl Drop for KeyMatrix {
    fn drop(&mut self) {
        self.entries.zeroize();
    }
}
