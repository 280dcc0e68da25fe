//! Modular linear algebra over Z_m for 2x2 matrices.
//!
//! All functions are pure. Results are always reduced into [0, m) except
//! [`determinant`], which returns the raw value so callers can see its sign.

use crate::error::CipherError;

/// A 2x2 integer matrix in row-major order.
pub type Matrix2 = [[i64; 2]; 2];

/// Reduce `value` to its non-negative residue modulo `modulus`.
///
/// Rust's `%` keeps the sign of the dividend, so the modulus is added back
/// before the second reduction.
#[inline]
pub fn reduce(value: i64, modulus: i64) -> i64 {
    ((value % modulus) + modulus) % modulus
}

/// Determinant of a 2x2 matrix, without reduction.
///
/// Entries must be small enough that both products fit in `i64`, which holds
/// for residues of any modulus below 2^31. Reduce larger entries first;
/// [`invert_matrix`] and [`apply`] do so themselves.
#[inline]
pub fn determinant(matrix: &Matrix2) -> i64 {
    matrix[0][0] * matrix[1][1] - matrix[0][1] * matrix[1][0]
}

/// Greatest common divisor (Euclidean algorithm). Always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

/// Smallest `x` in [1, modulus - 1] with `a * x ≡ 1 (mod modulus)`.
///
/// The search is exhaustive and ascending, so the result is deterministic
/// even for moduli where it is unique anyway.
///
/// # Errors
///
/// - `NoModularInverse`: `gcd(a, modulus) != 1`
pub fn mod_inverse(a: i64, modulus: i64) -> Result<i64, CipherError> {
    let a = if modulus > 0 { reduce(a, modulus) } else { a };

    (1..modulus)
        .find(|&x| (i128::from(a) * i128::from(x)) % i128::from(modulus) == 1)
        .ok_or(CipherError::NoModularInverse { value: a, modulus })
}

/// Inverse of a 2x2 matrix modulo `modulus`.
///
/// Computes the adjugate (diagonal swapped, off-diagonal negated), scales it
/// by the inverse of the reduced determinant, and reduces every entry.
///
/// # Errors
///
/// - `NoModularInverse`: the determinant is not invertible modulo `modulus`,
///   or `modulus` is not positive
pub fn invert_matrix(matrix: &Matrix2, modulus: i64) -> Result<Matrix2, CipherError> {
    if modulus <= 0 {
        return Err(CipherError::NoModularInverse { value: 0, modulus });
    }

    let m = reduce_entries(matrix, modulus).map(|row| row.map(i128::from));
    let wide_modulus = i128::from(modulus);

    let det = (m[0][0] * m[1][1] - m[0][1] * m[1][0]).rem_euclid(wide_modulus) as i64;
    let det_inv = i128::from(mod_inverse(det, modulus)?);

    let adjugate = [[m[1][1], -m[0][1]], [-m[1][0], m[0][0]]];

    let mut inverse = [[0i64; 2]; 2];
    for row in 0..2 {
        for col in 0..2 {
            inverse[row][col] = (adjugate[row][col] * det_inv).rem_euclid(wide_modulus) as i64;
        }
    }

    tracing::trace!(modulus, "inverted key matrix");

    Ok(inverse)
}

/// Product `matrix * [v0, v1]^T`, reduced modulo `modulus`.
///
/// Entries and vector components are reduced first and the products are
/// widened, so any `i64` input is accepted. `modulus` must be positive.
#[inline]
pub fn apply(matrix: &Matrix2, vector: [i64; 2], modulus: i64) -> [i64; 2] {
    let m = reduce_entries(matrix, modulus).map(|row| row.map(i128::from));
    let v = vector.map(|value| i128::from(reduce(value, modulus)));
    let wide_modulus = i128::from(modulus);

    [
        ((m[0][0] * v[0] + m[0][1] * v[1]) % wide_modulus) as i64,
        ((m[1][0] * v[0] + m[1][1] * v[1]) % wide_modulus) as i64,
    ]
}

fn reduce_entries(matrix: &Matrix2, modulus: i64) -> Matrix2 {
    matrix.map(|row| row.map(|entry| reduce(entry, modulus)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const M: i64 = 27;

    #[test]
    fn reduce_handles_negative_values() {
        assert_eq!(reduce(-121, M), 14);
        assert_eq!(reduce(-27, M), 0);
        assert_eq!(reduce(-1, M), 26);
        assert_eq!(reduce(55, M), 1);
    }

    #[test]
    fn determinant_is_unreduced() {
        assert_eq!(determinant(&[[5, 8], [17, 3]]), -121);
        assert_eq!(determinant(&[[3, 3], [2, 5]]), 9);
        assert_eq!(determinant(&[[1, 0], [0, 1]]), 1);
    }

    #[test]
    fn gcd_basics() {
        assert_eq!(gcd(14, 27), 1);
        assert_eq!(gcd(9, 27), 9);
        assert_eq!(gcd(0, 27), 27);
        assert_eq!(gcd(27, 0), 27);
        assert_eq!(gcd(-12, 18), 6);
    }

    #[test]
    fn mod_inverse_of_units() {
        assert_eq!(mod_inverse(14, M), Ok(2));
        assert_eq!(mod_inverse(1, M), Ok(1));
        assert_eq!(mod_inverse(26, M), Ok(26));
        assert_eq!(mod_inverse(11, M), Ok(5));
    }

    #[test]
    fn mod_inverse_reduces_input_first() {
        assert_eq!(mod_inverse(-13, M), Ok(2));
        assert_eq!(mod_inverse(41, M), Ok(2));
    }

    #[test]
    fn mod_inverse_of_every_unit_checks_out() {
        for a in 1..M {
            match mod_inverse(a, M) {
                Ok(x) => {
                    assert_eq!(gcd(a, M), 1);
                    assert_eq!((a * x) % M, 1);
                    assert!((1..M).contains(&x));
                },
                Err(err) => {
                    assert_eq!(a % 3, 0);
                    assert_eq!(err, CipherError::NoModularInverse { value: a, modulus: M });
                },
            }
        }
    }

    #[test]
    fn mod_inverse_of_zero_fails() {
        assert_eq!(mod_inverse(0, M), Err(CipherError::NoModularInverse { value: 0, modulus: M }));
    }

    #[test]
    fn invert_known_matrix() {
        let inverse = invert_matrix(&[[5, 8], [17, 3]], M).unwrap();
        assert_eq!(inverse, [[6, 11], [20, 10]]);
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let key = [[3, 2], [5, 7]];
        let inverse = invert_matrix(&key, M).unwrap();

        let mut product = [[0i64; 2]; 2];
        for row in 0..2 {
            for col in 0..2 {
                product[row][col] =
                    reduce(inverse[row][0] * key[0][col] + inverse[row][1] * key[1][col], M);
            }
        }

        assert_eq!(product, [[1, 0], [0, 1]]);
    }

    #[test]
    fn invert_singular_matrix_fails() {
        let err = invert_matrix(&[[3, 3], [2, 5]], M).unwrap_err();
        assert_eq!(err, CipherError::NoModularInverse { value: 9, modulus: M });
    }

    #[test]
    fn invert_with_non_positive_modulus_fails() {
        for modulus in [0, -27] {
            let err = invert_matrix(&[[5, 8], [17, 3]], modulus).unwrap_err();
            assert_eq!(err, CipherError::NoModularInverse { value: 0, modulus });
        }
    }

    #[test]
    fn invert_large_entries_matches_residues() {
        // i64::MAX ≡ 25 (mod 27), i64::MIN ≡ 1 (mod 27)
        let large = [[i64::MAX, 2], [3, i64::MIN]];
        let residues = [[25, 2], [3, 1]];

        assert_eq!(invert_matrix(&large, M), invert_matrix(&residues, M));
        assert!(invert_matrix(&residues, M).is_ok());
    }

    #[test]
    fn apply_large_entries_matches_residues() {
        let large = [[i64::MAX, 2], [3, i64::MIN]];
        let residues = [[25, 2], [3, 1]];

        assert_eq!(apply(&large, [i64::MAX, -1], M), apply(&residues, [25, 26], M));
    }

    #[test]
    fn apply_multiplies_and_reduces() {
        // "he" = [8, 5] under [[5, 8], [17, 3]] -> [80, 151] -> [26, 16]
        assert_eq!(apply(&[[5, 8], [17, 3]], [8, 5], M), [26, 16]);
    }
}
