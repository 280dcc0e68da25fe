//! Fuzz target for the Hill cipher engine
//!
//! Tests key acceptance, encryption and decryption under adversarial inputs.
//!
//! # Strategy
//!
//! - Arbitrary key entries (including out-of-range and singular keys)
//! - Arbitrary text (including symbols outside the alphabet)
//! - Arbitrary ciphertext fed straight to decrypt (odd lengths, bad symbols)
//!
//! # Invariants
//!
//! - Nothing panics; invalid input returns an error
//! - A key is accepted iff its entries are in range and `validate_key` holds
//! - Sanitized text round-trips, with one trailing space for odd lengths
//! - Decrypt never reports an internal error for an accepted key

#![no_main]

use arbitrary::Arbitrary;
use hill_crypto::{CipherError, KeyMatrix, alphabet, decrypt, encrypt, validate_key};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
struct CipherScenario {
    /// Key entries in row-major order
    key: [u8; 4],
    /// Text to encrypt (sanitized before use)
    text: String,
    /// Text handed to decrypt as-is
    raw_ciphertext: String,
}

fuzz_target!(|scenario: CipherScenario| {
    let [k00, k01, k10, k11] = scenario.key.map(i64::from);
    let in_range = scenario.key.iter().all(|&entry| entry < 27);
    let expected_valid = in_range && validate_key(&[[k00, k01], [k10, k11]]);

    let key = match KeyMatrix::from_row_major(scenario.key) {
        Ok(key) => {
            assert!(expected_valid, "accepted a key validate_key rejects");
            key
        },
        Err(err) => {
            assert!(!expected_valid, "rejected a valid key: {err}");
            assert!(err.is_key_error());
            return;
        },
    };

    // Round-trip over sanitized text
    let text: String = scenario
        .text
        .to_lowercase()
        .chars()
        .filter(|&c| alphabet::is_symbol(c))
        .collect();

    let ciphertext = encrypt(&text, &key).expect("sanitized text must encrypt");
    assert_eq!(ciphertext.len() % 2, 0);

    let plaintext = decrypt(&ciphertext, &key).expect("ciphertext must decrypt");
    if text.len() % 2 == 0 {
        assert_eq!(plaintext, text);
    } else {
        assert_eq!(plaintext, format!("{text} "));
    }

    // Raw input must fail cleanly, never with an engine bug
    match decrypt(&scenario.raw_ciphertext, &key) {
        Ok(output) => assert_eq!(output.chars().count(), scenario.raw_ciphertext.chars().count()),
        Err(err) => {
            assert!(!err.is_internal(), "internal error on raw input: {err}");
            assert!(matches!(
                err,
                CipherError::InvalidInputLength { .. } | CipherError::InvalidSymbol { .. }
            ));
        },
    }
});
