//! Input normalization.

use hill_crypto::{MODULUS, alphabet};

use crate::error::ShellError;

/// Lowercase `line` and drop every character outside the alphabet.
pub fn sanitize(line: &str) -> String {
    line.to_lowercase().chars().filter(|&c| alphabet::is_symbol(c)).collect()
}

/// Parse one whitespace-delimited key token.
pub fn parse_key_token(token: &str) -> Result<i64, ShellError> {
    token.parse().map_err(|_| ShellError::InvalidKeyEntry { token: token.to_string() })
}

/// Narrow a key entry to the accepted range [0, 26].
pub fn key_entry(value: i64) -> Option<u8> {
    u8::try_from(value).ok().filter(|&entry| i64::from(entry) < MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_lowercases_and_strips() {
        assert_eq!(sanitize("Hello, World!"), "hello world");
        assert_eq!(sanitize("R2-D2 & C-3PO"), "rd  cpo");
        assert_eq!(sanitize("\ttabs\nand newlines\r"), "tabsand newlines");
    }

    #[test]
    fn sanitize_drops_non_ascii_letters() {
        assert_eq!(sanitize("café"), "caf");
        assert_eq!(sanitize("ÀB"), "b");
    }

    #[test]
    fn sanitize_keeps_clean_text() {
        assert_eq!(sanitize("attack at dawn"), "attack at dawn");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn parse_key_tokens() {
        assert_eq!(parse_key_token("17").unwrap(), 17);
        assert_eq!(parse_key_token("-1").unwrap(), -1);
        assert!(matches!(
            parse_key_token("x"),
            Err(ShellError::InvalidKeyEntry { token }) if token == "x"
        ));
    }

    #[test]
    fn key_entry_range() {
        assert_eq!(key_entry(0), Some(0));
        assert_eq!(key_entry(26), Some(26));
        assert_eq!(key_entry(27), None);
        assert_eq!(key_entry(-1), None);
        assert_eq!(key_entry(i64::MAX), None);
    }
}
