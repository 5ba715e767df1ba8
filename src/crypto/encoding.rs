//! Base64 text form of a munge key.
//!
//! Keys travel between nodes as a single standard base64 token (RFC 4648
//! alphabet, `=` padding) with no header or checksum.

use crate::crypto::key::MungeKey;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode a munge key as a padded standard base64 string.
///
/// # Example
///
/// ```
/// use mungectl::crypto::encoding::encode_key;
/// use mungectl::crypto::key::MungeKey;
///
/// let key = MungeKey::from_bytes(b"we be testing".to_vec());
/// assert_eq!(encode_key(&key), "d2UgYmUgdGVzdGluZw==");
/// ```
pub fn encode_key(key: &MungeKey) -> String {
    STANDARD.encode(key.as_bytes())
}

/// Decode a munge key from a base64 string.
///
/// Surrounding whitespace is trimmed before decoding. Any other deviation
/// from padded standard base64 fails with
/// [`MungeError::FormatError`](crate::error::MungeError::FormatError).
///
/// # Example
///
/// ```
/// use mungectl::crypto::encoding::decode_key;
///
/// let key = decode_key("  d2UgYmUgdGVzdGluZw==\n").unwrap();
/// assert_eq!(key.as_bytes(), b"we be testing");
/// ```
pub fn decode_key(text: &str) -> Result<MungeKey> {
    let bytes = STANDARD.decode(text.trim())?;
    Ok(MungeKey::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MungeError;
    use proptest::prelude::*;

    const SECRET: &[u8] = b"we be testing";
    const SECRET_BASE64: &str = "d2UgYmUgdGVzdGluZw==";

    #[test]
    fn test_encode_known_value() {
        let key = MungeKey::from_bytes(SECRET.to_vec());
        assert_eq!(encode_key(&key), SECRET_BASE64);
    }

    #[test]
    fn test_encode_empty_key() {
        let key = MungeKey::from_bytes(Vec::new());
        assert_eq!(encode_key(&key), "");
    }

    #[test]
    fn test_decode_known_value() {
        let key = decode_key(SECRET_BASE64).unwrap();
        assert_eq!(key.as_bytes(), SECRET);
    }

    #[test]
    fn test_decode_trims_whitespace() {
        let key = decode_key("\n\t d2UgYmUgdGVzdGluZw== \r\n").unwrap();
        assert_eq!(key.as_bytes(), SECRET);
    }

    #[test]
    fn test_decode_invalid_alphabet() {
        let result = decode_key("not-valid-base64!!");

        match result {
            Err(MungeError::FormatError(_)) => {}
            _ => panic!("Expected FormatError"),
        }
    }

    #[test]
    fn test_decode_missing_padding() {
        assert!(matches!(
            decode_key("d2UgYmUgdGVzdGluZw"),
            Err(MungeError::FormatError(_))
        ));
    }

    #[test]
    fn test_decode_truncated_group() {
        assert!(matches!(
            decode_key("d2UgY"),
            Err(MungeError::FormatError(_))
        ));
    }

    #[test]
    fn test_decode_url_safe_alphabet_rejected() {
        // 0xfb 0xff encodes to "+/8=" in the standard alphabet
        assert!(matches!(decode_key("-_8="), Err(MungeError::FormatError(_))));
        assert_eq!(decode_key("+/8=").unwrap().as_bytes(), &[0xfb, 0xff]);
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let key = MungeKey::from_bytes(bytes.clone());
            let decoded = decode_key(&encode_key(&key)).unwrap();
            prop_assert_eq!(decoded.as_bytes(), bytes.as_slice());
        }

        #[test]
        fn prop_encode_inverts_decode_after_trim(
            bytes in proptest::collection::vec(any::<u8>(), 0..512),
            lead in "[ \t\r\n]{0,3}",
            trail in "[ \t\r\n]{0,3}",
        ) {
            let canonical = STANDARD.encode(&bytes);
            let text = format!("{lead}{canonical}{trail}");
            let key = decode_key(&text).unwrap();
            prop_assert_eq!(encode_key(&key), text.trim());
        }
    }
}
