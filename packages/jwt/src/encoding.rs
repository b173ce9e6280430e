//! Base64url codec and constant-time comparison

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use subtle::ConstantTimeEq;

/// Encode bytes as base64url without padding.
pub(crate) fn b64_encode(data: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decode base64url text; rejects padding and out-of-alphabet characters.
pub(crate) fn b64_decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(text)
}

/// Constant-time equality for equal-length buffers.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_without_padding() {
        let encoded = b64_encode(b"{\"alg\":\"HS256\"}");
        assert!(!encoded.contains('='));
        assert_eq!(b64_decode(&encoded).unwrap(), b"{\"alg\":\"HS256\"}");
    }

    #[test]
    fn rejects_padded_input() {
        assert!(b64_decode("YWJj=").is_err());
    }

    #[test]
    fn rejects_non_alphabet_input() {
        assert!(b64_decode("a+b/c").is_err());
    }

    #[test]
    fn compares_in_constant_time() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
    }
}
