//! HMAC-SHA-2 signing and verification (HS256, HS384, HS512)

use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use sigil_key::HmacSecret;

use crate::alg::Alg;
use crate::encoding::constant_time_eq;
use crate::error::{JwtError, JwtResult};

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

pub(crate) fn sign(secret: &HmacSecret, alg: Alg, message: &[u8]) -> JwtResult<Vec<u8>> {
    match alg.digest_bits() {
        256 => sign_hs256(secret.as_bytes(), message),
        384 => sign_hs384(secret.as_bytes(), message),
        _ => sign_hs512(secret.as_bytes(), message),
    }
}

/// Recomputes the keyed digest and compares in constant time.
pub(crate) fn verify(
    secret: &HmacSecret,
    alg: Alg,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    let expected = sign(secret, alg, message)?;
    if signature.len() != expected.len() {
        return Err(JwtError::InvalidSignatureEncoding(format!(
            "{} signature must be {} bytes, got {}",
            alg,
            expected.len(),
            signature.len()
        )));
    }
    Ok(constant_time_eq(signature, &expected))
}

fn sign_hs256(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| JwtError::Crypto(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs384(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha384::new_from_slice(secret)
        .map_err(|e| JwtError::Crypto(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

fn sign_hs512(secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
    let mut mac = HmacSha512::new_from_slice(secret)
        .map_err(|e| JwtError::Crypto(format!("HMAC key rejected: {e}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}
