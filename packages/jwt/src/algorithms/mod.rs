//! Algorithm binding and per-family signing/verification

mod ecdsa;
mod hmac;
mod rsa;

use sigil_key::{KeyMaterial, SigningKey, MIN_RSA_BITS};
use tracing::trace;

use crate::alg::Alg;
use crate::error::{JwtError, JwtResult};

/// A [`SigningKey`] bound to one JWS algorithm identifier.
///
/// The binding is pure and checked once: construction fails when the key
/// family does not match the identifier's family, or when the key is
/// below the family minimum. After that the instance is immutable and
/// safe to share across threads for both signing and verification.
///
/// An instance built from private material signs and verifies; one built
/// from public material only verifies.
pub struct Algorithm {
    key: SigningKey,
    alg: Alg,
}

impl Algorithm {
    /// Bind `key` to `alg`.
    ///
    /// # Errors
    /// Returns [`JwtError::AlgorithmMismatch`] when the key family differs
    /// from the algorithm family, or [`JwtError::WeakKey`] when the key is
    /// undersized: RSA moduli below 1024 bits, HMAC secrets shorter than
    /// the digest output.
    pub fn new(key: SigningKey, alg: Alg) -> JwtResult<Self> {
        if key.family() != alg.family() {
            return Err(JwtError::AlgorithmMismatch {
                key: key.family(),
                requested: alg,
            });
        }
        match key.material() {
            KeyMaterial::Hmac(secret) => {
                let min = alg.digest_bits();
                if secret.len() * 8 < min {
                    return Err(JwtError::WeakKey {
                        bits: secret.len() * 8,
                        min,
                    });
                }
            }
            KeyMaterial::Rsa(pair) => {
                if pair.bits() < MIN_RSA_BITS {
                    return Err(JwtError::WeakKey {
                        bits: pair.bits(),
                        min: MIN_RSA_BITS,
                    });
                }
            }
            // Any supported curve may back any ES identifier; the curve
            // belongs to the key, the digest to the identifier.
            KeyMaterial::Ecdsa(_) => {}
        }
        Ok(Self { key, alg })
    }

    /// Bound identifier
    #[must_use]
    pub fn alg(&self) -> Alg {
        self.alg
    }

    /// Bound key handle
    #[must_use]
    pub fn key(&self) -> &SigningKey {
        &self.key
    }

    /// True when the bound key can produce signatures
    #[must_use]
    pub fn can_sign(&self) -> bool {
        self.key.has_private()
    }

    /// Sign `message`, returning raw signature bytes.
    ///
    /// # Errors
    /// Returns [`JwtError::SigningNotPermitted`] when the bound key lacks
    /// private material.
    pub fn sign(&self, message: &[u8]) -> JwtResult<Vec<u8>> {
        trace!(alg = %self.alg, len = message.len(), "signing message");
        match self.key.material() {
            KeyMaterial::Hmac(secret) => hmac::sign(secret, self.alg, message),
            KeyMaterial::Rsa(pair) => rsa::sign(pair, self.alg, message),
            KeyMaterial::Ecdsa(pair) => ecdsa::sign(pair, self.alg, message),
        }
    }

    /// Verify `signature` over `message`.
    ///
    /// Returns `Ok(false)` on a cryptographic mismatch. A buffer that
    /// cannot structurally belong to the family (wrong length, scalar out
    /// of range) is [`JwtError::InvalidSignatureEncoding`] instead, so
    /// wire corruption stays distinguishable from a failed check.
    ///
    /// # Errors
    /// See above; never errs for a structurally well-formed signature.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> JwtResult<bool> {
        trace!(alg = %self.alg, len = message.len(), "verifying message");
        match self.key.material() {
            KeyMaterial::Hmac(secret) => hmac::verify(secret, self.alg, message, signature),
            KeyMaterial::Rsa(pair) => rsa::verify(pair, self.alg, message, signature),
            KeyMaterial::Ecdsa(pair) => ecdsa::verify(pair, self.alg, message, signature),
        }
    }
}
