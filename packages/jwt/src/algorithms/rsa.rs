//! RSA PKCS#1 v1.5 signing and verification (RS256, RS384, RS512)

use rsa::pkcs1v15::{Signature, SigningKey, VerifyingKey};
use rsa::sha2::{Sha256, Sha384, Sha512};
use rsa::signature::{SignatureEncoding, Signer, Verifier};
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;
use sigil_key::RsaKeyPair;

use crate::alg::Alg;
use crate::error::{JwtError, JwtResult};

pub(crate) fn sign(pair: &RsaKeyPair, alg: Alg, message: &[u8]) -> JwtResult<Vec<u8>> {
    let private = pair.private().ok_or(JwtError::SigningNotPermitted)?;
    match alg.digest_bits() {
        256 => sign_rs256(private, message),
        384 => sign_rs384(private, message),
        _ => sign_rs512(private, message),
    }
}

/// A signature must be exactly one modulus wide; anything else is a
/// structural defect rather than a failed check.
pub(crate) fn verify(
    pair: &RsaKeyPair,
    alg: Alg,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    let modulus = pair.public().size();
    if signature.len() != modulus {
        return Err(JwtError::InvalidSignatureEncoding(format!(
            "{alg} signature must be {modulus} bytes, got {}",
            signature.len()
        )));
    }
    let signature = Signature::try_from(signature)
        .map_err(|e| JwtError::InvalidSignatureEncoding(e.to_string()))?;
    let public = pair.public().clone();
    let verified = match alg.digest_bits() {
        256 => VerifyingKey::<Sha256>::new(public)
            .verify(message, &signature)
            .is_ok(),
        384 => VerifyingKey::<Sha384>::new(public)
            .verify(message, &signature)
            .is_ok(),
        _ => VerifyingKey::<Sha512>::new(public)
            .verify(message, &signature)
            .is_ok(),
    };
    Ok(verified)
}

fn sign_rs256(private: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(private.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::Crypto(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

fn sign_rs384(private: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha384>::new(private.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::Crypto(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}

fn sign_rs512(private: &RsaPrivateKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    let signing_key = SigningKey::<Sha512>::new(private.clone());
    let signature = signing_key
        .try_sign(message)
        .map_err(|e| JwtError::Crypto(e.to_string()))?;
    Ok(signature.to_bytes().as_ref().to_vec())
}
