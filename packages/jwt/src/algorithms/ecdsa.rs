//! ECDSA signing and verification (ES256, ES384, ES512)
//!
//! The identifier picks the digest; the curve comes from the key. The
//! message is hashed first and the prehash handed to the curve backend,
//! which truncates or pads it to the scalar field per SEC1. Signatures
//! travel in the fixed-width `r || s` encoding JWS mandates.

use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use sha2::{Digest, Sha256, Sha384, Sha512};
use sigil_key::EcdsaKeyPair;

use crate::alg::Alg;
use crate::error::{JwtError, JwtResult};

fn prehash(alg: Alg, message: &[u8]) -> Vec<u8> {
    match alg.digest_bits() {
        256 => Sha256::digest(message).to_vec(),
        384 => Sha384::digest(message).to_vec(),
        _ => Sha512::digest(message).to_vec(),
    }
}

pub(crate) fn sign(pair: &EcdsaKeyPair, alg: Alg, message: &[u8]) -> JwtResult<Vec<u8>> {
    let digest = prehash(alg, message);
    let crypto = |e: p256::ecdsa::Error| JwtError::Crypto(e.to_string());
    match pair {
        EcdsaKeyPair::P256 { signing, .. } => {
            let signing = signing.as_ref().ok_or(JwtError::SigningNotPermitted)?;
            let signature: p256::ecdsa::Signature = signing.sign_prehash(&digest).map_err(crypto)?;
            Ok(signature.to_bytes().to_vec())
        }
        EcdsaKeyPair::P384 { signing, .. } => {
            let signing = signing.as_ref().ok_or(JwtError::SigningNotPermitted)?;
            let signature: p384::ecdsa::Signature = signing.sign_prehash(&digest).map_err(crypto)?;
            Ok(signature.to_bytes().to_vec())
        }
        EcdsaKeyPair::Secp256k1 { signing, .. } => {
            let signing = signing.as_ref().ok_or(JwtError::SigningNotPermitted)?;
            let signature: k256::ecdsa::Signature = signing.sign_prehash(&digest).map_err(crypto)?;
            Ok(signature.to_bytes().to_vec())
        }
    }
}

pub(crate) fn verify(
    pair: &EcdsaKeyPair,
    alg: Alg,
    message: &[u8],
    signature: &[u8],
) -> JwtResult<bool> {
    let digest = prehash(alg, message);
    let encoding = |e: p256::ecdsa::Error| JwtError::InvalidSignatureEncoding(e.to_string());
    match pair {
        EcdsaKeyPair::P256 { verifying, .. } => {
            let signature = p256::ecdsa::Signature::from_slice(signature).map_err(encoding)?;
            Ok(verifying.verify_prehash(&digest, &signature).is_ok())
        }
        EcdsaKeyPair::P384 { verifying, .. } => {
            let signature = p384::ecdsa::Signature::from_slice(signature).map_err(encoding)?;
            Ok(verifying.verify_prehash(&digest, &signature).is_ok())
        }
        EcdsaKeyPair::Secp256k1 { verifying, .. } => {
            let signature = k256::ecdsa::Signature::from_slice(signature).map_err(encoding)?;
            Ok(verifying.verify_prehash(&digest, &signature).is_ok())
        }
    }
}
