//! JWT error types

use sigil_key::{KeyError, KeyFamily};
use thiserror::Error;

use crate::alg::Alg;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
///
/// Cryptographic non-match is deliberately absent: a signature that fails
/// to verify and a predicate that rejects the claims are expected inputs
/// and come back as `Ok(false)` from verification, never as an error.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Key family does not match the requested algorithm family
    #[error("{key} key cannot back algorithm {requested}")]
    AlgorithmMismatch {
        /// Family of the offered key
        key: KeyFamily,
        /// Algorithm the caller asked for
        requested: Alg,
    },

    /// Key is below the family minimum for the algorithm
    #[error("key is too weak: {bits} bits, minimum is {min}")]
    WeakKey {
        /// Size of the bound key in bits
        bits: usize,
        /// Minimum size accepted, in bits
        min: usize,
    },

    /// Signing attempted with verify-only key material
    #[error("signing requires private key material")]
    SigningNotPermitted,

    /// Signature buffer cannot structurally belong to the family
    #[error("invalid signature encoding: {0}")]
    InvalidSignatureEncoding(String),

    /// Token text is not a well-formed compact JWS
    #[error("malformed token: {0}")]
    MalformedToken(String),

    /// Bearer prefix required but missing or malformed
    #[error("authorization value is not a bearer token")]
    InvalidBearerFormat,

    /// Claims payload is not a JSON object
    #[error("malformed claims: {0}")]
    MalformedClaims(String),

    /// Token declares a different algorithm than the verifier enforces
    #[error("token declares {token}, verifier enforces {verifier}")]
    AlgorithmFamilyMismatch {
        /// Identifier from the token header
        token: Alg,
        /// Identifier the verifying algorithm is bound to
        verifier: Alg,
    },

    /// JSON serialization failed
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// Cryptographic backend failure
    #[error("crypto backend failure: {0}")]
    Crypto(String),

    /// Key handling failed
    #[error(transparent)]
    Key(#[from] KeyError),
}
