//! JWS algorithm identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sigil_key::KeyFamily;

use crate::error::JwtError;

/// Supported JWA signature algorithm identifiers.
///
/// Each identifier carries its key family and digest strength; the set is
/// closed, so unknown identifiers are rejected at parse time rather than
/// dispatched dynamically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum Alg {
    /// HMAC with SHA-256
    HS256,
    /// HMAC with SHA-384
    HS384,
    /// HMAC with SHA-512
    HS512,
    /// RSA PKCS#1 v1.5 with SHA-256
    RS256,
    /// RSA PKCS#1 v1.5 with SHA-384
    RS384,
    /// RSA PKCS#1 v1.5 with SHA-512
    RS512,
    /// ECDSA with SHA-256
    ES256,
    /// ECDSA with SHA-384
    ES384,
    /// ECDSA with SHA-512
    ES512,
}

impl Alg {
    /// All nine supported identifiers
    pub const ALL: [Alg; 9] = [
        Alg::HS256,
        Alg::HS384,
        Alg::HS512,
        Alg::RS256,
        Alg::RS384,
        Alg::RS512,
        Alg::ES256,
        Alg::ES384,
        Alg::ES512,
    ];

    /// Key family this identifier requires
    #[must_use]
    pub const fn family(self) -> KeyFamily {
        match self {
            Alg::HS256 | Alg::HS384 | Alg::HS512 => KeyFamily::Hmac,
            Alg::RS256 | Alg::RS384 | Alg::RS512 => KeyFamily::Rsa,
            Alg::ES256 | Alg::ES384 | Alg::ES512 => KeyFamily::Ecdsa,
        }
    }

    /// Digest strength in bits
    #[must_use]
    pub const fn digest_bits(self) -> usize {
        match self {
            Alg::HS256 | Alg::RS256 | Alg::ES256 => 256,
            Alg::HS384 | Alg::RS384 | Alg::ES384 => 384,
            Alg::HS512 | Alg::RS512 | Alg::ES512 => 512,
        }
    }

    /// RFC 7518 identifier string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Alg::HS256 => "HS256",
            Alg::HS384 => "HS384",
            Alg::HS512 => "HS512",
            Alg::RS256 => "RS256",
            Alg::RS384 => "RS384",
            Alg::RS512 => "RS512",
            Alg::ES256 => "ES256",
            Alg::ES384 => "ES384",
            Alg::ES512 => "ES512",
        }
    }
}

impl fmt::Display for Alg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Alg {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alg::ALL
            .into_iter()
            .find(|alg| alg.as_str() == s)
            .ok_or_else(|| JwtError::MalformedToken(format!("unrecognized algorithm {s:?}")))
    }
}
