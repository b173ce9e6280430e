//! Key family and curve identifiers

use std::fmt;

/// Cryptographic family a key belongs to.
///
/// A signing algorithm only accepts keys of its own family; the binding is
/// checked once, at algorithm construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// Symmetric keyed-digest secret
    Hmac,
    /// RSA key pair
    Rsa,
    /// ECDSA key pair
    Ecdsa,
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            KeyFamily::Hmac => "HMAC",
            KeyFamily::Rsa => "RSA",
            KeyFamily::Ecdsa => "ECDSA",
        };
        f.write_str(name)
    }
}

/// Elliptic curve backing an ECDSA key.
///
/// The curve is a property of the key, not of the algorithm identifier:
/// an `ES256` token may well be signed over secp256k1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurve {
    /// NIST P-256
    P256,
    /// NIST P-384
    P384,
    /// secp256k1
    Secp256k1,
}

impl EcCurve {
    /// Field size of the curve in bits
    #[must_use]
    pub const fn bits(self) -> usize {
        match self {
            EcCurve::P256 | EcCurve::Secp256k1 => 256,
            EcCurve::P384 => 384,
        }
    }

    /// Canonical curve name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EcCurve::P256 => "P-256",
            EcCurve::P384 => "P-384",
            EcCurve::Secp256k1 => "secp256k1",
        }
    }
}

impl fmt::Display for EcCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
