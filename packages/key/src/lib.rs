//! # Sigil Key
//!
//! Key material handling for the sigil token engine.
//!
//! This crate owns everything about keys so the signing core does not have
//! to: generation, PEM loading (with optional passphrase callbacks for
//! encrypted private keys) and the opaque [`SigningKey`] handle that the
//! JWS layer consumes. A handle knows its [`KeyFamily`], its size in bits
//! and whether it carries private material; it never exposes mutable
//! access to the underlying bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use sigil_key::{EcCurve, SigningKey};
//!
//! # fn main() -> Result<(), sigil_key::KeyError> {
//! let rsa = SigningKey::generate_rsa(2048)?;
//! let verify_only = rsa.public_only()?;
//! assert!(!verify_only.has_private());
//!
//! let ec = SigningKey::generate_ecdsa(EcCurve::Secp256k1);
//! assert_eq!(ec.bits(), 256);
//! # Ok(())
//! # }
//! ```

mod error;
mod family;
mod pem;
mod signing_key;

pub use error::{KeyError, MIN_RSA_BITS};
pub use family::{EcCurve, KeyFamily};
pub use signing_key::{EcdsaKeyPair, HmacSecret, KeyMaterial, RsaKeyPair, SigningKey};

/// Key operation result type
pub type Result<T> = std::result::Result<T, KeyError>;
