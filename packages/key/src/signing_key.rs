//! Opaque signing-key handle shared across algorithm instances

use std::fmt;
use std::sync::Arc;

use rand::rngs::OsRng;
use rand::RngCore;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{KeyError, MIN_RSA_BITS};
use crate::family::{EcCurve, KeyFamily};

/// HMAC secret bytes, zeroized on drop.
pub struct HmacSecret {
    bytes: Zeroizing<Vec<u8>>,
}

impl HmacSecret {
    /// Wrap caller-provided secret bytes.
    ///
    /// # Errors
    /// Returns [`KeyError::EmptySecret`] for an empty buffer.
    pub fn new(bytes: Vec<u8>) -> crate::Result<Self> {
        if bytes.is_empty() {
            return Err(KeyError::EmptySecret);
        }
        Ok(Self {
            bytes: Zeroizing::new(bytes),
        })
    }

    /// Generate `len` random secret bytes from the system RNG.
    ///
    /// # Errors
    /// Returns [`KeyError::EmptySecret`] when `len` is zero.
    pub fn generate(len: usize) -> crate::Result<Self> {
        if len == 0 {
            return Err(KeyError::EmptySecret);
        }
        let mut bytes = Zeroizing::new(vec![0u8; len]);
        OsRng.fill_bytes(&mut bytes);
        Ok(Self { bytes })
    }

    /// Secret bytes
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Secret length in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the secret holds no bytes (never, by construction)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for HmacSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HmacSecret({} bytes)", self.bytes.len())
    }
}

/// RSA key pair; the private half is optional for verify-only handles.
pub struct RsaKeyPair {
    private: Option<RsaPrivateKey>,
    public: RsaPublicKey,
}

impl RsaKeyPair {
    pub(crate) fn new(private: Option<RsaPrivateKey>, public: RsaPublicKey) -> Self {
        Self { private, public }
    }

    /// Private key, when the handle carries one
    #[must_use]
    pub fn private(&self) -> Option<&RsaPrivateKey> {
        self.private.as_ref()
    }

    /// Public key; always present
    #[must_use]
    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    /// Modulus size in bits
    #[must_use]
    pub fn bits(&self) -> usize {
        self.public.size() * 8
    }
}

/// ECDSA key pair on one of the supported curves.
///
/// The private half is optional for verify-only handles.
pub enum EcdsaKeyPair {
    /// Key on NIST P-256
    P256 {
        /// Private signing key
        signing: Option<p256::ecdsa::SigningKey>,
        /// Public verifying key
        verifying: p256::ecdsa::VerifyingKey,
    },
    /// Key on NIST P-384
    P384 {
        /// Private signing key
        signing: Option<p384::ecdsa::SigningKey>,
        /// Public verifying key
        verifying: p384::ecdsa::VerifyingKey,
    },
    /// Key on secp256k1
    Secp256k1 {
        /// Private signing key
        signing: Option<k256::ecdsa::SigningKey>,
        /// Public verifying key
        verifying: k256::ecdsa::VerifyingKey,
    },
}

impl EcdsaKeyPair {
    /// Curve the key lives on
    #[must_use]
    pub fn curve(&self) -> EcCurve {
        match self {
            EcdsaKeyPair::P256 { .. } => EcCurve::P256,
            EcdsaKeyPair::P384 { .. } => EcCurve::P384,
            EcdsaKeyPair::Secp256k1 { .. } => EcCurve::Secp256k1,
        }
    }

    /// True when the pair carries a private half
    #[must_use]
    pub fn has_private(&self) -> bool {
        match self {
            EcdsaKeyPair::P256 { signing, .. } => signing.is_some(),
            EcdsaKeyPair::P384 { signing, .. } => signing.is_some(),
            EcdsaKeyPair::Secp256k1 { signing, .. } => signing.is_some(),
        }
    }

    fn public_only(&self) -> Self {
        match self {
            EcdsaKeyPair::P256 { verifying, .. } => EcdsaKeyPair::P256 {
                signing: None,
                verifying: verifying.clone(),
            },
            EcdsaKeyPair::P384 { verifying, .. } => EcdsaKeyPair::P384 {
                signing: None,
                verifying: verifying.clone(),
            },
            EcdsaKeyPair::Secp256k1 { verifying, .. } => EcdsaKeyPair::Secp256k1 {
                signing: None,
                verifying: verifying.clone(),
            },
        }
    }
}

/// Family-specific key material behind a [`SigningKey`] handle.
pub enum KeyMaterial {
    /// Symmetric secret
    Hmac(HmacSecret),
    /// RSA pair
    Rsa(RsaKeyPair),
    /// ECDSA pair
    Ecdsa(EcdsaKeyPair),
}

/// Reference-counted, immutable key handle.
///
/// Cloning is cheap and shares the underlying material, so one generated
/// key can back several algorithm instances at once. Nothing mutates the
/// material after construction, which is what makes concurrent signing
/// and verification over a shared handle sound.
#[derive(Clone)]
pub struct SigningKey {
    material: Arc<KeyMaterial>,
}

impl SigningKey {
    pub(crate) fn from_material(material: KeyMaterial) -> Self {
        Self {
            material: Arc::new(material),
        }
    }

    /// Wrap an HMAC secret.
    ///
    /// # Errors
    /// Returns [`KeyError::EmptySecret`] for an empty buffer.
    pub fn hmac(bytes: impl Into<Vec<u8>>) -> crate::Result<Self> {
        Ok(Self::from_material(KeyMaterial::Hmac(HmacSecret::new(
            bytes.into(),
        )?)))
    }

    /// Generate a random HMAC secret of `len` bytes.
    ///
    /// # Errors
    /// Returns [`KeyError::EmptySecret`] when `len` is zero.
    pub fn generate_hmac(len: usize) -> crate::Result<Self> {
        Ok(Self::from_material(KeyMaterial::Hmac(
            HmacSecret::generate(len)?,
        )))
    }

    /// Generate a fresh RSA key pair.
    ///
    /// # Errors
    /// Returns [`KeyError::WeakKey`] when `bits` is below [`MIN_RSA_BITS`],
    /// or [`KeyError::Generation`] when the backend fails.
    pub fn generate_rsa(bits: usize) -> crate::Result<Self> {
        if bits < MIN_RSA_BITS {
            return Err(KeyError::WeakKey {
                bits,
                min: MIN_RSA_BITS,
            });
        }
        let private =
            RsaPrivateKey::new(&mut OsRng, bits).map_err(|e| KeyError::Generation(e.to_string()))?;
        let public = private.to_public_key();
        debug!(bits, "generated RSA key pair");
        Ok(Self::from_material(KeyMaterial::Rsa(RsaKeyPair::new(
            Some(private),
            public,
        ))))
    }

    /// Generate a fresh ECDSA key pair on `curve`.
    #[must_use]
    pub fn generate_ecdsa(curve: EcCurve) -> Self {
        let pair = match curve {
            EcCurve::P256 => {
                let signing = p256::ecdsa::SigningKey::random(&mut OsRng);
                let verifying = signing.verifying_key().clone();
                EcdsaKeyPair::P256 {
                    signing: Some(signing),
                    verifying,
                }
            }
            EcCurve::P384 => {
                let signing = p384::ecdsa::SigningKey::random(&mut OsRng);
                let verifying = signing.verifying_key().clone();
                EcdsaKeyPair::P384 {
                    signing: Some(signing),
                    verifying,
                }
            }
            EcCurve::Secp256k1 => {
                let signing = k256::ecdsa::SigningKey::random(&mut OsRng);
                let verifying = signing.verifying_key().clone();
                EcdsaKeyPair::Secp256k1 {
                    signing: Some(signing),
                    verifying,
                }
            }
        };
        debug!(curve = %curve, "generated ECDSA key pair");
        Self::from_material(KeyMaterial::Ecdsa(pair))
    }

    /// Verify-only handle over the same public material.
    ///
    /// # Errors
    /// Returns [`KeyError::NoPublicForm`] for HMAC secrets, which have no
    /// public counterpart.
    pub fn public_only(&self) -> crate::Result<Self> {
        match self.material.as_ref() {
            KeyMaterial::Hmac(_) => Err(KeyError::NoPublicForm),
            KeyMaterial::Rsa(pair) => Ok(Self::from_material(KeyMaterial::Rsa(RsaKeyPair::new(
                None,
                pair.public().clone(),
            )))),
            KeyMaterial::Ecdsa(pair) => {
                Ok(Self::from_material(KeyMaterial::Ecdsa(pair.public_only())))
            }
        }
    }

    /// Family this key belongs to
    #[must_use]
    pub fn family(&self) -> KeyFamily {
        match self.material.as_ref() {
            KeyMaterial::Hmac(_) => KeyFamily::Hmac,
            KeyMaterial::Rsa(_) => KeyFamily::Rsa,
            KeyMaterial::Ecdsa(_) => KeyFamily::Ecdsa,
        }
    }

    /// Key size in bits: secret length, modulus size or curve field size
    #[must_use]
    pub fn bits(&self) -> usize {
        match self.material.as_ref() {
            KeyMaterial::Hmac(secret) => secret.len() * 8,
            KeyMaterial::Rsa(pair) => pair.bits(),
            KeyMaterial::Ecdsa(pair) => pair.curve().bits(),
        }
    }

    /// True when the handle can produce signatures.
    ///
    /// HMAC secrets always can; asymmetric handles only when they carry
    /// the private half.
    #[must_use]
    pub fn has_private(&self) -> bool {
        match self.material.as_ref() {
            KeyMaterial::Hmac(_) => true,
            KeyMaterial::Rsa(pair) => pair.private().is_some(),
            KeyMaterial::Ecdsa(pair) => pair.has_private(),
        }
    }

    /// Underlying material, for the signing core
    #[must_use]
    pub fn material(&self) -> &KeyMaterial {
        &self.material
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("family", &self.family())
            .field("bits", &self.bits())
            .field("private", &self.has_private())
            .finish()
    }
}
