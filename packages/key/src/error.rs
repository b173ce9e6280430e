//! Error handling for key generation and loading

use thiserror::Error;

/// Smallest RSA modulus accepted for generation or signing use.
pub const MIN_RSA_BITS: usize = 1024;

/// Key-specific errors
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key size is below the family minimum
    #[error("key is too weak: {bits} bits, minimum is {min}")]
    WeakKey {
        /// Size of the offered key in bits
        bits: usize,
        /// Minimum size accepted for the family, in bits
        min: usize,
    },

    /// HMAC secret must not be empty
    #[error("HMAC secret must not be empty")]
    EmptySecret,

    /// Key generation failed in the crypto backend
    #[error("key generation failed: {0}")]
    Generation(String),

    /// Key material could not be decoded
    #[error("invalid key format: {0}")]
    InvalidKeyFormat(String),

    /// Encrypted private key requires a passphrase
    #[error("private key is encrypted and requires a passphrase")]
    PassphraseRequired,

    /// Encrypted private key could not be decrypted
    #[error("private key decryption failed: {0}")]
    DecryptionFailed(String),

    /// Symmetric secrets have no public counterpart
    #[error("key family has no public form")]
    NoPublicForm,

    /// I/O operation failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
