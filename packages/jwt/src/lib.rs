//! # Sigil JWT
//!
//! Compact JWS (RFC 7515) signing, parsing and verification for JSON Web
//! Tokens, over the nine JWA signature identifiers HS256/384/512,
//! RS256/384/512 and ES256/384/512.
//!
//! The engine is synchronous and stateless: every operation works on the
//! data passed in and returns a fresh result. An [`Algorithm`] binds a
//! [`key::SigningKey`] to one identifier at construction, where the
//! key/algorithm family pairing is enforced once; [`Jws`] produces and
//! consumes `header.payload.signature` strings. At verification the
//! token's declared identifier must match the verifier's exactly, so a
//! token can never be accepted by an algorithm its issuer did not intend
//! (algorithm confusion).
//!
//! ## Quick Start
//!
//! ```rust
//! use sigil_jwt::{Alg, Algorithm, Claims, Jws};
//! use sigil_jwt::key::SigningKey;
//!
//! # fn main() -> sigil_jwt::JwtResult<()> {
//! let key = SigningKey::generate_hmac(32)?;
//! let hs256 = Algorithm::new(key, Alg::HS256)?;
//!
//! let mut claims = Claims::new();
//! claims.set_issuer("issuer.example");
//!
//! let token = Jws::sign(&claims, &hs256)?;
//! let parsed = Jws::parse(&token, false)?;
//! assert!(parsed.verify_with(&hs256, |c| c.check().iss("issuer.example"))?);
//! # Ok(())
//! # }
//! ```

mod alg;
mod algorithms;
mod claims;
mod encoding;
mod error;
mod jws;

pub use alg::Alg;
pub use algorithms::Algorithm;
pub use claims::{Claims, ClaimsChecker};
pub use error::{JwtError, JwtResult};
pub use jws::{Header, Jws, BEARER_PREFIX};

// Key handles come from the companion crate; re-exported so callers need
// a single dependency.
pub use sigil_key as key;
