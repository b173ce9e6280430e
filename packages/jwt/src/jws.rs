//! Compact JWS serialization: sign, parse, verify

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::alg::Alg;
use crate::algorithms::Algorithm;
use crate::claims::Claims;
use crate::encoding::{b64_decode, b64_encode};
use crate::error::{JwtError, JwtResult};

/// Transport prefix for tokens carried as authorization values.
pub const BEARER_PREFIX: &str = "Bearer ";

/// Protected JOSE header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Declared signature algorithm
    pub alg: Alg,
    /// Token type; always `"JWT"` on the signing side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typ: Option<String>,
}

impl Header {
    fn new(alg: Alg) -> Self {
        Self {
            alg,
            typ: Some("JWT".to_string()),
        }
    }
}

/// A parsed, not-yet-verified token.
///
/// `parse` only establishes structural well-formedness; nothing about a
/// `Jws` value implies its signature has been checked. The raw header and
/// payload segments are kept exactly as they arrived, and `verify`
/// reassembles the signing input from them on every call, so the bytes
/// that get checked are the bytes that were signed.
pub struct Jws {
    header: Header,
    claims: Claims,
    signature: Vec<u8>,
    // Wire segments, still base64url encoded.
    protected: String,
    payload: String,
}

impl Jws {
    /// Sign `claims` with `algorithm`, producing a compact token.
    ///
    /// # Errors
    /// Propagates [`JwtError::SigningNotPermitted`] from the algorithm and
    /// [`JwtError::Serialization`] when encoding fails.
    pub fn sign(claims: &Claims, algorithm: &Algorithm) -> JwtResult<String> {
        let header = Header::new(algorithm.alg());
        let header_json =
            serde_json::to_vec(&header).map_err(|e| JwtError::Serialization(e.to_string()))?;

        let mut token = b64_encode(header_json);
        token.push('.');
        token.push_str(&b64_encode(claims.to_json()?));

        let signature = algorithm.sign(token.as_bytes())?;
        token.push('.');
        token.push_str(&b64_encode(signature));

        debug!(alg = %algorithm.alg(), "signed token");
        Ok(token)
    }

    /// Sign and prepend the `"Bearer "` transport prefix.
    ///
    /// # Errors
    /// Same as [`Jws::sign`].
    pub fn sign_bearer(claims: &Claims, algorithm: &Algorithm) -> JwtResult<String> {
        Ok(format!("{BEARER_PREFIX}{}", Self::sign(claims, algorithm)?))
    }

    /// Parse a compact token from untrusted wire text.
    ///
    /// With `require_bearer`, the input must start with the literal
    /// `"Bearer "` (case-sensitive, single space), which is stripped
    /// before parsing. The signature is *not* verified here; on any
    /// failure no partial token escapes.
    ///
    /// # Errors
    /// [`JwtError::InvalidBearerFormat`] for a missing prefix,
    /// [`JwtError::MalformedToken`] for structural defects and
    /// [`JwtError::MalformedClaims`] when the payload is not a JSON
    /// object.
    pub fn parse(text: &str, require_bearer: bool) -> JwtResult<Self> {
        let token = if require_bearer {
            text.strip_prefix(BEARER_PREFIX)
                .ok_or(JwtError::InvalidBearerFormat)?
        } else {
            text
        };

        let mut segments = token.split('.');
        let (protected, payload, signature) =
            match (segments.next(), segments.next(), segments.next(), segments.next()) {
                (Some(h), Some(p), Some(s), None) if !h.is_empty() && !p.is_empty() && !s.is_empty() => {
                    (h, p, s)
                }
                _ => {
                    return Err(JwtError::MalformedToken(
                        "expected three non-empty dot-separated segments".to_string(),
                    ))
                }
            };

        let header_json = b64_decode(protected)
            .map_err(|e| JwtError::MalformedToken(format!("header segment: {e}")))?;
        let header: Header = serde_json::from_slice(&header_json)
            .map_err(|e| JwtError::MalformedToken(format!("header: {e}")))?;
        if let Some(typ) = &header.typ {
            if !typ.eq_ignore_ascii_case("JWT") {
                return Err(JwtError::MalformedToken(format!("unsupported typ {typ:?}")));
            }
        }

        let payload_json = b64_decode(payload)
            .map_err(|e| JwtError::MalformedToken(format!("payload segment: {e}")))?;
        let claims = Claims::from_json(&payload_json)?;

        let signature = b64_decode(signature)
            .map_err(|e| JwtError::MalformedToken(format!("signature segment: {e}")))?;

        trace!(alg = %header.alg, claims = claims.len(), "parsed token");
        Ok(Self {
            header,
            claims,
            signature,
            protected: protected.to_string(),
            payload: payload.to_string(),
        })
    }

    /// Verify the token's signature with `algorithm`.
    ///
    /// Returns `Ok(false)` when the signature does not match — a hostile
    /// or stale token is an expected input, not an exceptional one.
    ///
    /// # Errors
    /// [`JwtError::AlgorithmFamilyMismatch`] when the token's declared
    /// identifier differs from the verifier's. This is the algorithm
    /// confusion guard and is never downgraded to `Ok(false)`: a token
    /// declaring RS384 is rejected outright by an RS256 verifier, even
    /// over the same key.
    pub fn verify(&self, algorithm: &Algorithm) -> JwtResult<bool> {
        self.verify_with(algorithm, |_| true)
    }

    /// Verify the signature, then apply `predicate` to the claims.
    ///
    /// The predicate runs only after the signature has checked out;
    /// its rejection surfaces as `Ok(false)`, exactly like a signature
    /// mismatch.
    ///
    /// # Errors
    /// Same as [`Jws::verify`].
    pub fn verify_with<F>(&self, algorithm: &Algorithm, predicate: F) -> JwtResult<bool>
    where
        F: FnOnce(&Claims) -> bool,
    {
        if self.header.alg != algorithm.alg() {
            return Err(JwtError::AlgorithmFamilyMismatch {
                token: self.header.alg,
                verifier: algorithm.alg(),
            });
        }

        let signing_input = format!("{}.{}", self.protected, self.payload);
        if !algorithm.verify(signing_input.as_bytes(), &self.signature)? {
            debug!(alg = %self.header.alg, "signature mismatch");
            return Ok(false);
        }

        Ok(predicate(&self.claims))
    }

    /// Protected header as parsed
    #[must_use]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Declared algorithm identifier
    #[must_use]
    pub fn alg(&self) -> Alg {
        self.header.alg
    }

    /// Claims payload, read-only
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Raw signature bytes
    #[must_use]
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}
