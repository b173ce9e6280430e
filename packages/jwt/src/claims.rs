//! JWT claims set and the fluent claims checker

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{JwtError, JwtResult};

/// Ordered JWT claims set.
///
/// Standard claims (`iss`, `sub`, `aud`, `exp`, `nbf`, `iat`, `jti`) are
/// stored uniformly with custom claims in one JSON object; names are
/// unique and insertion order is preserved through serialization.
///
/// A claims set is mutated only on the issuing side, before signing. A
/// parsed token exposes its claims read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims {
    map: Map<String, Value>,
}

impl Claims {
    /// Empty claims set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a claims set from JSON payload bytes.
    ///
    /// # Errors
    /// Returns [`JwtError::MalformedClaims`] unless the bytes are a valid
    /// JSON object.
    pub fn from_json(bytes: &[u8]) -> JwtResult<Self> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| JwtError::MalformedClaims(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(Self { map }),
            other => Err(JwtError::MalformedClaims(format!(
                "claims payload must be a JSON object, got {other}"
            ))),
        }
    }

    /// Serialize the claims set to JSON bytes.
    ///
    /// # Errors
    /// Returns [`JwtError::Serialization`] when encoding fails.
    pub fn to_json(&self) -> JwtResult<Vec<u8>> {
        serde_json::to_vec(&self.map).map_err(|e| JwtError::Serialization(e.to_string()))
    }

    /// Set a claim, replacing any previous value under the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.map.insert(name.into(), value.into());
    }

    /// Claim value by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.map.get(name)
    }

    /// Remove a claim by name
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.map.remove(name)
    }

    /// Number of claims
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no claims are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Set the `iss` claim
    pub fn set_issuer(&mut self, issuer: impl Into<String>) {
        self.set("iss", issuer.into());
    }

    /// Set the `sub` claim
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.set("sub", subject.into());
    }

    /// Set the `aud` claim
    pub fn set_audience(&mut self, audience: impl Into<String>) {
        self.set("aud", audience.into());
    }

    /// Set the `jti` claim
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.set("jti", id.into());
    }

    /// Set the `exp` claim (unix seconds)
    pub fn set_expiration(&mut self, exp: i64) {
        self.set("exp", exp);
    }

    /// Set the `nbf` claim (unix seconds)
    pub fn set_not_before(&mut self, nbf: i64) {
        self.set("nbf", nbf);
    }

    /// Set the `iat` claim (unix seconds)
    pub fn set_issued_at(&mut self, iat: i64) {
        self.set("iat", iat);
    }

    /// Set `exp` to now plus `lifetime`
    pub fn expires_in(&mut self, lifetime: Duration) {
        self.set_expiration(Utc::now().timestamp() + lifetime.num_seconds());
    }

    /// Set `iat` to now
    pub fn issued_now(&mut self) {
        self.set_issued_at(Utc::now().timestamp());
    }

    /// `iss` claim, when present and textual
    #[must_use]
    pub fn issuer(&self) -> Option<&str> {
        self.text("iss")
    }

    /// `sub` claim, when present and textual
    #[must_use]
    pub fn subject(&self) -> Option<&str> {
        self.text("sub")
    }

    /// `aud` claim, when present and textual
    #[must_use]
    pub fn audience(&self) -> Option<&str> {
        self.text("aud")
    }

    /// `exp` claim, when present and numeric
    #[must_use]
    pub fn expiration(&self) -> Option<i64> {
        self.number("exp")
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.map.get(name).and_then(Value::as_str)
    }

    fn number(&self, name: &str) -> Option<i64> {
        self.map.get(name).and_then(Value::as_i64)
    }

    /// Side-effect-free predicate builder over this claims set.
    ///
    /// Each checker method answers one question and never fails; callers
    /// compose them with plain boolean logic.
    #[must_use]
    pub fn check(&self) -> ClaimsChecker<'_> {
        ClaimsChecker { claims: self }
    }
}

/// Borrowing predicate over a [`Claims`] instance.
///
/// Every method returns `true` iff the claim is present and equals the
/// expected value; an absent or mismatched claim is `false`, never an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct ClaimsChecker<'a> {
    claims: &'a Claims,
}

impl ClaimsChecker<'_> {
    /// `iss` equals `expected`
    #[must_use]
    pub fn iss(&self, expected: &str) -> bool {
        self.text("iss", expected)
    }

    /// `sub` equals `expected`
    #[must_use]
    pub fn sub(&self, expected: &str) -> bool {
        self.text("sub", expected)
    }

    /// `aud` equals `expected`
    #[must_use]
    pub fn aud(&self, expected: &str) -> bool {
        self.text("aud", expected)
    }

    /// `jti` equals `expected`
    #[must_use]
    pub fn jti(&self, expected: &str) -> bool {
        self.text("jti", expected)
    }

    /// `exp` equals `expected`
    #[must_use]
    pub fn exp(&self, expected: i64) -> bool {
        self.number("exp", expected)
    }

    /// `nbf` equals `expected`
    #[must_use]
    pub fn nbf(&self, expected: i64) -> bool {
        self.number("nbf", expected)
    }

    /// `iat` equals `expected`
    #[must_use]
    pub fn iat(&self, expected: i64) -> bool {
        self.number("iat", expected)
    }

    /// Claim `name` is present, regardless of value
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.claims.get(name).is_some()
    }

    /// Claim `name` equals the expected JSON value
    #[must_use]
    pub fn claim(&self, name: &str, expected: &Value) -> bool {
        self.claims.get(name) == Some(expected)
    }

    fn text(&self, name: &str, expected: &str) -> bool {
        self.claims
            .get(name)
            .and_then(Value::as_str)
            .is_some_and(|actual| actual == expected)
    }

    fn number(&self, name: &str, expected: i64) -> bool {
        self.claims
            .get(name)
            .and_then(Value::as_i64)
            .is_some_and(|actual| actual == expected)
    }
}
