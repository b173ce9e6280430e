//! Claims set construction and the checker predicates

use serde_json::json;
use sigil_jwt::{Claims, JwtError};

#[test]
fn registered_setters_use_their_wire_names() {
    let mut claims = Claims::new();
    claims.set_issuer("sigil");
    claims.set_subject("user-17");
    claims.set_audience("api");
    claims.set_id("token-1");
    claims.set_expiration(2_000_000_000);
    claims.set_not_before(1_000_000_000);
    claims.set_issued_at(1_500_000_000);

    assert_eq!(claims.issuer(), Some("sigil"));
    assert_eq!(claims.subject(), Some("user-17"));
    assert_eq!(claims.audience(), Some("api"));
    assert_eq!(claims.get("jti"), Some(&json!("token-1")));
    assert_eq!(claims.expiration(), Some(2_000_000_000));
    assert_eq!(claims.get("nbf"), Some(&json!(1_000_000_000)));
    assert_eq!(claims.get("iat"), Some(&json!(1_500_000_000)));
    assert_eq!(claims.len(), 7);
}

#[test]
fn set_replaces_under_the_same_name() {
    let mut claims = Claims::new();
    claims.set_issuer("first");
    claims.set_issuer("second");
    assert_eq!(claims.issuer(), Some("second"));
    assert_eq!(claims.len(), 1);
}

#[test]
fn custom_claims_coexist_with_registered_ones() {
    let mut claims = Claims::new();
    claims.set_issuer("sigil");
    claims.set("roles", json!(["admin", "ops"]));
    claims.set("level", 3);

    assert!(claims.check().has("roles"));
    assert!(claims.check().claim("roles", &json!(["admin", "ops"])));
    assert!(claims.check().claim("level", &json!(3)));
    assert!(!claims.check().claim("level", &json!(4)));
}

#[test]
fn remove_clears_a_claim() {
    let mut claims = Claims::new();
    claims.set_issuer("sigil");
    assert_eq!(claims.remove("iss"), Some(json!("sigil")));
    assert!(claims.is_empty());
    assert_eq!(claims.remove("iss"), None);
}

#[test]
fn from_json_requires_an_object() {
    assert!(Claims::from_json(b"{}").unwrap().is_empty());
    for bad in [&b"[]"[..], b"\"text\"", b"17", b"null", b"not json"] {
        assert!(matches!(
            Claims::from_json(bad),
            Err(JwtError::MalformedClaims(_))
        ));
    }
}

#[test]
fn json_round_trip_preserves_insertion_order() {
    let mut claims = Claims::new();
    claims.set("z", 1);
    claims.set("a", 2);
    claims.set("m", 3);

    let bytes = claims.to_json().unwrap();
    assert_eq!(bytes, br#"{"z":1,"a":2,"m":3}"#);
    assert_eq!(Claims::from_json(&bytes).unwrap(), claims);
}

#[test]
fn checker_matches_present_values_only() {
    let mut claims = Claims::new();
    claims.set_issuer("sigil");
    claims.set_expiration(100);

    let check = claims.check();
    assert!(check.iss("sigil"));
    assert!(!check.iss("troian"));
    assert!(check.exp(100));
    assert!(!check.exp(101));

    // Absent claims never match, whatever the expectation.
    assert!(!check.sub("anyone"));
    assert!(!check.aud(""));
    assert!(!check.jti("token-1"));
    assert!(!check.nbf(0));
    assert!(!check.iat(0));
    assert!(!check.has("nbf"));
}

#[test]
fn checker_distinguishes_value_types() {
    let mut claims = Claims::new();
    claims.set("exp", "100");
    // Textual "100" is not the number 100.
    assert!(!claims.check().exp(100));
    assert!(claims.check().has("exp"));
    assert_eq!(claims.expiration(), None);
}

#[test]
fn relative_timestamps_land_in_the_future() {
    let mut claims = Claims::new();
    let now = chrono::Utc::now().timestamp();
    claims.issued_now();
    claims.expires_in(chrono::Duration::hours(1));

    let iat = claims.get("iat").and_then(serde_json::Value::as_i64).unwrap();
    let exp = claims.expiration().unwrap();
    assert!((iat - now).abs() <= 2);
    assert!((exp - now - 3600).abs() <= 2);
}
