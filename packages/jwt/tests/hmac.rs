//! HMAC token round trips and secret policy

use sigil_jwt::key::{KeyError, SigningKey};
use sigil_jwt::{Alg, Algorithm, Claims, Jws, JwtError};

fn secret(len: usize) -> SigningKey {
    SigningKey::hmac(vec![0x42u8; len]).unwrap()
}

#[test]
fn empty_secret_is_rejected() {
    assert!(matches!(
        SigningKey::hmac(Vec::new()),
        Err(KeyError::EmptySecret)
    ));
}

#[test]
fn secret_must_cover_the_digest_output() {
    // 32 bytes clears HS256 but not HS384 or HS512.
    let key = secret(32);
    assert!(Algorithm::new(key.clone(), Alg::HS256).is_ok());
    for alg in [Alg::HS384, Alg::HS512] {
        assert!(matches!(
            Algorithm::new(key.clone(), alg),
            Err(JwtError::WeakKey { bits: 256, .. })
        ));
    }
    assert!(Algorithm::new(secret(64), Alg::HS512).is_ok());
}

#[test]
fn construction_rejects_foreign_families() {
    let key = secret(64);
    for alg in [Alg::RS256, Alg::ES512] {
        assert!(matches!(
            Algorithm::new(key.clone(), alg),
            Err(JwtError::AlgorithmMismatch { .. })
        ));
    }
}

fn sign_verify_round_trip(alg: Alg) {
    let mut claims = Claims::new();
    claims.set_issuer("sigil");

    let hs = Algorithm::new(secret(64), alg).unwrap();

    let bearer = Jws::sign_bearer(&claims, &hs).unwrap();
    let jws = Jws::parse(&bearer, true).unwrap();

    assert!(jws.verify(&hs).unwrap());
    assert!(jws
        .verify_with(&hs, |claims| claims.check().iss("sigil"))
        .unwrap());
    assert!(!jws
        .verify_with(&hs, |claims| claims.check().iss("troian"))
        .unwrap());
}

#[test]
fn sign_verify_hs256() {
    sign_verify_round_trip(Alg::HS256);
}

#[test]
fn sign_verify_hs384() {
    sign_verify_round_trip(Alg::HS384);
}

#[test]
fn sign_verify_hs512() {
    sign_verify_round_trip(Alg::HS512);
}

#[test]
fn wrong_secret_is_a_clean_false() {
    let signer = Algorithm::new(secret(32), Alg::HS256).unwrap();
    let token = Jws::sign(&Claims::new(), &signer).unwrap();

    let other = SigningKey::hmac(vec![0x17u8; 32]).unwrap();
    let verifier = Algorithm::new(other, Alg::HS256).unwrap();
    let jws = Jws::parse(&token, false).unwrap();
    assert!(!jws.verify(&verifier).unwrap());
}

#[test]
fn truncated_tag_is_an_encoding_error() {
    let hs256 = Algorithm::new(secret(32), Alg::HS256).unwrap();
    let tag = hs256.sign(b"message").unwrap();
    assert_eq!(tag.len(), 32);
    assert!(matches!(
        hs256.verify(b"message", &tag[..31]),
        Err(JwtError::InvalidSignatureEncoding(_))
    ));
}

#[test]
fn cross_digest_verify_is_algorithm_confusion() {
    let key = secret(64);
    let signer = Algorithm::new(key.clone(), Alg::HS256).unwrap();
    let hs384 = Algorithm::new(key, Alg::HS384).unwrap();

    let token = Jws::sign(&Claims::new(), &signer).unwrap();
    let jws = Jws::parse(&token, false).unwrap();
    assert!(matches!(
        jws.verify(&hs384),
        Err(JwtError::AlgorithmFamilyMismatch { .. })
    ));
}

#[test]
fn generated_secret_round_trips() {
    let key = SigningKey::generate_hmac(64).unwrap();
    let hs512 = Algorithm::new(key, Alg::HS512).unwrap();
    let token = Jws::sign(&Claims::new(), &hs512).unwrap();
    let jws = Jws::parse(&token, false).unwrap();
    assert!(jws.verify(&hs512).unwrap());
}
