//! Key handle, generation and PEM loading tests

use sigil_key::{EcCurve, KeyError, KeyFamily, SigningKey};
use zeroize::Zeroizing;

const RSA_PEM: &str = include_str!("data/rsa2048.pem");
const RSA_PUB_PEM: &str = include_str!("data/rsa2048.pub.pem");
const RSA_ENC_PEM: &str = include_str!("data/rsa2048.enc.pem");
const P256_PEM: &str = include_str!("data/p256.pem");
const P256_PUB_PEM: &str = include_str!("data/p256.pub.pem");
const K256_PEM: &str = include_str!("data/secp256k1.pem");
const K256_PUB_PEM: &str = include_str!("data/secp256k1.pub.pem");

#[test]
fn hmac_secret_rejects_empty() {
    assert!(matches!(SigningKey::hmac(vec![]), Err(KeyError::EmptySecret)));
    assert!(matches!(
        SigningKey::generate_hmac(0),
        Err(KeyError::EmptySecret)
    ));
}

#[test]
fn hmac_handle_reports_family_and_size() {
    let key = SigningKey::generate_hmac(32).unwrap();
    assert_eq!(key.family(), KeyFamily::Hmac);
    assert_eq!(key.bits(), 256);
    assert!(key.has_private());
}

#[test]
fn hmac_has_no_public_form() {
    let key = SigningKey::generate_hmac(32).unwrap();
    assert!(matches!(key.public_only(), Err(KeyError::NoPublicForm)));
}

#[test]
fn rsa_generation_rejects_weak_modulus() {
    assert!(matches!(
        SigningKey::generate_rsa(1023),
        Err(KeyError::WeakKey { bits: 1023, min: 1024 })
    ));
}

#[test]
fn rsa_generation_accepts_minimum_modulus() {
    let key = SigningKey::generate_rsa(1024).unwrap();
    assert_eq!(key.family(), KeyFamily::Rsa);
    assert_eq!(key.bits(), 1024);
    assert!(key.has_private());
}

#[test]
fn rsa_public_only_strips_private_half() {
    let key = SigningKey::generate_rsa(1024).unwrap();
    let public = key.public_only().unwrap();
    assert!(!public.has_private());
    assert_eq!(public.family(), KeyFamily::Rsa);
    assert_eq!(public.bits(), key.bits());
}

#[test]
fn ecdsa_generation_covers_all_curves() {
    for (curve, bits) in [
        (EcCurve::P256, 256),
        (EcCurve::P384, 384),
        (EcCurve::Secp256k1, 256),
    ] {
        let key = SigningKey::generate_ecdsa(curve);
        assert_eq!(key.family(), KeyFamily::Ecdsa);
        assert_eq!(key.bits(), bits);
        assert!(key.has_private());
        assert!(!key.public_only().unwrap().has_private());
    }
}

#[test]
fn cloned_handles_share_material() {
    let key = SigningKey::generate_hmac(32).unwrap();
    let clone = key.clone();
    assert_eq!(clone.bits(), key.bits());
    assert_eq!(clone.family(), key.family());
}

#[test]
fn rsa_private_pem_loads() {
    let key = SigningKey::rsa_private_from_pem(RSA_PEM).unwrap();
    assert_eq!(key.family(), KeyFamily::Rsa);
    assert_eq!(key.bits(), 2048);
    assert!(key.has_private());
}

#[test]
fn rsa_public_pem_loads_verify_only() {
    let key = SigningKey::rsa_public_from_pem(RSA_PUB_PEM).unwrap();
    assert_eq!(key.bits(), 2048);
    assert!(!key.has_private());
}

#[test]
fn rsa_encrypted_pem_requires_passphrase() {
    assert!(matches!(
        SigningKey::rsa_private_from_pem(RSA_ENC_PEM),
        Err(KeyError::PassphraseRequired)
    ));
}

#[test]
fn rsa_encrypted_pem_decrypts_with_passphrase() {
    let key =
        SigningKey::rsa_private_from_encrypted_pem(RSA_ENC_PEM, || Zeroizing::new("12345".into()))
            .unwrap();
    assert_eq!(key.bits(), 2048);
    assert!(key.has_private());
}

#[test]
fn rsa_encrypted_pem_rejects_wrong_passphrase() {
    let loaded =
        SigningKey::rsa_private_from_encrypted_pem(RSA_ENC_PEM, || Zeroizing::new("nope".into()));
    assert!(matches!(loaded, Err(KeyError::DecryptionFailed(_))));
}

#[test]
fn garbage_pem_is_rejected() {
    assert!(matches!(
        SigningKey::rsa_private_from_pem("not a pem"),
        Err(KeyError::InvalidKeyFormat(_))
    ));
}

#[test]
fn ecdsa_private_pem_loads_on_declared_curve() {
    let p256 = SigningKey::ecdsa_private_from_pem(P256_PEM, EcCurve::P256).unwrap();
    assert_eq!(p256.bits(), 256);
    assert!(p256.has_private());

    let k256 = SigningKey::ecdsa_private_from_pem(K256_PEM, EcCurve::Secp256k1).unwrap();
    assert_eq!(k256.family(), KeyFamily::Ecdsa);
    assert!(k256.has_private());
}

#[test]
fn ecdsa_private_pem_rejects_wrong_curve() {
    assert!(matches!(
        SigningKey::ecdsa_private_from_pem(P256_PEM, EcCurve::Secp256k1),
        Err(KeyError::InvalidKeyFormat(_))
    ));
}

#[test]
fn ecdsa_public_pem_loads_verify_only() {
    let p256 = SigningKey::ecdsa_public_from_pem(P256_PUB_PEM, EcCurve::P256).unwrap();
    assert!(!p256.has_private());

    let k256 = SigningKey::ecdsa_public_from_pem(K256_PUB_PEM, EcCurve::Secp256k1).unwrap();
    assert!(!k256.has_private());
}

#[test]
fn pem_file_loader_dispatches_on_encryption() {
    let dir = env!("CARGO_MANIFEST_DIR");
    let plain = format!("{dir}/tests/data/rsa2048.pem");
    let encrypted = format!("{dir}/tests/data/rsa2048.enc.pem");

    let key =
        SigningKey::rsa_private_from_pem_file(&plain, None::<fn() -> Zeroizing<String>>).unwrap();
    assert!(key.has_private());

    let missing = SigningKey::rsa_private_from_pem_file(&encrypted, None::<fn() -> Zeroizing<String>>);
    assert!(matches!(missing, Err(KeyError::PassphraseRequired)));

    let key = SigningKey::rsa_private_from_pem_file(&encrypted, Some(|| Zeroizing::new("12345".into())))
        .unwrap();
    assert!(key.has_private());
}
