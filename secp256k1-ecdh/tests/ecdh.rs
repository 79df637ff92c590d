//! Tests for secp256k1 Diffie-Hellman key agreement.

use secp256k1_ecdh::{Error, PrivateKey, PublicKey};

use secp256k1::constants::{CURVE_ORDER, GENERATOR_BYTES};

#[test]
fn key_agreement_is_symmetric() {
    let mut rng = rand::rng();

    for _ in 0..8 {
        let alice_secret = PrivateKey::random_from_rng(&mut rng);
        let alice_public = PublicKey::from(&alice_secret);

        let bob_secret = PrivateKey::random_from_rng(&mut rng);
        let bob_public = PublicKey::from(&bob_secret);

        let alice_shared = alice_secret.diffie_hellman(&bob_public).unwrap();
        let bob_shared = bob_secret.diffie_hellman(&alice_public).unwrap();

        assert_eq!(alice_shared.as_bytes(), bob_shared.as_bytes());
    }
}

#[test]
fn fixed_pattern_key_agreement() {
    // k_A = 0x01 repeated, k_B = 0x02 repeated; both are below the
    // group order, so they are valid private keys.
    let alice_secret = PrivateKey::from_bytes(&[0x01; 32]).unwrap();
    let bob_secret = PrivateKey::from_bytes(&[0x02; 32]).unwrap();

    let alice_public = alice_secret.public_key();
    let bob_public = bob_secret.public_key();
    assert_ne!(alice_public, bob_public);

    let alice_shared = alice_secret.diffie_hellman(&bob_public).unwrap();
    let bob_shared = bob_secret.diffie_hellman(&alice_public).unwrap();
    assert_eq!(alice_shared.to_bytes(), bob_shared.to_bytes());
}

#[test]
fn public_key_of_one_is_the_generator() {
    let mut one = [0u8; 32];
    one[31] = 1;
    let secret = PrivateKey::from_bytes(&one).unwrap();
    assert_eq!(secret.public_key().as_bytes(), &GENERATOR_BYTES);
}

#[test]
fn private_key_rejections() {
    // Zero is rejected.
    assert_eq!(
        PrivateKey::from_bytes(&[0u8; 32]).err(),
        Some(Error::InvalidPrivateKey)
    );
    // The group order and anything above it are rejected.
    assert_eq!(
        PrivateKey::from_bytes(&CURVE_ORDER).err(),
        Some(Error::InvalidPrivateKey)
    );
    assert_eq!(
        PrivateKey::from_bytes(&[0xFF; 32]).err(),
        Some(Error::InvalidPrivateKey)
    );
    // Wrong lengths are rejected.
    assert_eq!(
        PrivateKey::from_bytes(&[0x01; 31]).err(),
        Some(Error::InvalidPrivateKey)
    );
    assert_eq!(
        PrivateKey::from_bytes(&[0x01; 33]).err(),
        Some(Error::InvalidPrivateKey)
    );
    // n - 1 is the largest valid key.
    let mut n_minus_one = CURVE_ORDER;
    n_minus_one[31] -= 1;
    assert!(PrivateKey::from_bytes(&n_minus_one).is_ok());
}

#[test]
fn public_key_rejections() {
    // The identity encoding, compressed encodings, and garbage are
    // all rejected; only the uncompressed form is accepted.
    assert_eq!(PublicKey::from_bytes(&[0x00]), Err(Error::InvalidPublicKey));
    assert_eq!(
        PublicKey::from_bytes(&GENERATOR_BYTES[..33]),
        Err(Error::InvalidPublicKey)
    );
    let mut compressed = [0u8; 33];
    compressed[0] = 0x02;
    compressed[1..].copy_from_slice(&GENERATOR_BYTES[1..33]);
    assert_eq!(
        PublicKey::from_bytes(&compressed),
        Err(Error::InvalidPublicKey)
    );

    // An off-curve y-coordinate is rejected.
    let mut off_curve = GENERATOR_BYTES;
    off_curve[64] = off_curve[64].wrapping_add(1);
    assert_eq!(
        PublicKey::from_bytes(&off_curve),
        Err(Error::InvalidPublicKey)
    );

    // The generator itself round-trips.
    let key = PublicKey::from_bytes(&GENERATOR_BYTES).unwrap();
    assert_eq!(key.to_bytes(), GENERATOR_BYTES);
}

#[test]
fn generated_keys_are_valid() {
    let mut rng = rand::rng();
    for _ in 0..16 {
        let secret = PrivateKey::random_from_rng(&mut rng);
        // Round-trips through the byte validation.
        let reparsed = PrivateKey::from_bytes(secret.as_bytes()).unwrap();
        assert_eq!(reparsed.to_bytes(), secret.to_bytes());
        // And derives a well-formed public key.
        let public = secret.public_key();
        assert!(PublicKey::from_bytes(public.as_ref()).is_ok());
    }
}

#[test]
fn agreement_matches_direct_scalar_multiplication() {
    use secp256k1::ProjectivePoint;

    let secret = PrivateKey::from_bytes(&[0x42; 32]).unwrap();
    let peer = PrivateKey::from_bytes(&[0x17; 32]).unwrap();
    let peer_public = peer.public_key();

    let shared = secret.diffie_hellman(&peer_public).unwrap();

    let peer_point = ProjectivePoint::from_bytes(peer_public.as_ref()).unwrap();
    let expected = peer_point.scalar_mul(secret.as_bytes()).to_bytes_x().unwrap();
    assert_eq!(shared.to_bytes(), expected);
}
