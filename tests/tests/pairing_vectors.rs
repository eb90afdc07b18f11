//! Known-answer tests against the GB/T 38635 example data

use sm9pair::prelude::*;
use sm9pair_tests::vectors::{ppub, ppub_bytes, PPUB_PAIRING_HEX};

#[test]
fn test_master_public_key_pairing() {
    sm9pair_tests::setup_tracing();

    let engine = Sm9Pairing::initialized().unwrap();
    let q = G2Projective::from(ppub().unwrap());
    let g = engine.pairing(&q, &G1Affine::generator()).unwrap();

    assert_eq!(g.to_string(), PPUB_PAIRING_HEX);
    assert_eq!(hex::encode_upper(g.to_bytes()), PPUB_PAIRING_HEX);
}

#[test]
fn test_master_public_key_encoding() {
    let q = ppub().unwrap();
    assert_eq!(q.to_uncompressed().to_vec(), ppub_bytes());
    assert_eq!(G2Affine::from_uncompressed(&ppub_bytes()).unwrap(), q);

    let mut tampered = ppub_bytes();
    tampered[127] ^= 1;
    assert!(matches!(
        G2Affine::from_uncompressed(&tampered),
        Err(Error::InvalidPoint { .. })
    ));
}

#[test]
fn test_generator_encodings() {
    let p1 = G1Affine::generator().to_uncompressed();
    assert_eq!(
        hex::encode_upper(p1),
        [sm9pair::params::sm9::SM9_P1_X, sm9pair::params::sm9::SM9_P1_Y].concat()
    );

    let p2 = G2Affine::generator().to_uncompressed();
    assert_eq!(
        hex::encode_upper(p2),
        [
            sm9pair::params::sm9::SM9_P2_X1,
            sm9pair::params::sm9::SM9_P2_X0,
            sm9pair::params::sm9::SM9_P2_Y1,
            sm9pair::params::sm9::SM9_P2_Y0,
        ]
        .concat()
    );
}
