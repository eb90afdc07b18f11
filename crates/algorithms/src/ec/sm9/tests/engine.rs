//! Lifecycle and batch behaviour of the SM9 pairing engine

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sm9pair_api::{BilinearPairing, Error};
use sm9pair_params::sm9::SM9_MILLER_CHAIN;

use super::super::params::{parse_chain, MillerStep, PairingParameters};
use super::super::{G1Affine, G1Projective, G2Affine, G2Projective, Gt, Scalar, Sm9Pairing};
use super::reference::BINARY_CHAIN;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5339_0004)
}

fn random_pairs(n: usize) -> (Vec<G2Projective>, Vec<G1Affine>) {
    let mut rng = rng();
    let qs = (0..n).map(|_| G2Projective::random(&mut rng)).collect();
    let ps = (0..n)
        .map(|_| G1Projective::random(&mut rng).to_affine())
        .collect();
    (qs, ps)
}

#[test]
fn test_uninitialized_engine_rejects_work() {
    let engine = Sm9Pairing::new();
    assert!(!engine.is_initialized());

    let q = G2Projective::generator();
    let p = G1Affine::generator();
    assert_eq!(
        engine.pairing(&q, &p).unwrap_err(),
        Error::UninitializedParameters { context: "pairing" }
    );
    assert_eq!(
        engine.batch_pairing(&[q], &[p], 1).unwrap_err(),
        Error::UninitializedParameters {
            context: "batch_pairing"
        }
    );
}

#[test]
fn test_lifecycle() {
    let mut engine = Sm9Pairing::new();
    engine.init().unwrap();
    assert!(engine.is_initialized());

    let q = G2Projective::generator();
    let p = G1Affine::generator();
    let first = engine.pairing(&q, &p).unwrap();

    // A second init keeps the installed parameters
    engine.init().unwrap();
    assert_eq!(engine.pairing(&q, &p).unwrap(), first);

    engine.cleanup();
    assert!(!engine.is_initialized());
    assert!(matches!(
        engine.pairing(&q, &p),
        Err(Error::UninitializedParameters { .. })
    ));

    // Cleanup is idempotent and the engine can be brought back
    engine.cleanup();
    engine.init().unwrap();
    assert_eq!(engine.pairing(&q, &p).unwrap(), first);
}

#[test]
fn test_engine_matches_free_function() {
    let engine = Sm9Pairing::initialized().unwrap();
    let params = engine.parameters("test").unwrap();

    let q = G2Projective::generator().double();
    let p = G1Affine::generator();
    assert_eq!(
        engine.pairing(&q, &p).unwrap(),
        super::super::pairing(&q.to_affine(), &p, params).unwrap()
    );
    assert_eq!(Sm9Pairing::name(), "SM9-R-ate");
}

#[test]
fn test_standard_parameters_use_signed_chain() {
    let engine = Sm9Pairing::initialized().unwrap();
    let chain = engine.parameters("test").unwrap().chain();

    assert_eq!(chain, parse_chain("test", SM9_MILLER_CHAIN).unwrap().as_slice());
    assert_eq!(chain.len(), 65);
    assert!(chain.contains(&MillerStep::DoubleSub));

    assert!(matches!(
        PairingParameters::with_chain("0013"),
        Err(Error::InvalidParameter { .. })
    ));
}

#[test]
fn test_engine_with_binary_chain() {
    let standard = Sm9Pairing::initialized().unwrap();
    let binary =
        Sm9Pairing::with_parameters(PairingParameters::with_chain(BINARY_CHAIN).unwrap());
    assert!(binary.is_initialized());

    let q = G2Projective::generator();
    let p = G1Affine::generator();
    assert_eq!(binary.pairing(&q, &p).unwrap(), standard.pairing(&q, &p).unwrap());
}

#[test]
fn test_batch_matches_sequential() {
    let engine = Sm9Pairing::initialized().unwrap();
    let (qs, ps) = random_pairs(6);

    let sequential: Vec<Gt> = qs
        .iter()
        .zip(ps.iter())
        .map(|(q, p)| engine.pairing(q, p).unwrap())
        .collect();

    for workers in [1, 2, 4, 9] {
        assert_eq!(engine.batch_pairing(&qs, &ps, workers).unwrap(), sequential);
    }
}

#[test]
fn test_batch_edge_cases() {
    let engine = Sm9Pairing::initialized().unwrap();
    let (qs, ps) = random_pairs(3);

    assert!(engine.batch_pairing(&[], &[], 2).unwrap().is_empty());

    assert_eq!(
        engine.batch_pairing(&qs, &ps[..2], 2).unwrap_err(),
        Error::InvalidLength {
            context: "batch_pairing",
            expected: 3,
            actual: 2
        }
    );

    assert!(matches!(
        engine.batch_pairing(&qs, &ps, 0),
        Err(Error::InvalidParameter {
            context: "batch_pairing",
            ..
        })
    ));
}

#[test]
fn test_batch_identity_entries() {
    let engine = Sm9Pairing::initialized().unwrap();
    let qs = [
        G2Projective::identity(),
        G2Projective::generator(),
        G2Projective::generator(),
    ];
    let ps = [
        G1Affine::generator(),
        G1Affine::identity(),
        G1Affine::generator(),
    ];

    let out = engine.batch_pairing(&qs, &ps, 2).unwrap();
    assert_eq!(out[0], Gt::identity());
    assert_eq!(out[1], Gt::identity());
    assert!(!bool::from(out[2].is_identity()));
}

#[test]
fn test_exponentiate() {
    let engine = Sm9Pairing::initialized().unwrap();
    let mut rng = rng();
    let k = Scalar::random(&mut rng);

    let g = engine
        .pairing(&G2Projective::generator(), &G1Affine::generator())
        .unwrap();
    let scaled = engine
        .pairing(&G2Projective::generator(), &(G1Affine::generator() * k).to_affine())
        .unwrap();
    assert_eq!(engine.exponentiate(&g, &k), scaled);
    assert_eq!(engine.exponentiate(&g, &Scalar::zero()), Gt::identity());

    let q = G2Affine::generator() * k;
    assert_eq!(engine.pairing(&q, &G1Affine::generator()).unwrap(), scaled);
}
