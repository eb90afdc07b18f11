//! End-to-end tests through the `BilinearPairing` interface

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sm9pair::prelude::*;

/// Protocol-style code that only knows the trait.
fn shared_secret<E>(engine: &E, q: &E::G2, p: &E::G1, k: &E::Scalar) -> Result<E::Gt>
where
    E: BilinearPairing,
{
    let g = engine.pairing(q, p)?;
    Ok(engine.exponentiate(&g, k))
}

#[test]
fn test_generic_caller() {
    sm9pair_tests::setup_tracing();

    let engine = Sm9Pairing::initialized().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let k = Scalar::random(&mut rng);

    let via_trait = shared_secret(
        &engine,
        &G2Projective::generator(),
        &G1Affine::generator(),
        &k,
    )
    .unwrap();
    let direct = engine
        .pairing(&(G2Projective::generator() * k), &G1Affine::generator())
        .unwrap();
    assert_eq!(via_trait, direct);
}

#[test]
fn test_lifecycle_errors_are_reported() {
    let mut engine = Sm9Pairing::new();
    let q = G2Projective::generator();
    let p = G1Affine::generator();

    let err = engine.pairing(&q, &p).unwrap_err();
    assert_eq!(
        err.to_string(),
        "pairing: pairing parameters are not initialized"
    );

    engine.init().unwrap();
    assert!(engine.pairing(&q, &p).is_ok());
    engine.cleanup();
    assert!(engine.batch_pairing(&[q], &[p], 1).is_err());
}

#[test]
fn test_batch_across_threads() {
    sm9pair_tests::setup_tracing();

    let engine = Sm9Pairing::initialized().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let n = 5;
    let ks: Vec<Scalar> = (0..n).map(|_| Scalar::random(&mut rng)).collect();
    let qs: Vec<G2Projective> = ks.iter().map(|k| G2Projective::generator() * k).collect();
    let ps = vec![G1Affine::generator(); n];

    let base = engine
        .pairing(&G2Projective::generator(), &G1Affine::generator())
        .unwrap();
    let out = engine.batch_pairing(&qs, &ps, 3).unwrap();

    assert_eq!(out.len(), n);
    for (g, k) in out.iter().zip(ks.iter()) {
        assert_eq!(*g, engine.exponentiate(&base, k));
    }
}

#[test]
fn test_reexported_trait_crates() {
    use sm9pair::rand::rngs::StdRng;
    use sm9pair::subtle::ConstantTimeEq;
    use sm9pair::zeroize::Zeroize;

    let engine = Sm9Pairing::initialized().unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let k = Scalar::random(&mut rng);

    let mut g = engine
        .pairing(&G2Projective::generator(), &(G1Projective::generator() * k).to_affine())
        .unwrap();
    let expected = engine.exponentiate(
        &engine
            .pairing(&G2Projective::generator(), &G1Affine::generator())
            .unwrap(),
        &k,
    );
    assert!(bool::from(g.ct_eq(&expected)));

    // Zeroizing resets to the identity element
    g.zeroize();
    assert!(bool::from(g.is_identity()));
    assert!(!bool::from(g.ct_eq(&expected)));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(4))]

    #[test]
    fn pairing_is_bilinear(seed in any::<u64>()) {
        let engine = Sm9Pairing::initialized().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);

        let q = G2Projective::generator() * a;
        let p = (G1Projective::generator() * b).to_affine();
        let base = engine
            .pairing(&G2Projective::generator(), &G1Affine::generator())
            .unwrap();

        prop_assert_eq!(engine.pairing(&q, &p).unwrap(), engine.exponentiate(&base, &(a * b)));
    }
}
