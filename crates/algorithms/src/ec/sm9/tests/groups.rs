//! G₁ and G₂ group tests for SM9

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use sm9pair_api::Error;
use sm9pair_params::sm9::{SM9_P1_X, SM9_P1_Y, SM9_P2_X0, SM9_P2_X1, SM9_P2_Y0, SM9_P2_Y1};

use super::super::field::{Fp, Fp2};
use super::super::params::PairingParameters;
use super::super::scalar::{self, Scalar};
use super::super::{G1Affine, G1Projective, G2Affine, G2Projective};

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5339_0002)
}

// ============================================================================
// G1
// ============================================================================

#[test]
fn test_g1_generator_matches_domain_parameters() {
    let g = G1Affine::generator();
    assert_eq!(g.x(), Fp::from_hex("P1.x", SM9_P1_X).unwrap());
    assert_eq!(g.y(), Fp::from_hex("P1.y", SM9_P1_Y).unwrap());
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(G1Projective::generator().is_on_curve()));
}

#[test]
fn test_g1_group_law() {
    let g = G1Projective::generator();
    let identity = G1Projective::identity();

    assert_eq!(g + identity, g);
    assert_eq!(identity + g, g);
    assert_eq!(g - g, identity);
    assert_eq!(g.double(), g + g);
    assert_eq!(g + G1Affine::generator(), g.double());
    assert_eq!(g * Scalar::from(3u64), g + g + g);
    assert_eq!(g * Scalar::zero(), identity);
    assert!(bool::from((g * -Scalar::one() + g).is_identity()));
    assert!(bool::from(g.double().is_on_curve()));
}

#[test]
fn test_g1_scalar_mul_distributes() {
    let mut rng = rng();
    let g = G1Projective::generator();
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);

    assert_eq!(g * a + g * b, g * (a + b));
    assert_eq!((g * a) * b, g * (a * b));
    assert_eq!(G1Affine::generator() * a, g * a);
}

#[test]
fn test_g1_affine_conversion() {
    let mut rng = rng();
    let p = G1Projective::random(&mut rng);
    let affine = p.to_affine();
    assert!(bool::from(affine.is_on_curve()));
    assert_eq!(G1Projective::from(affine), p);
    assert!(bool::from(G1Projective::identity().to_affine().is_identity()));
}

#[test]
fn test_g1_checked_constructors() {
    let g = G1Affine::generator();
    assert_eq!(G1Affine::from_coordinates(g.x(), g.y()).unwrap(), g);

    let err = G1Affine::from_coordinates(g.x(), g.y() + Fp::one()).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidPoint {
            context: "G1Affine::from_coordinates"
        }
    );

    let bytes = g.to_uncompressed();
    assert_eq!(G1Affine::from_uncompressed(&bytes).unwrap(), g);
    assert_eq!(
        G1Affine::from_uncompressed(&[0u8; 64]).unwrap(),
        G1Affine::identity()
    );
    assert!(matches!(
        G1Affine::from_uncompressed(&bytes[..63]),
        Err(Error::InvalidLength { expected: 64, actual: 63, .. })
    ));
}

// ============================================================================
// G2
// ============================================================================

#[test]
fn test_g2_generator_matches_domain_parameters() {
    let g = G2Affine::generator();
    assert_eq!(g.x(), Fp2::from_hex("P2.x", SM9_P2_X0, SM9_P2_X1).unwrap());
    assert_eq!(g.y(), Fp2::from_hex("P2.y", SM9_P2_Y0, SM9_P2_Y1).unwrap());
    assert!(bool::from(g.is_on_curve()));
    assert!(bool::from(g.is_torsion_free()));
}

#[test]
fn test_g2_group_law() {
    let g = G2Projective::generator();
    let g_affine = G2Affine::generator();
    let identity = G2Projective::identity();

    assert_eq!(g + identity, g);
    assert_eq!(identity + g, g);
    assert_eq!(g - g, identity);
    assert_eq!(g.add_full(&g), g.double());
    assert_eq!(g.add_mixed(&g_affine), g.double());
    assert_eq!(g.double().add_mixed(&-g_affine), g);
    assert_eq!(g.add_mixed(&-g_affine), identity);
    assert_eq!(identity.add_mixed(&g_affine), g);
    assert_eq!(g.add_mixed(&G2Affine::identity()), g);
    assert!(bool::from(identity.double().is_identity()));

    let three = g.double() + g;
    assert_eq!(three, g * Scalar::from(3u64));
    assert!(bool::from(three.is_on_curve()));
    assert_eq!(three.neg().neg(), three);
}

#[test]
fn test_g2_mixed_matches_full() {
    let mut rng = rng();
    let t = G2Projective::random(&mut rng);
    let q = G2Projective::random(&mut rng).to_affine();

    assert_eq!(t.add_mixed(&q), t.add_full(&G2Projective::from(q)));
}

#[test]
fn test_g2_scalar_mul_and_order() {
    let mut rng = rng();
    let g = G2Projective::generator();
    let a = Scalar::random(&mut rng);
    let b = Scalar::random(&mut rng);

    assert_eq!(g * a + g * b, g * (a + b));
    assert!(bool::from(g.mul_limbs_vartime(&scalar::MODULUS).is_identity()));
}

#[test]
fn test_g2_endomorphisms() {
    let params = PairingParameters::new().unwrap();
    let q = G2Projective::generator();

    let q1 = q.pi1(&params);
    let q2 = q.pi2(&params);
    assert!(bool::from(q1.is_on_curve()));
    assert!(bool::from(q2.is_on_curve()));

    // pi2 is minus the p^2-power Frobenius
    assert_eq!(q1.pi1(&params), -q2);

    // Both endomorphisms respect the group law
    let r = q.double();
    assert_eq!((q + r).pi1(&params), q1 + r.pi1(&params));
    assert_eq!((q + r).pi2(&params), q2 + r.pi2(&params));
}

#[test]
fn test_g2_checked_constructors() {
    let g = G2Affine::generator();
    assert_eq!(G2Affine::from_coordinates(g.x(), g.y()).unwrap(), g);
    assert!(matches!(
        G2Affine::from_coordinates(g.x(), g.y() + Fp2::one()),
        Err(Error::InvalidPoint { .. })
    ));

    let bytes = g.to_uncompressed();
    assert_eq!(G2Affine::from_uncompressed(&bytes).unwrap(), g);
    assert_eq!(
        G2Affine::from_uncompressed(&[0u8; 128]).unwrap(),
        G2Affine::identity()
    );
    assert!(G2Affine::from_uncompressed(&bytes[1..]).is_err());
}

#[test]
fn test_g2_rejects_points_outside_subgroup() {
    // (1, y) lies on the twist but not in the order-n subgroup
    let x = Fp2::one();
    let y = Fp2::from_hex(
        "y",
        "3C97146EE990B7CD316331E47B6D26B1C99DDB80198C9A5CC12524331FDFBF4D",
        "B1EC164179D17A21F3FA072F8EF21AB98330967C0674D02327FE4CBDC3E7069C",
    )
    .unwrap();

    let candidate = G2Projective {
        x,
        y,
        z: Fp2::one(),
    };
    assert!(bool::from(candidate.is_on_curve()));
    assert!(!bool::from(candidate.mul_limbs_vartime(&scalar::MODULUS).is_identity()));

    assert_eq!(
        G2Affine::from_coordinates(x, y).unwrap_err(),
        Error::InvalidPoint {
            context: "G2Affine::from_coordinates"
        }
    );
}
