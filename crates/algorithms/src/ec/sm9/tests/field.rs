//! Field tower tests for SM9

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use sm9pair_params::sm9::{SM9_P1_X, SM9_P1_Y, SM9_P2_X0, SM9_P2_X1, SM9_P2_Y0, SM9_P2_Y1};

use super::super::field::fp::MODULUS;
use super::super::field::{Fp, Fp12, Fp2, Fp4};
use super::super::params::PairingParameters;
use super::super::scalar::{self, Scalar};
use super::reference::{invert_scaled, mul_direct, square_direct};

fn fp(s: &str) -> Fp {
    Fp::from_hex("test", s).unwrap()
}

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x5339_0001)
}

// ============================================================================
// Fp Field Tests
// ============================================================================

#[test]
fn test_fp_known_answers() {
    let a = fp(SM9_P1_X);
    let b = fp(SM9_P1_Y);

    assert_eq!(
        a * b,
        fp("03A575E09AE0C2413EDE28B6676170314514A35B2EE77286137D978EBFCE206C")
    );
    assert_eq!(
        a + b,
        fp("B5DC92F7B1E1579758FD6C16A4B65D92FE000935043C56B5F50B315886A583F3")
    );
    assert_eq!(
        b - a,
        fp("446088BCEF061B694327095E094B212A5C2A8BAE0AFEE09008F1037D71290DB6")
    );
    assert_eq!(
        a.invert().unwrap(),
        fp("AD6B6EF880A819D564671DAB7900B85AA128AAA1BD8E076D4DD9B09BF24E9498")
    );
    assert_eq!(
        Fp::one().halve(),
        fp("5B2000000151D378EB01D5A7FAC763A290F949A58D3D776DF2B7CD93F1A8A2BF")
    );
}

#[test]
fn test_fp_top_bit_carry() {
    // p - 1 has its top bit set; doubling it overflows the fourth limb.
    let minus_one = -Fp::one();
    assert_eq!(
        minus_one,
        fp("B640000002A3A6F1D603AB4FF58EC74521F2934B1A7AEEDBE56F9B27E351457C")
    );
    assert_eq!(minus_one + Fp::one(), Fp::zero());
    assert_eq!(minus_one.double(), -Fp::from_u64(2));
    assert_eq!(minus_one.square(), Fp::one());
    assert_eq!(minus_one * minus_one * minus_one, minus_one);
}

#[test]
fn test_fp_bytes_roundtrip_and_rejection() {
    let a = fp(SM9_P1_X);
    assert_eq!(Fp::from_bytes(&a.to_bytes()).unwrap(), a);

    let mut p_bytes = [0u8; 32];
    p_bytes.copy_from_slice(&hex::decode(sm9pair_params::sm9::SM9_P).unwrap());
    assert!(bool::from(Fp::from_bytes(&p_bytes).is_none()));

    assert!(Fp::from_hex("test", "00").is_err());
    assert!(Fp::from_hex("test", sm9pair_params::sm9::SM9_P).is_err());
}

#[test]
fn test_fp_conditional_selection() {
    let a = Fp::from_u64(1);
    let b = Fp::from_u64(2);

    assert_eq!(Fp::conditional_select(&a, &b, Choice::from(0u8)), a);
    assert_eq!(Fp::conditional_select(&a, &b, Choice::from(1u8)), b);
    assert!(bool::from(a.ct_eq(&a)));
    assert!(!bool::from(a.ct_eq(&b)));
}

#[test]
fn test_fp_inversion() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Fp::random(&mut rng);
        assert_eq!(a * a.invert().unwrap(), Fp::one());
    }
    assert!(bool::from(Fp::zero().invert().is_none()));
}

// ============================================================================
// Fp2 / Fp4 Tests
// ============================================================================

#[test]
fn test_fp2_known_answers() {
    let x = Fp2::from_hex("test", SM9_P2_X0, SM9_P2_X1).unwrap();
    let y = Fp2::from_hex("test", SM9_P2_Y0, SM9_P2_Y1).unwrap();

    assert_eq!(
        x * y,
        Fp2::new(
            fp("3B37480A83695A9C39A866C0F0205DF36FB06C7B9B7F9958BBC53CF8E4DA98F1"),
            fp("84F02D3FBB423B1960E806FA9E171F034185D287C4BDD2200883EE1F7AB413C9"),
        )
    );
    assert_eq!(
        x.invert().unwrap(),
        Fp2::new(
            fp("34B4AC3C6E4585D119BD68512E81C51116C15627FF7DB15C32400AAF6FC81152"),
            fp("99AFC6292B3697A0967CF085B304EBEB9148D866EC21D8EBF446D0FC599E4F80"),
        )
    );
}

#[test]
fn test_tower_generators() {
    let u = Fp2::new(Fp::zero(), Fp::one());
    assert_eq!(u.square(), -Fp2::from(Fp::from_u64(2)));

    let v = Fp4::new(Fp2::zero(), Fp2::one());
    assert_eq!(v.square(), Fp4::from(u));

    let w = Fp12::new(Fp4::zero(), Fp4::one(), Fp4::zero());
    assert_eq!(w.square() * w, Fp12::from(v));
}

#[test]
fn test_fp2_fp4_arithmetic() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Fp2::random(&mut rng);
        let b = Fp2::random(&mut rng);
        assert_eq!(a.square(), a * a);
        assert_eq!(a.mul_by_u(), a * Fp2::new(Fp::zero(), Fp::one()));
        assert_eq!(a.halve().double(), a);
        assert_eq!((a + b) * (a - b), a.square() - b.square());
        assert_eq!(a * a.invert().unwrap(), Fp2::one());

        let c = Fp4::random(&mut rng);
        let d = Fp4::random(&mut rng);
        assert_eq!(c.square(), c * c);
        assert_eq!(c.mul_by_v(), c * Fp4::new(Fp2::zero(), Fp2::one()));
        assert_eq!(c.mul_by_fp2(&a), c * Fp4::from(a));
        assert_eq!(c * d, d * c);
        assert_eq!(c * c.invert().unwrap(), Fp4::one());
    }
    assert!(bool::from(Fp2::zero().invert().is_none()));
    assert!(bool::from(Fp4::zero().invert().is_none()));
}

// ============================================================================
// Fp12 Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn lazy_reduction_matches_direct(seed in any::<u64>()) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let a = Fp12::random(&mut rng);
        let b = Fp12::random(&mut rng);

        prop_assert_eq!(a * b, mul_direct(&a, &b));
        prop_assert_eq!(a.square(), square_direct(&a));
    }
}

#[test]
fn test_fp12_sparse_products() {
    let mut rng = rng();
    for _ in 0..20 {
        let f = Fp12::random(&mut rng);
        let g0 = Fp4::random(&mut rng);
        let g2 = Fp2::random(&mut rng);
        let b = Fp2::random(&mut rng);

        let sparse = Fp12::new(g0, Fp4::zero(), Fp4::new(g2, Fp2::zero()));
        assert_eq!(f.mul_by_sparse(&g0, &g2), mul_direct(&f, &sparse));

        let den = Fp12::new(Fp4::new(Fp2::zero(), b), Fp4::zero(), Fp4::zero());
        assert_eq!(f.mul_by_fp2_v(&b), mul_direct(&f, &den));
    }
}

#[test]
fn test_fp12_inversion_paths() {
    let mut rng = rng();
    for _ in 0..10 {
        let a = Fp12::random(&mut rng);
        let inv = a.invert().unwrap();
        assert_eq!(a * inv, Fp12::one());
        assert_eq!(Some(inv), invert_scaled(&a));

        // c2 = 0 takes the two-term path
        let b = Fp12::new(a.c0, a.c1, Fp4::zero());
        let b_inv = b.invert().unwrap();
        assert_eq!(b * b_inv, Fp12::one());
        assert_eq!(mul_direct(&b, &b_inv), Fp12::one());
    }
    assert!(bool::from(Fp12::zero().invert().is_none()));
}

#[test]
fn test_fp12_frobenius() {
    let params = PairingParameters::new().unwrap();
    let mut rng = rng();
    for _ in 0..3 {
        let a = Fp12::random(&mut rng);

        assert_eq!(a.frobenius_map(&params), a.pow_vartime(&MODULUS));

        let f2 = a.frobenius_map(&params).frobenius_map(&params);
        assert_eq!(a.frobenius_map2(&params), f2);
        let f3 = f2.frobenius_map(&params);
        assert_eq!(a.frobenius_map3(&params), f3);

        let f6 = f3.frobenius_map(&params).frobenius_map(&params).frobenius_map(&params);
        assert_eq!(a.frobenius_map6(), f6);
        assert_eq!(a.frobenius_map3(&params).frobenius_map3(&params), f6);

        let mut f12 = a;
        for _ in 0..12 {
            f12 = f12.frobenius_map(&params);
        }
        assert_eq!(f12, a);
    }
}

#[test]
fn test_fp12_pow_vartime() {
    let mut rng = rng();
    let a = Fp12::random(&mut rng);
    assert_eq!(a.pow_vartime(&[0, 0, 0, 0]), Fp12::one());
    assert_eq!(a.pow_vartime(&[1, 0, 0, 0]), a);
    assert_eq!(a.pow_vartime(&[5, 0, 0, 0]), a.square().square() * a);
}

// ============================================================================
// Scalar Tests
// ============================================================================

#[test]
fn test_scalar_arithmetic() {
    let mut rng = rng();
    for _ in 0..20 {
        let a = Scalar::random(&mut rng);
        let b = Scalar::random(&mut rng);
        assert_eq!(a + b - b, a);
        assert_eq!(a * (b + Scalar::one()), a * b + a);
        assert_eq!(a + (-a), Scalar::zero());
        assert_eq!(a * a.invert().unwrap(), Scalar::one());
        assert_eq!(Scalar::from_bytes(&a.to_bytes()).unwrap(), a);
    }
    assert_eq!(-Scalar::one() + Scalar::one(), Scalar::zero());
    assert_eq!(Scalar::from(6u64) * Scalar::from(7u64), Scalar::from(42u64));
    assert!(bool::from(Scalar::zero().invert().is_none()));
}

#[test]
fn test_scalar_rejects_order() {
    assert!(Scalar::from_hex("test", sm9pair_params::sm9::SM9_N).is_err());

    let n_minus_one = -Scalar::one();
    let mut expected = scalar::MODULUS;
    expected[0] -= 1;
    assert_eq!(n_minus_one.to_canonical(), expected);
}
