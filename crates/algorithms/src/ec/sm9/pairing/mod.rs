//! The SM9 pairing `e: G2 × G1 → Gt` and its target group.

use core::fmt;
use core::ops::Mul;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use sm9pair_api::Result;
use sm9pair_params::sm9::{SM9_FIELD_SIZE, SM9_GT_SIZE};

use super::field::{Fp, Fp12};
use super::g1::G1Affine;
use super::g2::G2Affine;
use super::params::PairingParameters;
use super::Scalar;

pub mod engine;
pub mod final_exp;
pub(crate) mod line;
pub mod miller;

pub use engine::Sm9Pairing;
pub use final_exp::final_exponentiation;
pub use miller::miller_loop;

/// Element of the order-n subgroup of `Fp12*`, written multiplicatively.
#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Default for Gt {
    fn default() -> Self {
        Self::identity()
    }
}

impl zeroize::DefaultIsZeroes for Gt {}

impl fmt::Display for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.to_bytes()))
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Gt(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl Eq for Gt {}
impl PartialEq for Gt {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<'a, 'b> Mul<&'b Gt> for &'a Gt {
    type Output = Gt;

    #[inline]
    fn mul(self, rhs: &'b Gt) -> Gt {
        Gt(self.0 * rhs.0)
    }
}

impl_binops_multiplicative!(Gt, Gt);

impl Gt {
    /// Group identity.
    pub fn identity() -> Gt {
        Gt(Fp12::one())
    }

    /// Check for the identity.
    pub fn is_identity(&self) -> Choice {
        self.0.is_one()
    }

    /// Inverse. Elements of Gt are unitary, so this is the `p^6` conjugation.
    pub fn invert(&self) -> Gt {
        Gt(self.0.conjugate())
    }

    /// `self^k` by square-and-multiply over the big-endian encoding of `k`,
    /// selecting each multiplication in constant time.
    pub fn pow(&self, k: &Scalar) -> Gt {
        let mut acc = Gt::identity();
        for &byte in k.to_bytes().iter() {
            for i in (0..8).rev() {
                acc = Gt(acc.0.square());
                let bit = Choice::from((byte >> i) & 1u8);
                acc = Gt::conditional_select(&acc, &(acc * self), bit);
            }
        }
        acc
    }

    /// The underlying `Fp12` value.
    pub fn as_fp12(&self) -> &Fp12 {
        &self.0
    }

    /// Encode as twelve 32-byte big-endian field elements, most significant
    /// slot first: `c2.c1.c1, c2.c1.c0, c2.c0.c1, ..., c0.c0.c0`.
    pub fn to_bytes(&self) -> [u8; SM9_GT_SIZE] {
        let mut res = [0u8; SM9_GT_SIZE];
        for (chunk, coeff) in res
            .chunks_exact_mut(SM9_FIELD_SIZE)
            .zip(self.coefficients().iter().rev())
        {
            chunk.copy_from_slice(&coeff.to_bytes());
        }
        res
    }

    /// The twelve base field components in tower order, `c0.c0.c0` first.
    fn coefficients(&self) -> [Fp; 12] {
        let f = &self.0;
        [
            f.c0.c0.c0, f.c0.c0.c1, f.c0.c1.c0, f.c0.c1.c1,
            f.c1.c0.c0, f.c1.c0.c1, f.c1.c1.c0, f.c1.c1.c1,
            f.c2.c0.c0, f.c2.c0.c1, f.c2.c1.c0, f.c2.c1.c1,
        ]
    }
}

/// Evaluate `e(q, p)` with explicit parameters.
///
/// Either input being the identity yields the identity of Gt without running
/// the Miller loop.
pub fn pairing(q: &G2Affine, p: &G1Affine, params: &PairingParameters) -> Result<Gt> {
    if bool::from(q.is_identity() | p.is_identity()) {
        return Ok(Gt::identity());
    }

    let f = miller_loop(q, p, params)?;
    final_exponentiation(&f, params).map(Gt)
}
