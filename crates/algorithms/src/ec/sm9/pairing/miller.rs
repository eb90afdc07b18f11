//! Miller loop for the SM9 R-ate pairing.

use sm9pair_api::{Error, Result};

use super::super::field::Fp12;
use super::super::g1::G1Affine;
use super::super::g2::{G2Affine, G2Projective};
use super::super::params::{MillerStep, PairingParameters};
use super::line::{self, LineDenominator, LineNumerator};

/// Per-evaluation state: the running twist point and the numerator and
/// denominator of the accumulated line product.
struct MillerAccumulator {
    t: G2Projective,
    f_num: Fp12,
    f_den: Fp12,
}

impl MillerAccumulator {
    fn new(q: &G2Affine) -> Self {
        MillerAccumulator {
            t: G2Projective::from(q),
            f_num: Fp12::one(),
            f_den: Fp12::one(),
        }
    }

    #[inline]
    fn square(&mut self) {
        self.f_num = self.f_num.square();
        self.f_den = self.f_den.square();
    }

    #[inline]
    fn absorb(&mut self, (num, den): (LineNumerator, LineDenominator)) {
        self.f_num = num.multiply(&self.f_num);
        self.f_den = den.multiply(&self.f_den);
    }

    fn finish(self) -> Result<Fp12> {
        let den_inv: Option<Fp12> = self.f_den.invert().into();
        den_inv
            .map(|inv| self.f_num * inv)
            .ok_or_else(|| Error::ArithmeticFailure {
                context: "miller_loop",
                message: "line denominators multiplied to zero".into(),
            })
    }
}

/// Unreduced pairing value `f_{a,Q}(P)`.
///
/// `q` is taken in affine form so every chain addition can use mixed
/// addition. Neither input may be the identity; [`super::pairing`] filters
/// those out before calling here.
pub fn miller_loop(q: &G2Affine, p: &G1Affine, params: &PairingParameters) -> Result<Fp12> {
    let neg_q = -q;
    let q_proj = G2Projective::from(q);
    let neg_q_proj = G2Projective::from(&neg_q);

    let mut acc = MillerAccumulator::new(q);

    for step in params.chain() {
        acc.square();
        acc.absorb(line::tangent(&acc.t, p));
        acc.t = acc.t.double();

        match step {
            MillerStep::Double => {}
            MillerStep::DoubleAdd => {
                acc.absorb(line::chord(&acc.t, &q_proj, p));
                acc.t = acc.t.add_mixed(q);
            }
            MillerStep::DoubleSub => {
                acc.absorb(line::chord(&acc.t, &neg_q_proj, p));
                acc.t = acc.t.add_mixed(&neg_q);
            }
        }
    }

    let q1 = q_proj.pi1(params);
    let q2 = q_proj.pi2(params);

    acc.absorb(line::chord(&acc.t, &q1, p));
    acc.t = acc.t.add_full(&q1);
    acc.absorb(line::chord(&acc.t, &q2, p));

    acc.finish()
}
