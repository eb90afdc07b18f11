//! Tangent and chord line evaluation at a G₁ point.
//!
//! A line through twist points is evaluated at `P = (xP, yP)` as a fraction.
//! The numerator populates only slots `c0.0`, `c0.1` and `c2.0` of an `Fp12`;
//! the denominator populates only `c0.1`. Both shapes get their own type so
//! that the sparse multiplications below can only be fed matching inputs.

use super::super::field::{Fp12, Fp2, Fp4};
use super::super::g1::G1Affine;
use super::super::g2::G2Projective;

/// Sparse line numerator `(a0 + a1·v) + a4·w^2`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct LineNumerator {
    pub(crate) a0: Fp2,
    pub(crate) a1: Fp2,
    pub(crate) a4: Fp2,
}

/// Line denominator `b1·v`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct LineDenominator {
    pub(crate) b1: Fp2,
}

impl LineNumerator {
    /// `f · self`, skipping products against the known-zero slots.
    #[inline]
    pub(crate) fn multiply(&self, f: &Fp12) -> Fp12 {
        f.mul_by_sparse(&Fp4::new(self.a0, self.a1), &self.a4)
    }

    /// Dense `Fp12` form.
    pub(crate) fn to_fp12(self) -> Fp12 {
        Fp12::new(
            Fp4::new(self.a0, self.a1),
            Fp4::zero(),
            Fp4::new(self.a4, Fp2::zero()),
        )
    }
}

impl LineDenominator {
    /// `f · self`.
    #[inline]
    pub(crate) fn multiply(&self, f: &Fp12) -> Fp12 {
        f.mul_by_fp2_v(&self.b1)
    }

    /// Dense `Fp12` form.
    pub(crate) fn to_fp12(self) -> Fp12 {
        Fp12::new(Fp4::new(Fp2::zero(), self.b1), Fp4::zero(), Fp4::zero())
    }
}

/// Tangent to the twist at `T`, evaluated at `P`.
///
/// ```text
/// num = (Y^2 - 3X^3/2) + (-Z^3·Y·yP)·v + (3·Z^2·X^2·xP/2)·w^2
/// den = Z^3·Y·v
/// ```
pub(crate) fn tangent(t: &G2Projective, p: &G1Affine) -> (LineNumerator, LineDenominator) {
    let z2 = t.z.square();
    let b1 = z2 * t.z * t.y;
    let a1 = -b1.mul_by_fp(&p.y);

    let x2 = t.x.square();
    let three_x2 = x2.double() + x2;
    let a4 = (z2 * three_x2).mul_by_fp(&p.x).halve();
    let a0 = t.y.square() - (three_x2 * t.x).halve();

    (LineNumerator { a0, a1, a4 }, LineDenominator { b1 })
}

/// Chord through `T` and `Q`, evaluated at `P`. Both points are Jacobian.
pub(crate) fn chord(
    t: &G2Projective,
    q: &G2Projective,
    p: &G1Affine,
) -> (LineNumerator, LineDenominator) {
    let zq2 = q.z.square();
    let zq3 = zq2 * q.z;
    let zt2 = t.z.square();
    let zt3 = zt2 * t.z;

    // (XT·ZQ^2 - XQ·ZT^2)·ZT·ZQ
    let dx = (t.x * zq2 - q.x * zt2) * t.z * q.z;
    // YT·ZQ^3 - YQ·ZT^3
    let dy = t.y * zq3 - q.y * zt3;

    let b1 = dx * zq3;
    let a4 = (zq3 * dy).mul_by_fp(&p.x);
    let a0 = dx * q.y - dy * q.x * q.z;
    let a1 = -b1.mul_by_fp(&p.y);

    (LineNumerator { a0, a1, a4 }, LineDenominator { b1 })
}
