//! Degree-12 extension `Fp12 = Fp4[w] / (w^3 - v)`
//!
//! Elements are kept as three `Fp4` coefficients. Multiplication and squaring
//! accumulate every partial product in double-width form and reduce each of
//! the twelve base field components exactly once.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};

use super::super::params::PairingParameters;
use super::fp2::Fp2;
use super::fp4::Fp4;
use super::wide::Fp4Wide;

/// Element `c0 + c1·w + c2·w^2` of `Fp12`
#[derive(Copy, Clone)]
pub struct Fp12 {
    /// Constant coefficient
    pub c0: Fp4,
    /// Coefficient of `w`
    pub c1: Fp4,
    /// Coefficient of `w^2`
    pub c2: Fp4,
}

impl fmt::Debug for Fp12 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:?}) + ({:?})*w + ({:?})*w^2", self.c0, self.c1, self.c2)
    }
}

impl Default for Fp12 {
    fn default() -> Self {
        Fp12::zero()
    }
}

impl zeroize::DefaultIsZeroes for Fp12 {}

impl From<Fp4> for Fp12 {
    fn from(f: Fp4) -> Fp12 {
        Fp12 {
            c0: f,
            c1: Fp4::zero(),
            c2: Fp4::zero(),
        }
    }
}

impl ConstantTimeEq for Fp12 {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
    }
}

impl Eq for Fp12 {}
impl PartialEq for Fp12 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl ConditionallySelectable for Fp12 {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Fp12 {
            c0: Fp4::conditional_select(&a.c0, &b.c0, choice),
            c1: Fp4::conditional_select(&a.c1, &b.c1, choice),
            c2: Fp4::conditional_select(&a.c2, &b.c2, choice),
        }
    }
}

impl<'a> Neg for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Fp12 {
        Fp12 {
            c0: -self.c0,
            c1: -self.c1,
            c2: -self.c2,
        }
    }
}

impl Neg for Fp12 {
    type Output = Fp12;

    #[inline]
    fn neg(self) -> Fp12 {
        -&self
    }
}

impl<'a, 'b> Sub<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn sub(self, rhs: &'b Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 - rhs.c0,
            c1: self.c1 - rhs.c1,
            c2: self.c2 - rhs.c2,
        }
    }
}

impl<'a, 'b> Add<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn add(self, rhs: &'b Fp12) -> Fp12 {
        Fp12 {
            c0: self.c0 + rhs.c0,
            c1: self.c1 + rhs.c1,
            c2: self.c2 + rhs.c2,
        }
    }
}

impl<'a, 'b> Mul<&'b Fp12> for &'a Fp12 {
    type Output = Fp12;

    #[inline]
    fn mul(self, rhs: &'b Fp12) -> Fp12 {
        self.mul(rhs)
    }
}

impl_binops_additive!(Fp12, Fp12);
impl_binops_multiplicative!(Fp12, Fp12);

// ============================================================================
// Core Operations
// ============================================================================

impl Fp12 {
    /// Additive identity
    #[inline]
    pub const fn zero() -> Fp12 {
        Fp12 {
            c0: Fp4::zero(),
            c1: Fp4::zero(),
            c2: Fp4::zero(),
        }
    }

    /// Multiplicative identity
    #[inline]
    pub const fn one() -> Fp12 {
        Fp12 {
            c0: Fp4::one(),
            c1: Fp4::zero(),
            c2: Fp4::zero(),
        }
    }

    /// Construct from coefficients
    #[inline]
    pub const fn new(c0: Fp4, c1: Fp4, c2: Fp4) -> Fp12 {
        Fp12 { c0, c1, c2 }
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> Choice {
        self.c0.is_zero() & self.c1.is_zero() & self.c2.is_zero()
    }

    /// Check if element is one
    pub fn is_one(&self) -> Choice {
        self.ct_eq(&Fp12::one())
    }

    /// Random element
    pub fn random(mut rng: impl RngCore) -> Fp12 {
        Fp12 {
            c0: Fp4::random(&mut rng),
            c1: Fp4::random(&mut rng),
            c2: Fp4::random(&mut rng),
        }
    }

    /// Karatsuba product over the `Fp4` coefficients, using `w^3 = v`:
    ///
    /// ```text
    /// c0 = a0·b0 + v·((a1 + a2)(b1 + b2) - a1·b1 - a2·b2)
    /// c1 = (a0 + a1)(b0 + b1) - a0·b0 - a1·b1 + v·a2·b2
    /// c2 = (a0 + a2)(b0 + b2) - a0·b0 - a2·b2 + a1·b1
    /// ```
    pub fn mul(&self, rhs: &Fp12) -> Fp12 {
        let t0 = self.c0.mul_wide(&rhs.c0);
        let t1 = self.c1.mul_wide(&rhs.c1);
        let t2 = self.c2.mul_wide(&rhs.c2);

        let s12 = (self.c1 + self.c2).mul_wide(&(rhs.c1 + rhs.c2));
        let s01 = (self.c0 + self.c1).mul_wide(&(rhs.c0 + rhs.c1));
        let s02 = (self.c0 + self.c2).mul_wide(&(rhs.c0 + rhs.c2));

        let c0 = t0.add(&s12.sub(&t1).sub(&t2).mul_by_v());
        let c1 = s01.sub(&t0).sub(&t1).add(&t2.mul_by_v());
        let c2 = s02.sub(&t0).sub(&t2).add(&t1);

        Fp12 {
            c0: c0.reduce(),
            c1: c1.reduce(),
            c2: c2.reduce(),
        }
    }

    /// Chung–Hasan squaring (two products, three squares):
    ///
    /// ```text
    /// s0 = a0^2, s1 = 2·a0·a1, s2 = (a0 - a1 + a2)^2, s3 = 2·a1·a2, s4 = a2^2
    /// c0 = s0 + v·s3
    /// c1 = s1 + v·s4
    /// c2 = s1 + s2 + s3 - s0 - s4
    /// ```
    pub fn square(&self) -> Fp12 {
        let s0 = self.c0.square_wide();
        let s1 = self.c0.double().mul_wide(&self.c1);
        let s2 = (self.c0 - self.c1 + self.c2).square_wide();
        let s3 = self.c1.double().mul_wide(&self.c2);
        let s4 = self.c2.square_wide();

        let c0 = s0.add(&s3.mul_by_v());
        let c1 = s1.add(&s4.mul_by_v());
        let c2 = s1.add(&s2).add(&s3).sub(&s0).sub(&s4);

        Fp12 {
            c0: c0.reduce(),
            c1: c1.reduce(),
            c2: c2.reduce(),
        }
    }

    /// Multiply by a sparse element `g0 + g2·w^2` whose `w^2` coefficient
    /// lies in `Fp2` (the shape of a line function numerator).
    ///
    /// Products against the known-zero `w` coefficient and the zero `v`
    /// half of `g2` are skipped.
    pub fn mul_by_sparse(&self, g0: &Fp4, g2: &Fp2) -> Fp12 {
        let t0 = self.c0.mul_wide(g0);
        let t1 = self.c2.mul_by_fp2_wide(g2);
        let u0 = (self.c1 + self.c2).mul_by_fp2_wide(g2);
        let u1 = (self.c0 + self.c2).mul_wide(&Fp4::new(g0.c0 + g2, g0.c1));
        let u2 = (self.c0 + self.c1).mul_wide(g0);

        let c0 = t0.add(&u0.sub(&t1).mul_by_v());
        let c1 = u2.sub(&t0).add(&t1.mul_by_v());
        let c2 = u1.sub(&t0).sub(&t1);

        Fp12 {
            c0: c0.reduce(),
            c1: c1.reduce(),
            c2: c2.reduce(),
        }
    }

    /// Multiply by `b·v` for `b` in `Fp2` (the shape of a line function
    /// denominator). Each coefficient `x0 + x1·v` maps to `x1·b·u + x0·b·v`.
    pub fn mul_by_fp2_v(&self, b: &Fp2) -> Fp12 {
        let scale = |x: &Fp4| -> Fp4 {
            Fp4Wide {
                c0: x.c1.mul_wide(b).mul_by_u(),
                c1: x.c0.mul_wide(b),
            }
            .reduce()
        };

        Fp12 {
            c0: scale(&self.c0),
            c1: scale(&self.c1),
            c2: scale(&self.c2),
        }
    }

    /// Multiplicative inverse.
    ///
    /// With `w^3 = v`, the adjugate coefficients are
    /// `d0 = a0^2 - v·a1·a2`, `d1 = v·a2^2 - a0·a1`, `d2 = a1^2 - a0·a2`, and
    /// the norm `a0·d0 + v·(a2·d1 + a1·d2)` lies in `Fp4`. When `a2 = 0` this
    /// collapses to `(a0^2, -a0·a1, a1^2) / (a0^3 + v·a1^3)`.
    pub fn invert(&self) -> CtOption<Self> {
        if bool::from(self.c2.is_zero()) {
            return self.invert_c2_zero();
        }

        let d0 = self.c0.square() - (self.c1 * self.c2).mul_by_v();
        let d1 = self.c2.square().mul_by_v() - self.c0 * self.c1;
        let d2 = self.c1.square() - self.c0 * self.c2;

        let norm = self.c0 * d0 + (self.c2 * d1 + self.c1 * d2).mul_by_v();

        norm.invert().map(|t| Fp12 {
            c0: d0 * t,
            c1: d1 * t,
            c2: d2 * t,
        })
    }

    fn invert_c2_zero(&self) -> CtOption<Self> {
        let a0_sq = self.c0.square();
        let a1_sq = self.c1.square();
        let norm = a0_sq * self.c0 + (a1_sq * self.c1).mul_by_v();

        norm.invert().map(|k| Fp12 {
            c0: a0_sq * k,
            c1: -(self.c0 * self.c1 * k),
            c2: a1_sq * k,
        })
    }

    /// Variable-time exponentiation by a little-endian 256-bit exponent
    pub fn pow_vartime(&self, by: &[u64; 4]) -> Self {
        let mut res = Self::one();
        let mut started = false;
        for e in by.iter().rev() {
            for i in (0..64).rev() {
                if started {
                    res = res.square();
                }
                if ((*e >> i) & 1) == 1 {
                    res *= self;
                    started = true;
                }
            }
        }
        res
    }
}

// ============================================================================
// Frobenius Maps
// ============================================================================

impl Fp12 {
    /// `x^p`
    pub fn frobenius_map(&self, params: &PairingParameters) -> Fp12 {
        Fp12 {
            c0: Fp4::new(
                self.c0.c0.conjugate(),
                self.c0.c1.conjugate().mul_by_fp(&params.alpha3),
            ),
            c1: Fp4::new(
                self.c1.c0.conjugate().mul_by_fp(&params.alpha1),
                self.c1.c1.conjugate().mul_by_fp(&params.alpha4),
            ),
            c2: Fp4::new(
                self.c2.c0.conjugate().mul_by_fp(&params.alpha2),
                self.c2.c1.conjugate().mul_by_fp(&params.alpha5),
            ),
        }
    }

    /// `x^(p^2)`
    pub fn frobenius_map2(&self, params: &PairingParameters) -> Fp12 {
        Fp12 {
            c0: self.c0.conjugate(),
            c1: self.c1.conjugate().mul_by_fp(&params.alpha2),
            c2: self.c2.conjugate().mul_by_fp(&params.alpha4),
        }
    }

    /// `x^(p^3)`
    pub fn frobenius_map3(&self, params: &PairingParameters) -> Fp12 {
        Fp12 {
            c0: Fp4::new(
                self.c0.c0.conjugate(),
                -(self.c0.c1.conjugate() * params.beta),
            ),
            c1: Fp4::new(
                self.c1.c0.conjugate() * params.beta,
                self.c1.c1.conjugate(),
            ),
            c2: Fp4::new(
                -self.c2.c0.conjugate(),
                self.c2.c1.conjugate() * params.beta,
            ),
        }
    }

    /// `x^(p^6)`, the conjugation of `Fp12` over `Fp6`
    pub fn frobenius_map6(&self) -> Fp12 {
        Fp12 {
            c0: self.c0.conjugate(),
            c1: -self.c1.conjugate(),
            c2: self.c2.conjugate(),
        }
    }

    /// Conjugate over `Fp6`. Inverts elements of norm one, such as
    /// final exponentiation outputs.
    #[inline]
    pub fn conjugate(&self) -> Fp12 {
        self.frobenius_map6()
    }
}
